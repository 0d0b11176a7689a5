//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! The wizard itself lives in [`WizardController`]; App wires it to the
//! forms, the background timers and the modal stack.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, draw_analyzing, draw_booking_notification, draw_header,
    draw_help_bar, draw_marketing, draw_success, DealTicker, ExitIntentDialog, HelpDialog,
    LeadCaptureComponent, LeadRenderContext, LowPriceDialog, QuitDialog, SearchFormComponent,
};
use crate::config::Config;
use crate::model::notifications::{random_interval, FIRST_NOTICE_DELAY};
use crate::model::{
    BookingFeed, DealBoard, Modal, ModalStack, TickOutcome, WizardController, WizardStep,
};
use crate::services::{
    AnalysisTimer, DealContextFetcher, DealContextProvider, DealContextRequest, ScheduledTask,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    pub config: Config,

    /// Fixed "today" for tests; the local date otherwise
    pinned_today: Option<NaiveDate>,

    /// Booking funnel state
    pub wizard: WizardController,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// The exit-intent offer is shown at most once per run
    pub exit_intent_shown: bool,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Background Work
    // ─────────────────────────────────────────────────────────────────────────
    analysis: AnalysisTimer,
    deal_context: DealContextFetcher,
    pub deal_board: DealBoard,
    ticker_task: Option<ScheduledTask>,
    pub bookings: BookingFeed,
    notification_task: Option<ScheduledTask>,
    rng: StdRng,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub search_form: SearchFormComponent,
    pub lead_form: LeadCaptureComponent,
    pub ticker: DealTicker,
    pub quit_dialog: QuitDialog,
    pub exit_intent: ExitIntentDialog,
    pub low_price_dialog: LowPriceDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(config: Config, provider: Arc<dyn DealContextProvider>) -> App {
        Self::build(config, provider, None)
    }

    #[cfg(test)]
    pub fn with_today(
        config: Config,
        provider: Arc<dyn DealContextProvider>,
        today: NaiveDate,
    ) -> App {
        Self::build(config, provider, Some(today))
    }

    fn build(
        config: Config,
        provider: Arc<dyn DealContextProvider>,
        pinned_today: Option<NaiveDate>,
    ) -> App {
        let today = pinned_today.unwrap_or_else(|| Local::now().date_naive());
        let wizard = WizardController::with_today(today);
        let search_form = SearchFormComponent::new(&wizard.search, today);
        App {
            pinned_today,
            wizard,
            modals: ModalStack::new(),
            exit_intent_shown: false,
            should_quit: false,
            analysis: AnalysisTimer::new(config.analysis_tick()),
            deal_context: DealContextFetcher::new(provider),
            deal_board: DealBoard::seeded(),
            ticker_task: None,
            bookings: BookingFeed::new(),
            notification_task: None,
            rng: StdRng::from_entropy(),
            search_form,
            lead_form: LeadCaptureComponent::new(),
            ticker: DealTicker::new(),
            quit_dialog: QuitDialog,
            exit_intent: ExitIntentDialog::new(config.hotline.clone()),
            low_price_dialog: LowPriceDialog,
            help_dialog: HelpDialog::default(),
            config,
        }
    }

    /// Start the ticker refresh and booking notification timers
    fn start_background_tasks(&mut self) {
        let refresh = self.config.ticker_refresh();
        self.ticker_task = Some(ScheduledTask::repeating("deal-ticker", refresh, refresh));

        if self.config.notifications_enabled {
            let interval = random_interval(&mut self.rng);
            self.notification_task = Some(ScheduledTask::repeating(
                "booking-notifications",
                FIRST_NOTICE_DELAY,
                interval,
            ));
        }
    }

    /// Stop every background thread
    fn stop_background_tasks(&mut self) {
        self.analysis.stop();
        self.deal_context.cancel();
        if let Some(mut task) = self.ticker_task.take() {
            task.cancel();
        }
        if let Some(mut task) = self.notification_task.take() {
            task.cancel();
        }
    }

    /// Apply analysis ticks, generated copy, ticker and notification firings
    fn poll_background(&mut self) {
        for generation in self.analysis.poll() {
            if self.wizard.advance_analysis(generation) == TickOutcome::Completed {
                self.analysis.stop();
                self.lead_form = LeadCaptureComponent::new();
                break;
            }
        }

        if let Some((generation, text)) = self.deal_context.poll() {
            self.wizard.deal_context_arrived(generation, text);
        }

        if self.ticker_task.as_ref().is_some_and(|t| t.drain() > 0) {
            self.deal_board.refresh();
        }

        if self.notification_task.as_ref().is_some_and(|t| t.drain() > 0) {
            let notice = self.bookings.show_random(&mut self.rng, Instant::now());
            debug!(name = notice.name, "booking notification shown");
        }
    }

    /// First attempt to leave shows the exit-intent offer; later ones confirm
    fn request_quit(&mut self) {
        if matches!(
            self.modals.top(),
            Some(Modal::ExitIntent) | Some(Modal::QuitConfirm)
        ) {
            return;
        }
        if self.exit_intent_shown {
            self.modals.push(Modal::QuitConfirm);
        } else {
            self.exit_intent_shown = true;
            info!("exit intent shown");
            self.modals.push(Modal::ExitIntent);
        }
    }

    fn submit_search(&mut self) {
        match self.wizard.submit_search() {
            Ok(activation) => {
                self.search_form.close_dropdowns();
                self.search_form.error = None;
                self.analysis.start(activation.generation);
                self.deal_context.request(
                    activation.generation,
                    DealContextRequest::from(&activation.criteria),
                );
            }
            Err(e) => self.search_form.error = Some(e.to_string()),
        }
    }

    fn today(&self) -> NaiveDate {
        self.pinned_today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Defaults and calendars follow the date of the restart, not of launch
    fn restart(&mut self) {
        self.analysis.stop();
        self.deal_context.cancel();
        let today = self.today();
        self.wizard.restart(today);
        self.search_form = SearchFormComponent::new(&self.wizard.search, today);
        self.lead_form = LeadCaptureComponent::new();
        self.modals.clear();
    }

    fn notification_visible(&self) -> bool {
        self.bookings.is_visible()
    }

    /// Whether typed characters currently go into a text field
    fn is_editing_text(&self) -> bool {
        match self.wizard.step() {
            WizardStep::Search => self.search_form.is_editing_text(),
            WizardStep::LeadCapture => self.lead_form.is_editing_text(),
            WizardStep::Analyzing | WizardStep::Success => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.start_background_tasks();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                return Ok(Some(Action::RequestQuit))
            }
            KeyCode::Char('x') if ctrl && self.notification_visible() => {
                return Ok(Some(Action::DismissNotification))
            }
            KeyCode::F(1) => return Ok(Some(Action::OpenHelp)),
            KeyCode::F(2) if self.wizard.step() == WizardStep::Search => {
                return Ok(Some(Action::OpenLowPriceInfo))
            }
            _ => {}
        }

        if !self.is_editing_text() {
            match key.code {
                KeyCode::Char('x') if self.notification_visible() => {
                    return Ok(Some(Action::DismissNotification))
                }
                KeyCode::Char('q') => return Ok(Some(Action::RequestQuit)),
                _ => {}
            }
        }

        match self.wizard.step() {
            WizardStep::Search => self.search_form.handle_key(key, &mut self.wizard.search),
            WizardStep::Analyzing => Ok(None),
            WizardStep::LeadCapture => self.lead_form.handle_key(key, &mut self.wizard.lead),
            WizardStep::Success => Ok(match key.code {
                KeyCode::Enter | KeyCode::Char('n') => Some(Action::Restart),
                _ => None,
            }),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // A click anywhere closes open pickers
        if matches!(mouse.kind, MouseEventKind::Down(_)) && self.modals.is_empty() {
            self.search_form.blur();
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                self.ticker.update(Action::Tick)?;
                self.poll_background();
            }
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                info!("quitting");
                self.stop_background_tasks();
                self.should_quit = true;
            }
            Action::RequestQuit => self.request_quit(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::OpenLowPriceInfo => {
                self.search_form.close_dropdowns();
                self.modals.push(Modal::LowPriceInfo);
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Form Focus
            // ─────────────────────────────────────────────────────────────────
            Action::FocusNext => match self.wizard.step() {
                WizardStep::Search => self.search_form.focus_next(&self.wizard.search),
                WizardStep::LeadCapture => self.lead_form.focus_next(),
                _ => {}
            },
            Action::FocusPrev => match self.wizard.step() {
                WizardStep::Search => self.search_form.focus_prev(&self.wizard.search),
                WizardStep::LeadCapture => self.lead_form.focus_prev(),
                _ => {}
            },

            // ─────────────────────────────────────────────────────────────────
            // Wizard
            // ─────────────────────────────────────────────────────────────────
            Action::SubmitSearch => self.submit_search(),
            Action::SubmitLead => {
                if let Err(e) = self.wizard.submit_lead() {
                    self.lead_form.error = Some(e.to_string());
                }
            }
            Action::Restart => self.restart(),

            // ─────────────────────────────────────────────────────────────────
            // Ambient Widgets
            // ─────────────────────────────────────────────────────────────────
            Action::DismissNotification => self.bookings.dismiss(),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let step = self.wizard.step();
        let layout = calculate_main_layout(area, step.shows_marketing_sections());

        draw_header(frame, layout.header, &self.config.hotline);
        self.ticker
            .draw_with_board(frame, layout.ticker, &self.deal_board);

        // Before the step view so open drop-downs can overlap it
        if let Some(marketing) = layout.marketing {
            draw_marketing(frame, marketing);
        }

        match step {
            WizardStep::Search => {
                self.search_form
                    .draw_with_criteria(frame, layout.step, &self.wizard.search)?;
            }
            WizardStep::Analyzing => {
                draw_analyzing(frame, layout.step, self.wizard.progress(), &self.wizard.search);
            }
            WizardStep::LeadCapture => {
                let ctx = LeadRenderContext {
                    criteria: &self.wizard.search,
                    comparison: self.wizard.comparison(),
                    deal_context: self.wizard.deal_context(),
                    hotline: &self.config.hotline,
                };
                self.lead_form.draw_with_context(frame, layout.step, &ctx)?;
            }
            WizardStep::Success => {
                draw_success(frame, layout.step, &self.wizard.lead, &self.wizard.search);
            }
        }

        draw_help_bar(frame, layout.help, step, self.bookings.is_visible());

        if let Some(notice) = self.bookings.visible(Instant::now()).copied() {
            draw_booking_notification(frame, layout.step, &notice);
        }

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::ExitIntent => self.exit_intent.handle_key_event(key),
            Modal::LowPriceInfo => self.low_price_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::ExitIntent => self.exit_intent.draw(frame, area)?,
            Modal::LowPriceInfo => self.low_price_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.stop_background_tasks();
    }
}
