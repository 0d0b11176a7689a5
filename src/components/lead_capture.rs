//! Lead-capture step
//!
//! Left: offer copy and the price comparison. Right: trip summary, hotline and
//! the contact form. Name and phone are required here; the wizard only checks
//! the email shape.

use crate::action::Action;
use crate::component::Component;
use crate::components::text_input::TextInput;
use crate::model::lead::LeadContact;
use crate::model::pricing::{format_price, PriceComparison};
use crate::model::search::{display_date, SearchCriteria, TripType};
use crate::services::deal_context::placeholder_text;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Phone,
    Submit,
}

impl LeadField {
    fn next(&self) -> LeadField {
        match self {
            LeadField::Name => LeadField::Email,
            LeadField::Email => LeadField::Phone,
            LeadField::Phone => LeadField::Submit,
            LeadField::Submit => LeadField::Name,
        }
    }

    fn prev(&self) -> LeadField {
        match self {
            LeadField::Name => LeadField::Submit,
            LeadField::Email => LeadField::Name,
            LeadField::Phone => LeadField::Email,
            LeadField::Submit => LeadField::Phone,
        }
    }
}

/// Data the lead step renders
pub struct LeadRenderContext<'a> {
    pub criteria: &'a SearchCriteria,
    pub comparison: Option<&'a PriceComparison>,
    pub deal_context: Option<&'a str>,
    pub hotline: &'a str,
}

pub struct LeadCaptureComponent {
    focus: LeadField,
    name: TextInput,
    email: TextInput,
    phone: TextInput,
    pub error: Option<String>,
}

impl Default for LeadCaptureComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadCaptureComponent {
    pub fn new() -> Self {
        let mut name = TextInput::new("Full Name", "e.g. John Doe");
        name.focused = true;
        Self {
            focus: LeadField::Name,
            name,
            email: TextInput::new("Email Address (optional)", "john@example.com"),
            phone: TextInput::new("Phone Number", "(555) 123-4567"),
            error: None,
        }
    }

    #[cfg(test)]
    pub fn focus(&self) -> LeadField {
        self.focus
    }

    pub fn is_editing_text(&self) -> bool {
        self.focus != LeadField::Submit
    }

    fn input_mut(&mut self, field: LeadField) -> Option<&mut TextInput> {
        match field {
            LeadField::Name => Some(&mut self.name),
            LeadField::Email => Some(&mut self.email),
            LeadField::Phone => Some(&mut self.phone),
            LeadField::Submit => None,
        }
    }

    fn set_focus(&mut self, field: LeadField) {
        if let Some(input) = self.input_mut(self.focus) {
            input.blur();
        }
        self.focus = field;
        if let Some(input) = self.input_mut(field) {
            input.focused = true;
        }
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    pub fn handle_key(&mut self, key: KeyEvent, lead: &mut LeadContact) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Tab => return Ok(Some(Action::FocusNext)),
            KeyCode::BackTab => return Ok(Some(Action::FocusPrev)),
            _ => {}
        }
        self.error = None;

        let action = match self.focus {
            LeadField::Submit => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.try_submit(lead),
                _ => None,
            },
            // Enter in the last field submits
            LeadField::Phone if key.code == KeyCode::Enter => self.try_submit(lead),
            field => match self.input_mut(field) {
                Some(input) => input.handle_key_event(key)?,
                None => None,
            },
        };

        lead.name = self.name.value.clone();
        lead.email = self.email.value.clone();
        lead.phone = self.phone.value.clone();
        Ok(action)
    }

    fn try_submit(&mut self, lead: &LeadContact) -> Option<Action> {
        let lead = LeadContact {
            name: self.name.value.clone(),
            phone: self.phone.value.clone(),
            email: lead.email.clone(),
        };
        match lead.validate_required() {
            Ok(()) => Some(Action::SubmitLead),
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn draw_with_context(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        ctx: &LeadRenderContext,
    ) -> Result<()> {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
            .split(area);

        self.draw_offer(frame, cols[0], ctx);
        self.draw_form(frame, cols[1], ctx)?;
        Ok(())
    }

    fn draw_offer(&self, frame: &mut Frame, area: Rect, ctx: &LeadRenderContext) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .style(Style::default().bg(Color::Rgb(15, 30, 70)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(9)])
            .split(inner);

        let context = ctx
            .deal_context
            .map(str::to_string)
            .unwrap_or_else(|| placeholder_text(&ctx.criteria.destination));

        let intro = Paragraph::new(vec![
            Line::from(Span::styled(
                " 3 OFFERS FOUND ",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Great news! We found unpublished rates.",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("│ ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    context,
                    Style::default()
                        .fg(Color::LightBlue)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(intro, chunks[0]);

        match ctx.comparison {
            Some(comparison) => draw_comparison(frame, chunks[1], comparison),
            None => {
                let fallback = Paragraph::new(vec![
                    Line::from(Span::styled("✔ Est. Savings: 45%", Style::default().fg(Color::Green))),
                    Line::from(Span::styled(
                        format!("✔ {} Seats Available", ctx.criteria.cabin_class),
                        Style::default().fg(Color::Green),
                    )),
                ]);
                frame.render_widget(fallback, chunks[1]);
            }
        }
    }

    fn draw_form(&mut self, frame: &mut Frame, area: Rect, ctx: &LeadRenderContext) -> Result<()> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Unlock Your Flight Deal ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        let criteria = ctx.criteria;
        let trip = match criteria.trip_type {
            TripType::Roundtrip => "Roundtrip",
            TripType::OneWay => "One-way",
        };
        let dates = match (criteria.departure_date, criteria.effective_return_date()) {
            (Some(d), Some(r)) => format!("{} – {}", display_date(d), display_date(r)),
            (Some(d), None) => display_date(d),
            _ => String::new(),
        };
        let summary = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!("{} to ", trip),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    criteria.destination.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ·  {}  ·  {}", criteria.cabin_class, criteria.passengers.label()),
                    Style::default().fg(Color::Gray),
                ),
            ]),
            Line::from(Span::styled(
                format!("From {} • {}", criteria.origin, dates),
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(summary, rows[0]);

        let hotline = Paragraph::new(vec![
            Line::from(Span::styled(
                "BOOK THIS DEAL WITH AN EXPERT · Skip the form and lock in this rate instantly.",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("☎  {}", ctx.hotline),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(hotline, rows[1]);

        self.name.draw(frame, rows[2])?;
        self.email.draw(frame, rows[3])?;
        self.phone.draw(frame, rows[4])?;

        let message = match &self.error {
            Some(error) => Line::from(Span::styled(
                format!(" ✖ {}", error),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(
                " 🛡 Your privacy is protected. No spam.",
                Style::default().fg(Color::Green),
            )),
        };
        frame.render_widget(Paragraph::new(message), rows[5]);

        let focused = self.focus == LeadField::Submit;
        let button_style = if focused {
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(Line::from(Span::styled(
            "  Reveal Discounted Price →  ",
            button_style,
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }));
        frame.render_widget(button, rows[6]);

        let consent = Paragraph::new(Span::styled(
            "By submitting, you consent to receive a call from a FlightFareTech travel expert to confirm your booking request.",
            Style::default().fg(Color::DarkGray),
        ))
        .wrap(Wrap { trim: true });
        frame.render_widget(consent, rows[7]);
        Ok(())
    }
}

fn draw_comparison(frame: &mut Frame, area: Rect, comparison: &PriceComparison) {
    let struck = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::CROSSED_OUT);
    let rows = vec![
        Row::new(vec![
            Cell::from(comparison.airline.clone()).style(Style::default().fg(Color::LightBlue)),
            Cell::from(format_price(comparison.market)).style(struck),
        ]),
        Row::new(vec![
            Cell::from("Expedia / Kayak").style(Style::default().fg(Color::LightBlue)),
            Cell::from(format_price(comparison.ota_price())).style(struck),
        ]),
        Row::new(vec![
            Cell::from("🛡 Our Rate").style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::from(format_price(comparison.ours)).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .top_margin(1),
    ];

    let table = Table::new(rows, [Constraint::Min(18), Constraint::Length(10)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" LIVE PRICE CHECK ")
                .title_style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
                .title_bottom(Line::from(format!(
                    " Save {}% · Market averages updated 5 mins ago ",
                    comparison.savings_percent()
                ))),
        );
    frame.render_widget(table, area);
}

impl Component for LeadCaptureComponent {
    fn blur(&mut self) {
        if let Some(input) = self.input_mut(self.focus) {
            input.blur();
        }
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs wizard data, so we use draw_with_context
        Ok(())
    }
}
