//! Booking wizard state machine
//!
//! Search → Analyzing → LeadCapture → Success, strictly forward. The only way
//! back is [`WizardController::restart`]. Entering Analyzing bumps the
//! activation generation; timer ticks and generated copy carry that
//! generation so anything left over from an earlier activation is dropped.

use super::lead::LeadContact;
use super::pricing::PriceComparison;
use super::search::SearchCriteria;
use crate::error::ValidationError;
use chrono::NaiveDate;
use rand::Rng;
use std::fmt;
use tracing::{debug, info, warn};

/// Progress value at which analysis is complete
pub const PROGRESS_COMPLETE: u8 = 100;

/// Progress added per timer tick
pub const PROGRESS_STEP: u8 = 1;

/// The active wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Search,
    Analyzing,
    LeadCapture,
    Success,
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Search => "Search",
            WizardStep::Analyzing => "Analyzing",
            WizardStep::LeadCapture => "Lead Capture",
            WizardStep::Success => "Success",
        }
    }

    /// Whether the destinations/testimonials/SEO sections are shown
    pub fn shows_marketing_sections(&self) -> bool {
        matches!(self, WizardStep::Search | WizardStep::Success)
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Result of applying one analysis tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not analyzing, or the tick belongs to an older activation
    Ignored,
    /// Progress moved to the contained value
    Advanced(u8),
    /// Progress had reached 100; the wizard moved to LeadCapture
    Completed,
}

/// Handle returned when analysis starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub generation: u64,
    pub criteria: SearchCriteria,
}

/// Owns the step, all form state, and the analysis results
#[derive(Debug, Clone)]
pub struct WizardController {
    step: WizardStep,
    pub search: SearchCriteria,
    pub lead: LeadContact,
    progress: u8,
    comparison: Option<PriceComparison>,
    deal_context: Option<String>,
    generation: u64,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    pub fn new() -> Self {
        Self::with_search(SearchCriteria::default())
    }

    pub fn with_today(today: NaiveDate) -> Self {
        Self::with_search(SearchCriteria::with_today(today))
    }

    fn with_search(search: SearchCriteria) -> Self {
        Self {
            step: WizardStep::Search,
            search,
            lead: LeadContact::default(),
            progress: 0,
            comparison: None,
            deal_context: None,
            generation: 0,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn comparison(&self) -> Option<&PriceComparison> {
        self.comparison.as_ref()
    }

    /// Generated copy, if it has arrived for the current activation
    pub fn deal_context(&self) -> Option<&str> {
        self.deal_context.as_deref()
    }

    /// Generation of the most recent analysis activation
    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Search → Analyzing
    pub fn submit_search(&mut self) -> Result<Activation, ValidationError> {
        self.submit_search_with_rng(&mut rand::thread_rng())
    }

    pub fn submit_search_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Activation, ValidationError> {
        if self.step != WizardStep::Search {
            return Err(ValidationError::WrongStep(self.step));
        }
        if !self.search.has_required_fields() {
            warn!("search submitted with missing fields");
            return Err(ValidationError::MissingSearchFields);
        }

        self.generation += 1;
        self.progress = 0;
        self.deal_context = None;
        self.comparison = Some(PriceComparison::generate_with_rng(
            &self.search.destination,
            self.search.cabin_class,
            rng,
        ));
        self.step = WizardStep::Analyzing;
        info!(
            generation = self.generation,
            from = %self.search.origin,
            to = %self.search.destination,
            cabin = %self.search.cabin_class,
            "analysis started"
        );

        Ok(Activation {
            generation: self.generation,
            criteria: self.search.clone(),
        })
    }

    /// Apply one timer tick from the activation `generation`
    pub fn advance_analysis(&mut self, generation: u64) -> TickOutcome {
        if self.step != WizardStep::Analyzing || generation != self.generation {
            return TickOutcome::Ignored;
        }
        if self.progress >= PROGRESS_COMPLETE {
            self.on_analysis_complete();
            return TickOutcome::Completed;
        }
        self.progress = (self.progress + PROGRESS_STEP).min(PROGRESS_COMPLETE);
        TickOutcome::Advanced(self.progress)
    }

    /// Analyzing → LeadCapture. No effect in any other step.
    pub fn on_analysis_complete(&mut self) {
        if self.step != WizardStep::Analyzing {
            return;
        }
        self.progress = PROGRESS_COMPLETE;
        self.step = WizardStep::LeadCapture;
        info!(generation = self.generation, "analysis complete");
    }

    /// Store generated copy if it belongs to the current activation
    pub fn deal_context_arrived(&mut self, generation: u64, text: String) -> bool {
        let awaiting = matches!(self.step, WizardStep::Analyzing | WizardStep::LeadCapture);
        if !awaiting || generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale deal context");
            return false;
        }
        self.deal_context = Some(text);
        true
    }

    /// LeadCapture → Success
    pub fn submit_lead(&mut self) -> Result<(), ValidationError> {
        if self.step != WizardStep::LeadCapture {
            return Err(ValidationError::WrongStep(self.step));
        }
        if let Err(e) = self.lead.validate_email() {
            warn!("lead submitted with malformed email");
            return Err(e);
        }
        self.step = WizardStep::Success;
        info!("lead captured");
        Ok(())
    }

    /// Back to a fresh Search step with defaults relative to `today`
    pub fn restart(&mut self, today: NaiveDate) {
        // Bump so late ticks and copy from the old activation stay stale.
        let generation = self.generation + 1;
        *self = Self::with_today(today);
        self.generation = generation;
        info!("wizard restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::search::{CabinClass, Passengers, TripType};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn filled_wizard() -> WizardController {
        let mut wizard = WizardController::with_today(today());
        wizard.search.origin = "New York (JFK)".to_string();
        wizard.search.destination = "London (LHR)".to_string();
        wizard
    }

    fn run_to_lead_capture(wizard: &mut WizardController) {
        let activation = wizard.submit_search().unwrap();
        while wizard.advance_analysis(activation.generation) != TickOutcome::Completed {}
    }

    #[test]
    fn test_missing_fields_stay_on_search() {
        let cases: [fn(&mut WizardController); 3] = [
            |w| w.search.origin.clear(),
            |w| w.search.destination.clear(),
            |w| w.search.departure_date = None,
        ];
        for clear in cases {
            let mut wizard = filled_wizard();
            clear(&mut wizard);
            assert_eq!(
                wizard.submit_search(),
                Err(ValidationError::MissingSearchFields)
            );
            assert_eq!(wizard.step(), WizardStep::Search);
            assert!(wizard.comparison().is_none());
        }
    }

    #[test]
    fn test_valid_search_starts_analysis() {
        let mut wizard = filled_wizard();
        let activation = wizard.submit_search().unwrap();
        assert_eq!(wizard.step(), WizardStep::Analyzing);
        assert_eq!(wizard.progress(), 0);
        assert_eq!(activation.generation, 1);
        assert_eq!(activation.criteria.destination, "London (LHR)");
        assert_eq!(wizard.comparison().unwrap().airline, "British Airways");
    }

    #[test]
    fn test_progress_is_monotonic_and_completes_once() {
        let mut wizard = filled_wizard();
        let activation = wizard.submit_search().unwrap();

        let mut last = 0;
        let mut completions = 0;
        for _ in 0..150 {
            match wizard.advance_analysis(activation.generation) {
                TickOutcome::Advanced(p) => {
                    assert!(p >= last);
                    assert_eq!(completions, 0);
                    last = p;
                }
                TickOutcome::Completed => {
                    assert_eq!(last, PROGRESS_COMPLETE);
                    completions += 1;
                }
                TickOutcome::Ignored => {}
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(wizard.step(), WizardStep::LeadCapture);
        assert_eq!(wizard.progress(), PROGRESS_COMPLETE);
    }

    #[test]
    fn test_stale_generation_tick_is_ignored() {
        let mut wizard = filled_wizard();
        let activation = wizard.submit_search().unwrap();
        assert_eq!(
            wizard.advance_analysis(activation.generation + 1),
            TickOutcome::Ignored
        );
        assert_eq!(
            wizard.advance_analysis(activation.generation - 1),
            TickOutcome::Ignored
        );
        assert_eq!(wizard.progress(), 0);
    }

    #[test]
    fn test_ticks_outside_analysis_are_ignored() {
        let mut wizard = filled_wizard();
        assert_eq!(wizard.advance_analysis(0), TickOutcome::Ignored);
        assert_eq!(wizard.step(), WizardStep::Search);
    }

    #[test]
    fn test_completion_only_from_analyzing() {
        let mut wizard = filled_wizard();
        wizard.on_analysis_complete();
        assert_eq!(wizard.step(), WizardStep::Search);
    }

    #[test]
    fn test_lead_email_validation() {
        let mut wizard = filled_wizard();
        run_to_lead_capture(&mut wizard);

        wizard.lead.name = "Ada".to_string();
        wizard.lead.phone = "555".to_string();
        wizard.lead.email = "not-an-email".to_string();
        assert_eq!(wizard.submit_lead(), Err(ValidationError::InvalidEmail));
        assert_eq!(wizard.step(), WizardStep::LeadCapture);

        wizard.lead.email = "user@example.com".to_string();
        assert_eq!(wizard.submit_lead(), Ok(()));
        assert_eq!(wizard.step(), WizardStep::Success);
    }

    #[test]
    fn test_lead_submit_rejected_outside_lead_step() {
        let mut wizard = filled_wizard();
        assert_eq!(
            wizard.submit_lead(),
            Err(ValidationError::WrongStep(WizardStep::Search))
        );
    }

    #[test]
    fn test_search_submit_rejected_while_analyzing() {
        let mut wizard = filled_wizard();
        wizard.submit_search().unwrap();
        assert_eq!(
            wizard.submit_search(),
            Err(ValidationError::WrongStep(WizardStep::Analyzing))
        );
        assert_eq!(wizard.generation(), 1);
    }

    #[test]
    fn test_restart_from_success_restores_defaults() {
        let mut wizard = filled_wizard();
        wizard.search.cabin_class = CabinClass::First;
        wizard.search.trip_type = TripType::OneWay;
        wizard.search.passengers.adults = 3;
        run_to_lead_capture(&mut wizard);
        wizard.lead.email = "user@example.com".to_string();
        wizard.submit_lead().unwrap();

        wizard.restart(today());

        assert_eq!(wizard.step(), WizardStep::Search);
        assert_eq!(wizard.search, SearchCriteria::with_today(today()));
        assert_eq!(wizard.search.passengers, Passengers::default());
        assert_eq!(wizard.lead, LeadContact::default());
        assert_eq!(wizard.progress(), 0);
        assert!(wizard.comparison().is_none());
        assert!(wizard.deal_context().is_none());
    }

    #[test]
    fn test_reentering_analysis_recomputes_and_ignores_old_ticks() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut wizard = filled_wizard();
        let first = wizard.submit_search_with_rng(&mut rng).unwrap();
        for _ in 0..10 {
            wizard.advance_analysis(first.generation);
        }

        wizard.restart(today());
        wizard.search.origin = "Paris (CDG)".to_string();
        wizard.search.destination = "Tokyo (HND)".to_string();
        let second = wizard.submit_search_with_rng(&mut rng).unwrap();

        assert!(second.generation > first.generation);
        assert_eq!(wizard.progress(), 0);
        assert_eq!(wizard.comparison().unwrap().airline, "JAL");
        assert_eq!(wizard.advance_analysis(first.generation), TickOutcome::Ignored);
        assert_eq!(wizard.advance_analysis(second.generation), TickOutcome::Advanced(1));
    }

    #[test]
    fn test_deal_context_generation_guard() {
        let mut wizard = filled_wizard();
        assert!(!wizard.deal_context_arrived(0, "early".to_string()));

        let activation = wizard.submit_search().unwrap();
        assert!(!wizard.deal_context_arrived(activation.generation + 1, "future".to_string()));
        assert!(wizard.deal_context_arrived(activation.generation, "fresh".to_string()));
        assert_eq!(wizard.deal_context(), Some("fresh"));

        wizard.restart(today());
        assert!(!wizard.deal_context_arrived(activation.generation, "late".to_string()));
        assert!(wizard.deal_context().is_none());
    }
}
