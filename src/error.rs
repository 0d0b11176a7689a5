//! Error types for the booking funnel
//!
//! Validation failures are shown inline on the active step and never change
//! wizard state. Service failures are absorbed by fallbacks and only logged.

use crate::model::wizard::WizardStep;
use thiserror::Error;

/// A user-facing validation failure that blocks a step transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the required flight details.")]
    MissingSearchFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter your full name.")]
    MissingName,
    #[error("Please enter a phone number so an agent can reach you.")]
    MissingPhone,
    #[error("This action is not available on the {0} step")]
    WrongStep(WizardStep),
}

/// Failure of the text-generation collaborator
#[derive(Debug, Error)]
pub enum DealContextError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service returned status {0}")]
    Status(u16),
    #[error("service returned no text")]
    EmptyResponse,
}
