//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `WizardController` - The four-step booking flow and its form state
//! - Search, lead, and pricing value types
//! - Static marketing content and the live deal board
//! - `ModalStack` - Modal overlay management

pub mod airport;
pub mod calendar;
pub mod catalog;
pub mod deals;
pub mod lead;
pub mod modal;
pub mod notifications;
pub mod pricing;
pub mod search;
pub mod wizard;

// Re-export commonly used types
pub use deals::DealBoard;
pub use modal::{Modal, ModalStack};
pub use notifications::BookingFeed;
pub use wizard::{TickOutcome, WizardController, WizardStep};
