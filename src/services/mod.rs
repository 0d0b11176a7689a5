//! Background work and external service interactions
//!
//! This module contains:
//! - Cancellable timers on worker threads
//! - The simulated analysis timer
//! - The text-generation client for the lead step copy

pub mod analysis;
pub mod deal_context;
pub mod scheduler;

pub use analysis::AnalysisTimer;
pub use deal_context::{
    DealContextFetcher, DealContextProvider, DealContextRequest, GeminiClient, OfflineProvider,
};
pub use scheduler::ScheduledTask;
