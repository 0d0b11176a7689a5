//! Action enum - All possible application actions
//!
//! Components turn key events into Actions; the App applies them to the
//! wizard and the surrounding widgets.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for timers and animations
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// User tried to leave; may show the exit-intent offer first
    RequestQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open keyboard help
    OpenHelp,
    /// Open the "why are our prices so low" dialog
    OpenLowPriceInfo,
    /// Close the current modal
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Form Focus
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus to the next field
    FocusNext,
    /// Move focus to the previous field
    FocusPrev,

    // ─────────────────────────────────────────────────────────────────────────
    // Wizard
    // ─────────────────────────────────────────────────────────────────────────
    /// Submit the search form (Search → Analyzing)
    SubmitSearch,
    /// Submit the lead form (LeadCapture → Success)
    SubmitLead,
    /// Start over with a fresh search
    Restart,

    // ─────────────────────────────────────────────────────────────────────────
    // Ambient Widgets
    // ─────────────────────────────────────────────────────────────────────────
    /// Hide the booking notification
    DismissNotification,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::RequestQuit => write!(f, "RequestQuit"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenLowPriceInfo => write!(f, "OpenLowPriceInfo"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::SubmitSearch => write!(f, "SubmitSearch"),
            Action::SubmitLead => write!(f, "SubmitLead"),
            Action::Restart => write!(f, "Restart"),
            Action::DismissNotification => write!(f, "DismissNotification"),
        }
    }
}
