//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod airport_input;
pub mod analyzing;
pub mod booking_notification;
pub mod date_picker;
pub mod deal_ticker;
pub mod exit_intent;
pub mod header;
pub mod help_bar;
pub mod help_dialog;
pub mod layout;
pub mod lead_capture;
pub mod low_price_dialog;
pub mod marketing;
pub mod passenger_picker;
pub mod quit_dialog;
pub mod search_form;
pub mod success;
pub mod text_input;

pub use analyzing::draw_analyzing;
pub use booking_notification::draw_booking_notification;
pub use deal_ticker::DealTicker;
pub use exit_intent::ExitIntentDialog;
pub use header::draw_header;
pub use help_bar::draw_help_bar;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use lead_capture::{LeadCaptureComponent, LeadRenderContext};
pub use low_price_dialog::LowPriceDialog;
pub use marketing::draw_marketing;
pub use quit_dialog::QuitDialog;
pub use search_form::SearchFormComponent;
pub use success::draw_success;
