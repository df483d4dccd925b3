//! UI Components
//!
//! Client-rendered popups.

mod confirm_dialog;
mod feedback_popups;
mod form_popup;

pub use confirm_dialog::ConfirmDialog;
pub use feedback_popups::FeedbackPopups;
pub use form_popup::FormPopup;
