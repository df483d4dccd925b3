//! Feedback Popups
//!
//! Shows an interpreted outcome and runs its follow-up once the popup is
//! dismissed. Feedback always takes the screen for itself.

use crate::context::{UiContext, FAILURE_POPUP, SUCCESS_POPUP};
use crate::dom;
use crate::outcome::{FollowUp, Outcome};

use leptos::prelude::*;
use leptos_popup::Dismissal;

pub fn show_outcome(ui: UiContext, outcome: Outcome) {
    match outcome {
        Outcome::Success { message, follow_up } => show_success(ui, message, follow_up),
        Outcome::Failure { message } => show_failure(ui, message),
    }
}

pub fn show_success(ui: UiContext, message: String, follow_up: FollowUp) {
    log::info!("{}", message);
    ui.success_message.set(message);
    let (ticket, _) = ui.popups.show_exclusive(SUCCESS_POPUP);
    let delay = ui.config.with_value(|c| c.success_delay_ms);

    // The follow-up runs even if another popup took over in the meantime
    ui.popups.dismiss_after(ticket, delay, Dismissal::Always, move || match follow_up {
        FollowUp::Navigate(url) => dom::replace_location(&url),
        FollowUp::Reload => dom::reload(),
        FollowUp::Nothing => {}
    });
}

/// The popup this displaces (usually the form) comes back afterwards
pub fn show_failure(ui: UiContext, message: String) {
    log::info!("failure: {}", message);
    ui.failure_message.set(message);
    let (ticket, displaced) = ui.popups.show_exclusive(FAILURE_POPUP);
    let delay = ui.config.with_value(|c| c.failure_delay_ms);

    let popups = ui.popups;
    popups.dismiss_after(ticket, delay, Dismissal::IfCurrent, move || popups.restore(displaced));
}
