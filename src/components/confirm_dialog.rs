//! Confirm Dialog Component
//!
//! Confirmation popup guarding destructive actions.

use leptos::prelude::*;

use crate::context::{use_ui, CONFIRMATION_POPUP};
use crate::orchestrator::{cancel_confirmation, confirm};

/// Nothing is sent until the confirm button is clicked
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let ui = use_ui();
    let prompt = move || ui.pending_confirm.get().map(|a| a.prompt()).unwrap_or_default();

    view! {
        <div id=CONFIRMATION_POPUP class="popup" class:hidden=move || !ui.popups.is_visible(CONFIRMATION_POPUP)>
            <div class="popup-content">
                <p class="confirm-text">{prompt}</p>
                <button
                    id="confirm-btn"
                    class="confirm-btn"
                    prop:disabled=move || ui.submitting.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        confirm(ui);
                    }
                >
                    "Confirm"
                </button>
                <button
                    id="cancel-btn"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        cancel_confirmation(ui);
                    }
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
