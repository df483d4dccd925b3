//! Success and failure popups

use leptos::prelude::*;

use crate::context::{use_ui, FAILURE_POPUP, SUCCESS_POPUP};

#[component]
pub fn FeedbackPopups() -> impl IntoView {
    let ui = use_ui();

    view! {
        <div id=SUCCESS_POPUP class="popup feedback success" class:hidden=move || !ui.popups.is_visible(SUCCESS_POPUP)>
            <p>{move || ui.success_message.get()}</p>
        </div>
        <div id=FAILURE_POPUP class="popup feedback failure" class:hidden=move || !ui.popups.is_visible(FAILURE_POPUP)>
            <p>{move || ui.failure_message.get()}</p>
        </div>
    }
}
