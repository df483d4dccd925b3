//! To-Do UI App
//!
//! Root component: provides the context, wires the server-rendered page and
//! renders every popup.

use leptos::prelude::*;

use crate::actions::FormKind;
use crate::components::{ConfirmDialog, FeedbackPopups, FormPopup};
use crate::config::{ClientConfig, PageContext, PageKind};
use crate::context::UiContext;
use crate::{datetime, dom, orchestrator, triggers};

#[component]
pub fn App(config: ClientConfig, page: PageContext) -> impl IntoView {
    let kind = page.kind;
    let ui = UiContext::new(config, page);
    provide_context(ui);

    match dom::document() {
        Ok(document) => {
            if let Err(e) = triggers::install(ui, &document) {
                log::error!("could not wire page triggers: {}", e);
            }
            datetime::format_times(&document);
        }
        Err(e) => log::error!("{}", e),
    }

    // A reset link lands straight on the form
    if kind == PageKind::ResetPassword {
        orchestrator::open_form(ui, FormKind::ResetPassword, None);
    }

    view! {
        <FormPopup />
        <ConfirmDialog />
        <FeedbackPopups />
    }
}
