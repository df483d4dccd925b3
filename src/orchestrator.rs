//! Form Orchestration
//!
//! Binds triggers to the form and confirmation popups and runs submissions:
//! validate, send, interpret, give feedback.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, ConfirmAction, FormKind};
use crate::commands::{self, ApiRequest};
use crate::context::{UiContext, CONFIRMATION_POPUP, POPUP_FORM};
use crate::error::ClientError;
use crate::feedback;
use crate::models::TodoDraft;
use crate::outcome::{interpret, SuccessPolicy};
use crate::store::{store_replace, FormValues};

/// Show the form popup for `kind`, reset or pre-filled from `draft`.
/// Whatever form was bound before is replaced.
pub fn open_form(ui: UiContext, kind: FormKind, draft: Option<&TodoDraft>) {
    let values = draft.map(FormValues::from_draft).unwrap_or_default();
    store_replace(&ui.values, values);
    ui.active_form.set(Some(kind));
    ui.popups.show_exclusive(POPUP_FORM);
    log::debug!("opened form {:?}", kind);
}

pub fn close_form(ui: UiContext) {
    ui.popups.hide(POPUP_FORM);
}

pub fn submit_active_form(ui: UiContext) {
    let Some(kind) = ui.active_form.get_untracked() else {
        return;
    };
    if ui.submitting.get_untracked() {
        log::debug!("ignoring submit of {:?}, request already in flight", kind);
        return;
    }

    let values = ui.values.get_untracked();
    let planned = ui.page.with_value(|page| kind.build_request(&values, page));
    match planned {
        Ok(request) => dispatch(ui, request, kind.policy()),
        Err(e) => report(ui, e),
    }
}

pub fn request_confirmation(ui: UiContext, action: ConfirmAction) {
    ui.pending_confirm.set(Some(action));
    ui.popups.show_exclusive(CONFIRMATION_POPUP);
}

pub fn confirm(ui: UiContext) {
    if ui.submitting.get_untracked() {
        return;
    }
    let Some(action) = ui.pending_confirm.get_untracked() else {
        return;
    };
    ui.pending_confirm.set(None);
    ui.popups.hide(CONFIRMATION_POPUP);
    dispatch(ui, action.request(), action.policy());
}

pub fn cancel_confirmation(ui: UiContext) {
    ui.pending_confirm.set(None);
    ui.popups.hide(CONFIRMATION_POPUP);
}

pub fn sign_out(ui: UiContext) {
    if ui.submitting.get_untracked() {
        return;
    }
    dispatch(ui, commands::logout(), actions::SIGN_OUT);
}

fn dispatch(ui: UiContext, request: ApiRequest, policy: SuccessPolicy) {
    ui.submitting.set(true);
    let csrf_token = ui.csrf_token();
    log::debug!("sending {}", request);

    spawn_local(async move {
        let result = commands::send(&request, csrf_token.as_deref()).await;
        ui.submitting.set(false);
        match result {
            Ok(response) => feedback::show_outcome(ui, interpret(&response.meta, &response.body, &policy)),
            Err(e) => report(ui, e),
        }
    });
}

/// Validation problems get a popup; transport problems only reach the log
fn report(ui: UiContext, error: ClientError) {
    if error.is_user_facing() {
        feedback::show_failure(ui, error.to_string());
    } else {
        log::error!("Error: {}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientConfig, PageContext, PageKind};
    use crate::context::{FAILURE_POPUP, SUCCESS_POPUP};
    use leptos_popup::Dismissal;

    fn ui() -> (Owner, UiContext) {
        let owner = Owner::new();
        owner.set();
        let page = PageContext::new(PageKind::Todos, Some("token".into()), None);
        (owner, UiContext::new(ClientConfig::default(), page))
    }

    fn mismatched() -> FormValues {
        FormValues {
            email: "a@example.com".into(),
            password: "one".into(),
            confirm_password: "two".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_submit_ignored_while_request_in_flight() {
        let (_owner, ui) = ui();
        open_form(ui, FormKind::SignUp, None);
        store_replace(&ui.values, mismatched());
        ui.submitting.set(true);

        submit_active_form(ui);

        assert!(!ui.popups.is_visible(FAILURE_POPUP));
        assert!(ui.popups.is_visible(POPUP_FORM));
        assert_eq!(ui.failure_message.get_untracked(), "");
        assert!(ui.submitting.get_untracked());
    }

    #[test]
    fn test_submit_without_bound_form_does_nothing() {
        let (_owner, ui) = ui();
        store_replace(&ui.values, mismatched());

        submit_active_form(ui);

        assert!(!ui.submitting.get_untracked());
        assert!(!ui.popups.is_visible(FAILURE_POPUP));
    }

    #[test]
    fn test_confirm_ignored_while_request_in_flight() {
        let (_owner, ui) = ui();
        request_confirmation(ui, ConfirmAction::CompleteTodo(3));
        ui.submitting.set(true);

        confirm(ui);

        assert_eq!(ui.pending_confirm.get_untracked(), Some(ConfirmAction::CompleteTodo(3)));
        assert!(ui.popups.is_visible(CONFIRMATION_POPUP));
    }

    #[test]
    fn test_sign_out_ignored_while_request_in_flight() {
        let (_owner, ui) = ui();
        open_form(ui, FormKind::ChangeEmail, None);
        ui.submitting.set(true);

        sign_out(ui);

        assert!(ui.submitting.get_untracked());
        assert!(ui.popups.is_visible(POPUP_FORM));
        assert!(!ui.popups.is_visible(FAILURE_POPUP));
        assert!(!ui.popups.is_visible(SUCCESS_POPUP));
    }

    #[test]
    fn test_confirm_with_nothing_pending_fires_nothing() {
        let (_owner, ui) = ui();
        open_form(ui, FormKind::AddTodo, None);

        confirm(ui);

        assert!(!ui.submitting.get_untracked());
        assert!(ui.popups.is_visible(POPUP_FORM));
        assert_eq!(ui.pending_confirm.get_untracked(), None);
    }

    #[test]
    fn test_cancel_confirmation_clears_pending_action() {
        let (_owner, ui) = ui();
        request_confirmation(ui, ConfirmAction::DeleteAccount);
        assert!(ui.popups.is_visible(CONFIRMATION_POPUP));

        cancel_confirmation(ui);

        assert_eq!(ui.pending_confirm.get_untracked(), None);
        assert!(!ui.popups.is_visible(CONFIRMATION_POPUP));
        assert!(!ui.submitting.get_untracked());
    }

    #[test]
    fn test_confirmation_displaces_open_form() {
        let (_owner, ui) = ui();
        open_form(ui, FormKind::AddTodo, None);

        request_confirmation(ui, ConfirmAction::CompleteTodo(1));

        assert!(ui.popups.is_visible(CONFIRMATION_POPUP));
        assert!(!ui.popups.is_visible(POPUP_FORM));
    }

    #[test]
    fn test_open_form_replaces_previous_binding() {
        let (_owner, ui) = ui();
        open_form(ui, FormKind::SignUp, None);
        store_replace(&ui.values, mismatched());

        open_form(ui, FormKind::SignIn, None);

        assert_eq!(ui.active_form.get_untracked(), Some(FormKind::SignIn));
        assert_eq!(ui.values.get_untracked(), FormValues::default());
        assert!(ui.popups.is_visible(POPUP_FORM));
    }

    #[test]
    fn test_open_form_in_edit_mode_populates_values() {
        let (_owner, ui) = ui();
        open_form(ui, FormKind::AddTodo, None);
        let draft = TodoDraft {
            summary: "Groceries".into(),
            task: "milk".into(),
            due_time: "2024-05-01T09:30".into(),
        };

        open_form(ui, FormKind::EditTodo(9), Some(&draft));

        assert_eq!(ui.active_form.get_untracked(), Some(FormKind::EditTodo(9)));
        assert_eq!(ui.values.get_untracked().todo_draft(), draft);
        assert_eq!(ui.values.get_untracked().email, "");
    }

    #[test]
    fn test_close_form_keeps_binding() {
        let (_owner, ui) = ui();
        open_form(ui, FormKind::ChangePassword, None);

        close_form(ui);

        assert!(!ui.popups.is_visible(POPUP_FORM));
        assert_eq!(ui.active_form.get_untracked(), Some(FormKind::ChangePassword));
    }

    #[test]
    fn test_failure_expiry_restores_displaced_form() {
        let (_owner, ui) = ui();
        open_form(ui, FormKind::SignIn, None);
        let (ticket, displaced) = ui.popups.show_exclusive(FAILURE_POPUP);
        assert!(!ui.popups.is_visible(POPUP_FORM));

        assert!(ui.popups.dismiss_now(ticket, Dismissal::IfCurrent));
        ui.popups.restore(displaced);

        assert!(ui.popups.is_visible(POPUP_FORM));
        assert!(!ui.popups.is_visible(FAILURE_POPUP));
    }

    #[test]
    fn test_failure_expiry_after_new_form_skips_restore() {
        let (_owner, ui) = ui();
        open_form(ui, FormKind::SignIn, None);
        let (ticket, _) = ui.popups.show_exclusive(FAILURE_POPUP);
        open_form(ui, FormKind::SignUp, None);

        assert!(!ui.popups.dismiss_now(ticket, Dismissal::IfCurrent));
        assert!(ui.popups.is_visible(POPUP_FORM));
    }

    #[test]
    fn test_success_follow_up_survives_trigger_click() {
        let (_owner, ui) = ui();
        let (ticket, _) = ui.popups.show_exclusive(SUCCESS_POPUP);
        // Clicking a trigger before the timer fires opens the form
        open_form(ui, FormKind::AddTodo, None);

        assert!(ui.popups.dismiss_now(ticket, Dismissal::Always));
        assert!(ui.popups.is_visible(POPUP_FORM));
    }
}
