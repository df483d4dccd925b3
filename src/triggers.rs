//! Page Triggers
//!
//! Wires the server-rendered controls to the popups. One delegated click
//! listener on the document resolves the clicked control and dispatches.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::actions::{ConfirmAction, FormKind};
use crate::context::UiContext;
use crate::dom;
use crate::error::ClientError;
use crate::models::{parse_todo_id, TodoDraft, TodoId};
use crate::orchestrator;

const TODO_ITEM: &str = ".todo-item";

/// Server-rendered controls the client reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Form(FormKind),
    SignOut,
    DeleteAccount,
    EditTodo,
    CompleteTodo,
    ToggleTodo,
}

/// Checked in order; the first selector matching the click target wins
const TRIGGERS: &[(&str, Trigger)] = &[
    ("#sign-in-btn", Trigger::Form(FormKind::SignIn)),
    ("#sign-up-btn", Trigger::Form(FormKind::SignUp)),
    ("#forgot-password-btn", Trigger::Form(FormKind::ForgotPassword)),
    ("#reset-password-btn", Trigger::Form(FormKind::ResetPassword)),
    ("#change-email-btn", Trigger::Form(FormKind::ChangeEmail)),
    ("#change-password-btn", Trigger::Form(FormKind::ChangePassword)),
    ("#add-todo-btn", Trigger::Form(FormKind::AddTodo)),
    ("#sign-out-btn", Trigger::SignOut),
    ("#delete-account-btn", Trigger::DeleteAccount),
    (".todo-item .edit-btn", Trigger::EditTodo),
    (".todo-item .complete-btn", Trigger::CompleteTodo),
    (".todo-item", Trigger::ToggleTodo),
];

pub fn install(ui: UiContext, document: &Document) -> Result<(), ClientError> {
    dom::listen(document, "click", move |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Some((element, trigger)) = resolve(&target) else {
            return;
        };
        if trigger != Trigger::ToggleTodo {
            ev.prevent_default();
        }
        log::debug!("trigger {:?}", trigger);
        handle(ui, trigger, &element);
    })
}

fn resolve(target: &Element) -> Option<(Element, Trigger)> {
    TRIGGERS
        .iter()
        .find_map(|(selector, trigger)| dom::closest(target, selector).map(|el| (el, *trigger)))
}

fn handle(ui: UiContext, trigger: Trigger, element: &Element) {
    match trigger {
        Trigger::Form(kind) => orchestrator::open_form(ui, kind, None),
        Trigger::SignOut => orchestrator::sign_out(ui),
        Trigger::DeleteAccount => orchestrator::request_confirmation(ui, ConfirmAction::DeleteAccount),
        Trigger::EditTodo => {
            let Some((item, id)) = owning_item(element) else {
                return;
            };
            let draft = read_draft(&item);
            orchestrator::open_form(ui, FormKind::EditTodo(id), Some(&draft));
        }
        Trigger::CompleteTodo => {
            if let Some((_, id)) = owning_item(element) {
                orchestrator::request_confirmation(ui, ConfirmAction::CompleteTodo(id));
            }
        }
        Trigger::ToggleTodo => toggle_expand(element),
    }
}

/// The list item around a control, with its parsed `data-todo-id`
fn owning_item(control: &Element) -> Option<(Element, TodoId)> {
    let item = dom::closest(control, TODO_ITEM)?;
    let raw = item.get_attribute("data-todo-id").unwrap_or_default();
    match parse_todo_id(&raw) {
        Some(id) => Some((item, id)),
        None => {
            log::error!("to-do item has invalid id {:?}", raw);
            None
        }
    }
}

/// Read the item exactly as currently rendered
fn read_draft(item: &Element) -> TodoDraft {
    TodoDraft::from_display(
        dom::child_text(item, ".todo-summary"),
        dom::child_text(item, ".todo-task"),
        dom::child_attr(item, ".due-time", "datetime"),
    )
}

fn toggle_expand(item: &Element) {
    let classes = item.class_list();
    let expanded = classes.contains("expanded");
    if let Some(task) = item.query_selector(".todo-task").ok().flatten() {
        let height = if expanded {
            "0".to_string()
        } else {
            format!("{}px", task.scroll_height())
        };
        dom::set_style(&task, "max-height", &height);
    }
    if let Err(e) = classes.toggle_with_force("expanded", !expanded) {
        log::debug!("could not toggle expanded: {:?}", e);
    }
}
