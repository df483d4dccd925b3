//! Form Field Store
//!
//! Uses Leptos reactive_stores so each input only tracks its own field.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoDraft;

/// Values of the shared form popup
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct FormValues {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub summary: String,
    pub task: String,
    pub due_time: String,
}

impl FormValues {
    /// Edit-mode values: to-do fields filled, the rest empty
    pub fn from_draft(draft: &TodoDraft) -> Self {
        Self {
            summary: draft.summary.clone(),
            task: draft.task.clone(),
            due_time: draft.due_time.clone(),
            ..Default::default()
        }
    }

    pub fn todo_draft(&self) -> TodoDraft {
        TodoDraft {
            summary: self.summary.clone(),
            task: self.task.clone(),
            due_time: self.due_time.clone(),
        }
    }
}

/// Type alias for the store
pub type FormStore = Store<FormValues>;

/// Replace every field at once
pub fn store_replace(store: &FormStore, values: FormValues) {
    *store.write() = values;
}
