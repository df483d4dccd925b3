//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_popup::Popups;
use reactive_stores::Store;

use crate::actions::{ConfirmAction, FormKind};
use crate::config::{ClientConfig, PageContext};
use crate::store::{FormStore, FormValues};

pub const POPUP_FORM: &str = "popup-form";
pub const SUCCESS_POPUP: &str = "success-popup";
pub const FAILURE_POPUP: &str = "failure-popup";
pub const CONFIRMATION_POPUP: &str = "confirmation-popup";

/// App-wide handles; every field is an arena handle so the context is `Copy`
#[derive(Clone, Copy)]
pub struct UiContext {
    pub popups: Popups,
    /// Form bound to the form popup; its kind decides what submit does
    pub active_form: RwSignal<Option<FormKind>>,
    pub values: FormStore,
    /// Set while a request is in flight
    pub submitting: RwSignal<bool>,
    /// Action waiting on the confirmation popup
    pub pending_confirm: RwSignal<Option<ConfirmAction>>,
    pub success_message: RwSignal<String>,
    pub failure_message: RwSignal<String>,
    pub config: StoredValue<ClientConfig>,
    pub page: StoredValue<PageContext>,
}

impl UiContext {
    pub fn new(config: ClientConfig, page: PageContext) -> Self {
        Self {
            popups: Popups::new(),
            active_form: RwSignal::new(None),
            values: Store::new(FormValues::default()),
            submitting: RwSignal::new(false),
            pending_confirm: RwSignal::new(None),
            success_message: RwSignal::new(String::new()),
            failure_message: RwSignal::new(String::new()),
            config: StoredValue::new(config),
            page: StoredValue::new(page),
        }
    }

    pub fn csrf_token(&self) -> Option<String> {
        self.page.with_value(|p| p.csrf_token.clone())
    }
}

pub fn use_ui() -> UiContext {
    expect_context::<UiContext>()
}
