//! Form Popup Component
//!
//! The single form popup shared by every form kind. Which inputs show, which
//! are required, and what submit does all follow the active form.

use leptos::prelude::*;

use crate::actions::Field;
use crate::context::{use_ui, POPUP_FORM};
use crate::orchestrator::{close_form, submit_active_form};
use crate::store::FormValuesStoreFields;

/// One labelled input bound to a store field
#[component]
fn FieldInput(
    field: Field,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let ui = use_ui();
    let shows = move || ui.active_form.get().map(|k| k.shows(field)).unwrap_or(false);
    let required = move || ui.active_form.get().map(|k| k.requires(field)).unwrap_or(false);

    let input = if input_type == "textarea" {
        view! {
            <textarea
                id=id
                name=id
                prop:required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type
                id=id
                name=id
                prop:required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field" class:hidden=move || !shows()>
            <label for=id>{label}</label>
            {input}
        </div>
    }
}

#[component]
pub fn FormPopup() -> impl IntoView {
    let ui = use_ui();
    let values = ui.values;

    let title = move || ui.active_form.get().map(|k| k.title()).unwrap_or_default();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_active_form(ui);
    };

    view! {
        <div id=POPUP_FORM class="popup" class:hidden=move || !ui.popups.is_visible(POPUP_FORM)>
            <div class="popup-content">
                <button type="button" id="close-btn" class="close-btn" on:click=move |_| close_form(ui)>
                    "×"
                </button>
                <h2 id="form-title">{title}</h2>
                <form class="popup-form-body" on:submit=on_submit>
                    <FieldInput
                        field=Field::Email
                        id="email"
                        label="E-Mail"
                        input_type="email"
                        value=Signal::derive(move || values.email().get())
                        on_input=Callback::new(move |v| values.email().set(v))
                    />
                    <FieldInput
                        field=Field::Password
                        id="password"
                        label="Password"
                        input_type="password"
                        value=Signal::derive(move || values.password().get())
                        on_input=Callback::new(move |v| values.password().set(v))
                    />
                    <FieldInput
                        field=Field::ConfirmPassword
                        id="confirm-password"
                        label="Confirm Password"
                        input_type="password"
                        value=Signal::derive(move || values.confirm_password().get())
                        on_input=Callback::new(move |v| values.confirm_password().set(v))
                    />
                    <FieldInput
                        field=Field::Summary
                        id="summary"
                        label="Summary"
                        input_type="text"
                        value=Signal::derive(move || values.summary().get())
                        on_input=Callback::new(move |v| values.summary().set(v))
                    />
                    <FieldInput
                        field=Field::Task
                        id="task"
                        label="Task"
                        input_type="textarea"
                        value=Signal::derive(move || values.task().get())
                        on_input=Callback::new(move |v| values.task().set(v))
                    />
                    <FieldInput
                        field=Field::DueTime
                        id="due-time"
                        label="Due"
                        input_type="datetime-local"
                        value=Signal::derive(move || values.due_time().get())
                        on_input=Callback::new(move |v| values.due_time().set(v))
                    />
                    <button type="submit" class="submit-btn" prop:disabled=move || ui.submitting.get()>
                        "Submit"
                    </button>
                </form>
            </div>
        </div>
    }
}
