//! Login and registration forms

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::helpers::ErrorDisplay;
use crate::components::text_input::TextInput;
use crate::stores::auth_form::{AuthFormState, AuthFormStateStoreExt, AuthMode};
use dioxus::prelude::*;

/// Editable field of the auth forms
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthField {
    Username,
    Email,
    Password,
}

#[component]
pub fn AuthFormView(
    mode: AuthMode,
    state: ReadStore<AuthFormState>,
    on_field_change: EventHandler<(AuthField, String)>,
    on_submit: EventHandler<()>,
    /// Switch to the other form
    on_switch: EventHandler<()>,
) -> Element {
    let username = state.username().read().clone();
    let email = state.email().read().clone();
    let password = state.password().read().clone();
    let submitting = *state.submitting().read();
    let error = state.error().read().clone();

    let (title, submit_label, switch_label) = match mode {
        AuthMode::Login => ("Log in", "Log in", "Create an account"),
        AuthMode::Register => ("Sign up", "Create account", "I already have an account"),
    };

    rsx! {
        section { class: "max-w-md mx-auto bg-gray-800/40 rounded-xl p-6",
            h1 { class: "text-2xl font-bold text-white mb-4", "{title}" }
            div { class: "flex flex-col gap-3",
                label { class: "text-sm text-gray-400", r#for: "auth-username", "Username" }
                TextInput {
                    id: "auth-username".to_string(),
                    value: username,
                    disabled: submitting,
                    on_input: move |v| on_field_change.call((AuthField::Username, v)),
                }
                if mode == AuthMode::Register {
                    label { class: "text-sm text-gray-400", r#for: "auth-email", "Email" }
                    TextInput {
                        id: "auth-email".to_string(),
                        input_type: "email",
                        value: email,
                        disabled: submitting,
                        on_input: move |v| on_field_change.call((AuthField::Email, v)),
                    }
                }
                label { class: "text-sm text-gray-400", r#for: "auth-password", "Password" }
                TextInput {
                    id: "auth-password".to_string(),
                    input_type: "password",
                    value: password,
                    disabled: submitting,
                    on_input: move |v| on_field_change.call((AuthField::Password, v)),
                    on_enter: move |_| on_submit.call(()),
                }
                if let Some(message) = error {
                    ErrorDisplay { message }
                }
                div { class: "flex gap-2 mt-2",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        loading: submitting,
                        onclick: move |_| on_submit.call(()),
                        "{submit_label}"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_switch.call(()),
                        "{switch_label}"
                    }
                }
            }
        }
    }
}
