//! Login and registration pages

use crate::api::{ApiClient, Credentials, Registration};
use crate::session::{use_session, Session};
use crate::Route;
use avitolog_common::{error_message, ApiFailure};
use avitolog_ui::stores::{AuthFormState, AuthFormStateStoreExt, AuthMode};
use avitolog_ui::{AuthField, AuthFormView};
use dioxus::prelude::*;
use tracing::{info, warn};

#[component]
pub fn Login() -> Element {
    rsx! {
        AuthPage { mode: AuthMode::Login }
    }
}

#[component]
pub fn Register() -> Element {
    rsx! {
        AuthPage { mode: AuthMode::Register }
    }
}

/// Log in with `credentials` and remember the tokens.
async fn sign_in(
    api: &ApiClient,
    session: Session,
    credentials: &Credentials,
) -> Result<(), ApiFailure> {
    let tokens = api.login(credentials).await?;
    session.sign_in(&tokens.access, tokens.refresh.as_deref());
    Ok(())
}

#[component]
fn AuthPage(mode: AuthMode) -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let form = use_store(AuthFormState::default);

    let on_submit = move |_| {
        if *form.submitting().read() {
            return;
        }
        if let Err(message) = form.read().validate(mode) {
            form.error().set(Some(message));
            return;
        }

        let (username, email, password) = {
            let state = form.read();
            (
                state.username.trim().to_string(),
                state.email.trim().to_string(),
                state.password.clone(),
            )
        };
        form.submitting().set(true);
        form.error().set(None);

        let api = api.clone();
        spawn(async move {
            let credentials = Credentials { username, password };
            let result = match mode {
                AuthMode::Login => sign_in(&api, session, &credentials).await,
                AuthMode::Register => {
                    let registration = Registration {
                        username: credentials.username.clone(),
                        email,
                        password: credentials.password.clone(),
                    };
                    match api.register(&registration).await {
                        Ok(member) => {
                            info!("Registered {}", member.username);
                            sign_in(&api, session, &credentials).await
                        }
                        Err(failure) => Err(failure),
                    }
                }
            };

            form.submitting().set(false);
            match result {
                Ok(()) => {
                    navigator().push(Route::Profile {});
                }
                Err(failure) => {
                    warn!("Authentication failed: {}", failure);
                    form.error().set(Some(error_message(&failure)));
                }
            }
        });
    };

    rsx! {
        AuthFormView {
            mode,
            state: form,
            on_field_change: move |(field, value): (AuthField, String)| {
                match field {
                    AuthField::Username => form.username().set(value),
                    AuthField::Email => form.email().set(value),
                    AuthField::Password => form.password().set(value),
                }
            },
            on_submit,
            on_switch: move |_| {
                let route = match mode {
                    AuthMode::Login => Route::Register {},
                    AuthMode::Register => Route::Login {},
                };
                navigator().push(route);
            },
        }
    }
}
