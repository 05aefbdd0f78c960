//! Signed-in state shared through context

use crate::storage;
use dioxus::prelude::*;
use tracing::info;

/// Whether a token is stored, as a reactive flag.
///
/// Storage is the source of truth; the signal lets the header and pages
/// re-render when it changes.
#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    authenticated: Signal<bool>,
}

impl Session {
    /// Read the initial state from storage. Call from a component scope.
    pub fn restore() -> Self {
        Self {
            authenticated: Signal::new(storage::access_token().is_some()),
        }
    }

    /// Subscribes the caller when read during render.
    pub fn is_authenticated(&self) -> bool {
        *self.authenticated.read()
    }

    pub fn sign_in(&self, access: &str, refresh: Option<&str>) {
        storage::store_tokens(access, refresh);
        let mut authenticated = self.authenticated;
        authenticated.set(true);
        info!("Signed in");
    }

    pub fn sign_out(&self) {
        storage::clear_tokens();
        let mut authenticated = self.authenticated;
        authenticated.set(false);
        info!("Signed out");
    }
}

pub fn use_session() -> Session {
    use_context::<Session>()
}
