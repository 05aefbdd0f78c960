pub mod api;
pub mod config;
pub mod import_controller;
pub mod pages;
pub mod session;
pub mod storage;

use api::ApiClient;
use dioxus::prelude::*;
use pages::{Ad, AppLayout, Home, Login, NotFound, Profile, Register};
use session::Session;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/ad/:id")]
    Ad { id: u64 },
    #[route("/profile")]
    Profile {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let session = use_context_provider(Session::restore);
    use_context_provider(|| ApiClient::new(config::api_base(), session));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
