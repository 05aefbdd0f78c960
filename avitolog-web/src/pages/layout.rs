use crate::session::use_session;
use crate::Route;
use avitolog_ui::{AppLayoutView, NavItem};
use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();
    let session = use_session();
    let year = chrono::Local::now().year();

    let nav_items = vec![
        NavItem {
            id: "home",
            label: "Home",
            is_active: matches!(current_route, Route::Home {} | Route::Ad { .. }),
        },
        NavItem {
            id: "profile",
            label: "Profile",
            is_active: matches!(current_route, Route::Profile {}),
        },
    ];

    rsx! {
        AppLayoutView {
            nav_items,
            is_authenticated: session.is_authenticated(),
            year,
            on_nav_click: move |id: &'static str| {
                let route = match id {
                    "profile" => Route::Profile {},
                    "login" => Route::Login {},
                    _ => Route::Home {},
                };
                navigator().push(route);
            },
            on_logout: move |_| {
                session.sign_out();
                navigator().push(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}
