//! Where the backend lives
//!
//! `AVITOLOG_API_BASE` at build time wins; otherwise the API is expected under
//! `/api` on the origin serving the app.

/// Root of the REST API, without a trailing slash.
pub fn api_base() -> String {
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    resolve_api_base(option_env!("AVITOLOG_API_BASE"), origin.as_deref())
}

fn resolve_api_base(configured: Option<&str>, origin: Option<&str>) -> String {
    if let Some(base) = configured.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    match origin {
        Some(origin) => format!("{}/api", origin.trim_end_matches('/')),
        None => "/api".to_string(),
    }
}
