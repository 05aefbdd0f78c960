//! Token persistence in localStorage

/// Access token key
pub const ACCESS_TOKEN_KEY: &str = "token";
/// Refresh token key
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn get_string(key: &str) -> Option<String> {
    get_storage()
        .and_then(|s| s.get_item(key).ok().flatten())
        .filter(|v| !v.is_empty())
}

fn set_string(key: &str, value: &str) {
    if let Some(storage) = get_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn remove(key: &str) {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn access_token() -> Option<String> {
    get_string(ACCESS_TOKEN_KEY)
}

pub fn refresh_token() -> Option<String> {
    get_string(REFRESH_TOKEN_KEY)
}

/// Save a token pair. A missing refresh token keeps the stored one.
pub fn store_tokens(access: &str, refresh: Option<&str>) {
    set_string(ACCESS_TOKEN_KEY, access);
    if let Some(refresh) = refresh {
        set_string(REFRESH_TOKEN_KEY, refresh);
    }
}

pub fn clear_tokens() {
    remove(ACCESS_TOKEN_KEY);
    remove(REFRESH_TOKEN_KEY);
}
