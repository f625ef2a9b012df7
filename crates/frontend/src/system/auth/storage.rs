use web_sys::window;

/// Single storage key for the session token. Every authenticated call
/// goes through [`ApiClient::from_session`](crate::shared::api_utils::ApiClient::from_session),
/// which reads it from here; no other module touches localStorage.
const TOKEN_KEY: &str = "auth_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

pub fn clear_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
