//! Session values written to `localStorage` by the sign-in flow.

use contracts::accounts::UserRole;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "admin_access_token";
const REFRESH_TOKEN_KEY: &str = "admin_refresh_token";
const ROLE_KEY: &str = "admin_role";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

/// Role of the signed-in operator, e.g. `super_admin`.
pub fn get_role() -> Option<UserRole> {
    let raw = get_local_storage()?.get_item(ROLE_KEY).ok()??;
    parse_role(&raw)
}

fn parse_role(raw: &str) -> Option<UserRole> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_string())).ok()
}

/// Clear all authentication values
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        let _ = storage.remove_item(ROLE_KEY);
    }
}
