use contracts::enums::UserRole;
use contracts::system::auth::Session;
use web_sys::window;

const USER_TYPE_KEY: &str = "userType";
const USER_ID_KEY: &str = "userId";
const TOKEN_KEY: &str = "auth-token";
const DISPLAY_NAME_KEY: &str = "user-name";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?
        .get_item(key)
        .ok()?
        .filter(|v| !v.is_empty())
}

fn set_item(storage: &web_sys::Storage, key: &str, value: Option<&str>) {
    let _ = match value {
        Some(value) => storage.set_item(key, value),
        None => storage.remove_item(key),
    };
}

/// Persist the session to localStorage
pub fn save_session(session: &Session) {
    if let Some(storage) = get_local_storage() {
        set_item(&storage, USER_TYPE_KEY, session.role_token());
        set_item(&storage, USER_ID_KEY, session.user_id.as_deref());
        set_item(&storage, TOKEN_KEY, session.token.as_deref());
        set_item(&storage, DISPLAY_NAME_KEY, session.display_name.as_deref());
    }
}

/// Restore the session saved by a previous sign-in.
///
/// An unrecognized stored role restores as `role: None`.
pub fn load_session() -> Session {
    let role_token = get_item(USER_TYPE_KEY);
    let role = role_token.as_deref().and_then(UserRole::parse);
    if let (Some(token), None) = (&role_token, role) {
        log::warn!("Ignoring unrecognized stored role '{}'", token);
    }

    Session {
        user_id: get_item(USER_ID_KEY),
        role,
        token: get_item(TOKEN_KEY),
        display_name: get_item(DISPLAY_NAME_KEY),
    }
}

/// Clear all session keys
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        for key in [USER_TYPE_KEY, USER_ID_KEY, TOKEN_KEY, DISPLAY_NAME_KEY] {
            let _ = storage.remove_item(key);
        }
    }
}
