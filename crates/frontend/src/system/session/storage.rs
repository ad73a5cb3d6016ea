use contracts::system::session::UserSession;
use web_sys::window;

const SESSION_KEY: &str = "pizza_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save session to localStorage
pub fn save_session(session: &UserSession) {
    if let Some(storage) = get_local_storage() {
        if let Ok(json) = serde_json::to_string(session) {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
    }
}

/// Get session from localStorage
pub fn load_session() -> Option<UserSession> {
    let json = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&json).ok()
}
