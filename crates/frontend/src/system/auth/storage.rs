//! Session persistence in `localStorage`.
//!
//! The session is stored as a single blob under [`STORAGE_KEY`], wrapped as
//! `{"state": {...}, "version": 0}` so it stays readable by the older web
//! client that shares the origin.

use serde::{Deserialize, Serialize};
use web_sys::window;

use super::session::Session;

pub const STORAGE_KEY: &str = "auth-storage";

#[derive(Serialize, Deserialize)]
struct Persisted {
    state: Session,
    #[serde(default)]
    version: u32,
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn encode(session: &Session) -> Option<String> {
    serde_json::to_string(&Persisted {
        state: session.clone(),
        version: 0,
    })
    .ok()
}

/// Unreadable blobs yield an empty session.
pub fn decode(raw: &str) -> Session {
    serde_json::from_str::<Persisted>(raw)
        .map(|p| p.state)
        .unwrap_or_default()
}

pub fn load() -> Session {
    get_local_storage()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .map(|raw| decode(&raw))
        .unwrap_or_default()
}

pub fn save(session: &Session) {
    let (Some(storage), Some(raw)) = (get_local_storage(), encode(session)) else {
        return;
    };
    if storage.set_item(STORAGE_KEY, &raw).is_err() {
        log::warn!("could not persist session");
    }
}

pub fn clear() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::session::user_with_role;

    #[test]
    fn blob_keeps_token_and_user_together() {
        let mut s = Session::default();
        s.login("abc".into(), user_with_role("admin"));
        let raw = encode(&s).unwrap();
        assert!(raw.contains(r#""state":{"token":"abc""#));
        assert_eq!(decode(&raw), s);
    }

    #[test]
    fn reads_blob_written_by_the_web_client() {
        let raw = r#"{"state":{"token":"t","user":{"id":3,"name":"Ravi","role":"sales"}},"version":0}"#;
        let s = decode(raw);
        assert_eq!(s.token.as_deref(), Some("t"));
        assert_eq!(s.user.unwrap().id, "3");
    }

    #[test]
    fn garbage_is_an_empty_session() {
        assert_eq!(decode("not json"), Session::default());
        assert_eq!(decode(r#"{"state":{}}"#), Session::default());
    }
}
