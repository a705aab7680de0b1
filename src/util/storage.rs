//! Browser localStorage helpers for session credential persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store keeps its access token, user record, and expiry
//! deadline in `localStorage` so a signed-in visitor survives reloads.
//! These helpers centralize the hydrate-only web-sys glue; on the server
//! every read reports absent and every write is a no-op, which keeps SSR
//! output deterministic.

use serde::Serialize;

/// Read a raw string from `localStorage` for `key`.
pub fn read_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string to `localStorage` for `key`.
pub fn write_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`. Absent keys are ignored.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    write_string(key, &raw);
}
