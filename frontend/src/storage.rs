//! Thin wrappers around `window.localStorage`.
//!
//! Keys used by the app: `userId` (written by the identity provider, only
//! read here), `rfmClusters` (cached cluster payload), `analysisPrefs`
//! (settings form) and `demoDeadline` (countdown persistence). Storage
//! failures are logged and otherwise treated as "no value".

use gloo_console::error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Storage;

fn local() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

pub fn get(key: &str) -> Option<String> {
    local().and_then(|storage| storage.get_item(key).ok().flatten())
}

pub fn set(key: &str, value: &str) {
    if let Some(storage) = local() {
        if storage.set_item(key, value).is_err() {
            error!(format!("localStorage write failed for {}", key));
        }
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local() {
        storage.remove_item(key).ok();
    }
}

/// Reads and deserializes a JSON value; a corrupt entry reads as `None`.
pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            error!(format!("discarding corrupt {} entry: {}", key, err));
            None
        }
    }
}

pub fn set_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => set(key, &raw),
        Err(err) => error!(format!("could not serialize {}: {}", key, err)),
    }
}
