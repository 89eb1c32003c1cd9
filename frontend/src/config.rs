//! Backend endpoint configuration.
//!
//! The API base defaults to the local development backend and can be
//! overridden per deployment by setting the `INTENTMINER_API_BASE` global
//! on `window` before the app boots.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const API_BASE_GLOBAL: &str = "INTENTMINER_API_BASE";

/// Base URL of the backend, without a trailing slash.
pub fn api_base() -> String {
    let configured = web_sys::window().and_then(|window| {
        Reflect::get(&window, &JsValue::from_str(API_BASE_GLOBAL))
            .ok()
            .and_then(|value| value.as_string())
    });
    match configured {
        Some(base) if !base.trim().is_empty() => base.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}

/// Joins a path onto the configured API base.
pub fn api_url(path: &str) -> String {
    join(&api_base(), path)
}

fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_normalizes_slashes_on_both_sides() {
        assert_eq!(join("http://localhost:8000", "upload"), "http://localhost:8000/upload");
        assert_eq!(join("http://localhost:8000/", "/upload"), "http://localhost:8000/upload");
        assert_eq!(
            join("https://api.example.com", "/intent/infer/stream"),
            "https://api.example.com/intent/infer/stream"
        );
    }
}
