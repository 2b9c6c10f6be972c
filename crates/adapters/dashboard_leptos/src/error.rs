//! Dashboard adapter error types.

use wasm_bindgen::JsValue;

/// Failures talking to the browser itself (DOM, permissions, notifications).
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// No `window` (not running in a browser main thread).
    #[error("browser window unavailable")]
    NoWindow,

    /// No `document` on the window.
    #[error("document unavailable")]
    NoDocument,

    /// A JavaScript call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_no_window_error() {
        assert_eq!(BrowserError::NoWindow.to_string(), "browser window unavailable");
    }

    #[test]
    fn should_display_js_error() {
        let err = BrowserError::Js("denied".to_string());
        assert_eq!(err.to_string(), "javascript error: denied");
    }
}
