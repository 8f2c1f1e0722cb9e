//! Error types shared by the setup routines and the configuration loader.

use wasm_bindgen::JsValue;

/// Failure while wiring a page behavior.
///
/// A failed setup disables only the behavior that produced it; the installer
/// logs the error and moves on to the next one.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("required element not found: {0}")]
    MissingElement(&'static str),
    #[error("element {0} has an unexpected type")]
    UnexpectedElement(&'static str),
    #[error("browser api error: {0}")]
    Js(String),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        SetupError::Js(message)
    }
}

/// Failure while reading the inline `landing-config` document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid landing config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
}
