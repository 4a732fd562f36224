//! Error types for the browser bindings and configuration loading.
//!
//! Gameplay itself has no failure modes: ghost contact is a state transition,
//! not an error. Everything here comes from the host page or from config.

use wasm_bindgen::JsValue;

/// Main error type returned by the setup path.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("canvas '{0}' has no 2d context")]
    ContextUnavailable(String),

    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),

    #[cfg(feature = "serde_json")]
    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JS error: {0}")]
    Js(String),
}

/// Rejected configuration values.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("canvas size must be positive, got {width}x{height}")]
    CanvasSize { width: f64, height: f64 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("blink duration must not be negative, got {0}")]
    NegativeBlinkDuration(f64),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type GameResult<T> = Result<T, GameError>;
