//! Structured error types for gridcell.
//!
//! Only the configuration and JS boundary layers fail. Cell addressing never
//! does: a lookup that misses yields an unbound cell, not an error.

/// All errors that can occur while building or driving a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// JSON configuration could not be parsed.
    #[error("Config parsing: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsed but describes an impossible grid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
