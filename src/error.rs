//! Structured error types for canvas-table.
//!
//! Geometry and painting are infallible by design (degenerate inputs clamp
//! instead of faulting); errors only arise at the host boundary.

/// All errors that can occur while wiring up or driving the table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Invalid or undeserializable table configuration.
    #[error("Invalid config: {0}")]
    Config(String),

    /// Drawing surface acquisition/resize failure.
    #[error("Surface error: {0}")]
    Surface(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;

impl From<String> for TableError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for TableError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<TableError> for wasm_bindgen::JsValue {
    fn from(e: TableError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
