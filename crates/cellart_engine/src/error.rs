//! Unified error types for cellart_engine

use thiserror::Error;

/// Main error type for engine and editor operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Format Errors ===
    #[error("Invalid hex color: {value}")]
    InvalidHexColor { value: String },

    #[error("Invalid snapshot coordinate key: {key}")]
    InvalidCoordinateKey { key: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Settings write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    // === Editing Errors ===
    #[error("Frame {index} out of range (0..{max})")]
    FrameOutOfRange { index: usize, max: usize },

    #[error("Cannot delete the last remaining frame")]
    LastFrame,

    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }

    pub fn clipboard(msg: impl std::fmt::Display) -> Self {
        Self::Clipboard { message: msg.to_string() }
    }
}
