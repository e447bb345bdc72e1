//! Error types for windowed entropy computation.
//!
//! Every failure aborts the call that produced it. Nothing here is retried
//! or logged by the library; the caller decides what to do with bad input.

use thiserror::Error;

/// Main error type for entropy operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EntropyError {
    /// Window size was zero or negative.
    #[error("Invalid window size: {window_size} (must be positive)")]
    InvalidWindowSize { window_size: i64 },

    /// Input is shorter than the requested window.
    #[error("Insufficient data: length {len} is smaller than window size {window_size}")]
    InsufficientData { len: usize, window_size: usize },

    /// Text contains a code unit that has no UTF-8 representation.
    #[error("Encoding error at code unit {offset}: unpaired surrogate {unit:#06x}")]
    Encoding { offset: usize, unit: u16 },

    /// Configuration could not be parsed or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors while loading configuration
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for EntropyError {
    fn from(err: std::io::Error) -> Self {
        EntropyError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EntropyError {
    fn from(err: serde_json::Error) -> Self {
        EntropyError::Config(err.to_string())
    }
}

/// Result type alias for entropy operations
pub type Result<T> = std::result::Result<T, EntropyError>;

/// Convert entropy errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<EntropyError> for pyo3::PyErr {
    fn from(err: EntropyError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyIOError, PyValueError};

        match err {
            EntropyError::Io(msg) => PyIOError::new_err(msg),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}
