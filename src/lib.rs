//! Shannon entropy over bytes, for whole buffers and sliding windows.
//!
//! The sliding window engine keeps a byte frequency table up to date as the
//! window advances one position at a time, so each step costs O(1) table
//! work plus O(distinct symbols) to evaluate the entropy.
//!
//! ```
//! use windowed_entropy::{shannon_entropy, sliding_window_entropy};
//!
//! assert_eq!(shannon_entropy("ABCD").unwrap(), 2.0);
//! assert_eq!(sliding_window_entropy("AABB", 2).unwrap(), vec![0.0, 1.0, 0.0]);
//! ```

pub mod api;
pub mod config;
pub mod entropy;
pub mod error;
pub mod input;
pub mod logging;

#[cfg(feature = "python-ext")]
pub mod python_bindings;

pub use api::{
    analyze, entropy_range, shannon_entropy, sliding_window_entropy,
    sliding_window_entropy_with_positions, EntropyReport,
};
pub use config::AnalysisConfig;
pub use entropy::{SlidingWindow, WindowResult, WindowSummary};
pub use error::{EntropyError, Result};
pub use input::{normalize, Input, SymbolSequence};

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python-ext")]
#[pymodule]
fn windowed_entropy(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python_bindings::register_python_bindings(m.py(), m)
}
