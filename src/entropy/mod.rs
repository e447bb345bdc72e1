//! Byte-level entropy calculation and sliding window analysis.
//!
//! This module works directly on `&[u8]`. It includes:
//!
//! - A frequency table with O(1) updates and eviction of zero counts
//! - The Shannon entropy calculator and whole-buffer entropy
//! - The incremental sliding window engine
//! - Summary statistics over window entropy sequences
//!
//! # Example
//!
//! ```
//! use windowed_entropy::entropy::{shannon_entropy, SlidingWindow};
//!
//! let data = b"AABB";
//! assert!((shannon_entropy(data) - 1.0).abs() < 1e-9);
//!
//! let engine = SlidingWindow::new(2).unwrap();
//! assert_eq!(engine.compute(data).unwrap(), vec![0.0, 1.0, 0.0]);
//! ```

pub mod core;
pub mod stats;
pub mod table;
pub mod window;

// Re-export main functionality
pub use self::core::{entropy, max_entropy, shannon_entropy};
pub use self::stats::{detect_anomalies, detect_cliffs, Cliff, WindowSummary};
pub use self::table::FrequencyTable;
pub use self::window::{SlidingWindow, WindowResult, Windows};
