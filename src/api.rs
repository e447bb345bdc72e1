//! Input-level entropy API.
//!
//! These functions accept anything convertible into [`Input`] (byte
//! slices, `&str`, UTF-16 code units), normalize it to bytes once, and
//! hand the bytes to the [`entropy`](crate::entropy) module.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::entropy::{
    self, detect_anomalies, detect_cliffs, Cliff, SlidingWindow, WindowResult, WindowSummary,
};
use crate::error::Result;
use crate::input::{normalize, Input};

/// Whole-input Shannon entropy in bits.
///
/// Empty input yields `0.0`. Fails only if UTF-16 input cannot be encoded.
pub fn shannon_entropy<'a>(data: impl Into<Input<'a>>) -> Result<f64> {
    let seq = normalize(data)?;
    Ok(entropy::shannon_entropy(&seq))
}

/// Entropy of every `window_size`-byte window, in start order.
pub fn sliding_window_entropy<'a>(data: impl Into<Input<'a>>, window_size: i64) -> Result<Vec<f64>> {
    let engine = SlidingWindow::new(window_size)?;
    let seq = normalize(data)?;
    engine.compute(&seq)
}

/// Like [`sliding_window_entropy`], paired with each window's start offset.
pub fn sliding_window_entropy_with_positions<'a>(
    data: impl Into<Input<'a>>,
    window_size: i64,
) -> Result<Vec<WindowResult>> {
    let engine = SlidingWindow::new(window_size)?;
    let seq = normalize(data)?;
    engine.compute_with_positions(&seq)
}

/// Lowest and highest window entropy as `(min, max)`.
pub fn entropy_range<'a>(data: impl Into<Input<'a>>, window_size: i64) -> Result<(f64, f64)> {
    let engine = SlidingWindow::new(window_size)?;
    let seq = normalize(data)?;
    engine.range(&seq)
}

/// Full entropy analysis of one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntropyReport {
    /// Input length in bytes after normalization.
    pub len: usize,
    pub window_size: usize,
    /// Whole-input entropy, if requested.
    pub overall: Option<f64>,
    /// Per-window results, if requested.
    pub windows: Option<Vec<WindowResult>>,
    pub summary: Option<WindowSummary>,
    pub cliffs: Vec<Cliff>,
    pub anomalies: Vec<WindowResult>,
}

impl EntropyReport {
    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs whole-input and sliding window analysis according to `config`.
pub fn analyze<'a>(data: impl Into<Input<'a>>, config: &AnalysisConfig) -> Result<EntropyReport> {
    config.validate()?;
    let engine = SlidingWindow::new(config.window_size)?;
    let seq = normalize(data)?;

    let results = engine.compute_with_positions(&seq)?;
    let overall = config.overall.then(|| entropy::shannon_entropy(&seq));
    let summary = WindowSummary::from_results(&results);
    let cliffs = detect_cliffs(&results, config.cliff_delta);
    let anomalies = detect_anomalies(&results, config.anomaly_margin);

    debug!(
        len = seq.len(),
        window_size = engine.window_size(),
        cliffs = cliffs.len(),
        anomalies = anomalies.len(),
        "entropy analysis complete"
    );

    Ok(EntropyReport {
        len: seq.len(),
        window_size: engine.window_size(),
        overall,
        windows: config.positions.then_some(results),
        summary,
        cliffs,
        anomalies,
    })
}
