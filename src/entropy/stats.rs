//! Summary statistics over window entropy sequences.

use serde::{Deserialize, Serialize};

use crate::entropy::window::WindowResult;

/// Statistical summary of window entropy values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl WindowSummary {
    /// Computes a summary from entropy values.
    ///
    /// Returns None if the input is empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let len = values.len() as f64;
        let mean = values.iter().sum::<f64>() / len;
        let variance: f64 = values
            .iter()
            .map(|&x| {
                let diff = x - mean;
                diff * diff
            })
            .sum::<f64>()
            / len;

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(WindowSummary {
            count: values.len(),
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }

    /// Computes a summary from positioned window results.
    pub fn from_results(results: &[WindowResult]) -> Option<Self> {
        let values: Vec<f64> = results.iter().map(|r| r.entropy).collect();
        Self::from_values(&values)
    }
}

/// A sudden entropy change between two consecutive windows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cliff {
    /// Start offset of the later window.
    pub index: usize,
    pub from: f64,
    pub to: f64,
    pub delta: f64,
}

/// Detects entropy cliffs between consecutive windows.
///
/// Returns every position where the absolute change from the previous
/// window is at least `threshold` bits.
pub fn detect_cliffs(results: &[WindowResult], threshold: f64) -> Vec<Cliff> {
    results
        .windows(2)
        .filter_map(|pair| {
            let (prev, cur) = (pair[0], pair[1]);
            let delta = (cur.entropy - prev.entropy).abs();
            (delta >= threshold).then_some(Cliff {
                index: cur.start,
                from: prev.entropy,
                to: cur.entropy,
                delta,
            })
        })
        .collect()
}

/// Returns windows whose entropy exceeds the mean by more than `margin` bits.
pub fn detect_anomalies(results: &[WindowResult], margin: f64) -> Vec<WindowResult> {
    let Some(summary) = WindowSummary::from_results(results) else {
        return Vec::new();
    };
    let threshold = summary.mean + margin;

    results
        .iter()
        .filter(|r| r.entropy > threshold)
        .copied()
        .collect()
}
