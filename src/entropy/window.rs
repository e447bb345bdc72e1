//! Sliding window entropy analysis.
//!
//! The window advances one byte at a time. Instead of rebuilding a
//! histogram for every position, the frequency table is updated with the
//! byte leaving and the byte entering the window, which is O(1) per step.
//! Entropy is then recomputed from the exact counts, costing
//! O(distinct symbols) <= O(min(window_size, 256)) per position.

use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::entropy::core::entropy;
use crate::entropy::table::FrequencyTable;
use crate::error::{EntropyError, Result};

/// Entropy of one window, keyed by its start offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowResult {
    /// Offset of the first byte of the window.
    pub start: usize,
    /// Shannon entropy of the window in bits.
    pub entropy: f64,
}

/// Sliding window entropy engine.
///
/// Holds nothing but a validated window size; every computation builds and
/// drops its own frequency table, so a single engine can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlidingWindow {
    window_size: NonZeroUsize,
}

impl SlidingWindow {
    /// Creates an engine for the given window size.
    ///
    /// Fails with [`EntropyError::InvalidWindowSize`] if `window_size <= 0`.
    pub fn new(window_size: i64) -> Result<Self> {
        usize::try_from(window_size)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(|window_size| Self { window_size })
            .ok_or(EntropyError::InvalidWindowSize { window_size })
    }

    /// Returns the window size in bytes.
    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size.get()
    }

    /// Number of windows produced for an input of `len` bytes.
    #[inline]
    pub fn window_count(&self, len: usize) -> usize {
        len.checked_sub(self.window_size())
            .map(|n| n + 1)
            .unwrap_or(0)
    }

    /// Returns a lazy iterator over every window position of `data`.
    ///
    /// Fails with [`EntropyError::InsufficientData`] if `data` is shorter
    /// than the window. The first window is counted eagerly.
    pub fn windows<'a>(&self, data: &'a [u8]) -> Result<Windows<'a>> {
        let window_size = self.window_size();
        if data.len() < window_size {
            return Err(EntropyError::InsufficientData {
                len: data.len(),
                window_size,
            });
        }

        Ok(Windows {
            data,
            window_size,
            table: FrequencyTable::from_bytes(&data[..window_size]),
            next: 0,
            last: data.len() - window_size,
        })
    }

    /// Computes the entropy of every window, in start order.
    ///
    /// The result holds exactly `data.len() - window_size + 1` values.
    pub fn compute(&self, data: &[u8]) -> Result<Vec<f64>> {
        let windows = self.windows(data)?;
        debug!(
            len = data.len(),
            window_size = self.window_size(),
            windows = windows.len(),
            "computing sliding window entropy"
        );
        Ok(windows.map(|w| w.entropy).collect())
    }

    /// Like [`compute`](Self::compute), paired with each window's start offset.
    pub fn compute_with_positions(&self, data: &[u8]) -> Result<Vec<WindowResult>> {
        let windows = self.windows(data)?;
        debug!(
            len = data.len(),
            window_size = self.window_size(),
            windows = windows.len(),
            "computing sliding window entropy with positions"
        );
        Ok(windows.collect())
    }

    /// Returns the lowest and highest window entropy.
    pub fn range(&self, data: &[u8]) -> Result<(f64, f64)> {
        let range = self
            .windows(data)?
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), w| {
                (lo.min(w.entropy), hi.max(w.entropy))
            });
        Ok(range)
    }
}

/// Iterator over window entropies, produced by [`SlidingWindow::windows`].
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    data: &'a [u8],
    window_size: usize,
    table: FrequencyTable,
    next: usize,
    last: usize,
}

impl Iterator for Windows<'_> {
    type Item = WindowResult;

    fn next(&mut self) -> Option<WindowResult> {
        let start = self.next;
        if start > self.last {
            return None;
        }

        if start > 0 {
            self.table.decrement(self.data[start - 1]);
            self.table.increment(self.data[start + self.window_size - 1]);
        }

        let h = entropy(&self.table, self.window_size);
        self.next += 1;

        if self.next > self.last {
            trace!(windows = self.last + 1, "sliding window exhausted");
        }

        Some(WindowResult { start, entropy: h })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Windows<'_> {}

impl FusedIterator for Windows<'_> {}
