//! Common test utilities and helpers.

use std::collections::HashMap;

/// Deterministic pseudo-random bytes without external crates.
pub fn lcg_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = seed;
    (0..len)
        .map(|_| {
            rng = rng.wrapping_mul(1664525).wrapping_add(1013904223);
            (rng >> 24) as u8
        })
        .collect()
}

/// Pseudo-random bytes drawn from the first `alphabet` symbols only.
pub fn lcg_bytes_in(seed: u64, len: usize, alphabet: u8) -> Vec<u8> {
    lcg_bytes(seed, len)
        .into_iter()
        .map(|b| b % alphabet)
        .collect()
}

/// Entropy of one slice, counted from scratch with a map.
pub fn naive_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut counts: HashMap<u8, usize> = HashMap::new();
    for &b in data {
        *counts.entry(b).or_default() += 1;
    }
    let len = data.len() as f64;
    counts
        .values()
        .map(|&c| {
            let p = c as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Sliding window entropy that rebuilds the distribution for every window.
pub fn naive_sliding(data: &[u8], window_size: usize) -> Vec<f64> {
    data.windows(window_size).map(naive_entropy).collect()
}

/// Asserts two entropy sequences agree element-wise within 1e-9.
pub fn assert_entropies_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < 1e-9, "window {}: {} != {}", i, a, e);
    }
}
