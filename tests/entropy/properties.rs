//! Property checks over deterministic pseudo-random inputs.

use windowed_entropy::entropy::{max_entropy, shannon_entropy, SlidingWindow};

use crate::common::{assert_entropies_close, lcg_bytes, lcg_bytes_in, naive_entropy, naive_sliding};

/// (seed, length, alphabet) triples covering tiny, skewed and full alphabets.
const CASES: &[(u64, usize, u8)] = &[
    (1, 1, 2),
    (7, 17, 2),
    (42, 300, 4),
    (99, 1000, 16),
    (123456789, 2048, 255),
];

fn inputs() -> Vec<Vec<u8>> {
    let mut inputs: Vec<Vec<u8>> = CASES
        .iter()
        .map(|&(seed, len, alphabet)| lcg_bytes_in(seed, len, alphabet))
        .collect();
    inputs.push(lcg_bytes(2024, 4096));
    let mut low_then_high = vec![b'A'; 1024];
    low_then_high.extend(lcg_bytes(5, 1024));
    inputs.push(low_then_high);
    inputs
}

fn window_sizes(len: usize) -> Vec<usize> {
    let mut sizes: Vec<usize> = [1, 2, 3, 8, 64, 256, 300, len / 2, len]
        .into_iter()
        .filter(|&w| w >= 1 && w <= len)
        .collect();
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}

#[test]
fn incremental_matches_naive_rebuild() {
    for data in inputs() {
        for w in window_sizes(data.len()) {
            let engine = SlidingWindow::new(w as i64).unwrap();
            let incremental = engine.compute(&data).unwrap();
            let naive = naive_sliding(&data, w);
            assert_entropies_close(&incremental, &naive);
        }
    }
}

#[test]
fn output_length_is_len_minus_window_plus_one() {
    for data in inputs() {
        for w in window_sizes(data.len()) {
            let engine = SlidingWindow::new(w as i64).unwrap();
            let values = engine.compute(&data).unwrap();
            assert_eq!(values.len(), data.len() - w + 1);
        }
    }
}

#[test]
fn window_entropy_is_bounded() {
    for data in inputs() {
        for w in window_sizes(data.len()) {
            let bound = max_entropy(w);
            let values = SlidingWindow::new(w as i64).unwrap().compute(&data).unwrap();
            for h in values {
                assert!(h >= 0.0, "negative entropy {}", h);
                assert!(h <= bound + 1e-9, "entropy {} above bound {}", h, bound);
                assert!(h.is_finite());
            }
        }
    }
}

#[test]
fn full_window_equals_whole_entropy() {
    for data in inputs() {
        let engine = SlidingWindow::new(data.len() as i64).unwrap();
        let values = engine.compute(&data).unwrap();
        assert_eq!(values.len(), 1);
        assert!((values[0] - shannon_entropy(&data)).abs() < 1e-9);
        assert!((values[0] - naive_entropy(&data)).abs() < 1e-9);
    }
}

#[test]
fn repeated_symbol_has_zero_entropy() {
    for len in [1usize, 2, 10, 4096] {
        for symbol in [0u8, b'A', 255] {
            assert_eq!(shannon_entropy(&vec![symbol; len]), 0.0);
        }
    }
}

#[test]
fn equiprobable_symbols_give_log2_k() {
    for k in [2usize, 3, 4, 5, 16, 100, 256] {
        for repeats in [1usize, 3, 10] {
            let data: Vec<u8> = (0..k as u16)
                .map(|s| s as u8)
                .cycle()
                .take(k * repeats)
                .collect();
            let h = shannon_entropy(&data);
            assert!(
                (h - (k as f64).log2()).abs() < 1e-9,
                "k={} repeats={} h={}",
                k,
                repeats,
                h
            );
        }
    }
}

#[test]
fn window_of_one_is_always_zero() {
    let data = lcg_bytes(77, 500);
    let values = SlidingWindow::new(1).unwrap().compute(&data).unwrap();
    assert_eq!(values.len(), 500);
    assert!(values.iter().all(|&h| h == 0.0));
}

#[test]
fn long_run_does_not_drift() {
    // Every window over a periodic signal has the same distribution, so
    // 200k slides must still reproduce the first value.
    let period: Vec<u8> = (0..64).collect();
    let data: Vec<u8> = period.iter().copied().cycle().take(200_000).collect();
    let values = SlidingWindow::new(64).unwrap().compute(&data).unwrap();
    let first = values[0];
    assert!((first - 6.0).abs() < 1e-9);
    assert!(values.iter().all(|&h| (h - first).abs() < 1e-12));
}

#[test]
fn low_entropy_prefix_then_random() {
    let mut data = vec![b'A'; 1024];
    data.extend(lcg_bytes(42, 1024));
    let values = SlidingWindow::new(256).unwrap().compute(&data).unwrap();
    assert_eq!(values[0], 0.0);
    assert!(values[values.len() - 1] > 6.5);
}
