#![no_main]
use libfuzzer_sys::fuzz_target;
use windowed_entropy::entropy::{max_entropy, shannon_entropy, SlidingWindow};

fuzz_target!(|data: &[u8]| {
    // First byte picks the window size, the rest is the payload.
    let Some((&w, payload)) = data.split_first() else {
        return;
    };
    let window_size = (w as usize).max(1);

    let _ = shannon_entropy(payload);
    let engine = match SlidingWindow::new(window_size as i64) {
        Ok(engine) => engine,
        Err(_) => return,
    };
    if let Ok(values) = engine.compute(payload) {
        assert_eq!(values.len(), payload.len() - window_size + 1);
        let bound = max_entropy(window_size) + 1e-9;
        assert!(values.iter().all(|&h| (0.0..=bound).contains(&h)));
    }
});
