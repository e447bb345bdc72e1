//! Text, binary and UTF-16 inputs through the public API.

use windowed_entropy::{
    normalize, shannon_entropy, sliding_window_entropy, EntropyError, Input,
};

#[test]
fn text_and_bytes_are_consistent() {
    let text = "hello world";
    assert_eq!(
        shannon_entropy(text).unwrap(),
        shannon_entropy(text.as_bytes()).unwrap()
    );
    assert_eq!(
        sliding_window_entropy(text, 4).unwrap(),
        sliding_window_entropy(text.as_bytes(), 4).unwrap()
    );
}

#[test]
fn multibyte_text_is_measured_over_bytes() {
    // "é" encodes as 0xC3 0xA9, so "éé" has two distinct byte symbols.
    assert!((shannon_entropy("éé").unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(sliding_window_entropy("é", 2).unwrap().len(), 1);
    let seq = normalize("café").unwrap();
    assert_eq!(seq.len(), 5);
}

#[test]
fn utf16_matches_utf8() {
    let text = "naïve façade 🦀";
    let units: Vec<u16> = text.encode_utf16().collect();
    assert_eq!(
        shannon_entropy(units.as_slice()).unwrap(),
        shannon_entropy(text).unwrap()
    );
}

#[test]
fn unpaired_surrogate_fails_with_encoding_error() {
    let units = [b'o' as u16, b'k' as u16, 0xDFFF];
    let err = shannon_entropy(Input::Utf16(&units)).unwrap_err();
    assert_eq!(
        err,
        EntropyError::Encoding {
            offset: 2,
            unit: 0xDFFF
        }
    );

    let err = sliding_window_entropy(&units[..], 1).unwrap_err();
    assert!(matches!(err, EntropyError::Encoding { .. }));
}

#[test]
fn explicit_tags() {
    let data = b"\x00\x01";
    assert_eq!(shannon_entropy(Input::Binary(data)).unwrap(), 1.0);
    assert_eq!(shannon_entropy(Input::Text("ab")).unwrap(), 1.0);
}
