//! Input normalization into byte symbol sequences.
//!
//! All entropy computations run over bytes (alphabet size 256). Text is
//! measured over its UTF-8 encoding, so a multi-byte character contributes
//! several symbols. Callers resolve the kind of their data once, here, and
//! everything downstream only sees `&[u8]`.

use std::borrow::Cow;
use std::ops::Deref;

use crate::error::{EntropyError, Result};

/// Data handed to the entropy functions, tagged by representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// Raw bytes, measured as-is.
    Binary(&'a [u8]),
    /// Text, measured over its UTF-8 bytes.
    Text(&'a str),
    /// UTF-16 code units (e.g. from Windows APIs or a foreign runtime).
    /// Transcoded to UTF-8; unpaired surrogates are rejected.
    Utf16(&'a [u16]),
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(data: &'a [u8]) -> Self {
        Input::Binary(data)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(data: &'a [u8; N]) -> Self {
        Input::Binary(data)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(data: &'a Vec<u8>) -> Self {
        Input::Binary(data)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a [u16]> for Input<'a> {
    fn from(units: &'a [u16]) -> Self {
        Input::Utf16(units)
    }
}

/// Immutable byte sequence produced by [`normalize`].
///
/// Borrows when the input already was bytes or UTF-8 text, owns the
/// transcoded buffer otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSequence<'a> {
    bytes: Cow<'a, [u8]>,
}

impl<'a> SymbolSequence<'a> {
    /// Returns the symbols as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True if no transcoding was needed.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.bytes, Cow::Borrowed(_))
    }
}

impl Deref for SymbolSequence<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for SymbolSequence<'_> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Converts tagged input into a byte symbol sequence.
///
/// Binary input is passed through untouched. `&str` is already UTF-8 and
/// cannot fail. UTF-16 input fails with [`EntropyError::Encoding`] at the
/// first unpaired surrogate instead of substituting U+FFFD.
pub fn normalize<'a>(input: impl Into<Input<'a>>) -> Result<SymbolSequence<'a>> {
    let bytes = match input.into() {
        Input::Binary(data) => Cow::Borrowed(data),
        Input::Text(text) => Cow::Borrowed(text.as_bytes()),
        Input::Utf16(units) => Cow::Owned(utf16_to_utf8(units)?),
    };
    Ok(SymbolSequence { bytes })
}

fn utf16_to_utf8(units: &[u16]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(units.len() * 3);
    let mut offset = 0usize;
    let mut buf = [0u8; 4];

    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(ch) => {
                out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                offset += ch.len_utf16();
            }
            Err(e) => {
                return Err(EntropyError::Encoding {
                    offset,
                    unit: e.unpaired_surrogate(),
                });
            }
        }
    }

    Ok(out)
}
