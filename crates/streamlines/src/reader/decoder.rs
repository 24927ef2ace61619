//! Incremental strict UTF-8 decoding from the byte buffer into the character
//! buffer.
//!
//! The character buffer stores decoded text as UTF-8, so "decoding" validates
//! the pending bytes and copies the longest run of complete code points that
//! fits into the destination. A code point is never split across the
//! destination boundary.

use core::str;

pub(crate) const MAX_UTF8_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecodeStatus {
    /// Every input byte was decoded.
    Done,
    /// The input ends in the middle of a code point.
    NeedMoreData,
    /// The destination filled up before the input was exhausted.
    DestinationTooSmall,
    /// The input contains an invalid sequence of `len` bytes right after the
    /// decoded prefix.
    InvalidData { len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Decoded {
    pub(crate) read: usize,
    pub(crate) written: usize,
    pub(crate) status: DecodeStatus,
}

/// Decode as much of `src` into `dst` as fits.
///
/// `read` always equals `written`: valid UTF-8 is copied verbatim. Only the
/// window of `src` that could fit into `dst` is validated, so a small
/// destination does not cause the whole input to be rescanned on each call.
pub(crate) fn decode_utf8(src: &[u8], dst: &mut [u8]) -> Decoded {
    let window = &src[..src.len().min(dst.len())];
    let truncated = window.len() < src.len();

    let (valid, status) = match str::from_utf8(window) {
        Ok(_) if truncated => (window.len(), DecodeStatus::DestinationTooSmall),
        Ok(_) => (window.len(), DecodeStatus::Done),
        Err(err) => match err.error_len() {
            Some(len) => (err.valid_up_to(), DecodeStatus::InvalidData { len }),
            // A code point cut by the window may still turn out invalid once
            // it fits; that is reported on a later call.
            None if truncated => (err.valid_up_to(), DecodeStatus::DestinationTooSmall),
            None => (err.valid_up_to(), DecodeStatus::NeedMoreData),
        },
    };

    dst[..valid].copy_from_slice(&window[..valid]);
    Decoded {
        read: valid,
        written: valid,
        status,
    }
}

/// Width in bytes of the code point introduced by `lead`.
///
/// Bytes that cannot start a code point report 1; the decoder rejects them.
pub(crate) fn utf8_width(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => MAX_UTF8_LEN,
        _ => 1,
    }
}
