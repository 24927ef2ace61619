use std::io;

use bstr::BStr;
use thiserror::Error;

/// Error returned by [`StreamLinesReader::try_read_line`].
///
/// [`StreamLinesReader::try_read_line`]: crate::StreamLinesReader::try_read_line
#[derive(Error, Debug)]
pub enum ReadLineError {
    /// The stream is not valid UTF-8. The reader stays unusable until it is
    /// reset.
    #[error(transparent)]
    Decoding(#[from] DecodingError),
    /// The underlying stream failed. Reader state is left as it was, so the
    /// call may be retried.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// A previous call failed with [`ReadLineError::Decoding`] and the reader
    /// has not been reset since.
    #[error("reader is unusable after a decoding error; reset it first")]
    Poisoned,
}

/// A byte sequence that cannot be decoded as UTF-8.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid UTF-8 sequence {:?} at stream offset {offset}", BStr::new(.bytes))]
pub struct DecodingError {
    pub(crate) offset: u64,
    pub(crate) bytes: Vec<u8>,
}

impl DecodingError {
    /// Offset of the first offending byte, counted from the position the
    /// reader was created or last reset at.
    ///
    /// After [`reset_to_start`] this is the absolute stream offset. After
    /// seeking through [`get_mut`] and calling [`reset_buffers`] it counts
    /// from the seek target.
    ///
    /// [`reset_to_start`]: crate::StreamLinesReader::reset_to_start
    /// [`get_mut`]: crate::StreamLinesReader::get_mut
    /// [`reset_buffers`]: crate::StreamLinesReader::reset_buffers
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// The offending bytes; at most four, and fewer when the stream ended in
    /// the middle of a code point.
    #[must_use]
    pub fn invalid_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
