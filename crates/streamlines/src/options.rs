/// Smallest byte buffer the reader accepts: room for one UTF-8 code point.
pub(crate) const MIN_BYTE_BUFFER_SIZE: usize = 4;

/// Smallest character buffer the reader accepts.
pub(crate) const MIN_CHAR_BUFFER_SIZE: usize = 2;

/// Configuration for a [`StreamLinesReader`](crate::StreamLinesReader).
///
/// The byte buffer is the unit of reading from the stream and should be large.
/// The character buffer only needs a good first guess: it grows to fit the
/// longest line seen, and never shrinks.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use streamlines::{ReaderOptions, StreamLinesReader};
///
/// let options = ReaderOptions {
///     byte_buffer_size: 64 * 1024,
///     ..Default::default()
/// };
/// let mut reader = StreamLinesReader::with_options(Cursor::new("a\nb"), options);
/// assert_eq!(reader.try_read_line().unwrap(), Some("a"));
/// ```
///
/// # Default
///
/// A 4096 byte buffer, a 100 byte character buffer, and an owned stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderOptions {
    /// Size of the buffer the stream is read into.
    ///
    /// Values below 4 are raised to 4 so one full code point always fits.
    ///
    /// # Default
    ///
    /// `4096`
    pub byte_buffer_size: usize,

    /// Initial size of the buffer holding decoded text, in UTF-8 code units.
    ///
    /// Values below 2 are raised to 2.
    ///
    /// # Default
    ///
    /// `100`
    pub char_buffer_size: usize,

    /// Whether the reader owns the stream.
    ///
    /// When `true`, [`dispose`](crate::StreamLinesReader::dispose) drops the
    /// stream; otherwise it is handed back to the caller.
    ///
    /// # Default
    ///
    /// `true`
    pub owns_stream: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            byte_buffer_size: 4096,
            char_buffer_size: 100,
            owns_stream: true,
        }
    }
}

impl ReaderOptions {
    pub(crate) fn clamped(self) -> Self {
        Self {
            byte_buffer_size: self.byte_buffer_size.max(MIN_BYTE_BUFFER_SIZE),
            char_buffer_size: self.char_buffer_size.max(MIN_CHAR_BUFFER_SIZE),
            owns_stream: self.owns_stream,
        }
    }
}
