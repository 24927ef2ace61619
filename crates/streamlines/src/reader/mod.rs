//! Buffered UTF-8 line reader.
//!
//! Overview
//! - The stream is read into a fixed-size byte buffer. Pending bytes are
//!   decoded into a character buffer that holds the current line and whatever
//!   follows it. Lines are handed out as `&str` views into that buffer.
//! - Each call to [`StreamLinesReader::try_read_line`] loops over
//!   refill → decode → scan until a terminator is found or the stream ends.
//! - Three independent state machines are updated on every iteration:
//!   terminator folding ([`TerminatorState`]), stream lifecycle (`eof`), and
//!   buffer growth ([`char_buffer::Growth`]).
//!
//! Borrowing
//! - A returned line borrows the reader mutably, so it must be dropped before
//!   the reader is used again. That is exactly the window in which the
//!   underlying storage is guaranteed to be untouched.

mod byte_buffer;
mod char_buffer;
mod decoder;
mod terminator;


use std::io::{self, Read, Seek, SeekFrom};

use byte_buffer::ByteBuffer;
use char_buffer::CharBuffer;
use decoder::{DecodeStatus, decode_utf8, utf8_width};
use terminator::TerminatorState;

use crate::{DecodingError, ReadLineError, ReaderOptions};

/// Reads lines of UTF-8 text from a byte stream without allocating per line.
///
/// Line terminators are `\n`, `\r` and `\r\n`; they are not part of the
/// returned lines. A final line without a terminator is still returned, an
/// empty stream yields no lines, and every terminator in a run ends one
/// (possibly empty) line.
///
/// The reader allocates its two buffers up front. The character buffer grows
/// to fit the longest line seen so far and is reused for every later line.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use streamlines::StreamLinesReader;
///
/// let mut reader = StreamLinesReader::new(Cursor::new("first\r\nsecond\rthird"));
/// let mut lines = Vec::new();
/// while let Some(line) = reader.try_read_line()? {
///     lines.push(line.to_owned());
/// }
/// assert_eq!(lines, ["first", "second", "third"]);
/// assert!(reader.is_eof());
/// # Ok::<(), streamlines::ReadLineError>(())
/// ```
///
/// # Threads
///
/// Reading needs `&mut self`; share a reader between threads only behind
/// external synchronization.
#[derive(Debug)]
pub struct StreamLinesReader<S> {
    stream: S,
    bytes: ByteBuffer,
    chars: CharBuffer,
    terminator: TerminatorState,
    eof: bool,
    poisoned: bool,
    owns_stream: bool,
}

impl<S: Read> StreamLinesReader<S> {
    /// Create a reader over `stream` with [`ReaderOptions::default`].
    pub fn new(stream: S) -> Self {
        Self::with_options(stream, ReaderOptions::default())
    }

    /// Create a reader over `stream`.
    ///
    /// Buffer sizes below their minimums are raised silently.
    pub fn with_options(stream: S, options: ReaderOptions) -> Self {
        let options = options.clamped();
        Self {
            stream,
            bytes: ByteBuffer::new(options.byte_buffer_size),
            chars: CharBuffer::new(options.char_buffer_size),
            terminator: TerminatorState::default(),
            eof: false,
            poisoned: false,
            owns_stream: options.owns_stream,
        }
    }

    /// Read the next line.
    ///
    /// Returns `Ok(None)` once the stream is exhausted, and keeps doing so
    /// until the reader is reset. The returned text borrows the reader's
    /// internal buffer and is overwritten by the next call.
    ///
    /// # Errors
    ///
    /// - [`ReadLineError::Io`] when the stream fails. The call may be retried.
    /// - [`ReadLineError::Decoding`] when the stream is not valid UTF-8,
    ///   including a code point cut short by the end of the stream. Every
    ///   later call returns [`ReadLineError::Poisoned`] until a reset.
    pub fn try_read_line(&mut self) -> Result<Option<&str>, ReadLineError> {
        if self.poisoned {
            return Err(ReadLineError::Poisoned);
        }

        while !self.eof {
            if self.chars.is_fully_scanned() {
                self.bytes.fill(&mut self.stream)?;
                self.append_chars()?;
            }

            if self.eof {
                if self.chars.has_unterminated_tail() {
                    return Ok(Some(self.chars.take_tail()));
                }
                break;
            }

            if let Some(end) = self.chars.find_line_end(&mut self.terminator) {
                return Ok(Some(self.chars.take_line(end, end + 1)));
            }
        }

        Ok(None)
    }

    /// Hand every remaining line to `f`, returning how many there were.
    ///
    /// # Errors
    ///
    /// Stops at the first error; see [`try_read_line`](Self::try_read_line).
    pub fn for_each_line<F>(&mut self, mut f: F) -> Result<usize, ReadLineError>
    where
        F: FnMut(&str),
    {
        let mut count = 0;
        while let Some(line) = self.try_read_line()? {
            f(line);
            count += 1;
        }
        Ok(count)
    }

    fn append_chars(&mut self) -> Result<(), ReadLineError> {
        let needed = self.bytes.pending().first().map_or(1, |&lead| utf8_width(lead));
        self.chars.make_room(needed);

        let decoded = decode_utf8(self.bytes.pending(), self.chars.spare_mut());
        self.bytes.consume(decoded.read);
        self.chars.commit(decoded.written);

        let last_chunk_read = self.bytes.is_last_chunk_read();
        match decoded.status {
            DecodeStatus::InvalidData { len } => return Err(self.fail_bad_bytes(len)),
            DecodeStatus::NeedMoreData if last_chunk_read => {
                let len = self.bytes.pending().len();
                return Err(self.fail_bad_bytes(len));
            }
            _ => {}
        }

        if last_chunk_read && decoded.status == DecodeStatus::Done && decoded.written == 0 {
            tracing::debug!(offset = self.bytes.pending_offset(), "end of stream");
            self.eof = true;
        }
        Ok(())
    }

    fn fail_bad_bytes(&mut self, len: usize) -> ReadLineError {
        let pending = self.bytes.pending();
        let error = DecodingError {
            offset: self.bytes.pending_offset(),
            bytes: pending[..len.min(pending.len())].to_vec(),
        };
        tracing::debug!(%error, "stream is not valid UTF-8");
        self.poisoned = true;
        ReadLineError::Decoding(error)
    }
}

impl<S> StreamLinesReader<S> {
    /// Whether the end of the stream has been reached.
    ///
    /// Becomes `true` once the stream is drained, which is no later than the
    /// first [`try_read_line`](Self::try_read_line) call that returns
    /// `Ok(None)`. A last line without a terminator is detected at the same
    /// point, so the call returning it may already flip this flag.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Current size of the decoded-text buffer, in UTF-8 code units.
    #[must_use]
    pub fn char_buffer_capacity(&self) -> usize {
        self.chars.capacity()
    }

    /// Forget all buffered data.
    ///
    /// Call this after moving the stream through
    /// [`get_mut`](Self::get_mut); reading continues from the stream's new
    /// position. Also clears a decoding failure.
    pub fn reset_buffers(&mut self) {
        self.bytes.reset();
        self.chars.reset();
        self.terminator = TerminatorState::default();
        self.eof = false;
        self.poisoned = false;
    }

    /// The underlying stream.
    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// The underlying stream.
    ///
    /// Reading from or seeking it desynchronizes the reader until
    /// [`reset_buffers`](Self::reset_buffers) is called.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Tear the reader down.
    ///
    /// An owned stream is dropped, closing it, and `None` is returned.
    /// Otherwise the stream is handed back untouched.
    pub fn dispose(self) -> Option<S> {
        if self.owns_stream {
            drop(self.stream);
            None
        } else {
            Some(self.stream)
        }
    }
}

impl<S: Seek> StreamLinesReader<S> {
    /// Seek the stream back to its start and forget all buffered data, as
    /// if the reader had just been created.
    ///
    /// # Errors
    ///
    /// Returns the stream's seek error; buffered data is kept in that case.
    pub fn reset_to_start(&mut self) -> io::Result<()> {
        self.stream.seek(SeekFrom::Start(0))?;
        self.reset_buffers();
        Ok(())
    }
}
