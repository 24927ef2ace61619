//! Low-allocation line reading over UTF-8 byte streams.
//!
//! [`StreamLinesReader`] pulls bytes from any [`std::io::Read`] through a
//! fixed-size buffer, decodes them into a character buffer that grows only to
//! fit the longest line, and hands out each line as a `&str` borrowed from
//! that buffer. No string is allocated per line and no buffer per read.
//!
//! Lines end at `\n`, `\r` or `\r\n`, the same rules as
//! [`str::lines`] plus a lone `\r`. Decoding is strict: invalid UTF-8 is an
//! error, never replaced.
//!
//! [`split`] complements the reader: it cuts a line into fields on
//! single-character delimiters, again without allocating.
//!
//! ```rust
//! use std::io::Cursor;
//! use streamlines::{SplitExt, SplitMode, StreamLinesReader};
//!
//! let input = Cursor::new("name;size\r\nalpha;3\r\nbeta;14\r\n");
//! let mut reader = StreamLinesReader::new(input);
//! let mut total = 0;
//! reader.try_read_line()?; // header
//! while let Some(line) = reader.try_read_line()? {
//!     let mut fields = line.split_by(&[';'], SplitMode::KeepEmpty);
//!     let size: u32 = fields.nth(1).unwrap_or("0").parse().unwrap_or(0);
//!     total += size;
//! }
//! assert_eq!(total, 17);
//! # Ok::<(), streamlines::ReadLineError>(())
//! ```

mod error;
mod options;
mod reader;
mod splitter;

#[cfg(test)]
mod tests;

pub use error::{DecodingError, ReadLineError};
pub use options::ReaderOptions;
pub use reader::StreamLinesReader;
pub use splitter::{Split, SplitExt, SplitMode, split};
