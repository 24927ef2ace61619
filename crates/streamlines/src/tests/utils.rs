use std::io::{self, Cursor, Read, Seek, SeekFrom};

use crate::{ReaderOptions, StreamLinesReader};

/// Line splitting the slow, obvious way: `\r\n`, `\r` and `\n` each end a
/// line, and a trailing terminator does not start another one.
pub(crate) fn reference_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(at) => {
                lines.push(rest[..at].to_owned());
                let skip = if rest[at..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[at + skip..];
            }
            None => {
                lines.push(rest.to_owned());
                break;
            }
        }
    }
    lines
}

pub(crate) fn read_all<S: Read>(reader: &mut StreamLinesReader<S>) -> Vec<String> {
    let mut lines = Vec::new();
    while let Some(line) = reader.try_read_line().expect("read line") {
        lines.push(line.to_owned());
    }
    lines
}

pub(crate) fn options(byte_buffer_size: usize, char_buffer_size: usize) -> ReaderOptions {
    ReaderOptions {
        byte_buffer_size,
        char_buffer_size,
        owns_stream: true,
    }
}

/// In-memory stream that returns at most `chunk` bytes per read, the way a
/// pipe or socket would.
#[derive(Debug)]
pub(crate) struct ChunkedReader {
    inner: Cursor<Vec<u8>>,
    chunk: usize,
}

impl ChunkedReader {
    pub(crate) fn new(data: impl Into<Vec<u8>>, chunk: usize) -> Self {
        Self {
            inner: Cursor::new(data.into()),
            chunk: chunk.max(1),
        }
    }

    pub(crate) fn position(&self) -> u64 {
        self.inner.position()
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = buf.len().min(self.chunk);
        self.inner.read(&mut buf[..len])
    }
}

impl Seek for ChunkedReader {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

/// Stream that fails once when a read would cross `fail_at`, then behaves.
#[derive(Debug)]
pub(crate) struct FlakyReader {
    inner: Cursor<Vec<u8>>,
    fail_at: u64,
    failed: bool,
}

impl FlakyReader {
    pub(crate) fn new(data: impl Into<Vec<u8>>, fail_at: u64) -> Self {
        Self {
            inner: Cursor::new(data.into()),
            fail_at,
            failed: false,
        }
    }
}

impl Read for FlakyReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let position = self.inner.position();
        if !self.failed && position + buf.len() as u64 > self.fail_at {
            self.failed = true;
            return Err(io::Error::other("connection reset"));
        }
        self.inner.read(buf)
    }
}

/// Maps bytes onto text fragments that stress terminators and code points
/// wider than one byte.
pub(crate) fn text_from_pieces(pieces: &[u8]) -> String {
    const PIECES: [&str; 10] = [
        "a", "xyz", "\r", "\n", "\r\n", "é", "€", "𐍈", " ", "long line of text",
    ];
    pieces
        .iter()
        .map(|&p| PIECES[usize::from(p) % PIECES.len()])
        .collect()
}

#[test]
fn reference_lines_matches_str_lines_without_lone_cr() {
    for text in ["", "a", "a\n", "a\nb", "\n\n", "a\r\nb\r\n", "\r\n\r\n"] {
        let expected: Vec<_> = text.lines().map(str::to_owned).collect();
        assert_eq!(reference_lines(text), expected, "{text:?}");
    }
}

#[test]
fn reference_lines_treats_lone_cr_as_terminator() {
    assert_eq!(reference_lines("a\rb"), ["a", "b"]);
    assert_eq!(reference_lines("a\n\rb"), ["a", "", "b"]);
    assert_eq!(reference_lines("\r\r"), ["", ""]);
}
