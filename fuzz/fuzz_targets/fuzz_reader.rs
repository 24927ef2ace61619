#![no_main]
use std::io::{self, Read};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use streamlines::{ReadLineError, ReaderOptions, SplitExt, SplitMode, StreamLinesReader};

#[derive(Debug, Arbitrary)]
struct Input {
    byte_buffer_size: u8,
    char_buffer_size: u8,
    /// Largest read the stream serves at once; 0 means unlimited.
    max_read: u8,
    delimiters: Vec<char>,
    data: Vec<u8>,
}

/// Serves `data` in reads of at most `max_read` bytes.
struct Trickle<'a> {
    data: &'a [u8],
    max_read: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = buf.len().min(self.max_read).min(self.data.len());
        buf[..len].copy_from_slice(&self.data[..len]);
        self.data = &self.data[len..];
        Ok(len)
    }
}

/// `\r\n`, `\r` and `\n` each end a line; a trailing terminator does not
/// start another one.
fn reference_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(at) => {
                lines.push(&rest[..at]);
                let skip = if rest[at..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[at + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

fuzz_target!(|input: Input| {
    let max_read = match input.max_read {
        0 => usize::MAX,
        n => usize::from(n),
    };
    let options = ReaderOptions {
        byte_buffer_size: usize::from(input.byte_buffer_size),
        char_buffer_size: usize::from(input.char_buffer_size),
        owns_stream: true,
    };
    let stream = Trickle {
        data: &input.data,
        max_read,
    };
    let mut reader = StreamLinesReader::with_options(stream, options);

    let mut lines = Vec::new();
    let failure = loop {
        match reader.try_read_line() {
            Ok(Some(line)) => {
                // Splitting must never panic and must only hand out pieces
                // of the line.
                for segment in line.split_by(&input.delimiters, SplitMode::RemoveEmpty) {
                    assert!(!segment.is_empty());
                    assert!(line.len() >= segment.len());
                }
                lines.push(line.to_owned());
            }
            Ok(None) => break None,
            Err(err) => break Some(err),
        }
    };

    match (core::str::from_utf8(&input.data), failure) {
        (Ok(text), None) => {
            assert!(reader.is_eof());
            assert_eq!(lines, reference_lines(text));
        }
        (Err(utf8), Some(ReadLineError::Decoding(err))) => {
            assert_eq!(err.offset(), utf8.valid_up_to() as u64);
            // Every line handed out before the failure is a line of the
            // valid prefix.
            let prefix = core::str::from_utf8(&input.data[..utf8.valid_up_to()]).unwrap();
            let expected = reference_lines(prefix);
            assert!(lines.len() <= expected.len());
            assert_eq!(lines[..], expected[..lines.len()]);
        }
        (valid, failure) => panic!("unexpected outcome: {valid:?} / {failure:?}"),
    }
});
