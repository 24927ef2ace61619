//! Fixed-capacity staging area between the stream and the decoder.

use std::io::{self, ErrorKind, Read};

use super::decoder::MAX_UTF8_LEN;

#[derive(Debug)]
pub(crate) struct ByteBuffer {
    data: Box<[u8]>,
    /// Number of valid bytes in `data`.
    len: usize,
    /// First byte not yet decoded. `pos <= len <= data.len()`.
    pos: usize,
    /// The stream returned zero bytes for a read with room to spare.
    last_chunk_read: bool,
    /// Stream offset of `data[0]`, relative to the last reset.
    base_offset: u64,
}

impl ByteBuffer {
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= MAX_UTF8_LEN);
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            len: 0,
            pos: 0,
            last_chunk_read: false,
            base_offset: 0,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.len = 0;
        self.pos = 0;
        self.last_chunk_read = false;
        self.base_offset = 0;
    }

    /// Bytes read from the stream but not yet decoded.
    pub(crate) fn pending(&self) -> &[u8] {
        &self.data[self.pos..self.len]
    }

    pub(crate) fn consume(&mut self, count: usize) {
        debug_assert!(self.pos + count <= self.len);
        self.pos += count;
    }

    pub(crate) fn is_last_chunk_read(&self) -> bool {
        self.last_chunk_read
    }

    /// Stream offset of the first pending byte.
    pub(crate) fn pending_offset(&self) -> u64 {
        self.base_offset + self.pos as u64
    }

    /// Top the buffer up from `source` with a single read.
    ///
    /// Does nothing while more than one full code point is still pending.
    /// Otherwise the undecoded tail moves to the front and the rest of the
    /// buffer is offered to the stream.
    pub(crate) fn fill<R: Read + ?Sized>(&mut self, source: &mut R) -> io::Result<()> {
        if self.pos + MAX_UTF8_LEN < self.len {
            return Ok(());
        }

        let remainder = self.len - self.pos;
        if remainder > 0 {
            self.data.copy_within(self.pos..self.len, 0);
        }
        self.base_offset += self.pos as u64;
        self.len = remainder;
        self.pos = 0;

        let spare = &mut self.data[self.len..];
        if spare.is_empty() {
            return Ok(());
        }

        let read = loop {
            match source.read(spare) {
                Ok(read) => break read,
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        };
        tracing::trace!(read, carried = remainder, "refilled byte buffer");

        if read == 0 {
            self.last_chunk_read = true;
        }
        self.len += read;
        Ok(())
    }
}
