//! Growable buffer of decoded text and its growth/compaction policy.
//!
//! Layout, all offsets in UTF-8 code units:
//!
//! ```text
//! 0 ........ line_start ........ scan_pos ........ len ........ capacity
//!   emitted    current line        unscanned text      free space
//! ```
//!
//! Growth is a two-phase policy tracked by [`Growth`]. While `Allowed`, a
//! buffer without room is replaced by a larger one. Emitting a line switches
//! to `Locked`: the emitted prefix is dead space, so the next refill first
//! compacts the live tail down to offset zero and only then allows growth
//! again. The buffer therefore settles at roughly 1.2 times the longest line.

use core::str;

use super::terminator::{Step, TerminatorState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Growth {
    Allowed,
    Locked,
}

#[derive(Debug)]
pub(crate) struct CharBuffer {
    data: Box<[u8]>,
    len: usize,
    scan_pos: usize,
    line_start: usize,
    growth: Growth,
}

/// Next capacity when growing from `capacity`: a factor of 1.2, but at
/// least two more units.
pub(crate) fn grown_capacity(capacity: usize) -> usize {
    (capacity.saturating_mul(6) / 5).max(capacity.saturating_add(2))
}

impl CharBuffer {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            len: 0,
            scan_pos: 0,
            line_start: 0,
            growth: Growth::Allowed,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.len = 0;
        self.scan_pos = 0;
        self.line_start = 0;
        self.growth = Growth::Allowed;
    }

    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn is_fully_scanned(&self) -> bool {
        self.scan_pos >= self.len
    }

    pub(crate) fn has_unterminated_tail(&self) -> bool {
        self.line_start < self.len
    }

    #[cfg(test)]
    pub(crate) fn growth(&self) -> Growth {
        self.growth
    }

    /// Free space past the decoded text.
    pub(crate) fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.data[self.len..]
    }

    /// Mark `count` units written into [`spare_mut`](Self::spare_mut) as
    /// decoded text.
    pub(crate) fn commit(&mut self, count: usize) {
        debug_assert!(self.len + count <= self.data.len());
        self.len += count;
    }

    /// Apply the growth policy before decoding a code point of `needed` units.
    pub(crate) fn make_room(&mut self, needed: usize) {
        match self.growth {
            Growth::Allowed => {
                if self.data.len() - self.len < needed {
                    self.grow();
                }
            }
            Growth::Locked => {
                self.compact();
                self.growth = Growth::Allowed;
            }
        }
    }

    fn grow(&mut self) {
        let capacity = grown_capacity(self.data.len());
        tracing::trace!(from = self.data.len(), to = capacity, "growing char buffer");

        let mut data = vec![0; capacity].into_boxed_slice();
        data[..self.len].copy_from_slice(&self.data[..self.len]);
        self.data = data;
    }

    fn compact(&mut self) {
        let shift = self.line_start;
        if shift == 0 {
            return;
        }
        tracing::trace!(shift, kept = self.len - shift, "compacting char buffer");

        self.data.copy_within(shift..self.len, 0);
        self.len -= shift;
        self.scan_pos -= shift;
        self.line_start = 0;
    }

    /// Scan unscanned text for the end of the current line.
    ///
    /// Returns the offset of the terminator that ends it, leaving `scan_pos`
    /// just past that terminator.
    pub(crate) fn find_line_end(&mut self, state: &mut TerminatorState) -> Option<usize> {
        while self.scan_pos < self.len {
            let unit = self.data[self.scan_pos];
            self.scan_pos += 1;
            match state.step(unit) {
                Step::Continue => {}
                Step::Absorb => self.line_start += 1,
                Step::LineEnd => return Some(self.scan_pos - 1),
            }
        }
        None
    }

    /// Emit the current line, which ends at `end`, and start the next one at
    /// `next_start`.
    ///
    /// The returned text stays valid only until the buffer is touched again.
    pub(crate) fn take_line(&mut self, end: usize, next_start: usize) -> &str {
        let start = self.line_start;
        debug_assert!(start <= end && end <= self.len && next_start <= self.len);
        self.line_start = next_start;
        self.growth = Growth::Locked;

        let line = &self.data[start..end];
        debug_assert!(str::from_utf8(line).is_ok());
        // SAFETY: `data[..len]` only ever receives complete code points from
        // the decoder, and `start`/`end` sit next to ASCII terminators or at
        // the ends of the decoded text, which are all char boundaries.
        unsafe { str::from_utf8_unchecked(line) }
    }

    /// Emit the current line, which extends to the end of the decoded text.
    pub(crate) fn take_tail(&mut self) -> &str {
        let len = self.len;
        self.scan_pos = len;
        self.take_line(len, len)
    }
}
