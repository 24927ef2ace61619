//! Line terminator recognition: `\n`, `\r`, and `\r\n` folded into one.
//!
//! Scanning works on the UTF-8 code units of the decoded text. `\r` and `\n`
//! never occur inside a multi-byte sequence, so a byte-wise scan sees the
//! same terminators as a character-wise one.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TerminatorState {
    #[default]
    Init,
    /// The previous unit was a `\r` that already ended a line; a `\n` right
    /// after it belongs to the same terminator.
    PendingCr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Ordinary content.
    Continue,
    /// The current unit ends the line.
    LineEnd,
    /// The `\n` of a `\r\n` pair; the line already ended at the `\r`.
    Absorb,
}

impl TerminatorState {
    #[inline]
    pub(crate) fn step(&mut self, unit: u8) -> Step {
        match (unit, *self) {
            (b'\n', TerminatorState::PendingCr) => {
                *self = TerminatorState::Init;
                Step::Absorb
            }
            (b'\n', TerminatorState::Init) => Step::LineEnd,
            (b'\r', _) => {
                *self = TerminatorState::PendingCr;
                Step::LineEnd
            }
            _ => {
                *self = TerminatorState::Init;
                Step::Continue
            }
        }
    }
}
