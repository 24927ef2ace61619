//! Zero-copy splitting of text on single-character delimiters.

use core::iter::FusedIterator;

/// What to do with empty segments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Every delimiter ends a segment, so adjacent delimiters produce empty
    /// segments and `""` splits into one empty segment.
    #[default]
    KeepEmpty,
    /// Empty segments are skipped; runs of delimiters act as one.
    RemoveEmpty,
}

/// Split `source` wherever one of `delimiters` occurs.
///
/// Segments borrow `source`; nothing is allocated. With no delimiters the
/// whole input is a single segment.
///
/// # Examples
///
/// ```rust
/// use streamlines::{SplitMode, split};
///
/// let fields: Vec<_> = split("a,b;;c", &[',', ';'], SplitMode::KeepEmpty).collect();
/// assert_eq!(fields, ["a", "b", "", "c"]);
///
/// let fields: Vec<_> = split("a,b;;c", &[',', ';'], SplitMode::RemoveEmpty).collect();
/// assert_eq!(fields, ["a", "b", "c"]);
/// ```
#[must_use]
pub fn split<'a>(source: &'a str, delimiters: &'a [char], mode: SplitMode) -> Split<'a> {
    Split {
        rest: Some(source),
        delimiters,
        mode,
    }
}

/// Iterator returned by [`split`] and [`SplitExt::split_by`].
#[derive(Debug, Clone)]
pub struct Split<'a> {
    /// Unsplit remainder; `None` once the final segment has been produced.
    rest: Option<&'a str>,
    delimiters: &'a [char],
    mode: SplitMode,
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let rest = self.rest?;
            let segment = match rest.char_indices().find(|(_, c)| self.delimiters.contains(c)) {
                Some((at, delimiter)) => {
                    self.rest = Some(&rest[at + delimiter.len_utf8()..]);
                    &rest[..at]
                }
                None => {
                    self.rest = None;
                    rest
                }
            };

            if !segment.is_empty() || self.mode == SplitMode::KeepEmpty {
                return Some(segment);
            }
        }
    }
}

impl FusedIterator for Split<'_> {}

/// Adds [`split_by`](SplitExt::split_by) to `str`.
pub trait SplitExt {
    /// See [`split`].
    fn split_by<'a>(&'a self, delimiters: &'a [char], mode: SplitMode) -> Split<'a>;
}

impl SplitExt for str {
    fn split_by<'a>(&'a self, delimiters: &'a [char], mode: SplitMode) -> Split<'a> {
        split(self, delimiters, mode)
    }
}
