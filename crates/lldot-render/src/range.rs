//! Byte-range compression.

use crate::label;

/// Inclusive run of byte keys leading to `target`.
pub struct Range<'g, N> {
    pub start: u8,
    pub end: u8,
    pub target: &'g N,
}

impl<N> Range<'_, N> {
    pub fn bounds(&self) -> (u8, u8) {
        (self.start, self.end)
    }

    pub fn label(&self) -> String {
        label::range_label(self.start, self.end)
    }
}

impl<N> Clone for Range<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Range<'_, N> {}

impl<N> std::fmt::Debug for Range<'_, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Range({:#04x}..={:#04x})", self.start, self.end)
    }
}

/// Merge single-byte keys into maximal runs, scanning in the given order.
///
/// A key extends the current run only if it is exactly one above the run's
/// last key. Input is not sorted first: `[b'3', b'1', b'2']` yields
/// `3`, `1:2` rather than `1:3`, and a repeated key starts a new run.
pub fn compress<'g, N>(target: &'g N, keys: &[u8]) -> Vec<Range<'g, N>> {
    let mut ranges = Vec::new();
    let mut run: Option<(u8, u8)> = None;

    for &key in keys {
        if let Some((first, last)) = run {
            if last.checked_add(1) == Some(key) {
                run = Some((first, key));
                continue;
            }
            ranges.push(Range {
                start: first,
                end: last,
                target,
            });
        }
        run = Some((key, key));
    }

    if let Some((start, end)) = run {
        ranges.push(Range { start, end, target });
    }
    ranges
}
