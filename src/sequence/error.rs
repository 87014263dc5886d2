//! Error types for sequence slicing and positional insertion.

use std::ops::{Bound, Range, RangeBounds};

use thiserror::Error;

/// A requested range does not fit inside a sequence.
///
/// Returned by every `slice` variant when `end > length` or `start > end`,
/// and by [`CowArray::insert`](super::CowArray::insert) when the index is
/// past the end.
///
/// # Examples
///
/// ```rust
/// use cowseq::sequence::{CowArray, RangeError};
///
/// let fibs = CowArray::from(vec![0, 1, 1, 2, 3, 5]);
/// let error = fibs.slice(2..9).unwrap_err();
/// assert_eq!(error, RangeError { start: 2, end: 9, length: 6 });
/// assert_eq!(
///     error.to_string(),
///     "range 2..9 out of bounds for sequence of length 6"
/// );
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("range {start}..{end} out of bounds for sequence of length {length}")]
pub struct RangeError {
    /// Requested start offset (inclusive).
    pub start: usize,
    /// Requested end offset (exclusive).
    pub end: usize,
    /// Length of the sequence the range was applied to.
    pub length: usize,
}

/// Resolves `range` against a sequence of `length` elements.
///
/// `Included(usize::MAX)` as an end bound saturates to `usize::MAX`, which is
/// always rejected.
pub(crate) fn checked_range<R>(range: &R, length: usize) -> Result<Range<usize>, RangeError>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => length,
    };

    if start > end || end > length {
        tracing::trace!(start, end, length, "rejected sequence range");
        return Err(RangeError { start, end, length });
    }
    Ok(start..end)
}
