//! Storage-sharing views onto a [`CowArray`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, RangeBounds};

use super::ReferenceCounter;
use super::array::{CowArray, write_elements};
use super::error::{RangeError, checked_range};

/// A contiguous `[start, end)` window onto a [`CowArray`]'s buffer.
///
/// Creating a slice is O(1) and copies nothing. The slice holds a reference
/// to the buffer, so the array it came from copies its buffer before its next
/// mutation; the slice's elements can never change underneath it.
///
/// Indices are relative to the slice: element `0` is the first element of
/// the window.
///
/// # Examples
///
/// ```rust
/// use cowseq::sequence::CowArray;
///
/// let fibs = CowArray::from(vec![0, 1, 1, 2, 3, 5]);
/// let tail = fibs.slice(1..).unwrap();
/// assert_eq!(tail[0], 1);
/// assert_eq!(tail.len(), 5);
///
/// let middle = tail.slice(1..3).unwrap();
/// assert_eq!(middle, [1, 2]);
/// ```
pub struct ArraySlice<T> {
    storage: ReferenceCounter<Vec<T>>,
    start: usize,
    end: usize,
}

impl<T> Clone for ArraySlice<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            storage: ReferenceCounter::clone(&self.storage),
            start: self.start,
            end: self.end,
        }
    }
}

impl<T> ArraySlice<T> {
    /// Callers must have validated `start <= end <= storage.len()`.
    #[inline]
    pub(super) fn new(storage: ReferenceCounter<Vec<T>>, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= storage.len());
        Self {
            storage,
            start,
            end,
        }
    }

    /// Returns the number of elements in the view.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the view contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the viewed elements as a plain slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.storage[self.start..self.end]
    }

    /// Returns an iterator over references to the viewed elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a narrower view, with `range` relative to this view.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] (reported against this view's length) if the
    /// range does not fit.
    pub fn slice<R>(&self, range: R) -> Result<Self, RangeError>
    where
        R: RangeBounds<usize>,
    {
        let bounds = checked_range(&range, self.len())?;
        Ok(Self::new(
            ReferenceCounter::clone(&self.storage),
            self.start + bounds.start,
            self.start + bounds.end,
        ))
    }

    /// Returns `true` if this view reads from `array`'s current buffer.
    #[inline]
    #[must_use]
    pub fn shares_storage_with(&self, array: &CowArray<T>) -> bool {
        ReferenceCounter::ptr_eq(&self.storage, &array.storage)
    }
}

impl<T: Clone> ArraySlice<T> {
    /// Materializes the view as an independent [`CowArray`].
    ///
    /// A view covering its whole buffer shares that buffer instead of
    /// copying it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::CowArray;
    ///
    /// let fibs = CowArray::from(vec![0, 1, 1, 2, 3, 5]);
    /// let head = fibs.drop_last(3).to_array();
    /// assert_eq!(head, [0, 1, 1]);
    /// ```
    #[must_use]
    pub fn to_array(&self) -> CowArray<T> {
        if self.start == 0 && self.end == self.storage.len() {
            CowArray::from_storage(ReferenceCounter::clone(&self.storage))
        } else {
            CowArray::from(self.as_slice())
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Deref for ArraySlice<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for ArraySlice<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T> IntoIterator for &'a ArraySlice<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> From<ArraySlice<T>> for CowArray<T> {
    #[inline]
    fn from(slice: ArraySlice<T>) -> Self {
        slice.to_array()
    }
}

impl<T: PartialEq> PartialEq for ArraySlice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ArraySlice<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for ArraySlice<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for ArraySlice<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for ArraySlice<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<CowArray<U>> for ArraySlice<T> {
    fn eq(&self, other: &CowArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<ArraySlice<U>> for CowArray<T> {
    fn eq(&self, other: &ArraySlice<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for ArraySlice<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ArraySlice<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArraySlice<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(formatter, self.as_slice())
    }
}
