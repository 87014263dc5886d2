//! Value-semantic array with copy-on-write storage.
//!
//! This module provides [`CowArray`], an ordered random-access container
//! that behaves as if every binding owned its own copy of the elements.
//!
//! # Overview
//!
//! Cloning a `CowArray` is O(1): both bindings point at the same
//! reference-counted buffer. The first mutation through a binding whose
//! buffer is shared copies the buffer for that binding only, so the other
//! binding never observes the change.
//!
//! | Operation            | Complexity                       |
//! |----------------------|----------------------------------|
//! | `clone`              | O(1)                             |
//! | `get` / indexing     | O(1)                             |
//! | `push`               | amortized O(1) when unique, O(N) on first shared mutation |
//! | `slice`              | O(1), shares storage             |
//! | `len` / `is_empty`   | O(1)                             |
//!
//! # Examples
//!
//! ```rust
//! use cowseq::sequence::CowArray;
//!
//! let x = CowArray::from(vec![1, 2, 3]);
//! let mut y = x.clone();
//! assert!(y.shares_storage_with(&x));
//!
//! y.push(4);
//! assert_eq!(y, [1, 2, 3, 4]);
//! assert_eq!(x, [1, 2, 3]);
//! assert!(!y.shares_storage_with(&x));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Deref, RangeBounds};

use super::ReferenceCounter;
use super::error::{RangeError, checked_range};
use super::slice::ArraySlice;

use crate::typeclass::{Foldable, FunctorMut, TypeConstructor, flip};

// =============================================================================
// CowArray Definition
// =============================================================================

/// An ordered sequence with value semantics and copy-on-write storage.
///
/// All read access goes through [`Deref<Target = [T]>`](Deref), so every
/// slice method and every [`SequenceOps`](super::SequenceOps) transform is
/// available directly on a `CowArray`.
///
/// Mutating methods require `T: Clone` because a shared buffer has to be
/// duplicated before it can be written.
pub struct CowArray<T> {
    pub(super) storage: ReferenceCounter<Vec<T>>,
}

/// Shares the buffer; never clones elements.
impl<T> Clone for CowArray<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            storage: ReferenceCounter::clone(&self.storage),
        }
    }
}

impl<T> CowArray<T> {
    /// Creates a new empty array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::CowArray;
    ///
    /// let array: CowArray<i32> = CowArray::new();
    /// assert!(array.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Creates an empty array with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(Vec::with_capacity(capacity))
    }

    /// Creates an array containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::from_vec(vec![element])
    }

    #[inline]
    fn from_vec(elements: Vec<T>) -> Self {
        Self {
            storage: ReferenceCounter::new(elements),
        }
    }

    /// Wraps an existing buffer without copying it.
    #[inline]
    pub(super) const fn from_storage(storage: ReferenceCounter<Vec<T>>) -> Self {
        Self { storage }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the array contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::CowArray;
    ///
    /// let fibs = CowArray::from(vec![0, 1, 1, 2, 3, 5]);
    /// assert_eq!(fibs.get(5), Some(&5));
    /// assert_eq!(fibs.get(6), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.get(index)
    }

    /// Returns a reference to the first element.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Returns a reference to the last element.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.storage.last()
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Returns the elements as a plain slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns `true` if no other array or slice shares this array's buffer.
    ///
    /// A unique array mutates in place; a shared one copies its buffer on
    /// the next mutation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::CowArray;
    ///
    /// let original = CowArray::from(vec![1, 2, 3]);
    /// assert!(original.is_unique());
    ///
    /// let copy = original.clone();
    /// assert!(!original.is_unique());
    /// drop(copy);
    /// assert!(original.is_unique());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_unique(&self) -> bool {
        ReferenceCounter::strong_count(&self.storage) == 1
    }

    /// Returns `true` if both arrays currently point at the same buffer.
    ///
    /// Sharing is never observable through element values; this only
    /// reports whether the physical copy has been deferred.
    #[inline]
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.storage, &other.storage)
    }

    /// Returns a view of the elements in `range`, sharing this array's buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] if the range ends past the last element or
    /// starts after it ends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::CowArray;
    ///
    /// let fibs = CowArray::from(vec![0, 1, 1, 2, 3, 5]);
    /// let slice = fibs.slice(1..fibs.len()).unwrap();
    /// assert_eq!(slice, [1, 1, 2, 3, 5]);
    ///
    /// assert!(fibs.slice(3..7).is_err());
    /// ```
    pub fn slice<R>(&self, range: R) -> Result<ArraySlice<T>, RangeError>
    where
        R: RangeBounds<usize>,
    {
        let bounds = checked_range(&range, self.len())?;
        Ok(ArraySlice::new(
            ReferenceCounter::clone(&self.storage),
            bounds.start,
            bounds.end,
        ))
    }

    /// Returns a view of everything but the first `count` elements.
    ///
    /// Saturates: dropping more elements than exist yields an empty view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::CowArray;
    ///
    /// let array = CowArray::from(vec![1, 2, 3]);
    /// assert_eq!(array.drop_first(1), [2, 3]);
    /// assert!(array.drop_first(10).is_empty());
    /// ```
    #[must_use]
    pub fn drop_first(&self, count: usize) -> ArraySlice<T> {
        let length = self.len();
        ArraySlice::new(
            ReferenceCounter::clone(&self.storage),
            count.min(length),
            length,
        )
    }

    /// Returns a view of everything but the last `count` elements.
    ///
    /// Saturates like [`drop_first`](Self::drop_first).
    #[must_use]
    pub fn drop_last(&self, count: usize) -> ArraySlice<T> {
        let length = self.len();
        ArraySlice::new(
            ReferenceCounter::clone(&self.storage),
            0,
            length.saturating_sub(count),
        )
    }
}

impl<T: Clone> CowArray<T> {
    /// Returns mutable access to the underlying buffer, copying it first if
    /// it is shared.
    ///
    /// Every other mutating method goes through here.
    pub fn make_mut(&mut self) -> &mut Vec<T> {
        if !self.is_unique() {
            tracing::debug!(
                length = self.len(),
                references = ReferenceCounter::strong_count(&self.storage),
                "detaching shared sequence storage"
            );
        }
        ReferenceCounter::make_mut(&mut self.storage)
    }

    /// Appends an element to the back of the array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::CowArray;
    ///
    /// let mut fibs = CowArray::from(vec![0, 1, 1, 2, 3, 5]);
    /// fibs.push(8);
    /// fibs.extend([13, 21]);
    /// assert_eq!(fibs, [0, 1, 1, 2, 3, 5, 8, 13, 21]);
    /// ```
    pub fn push(&mut self, element: T) {
        self.make_mut().push(element);
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.make_mut().pop()
    }

    /// Inserts an element at `index`, shifting later elements back.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] if `index > len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::CowArray;
    ///
    /// let mut array = CowArray::from(vec![1, 2, 3]);
    /// array.insert(3, 4).unwrap();
    /// assert_eq!(array, [1, 2, 3, 4]);
    /// assert!(array.insert(9, 0).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), RangeError> {
        let position = checked_range(&(index..index), self.len())?;
        self.make_mut().insert(position.start, element);
        Ok(())
    }

    /// Removes and returns the element at `index`, or `None` if out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        Some(self.make_mut().remove(index))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Detaches shared storage only when the index is in bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            return None;
        }
        self.make_mut().get_mut(index)
    }

    /// Converts into a `Vec`, moving the elements out when the buffer is
    /// unique and cloning them otherwise.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        ReferenceCounter::try_unwrap(self.storage).unwrap_or_else(|shared| (*shared).clone())
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An owning iterator over the elements of a [`CowArray`].
///
/// Moves elements out when the array was the buffer's only owner, and
/// clones them one at a time otherwise.
pub struct CowArrayIntoIterator<T> {
    state: IntoIteratorState<T>,
}

enum IntoIteratorState<T> {
    Owned(std::vec::IntoIter<T>),
    Shared {
        storage: ReferenceCounter<Vec<T>>,
        front: usize,
        back: usize,
    },
}

impl<T> CowArrayIntoIterator<T> {
    fn new(array: CowArray<T>) -> Self {
        let state = match ReferenceCounter::try_unwrap(array.storage) {
            Ok(elements) => IntoIteratorState::Owned(elements.into_iter()),
            Err(storage) => {
                let back = storage.len();
                IntoIteratorState::Shared {
                    storage,
                    front: 0,
                    back,
                }
            }
        };
        Self { state }
    }
}

impl<T: Clone> Iterator for CowArrayIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match &mut self.state {
            IntoIteratorState::Owned(elements) => elements.next(),
            IntoIteratorState::Shared {
                storage,
                front,
                back,
            } => {
                if *front >= *back {
                    return None;
                }
                let element = storage[*front].clone();
                *front += 1;
                Some(element)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.state {
            IntoIteratorState::Owned(elements) => elements.len(),
            IntoIteratorState::Shared { front, back, .. } => back - front,
        };
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for CowArrayIntoIterator<T> {
    fn next_back(&mut self) -> Option<T> {
        match &mut self.state {
            IntoIteratorState::Owned(elements) => elements.next_back(),
            IntoIteratorState::Shared {
                storage,
                front,
                back,
            } => {
                if *front >= *back {
                    return None;
                }
                *back -= 1;
                Some(storage[*back].clone())
            }
        }
    }
}

impl<T: Clone> ExactSizeIterator for CowArrayIntoIterator<T> {}

impl<T: Clone> FusedIterator for CowArrayIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for CowArray<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for CowArray<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for CowArray<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> From<Vec<T>> for CowArray<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for CowArray<T> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self::from_vec(Vec::from(elements))
    }
}

impl<T: Clone> From<&[T]> for CowArray<T> {
    #[inline]
    fn from(elements: &[T]) -> Self {
        Self::from_vec(elements.to_vec())
    }
}

impl<T> FromIterator<T> for CowArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> Extend<T> for CowArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.make_mut().extend(iter);
    }
}

impl<T: Clone> IntoIterator for CowArray<T> {
    type Item = T;
    type IntoIter = CowArrayIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CowArrayIntoIterator::new(self)
    }
}

impl<'a, T> IntoIterator for &'a CowArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for CowArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for CowArray<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for CowArray<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for CowArray<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for CowArray<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Hashes the length followed by each element, matching the hash of
/// `[T]`, so equal arrays hash equally regardless of storage sharing.
impl<T: Hash> Hash for CowArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for CowArray<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for CowArray<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(formatter, self.as_slice())
    }
}

/// Writes `[a, b, c]` using each element's `Display`.
pub(super) fn write_elements<T: fmt::Display>(
    formatter: &mut fmt::Formatter<'_>,
    elements: &[T],
) -> fmt::Result {
    write!(formatter, "[")?;
    let mut first = true;
    for element in elements {
        if first {
            first = false;
        } else {
            write!(formatter, ", ")?;
        }
        write!(formatter, "{element}")?;
    }
    write!(formatter, "]")
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(CowArray<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(CowArray<i32>: Send, Sync);

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for CowArray<T> {
    type Inner = T;
    type WithType<B> = CowArray<B>;
}

impl<T: Clone> FunctorMut for CowArray<T> {
    fn fmap_mut<B, F>(self, function: F) -> CowArray<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> CowArray<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

impl<T: Clone> Foldable for CowArray<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter().rfold(init, flip(function))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    fn to_list(self) -> Vec<T> {
        self.into_vec()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for CowArray<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for CowArray<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::from_vec)
    }
}

// =============================================================================
// Tests
// =============================================================================
