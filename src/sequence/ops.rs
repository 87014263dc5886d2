//! Higher-order transforms over ordered sequences.
//!
//! [`SequenceOps`] is implemented for `[T]`, so it reaches `Vec<T>`,
//! `CowArray<T>` and `ArraySlice<T>` through deref. Every transform borrows
//! its input, hands each element to the closure by reference, and returns a
//! fresh [`CowArray`]; the input is never mutated.
//!
//! # Examples
//!
//! ```rust
//! use cowseq::sequence::SequenceOps;
//!
//! let fibs = vec![0, 1, 1, 2, 3, 5];
//! let squares = fibs.map(|fib| fib * fib);
//! assert_eq!(squares, [0, 1, 1, 4, 9, 25]);
//!
//! let marks = vec![4, 5, 8, 2, 9, 7];
//! let total_pass = marks.filter(|mark| *mark >= 7).reduce(0, |total, mark| total + mark);
//! assert_eq!(total_pass, 24);
//! ```
//!
//! # Name resolution
//!
//! `CowArray::slice` and `ArraySlice::slice` are inherent methods returning
//! storage-sharing views; they take precedence over [`SequenceOps::slice`],
//! which copies. Fixed-size arrays have an inherent `map`, so call these
//! transforms on a slice (`array[..].map(..)`) or a `Vec` instead.

use std::ops::RangeBounds;

use super::array::CowArray;
use super::error::{RangeError, checked_range};

/// Closure-parameterized operations over an ordered sequence.
pub trait SequenceOps {
    /// The element type of the sequence.
    type Element;

    /// Returns the elements in order.
    fn elements(&self) -> &[Self::Element];

    /// Applies `transform` to every element, front to back.
    ///
    /// The result has the same length as the input and
    /// `result[i] == transform(&input[i])`.
    fn map<R, F>(&self, transform: F) -> CowArray<R>
    where
        F: FnMut(&Self::Element) -> R,
    {
        self.elements().iter().map(transform).collect()
    }

    /// Returns every element for which `predicate` holds, in original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::SequenceOps;
    ///
    /// let digits = vec![1, 4, 10, 15];
    /// assert_eq!(digits.filter(|digit| digit % 2 == 0), [4, 10]);
    /// ```
    fn filter<P>(&self, mut predicate: P) -> CowArray<Self::Element>
    where
        P: FnMut(&Self::Element) -> bool,
        Self::Element: Clone,
    {
        self.elements()
            .iter()
            .filter(|element| predicate(*element))
            .cloned()
            .collect()
    }

    /// Folds the elements left to right, starting from `initial`.
    ///
    /// Returns `initial` unchanged for an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::SequenceOps;
    ///
    /// let items = vec![2.0, 4.0, 5.0, 7.0];
    /// let total = items.reduce(10.0, |total, item| total + item);
    /// assert!((total - 28.0_f64).abs() < f64::EPSILON);
    /// ```
    fn reduce<R, F>(&self, initial: R, combine: F) -> R
    where
        F: FnMut(R, &Self::Element) -> R,
    {
        self.elements().iter().fold(initial, combine)
    }

    /// Applies `transform` to every element and concatenates the results,
    /// flattening exactly one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::SequenceOps;
    ///
    /// let results = vec![vec![5, 2, 7], vec![4, 8], vec![9, 1, 3]];
    /// assert_eq!(results.flat_map(|row| row.clone()), [5, 2, 7, 4, 8, 9, 1, 3]);
    ///
    /// let pass_marks = results.flat_map(|row| row.filter(|mark| *mark > 5));
    /// assert_eq!(pass_marks, [7, 8, 9]);
    /// ```
    fn flat_map<I, F>(&self, transform: F) -> CowArray<I::Item>
    where
        I: IntoIterator,
        F: FnMut(&Self::Element) -> I,
    {
        self.elements().iter().flat_map(transform).collect()
    }

    /// Applies `transform` to every element, keeping the `Some` results in
    /// order and discarding the `None`s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::SequenceOps;
    ///
    /// let keys = vec![Some("Tom"), None, Some("Peter"), None, Some("Harry")];
    /// assert_eq!(keys.compact_map(|key| *key), ["Tom", "Peter", "Harry"]);
    /// assert_eq!(keys.compact_map(|key| key.map(str::len)), [3, 5, 5]);
    /// ```
    fn compact_map<R, F>(&self, transform: F) -> CowArray<R>
    where
        F: FnMut(&Self::Element) -> Option<R>,
    {
        self.elements().iter().filter_map(transform).collect()
    }

    /// Returns the last element satisfying `predicate`.
    ///
    /// Scans backward from the end and stops at the first match; the
    /// sequence is never reversed or copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::SequenceOps;
    ///
    /// let names = vec!["Paula", "Elena", "Zoe"];
    /// assert_eq!(names.last_where(|name| name.ends_with('a')), Some(&"Elena"));
    /// assert_eq!(names.last_where(|name| name.is_empty()), None);
    /// ```
    fn last_where<P>(&self, mut predicate: P) -> Option<&Self::Element>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.elements()
            .iter()
            .rev()
            .find(|element| predicate(*element))
    }

    /// Copies the elements in `range` into a new array.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] if the range ends past the last element or
    /// starts after it ends.
    fn slice<B>(&self, range: B) -> Result<CowArray<Self::Element>, RangeError>
    where
        B: RangeBounds<usize>,
        Self::Element: Clone,
    {
        let elements = self.elements();
        let bounds = checked_range(&range, elements.len())?;
        Ok(CowArray::from(&elements[bounds]))
    }

    /// Returns the running values of a left fold, one per element.
    ///
    /// The last value equals [`reduce`](Self::reduce) with the same
    /// arguments; `initial` itself is not included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::SequenceOps;
    ///
    /// let fibs = vec![0, 1, 1, 2, 3, 5];
    /// assert_eq!(fibs.accumulate(0, |total, fib| total + fib), [0, 1, 2, 4, 7, 12]);
    /// ```
    fn accumulate<R, F>(&self, initial: R, mut combine: F) -> CowArray<R>
    where
        R: Clone,
        F: FnMut(R, &Self::Element) -> R,
    {
        let elements = self.elements();
        let mut running = Vec::with_capacity(elements.len());
        let mut accumulator = initial;
        for element in elements {
            accumulator = combine(accumulator, element);
            running.push(accumulator.clone());
        }
        CowArray::from(running)
    }

    /// Returns `true` if every element satisfies `predicate` (vacuously for
    /// an empty sequence).
    fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.elements().iter().all(predicate)
    }

    /// Returns `true` if no element satisfies `predicate`.
    fn none_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool,
    {
        !self.elements().iter().any(predicate)
    }

    /// Counts the elements satisfying `predicate` without building an array.
    fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.elements()
            .iter()
            .filter(|element| predicate(*element))
            .count()
    }

    /// Returns the index of every element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::SequenceOps;
    ///
    /// let fibs = vec![0, 1, 1, 2, 3, 5];
    /// assert_eq!(fibs.indices_where(|fib| *fib == 1), [1, 2]);
    /// ```
    fn indices_where<P>(&self, mut predicate: P) -> CowArray<usize>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.elements()
            .iter()
            .enumerate()
            .filter_map(|(index, element)| predicate(element).then_some(index))
            .collect()
    }

    /// Returns the index of the first element satisfying `predicate`.
    fn first_index_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.elements().iter().position(predicate)
    }

    /// Returns the leading run of elements satisfying `predicate`, stopping
    /// at the first element that does not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::SequenceOps;
    ///
    /// let values = vec![1, 3, 5, 6, 7];
    /// assert_eq!(values.prefix_while(|value| value % 2 == 1), [1, 3, 5]);
    /// assert_eq!(values.drop_while(|value| value % 2 == 1), [6, 7]);
    /// ```
    fn prefix_while<P>(&self, mut predicate: P) -> CowArray<Self::Element>
    where
        P: FnMut(&Self::Element) -> bool,
        Self::Element: Clone,
    {
        self.elements()
            .iter()
            .take_while(|element| predicate(*element))
            .cloned()
            .collect()
    }

    /// Returns everything after the leading run of elements satisfying
    /// `predicate`.
    fn drop_while<P>(&self, mut predicate: P) -> CowArray<Self::Element>
    where
        P: FnMut(&Self::Element) -> bool,
        Self::Element: Clone,
    {
        self.elements()
            .iter()
            .skip_while(|element| predicate(*element))
            .cloned()
            .collect()
    }
}

impl<T> SequenceOps for [T] {
    type Element = T;

    #[inline]
    fn elements(&self) -> &[T] {
        self
    }
}
