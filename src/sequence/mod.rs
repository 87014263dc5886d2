//! Value-semantic sequences and the transforms over them.
//!
//! - [`CowArray`]: ordered random-access container with copy-on-write storage
//! - [`ArraySlice`]: storage-sharing view onto a `CowArray`
//! - [`SequenceOps`]: `map`, `filter`, `reduce`, `flat_map`, `compact_map`,
//!   `last_where`, `slice` and friends, for any `[T]`
//! - [`RangeError`]: the one checked failure, raised by slicing
//!
//! # Value Semantics
//!
//! Every binding of a `CowArray` behaves as if it owned an independent copy.
//! Clones share one buffer until one of them is mutated; that mutation copies
//! the buffer for the mutating binding only.
//!
//! # Examples
//!
//! ## Copy-on-write
//!
//! ```rust
//! use cowseq::cow_array;
//!
//! let mut mutable_fibs = cow_array![0, 1, 1, 2, 3, 5];
//! let fibs = mutable_fibs.clone();
//!
//! mutable_fibs.push(8);
//! mutable_fibs.extend([13, 21]);
//!
//! assert_eq!(mutable_fibs, [0, 1, 1, 2, 3, 5, 8, 13, 21]);
//! assert_eq!(fibs, [0, 1, 1, 2, 3, 5]); // never modified
//! ```
//!
//! ## Transforms
//!
//! ```rust
//! use cowseq::cow_array;
//! use cowseq::sequence::SequenceOps;
//!
//! let keys = cow_array![Some("Tom"), None, Some("Peter"), None, Some("Harry")];
//! let valid_names = keys.compact_map(|key| *key);
//! assert_eq!(valid_names, ["Tom", "Peter", "Harry"]);
//!
//! let names = cow_array!["Paula", "Elena", "Zoe"];
//! assert_eq!(names.last_where(|name| name.ends_with('a')), Some(&"Elena"));
//! ```
//!
//! ## Slices
//!
//! ```rust
//! use cowseq::cow_array;
//!
//! let fibs = cow_array![0, 1, 1, 2, 3, 5];
//! let slice = fibs.slice(1..fibs.len()).unwrap();
//! assert_eq!(slice, [1, 1, 2, 3, 5]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer holding a sequence buffer.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod array;
mod error;
mod ops;
#[cfg(feature = "rayon")]
mod parallel;
mod slice;

pub use array::CowArray;
pub use array::CowArrayIntoIterator;
pub use error::RangeError;
pub use ops::SequenceOps;
pub use slice::ArraySlice;

/// Creates a [`CowArray`] from a list of elements, like `vec!`.
///
/// # Examples
///
/// ```rust
/// use cowseq::cow_array;
/// use cowseq::sequence::CowArray;
///
/// let empty: CowArray<i32> = cow_array![];
/// assert!(empty.is_empty());
///
/// let zeros = cow_array![0; 3];
/// assert_eq!(zeros, [0, 0, 0]);
///
/// let digits = cow_array![1, 4, 10, 15];
/// assert_eq!(digits.len(), 4);
/// ```
#[macro_export]
macro_rules! cow_array {
    () => {
        $crate::sequence::CowArray::new()
    };
    ($element:expr; $count:expr) => {
        $crate::sequence::CowArray::from(::std::vec![$element; $count])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sequence::CowArray::from(::std::vec![$($element),+])
    };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<Vec<i32>> = ReferenceCounter::new(vec![42]);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }

    #[rstest]
    fn test_make_mut_copies_only_when_shared() {
        let mut reference_counter: ReferenceCounter<Vec<i32>> = ReferenceCounter::new(vec![1]);
        let snapshot = reference_counter.clone();
        ReferenceCounter::make_mut(&mut reference_counter).push(2);
        assert_eq!(*snapshot, vec![1]);
        assert_eq!(*reference_counter, vec![1, 2]);
        assert!(!ReferenceCounter::ptr_eq(&reference_counter, &snapshot));
    }
}
