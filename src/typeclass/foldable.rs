//! Collapsing a container into one value.
//!
//! `fold_left` is the primitive every sequence reduction bottoms out in.
//! For an associative `f`, folding from either end gives the same answer.

use super::higher::TypeConstructor;

/// A container that can be consumed element by element into a summary.
///
/// Only the two folds are required. The rest are derived from `fold_left`
/// and are worth overriding when the container knows its length.
///
/// # Examples
///
/// ```rust
/// use cowseq::typeclass::Foldable;
///
/// let items = vec![2.0, 4.0, 5.0, 7.0];
/// let total = items.fold_left(10.0, |total, item| total + item);
/// assert!((total - 28.0_f64).abs() < f64::EPSILON);
/// ```
pub trait Foldable: TypeConstructor {
    /// Combines elements first to last, starting from `init`.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Combines elements last to first, starting from `init`.
    ///
    /// ```rust
    /// use cowseq::typeclass::Foldable;
    ///
    /// let digits = vec![1, 2, 3];
    /// let written = digits.fold_right(String::new(), |digit, text| format!("{digit}{text}"));
    /// assert_eq!(written, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// `true` if folding would never call its function.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Number of elements a fold visits.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`, in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut collected, element| {
            collected.push(element);
            collected
        })
    }

    /// First element accepted by `predicate`, taken by value.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }
}

impl<T> Foldable for Vec<T> {
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
        self.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Self {
        self
    }
}

/// Adapts a right-fold function to the argument order `Iterator::rfold` uses.
pub(crate) fn flip<T, B, F>(mut function: F) -> impl FnMut(B, T) -> B
where
    F: FnMut(T, B) -> B,
{
    move |accumulator, element| function(element, accumulator)
}
