//! Element-wise mapping that keeps the container shape.
//!
//! Mapping `|x| x` gives back an equal container, and mapping `f` then `g`
//! equals mapping `|x| g(f(x))`.

use super::higher::TypeConstructor;

/// A multi-element container whose elements can all be transformed at once.
///
/// The transform runs once per element, front to back, so a stateful
/// closure sees the elements in order.
///
/// # Examples
///
/// ```rust
/// use cowseq::typeclass::FunctorMut;
///
/// let fibs = vec![0, 1, 1, 2, 3, 5];
/// assert_eq!(fibs.fmap_mut(|fib| fib * fib), vec![0, 1, 1, 4, 9, 25]);
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Transforms every element, consuming the container.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Transforms borrowed elements, leaving the container in place.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

impl<T> FunctorMut for Vec<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}
