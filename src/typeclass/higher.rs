//! Naming a container with its element type swapped out.
//!
//! A transform from `CowArray<i32>` to `CowArray<String>` has to spell its
//! result in terms of its input. [`TypeConstructor::WithType`] is that
//! spelling.

/// A generic container viewed apart from its element type.
///
/// `<C as TypeConstructor>::WithType<C::Inner>` is `C` again.
pub trait TypeConstructor {
    /// Current element type.
    type Inner;

    /// This container holding `B` instead.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
