//! Traits shared by every container in the crate.
//!
//! - [`TypeConstructor`]: names a container with a different element type
//! - [`FunctorMut`]: shape-preserving element-wise transforms
//! - [`Foldable`]: reductions to a single value
//!
//! `Vec` and [`CowArray`](crate::sequence::CowArray) implement all three, so
//! generic code can work over either.
//!
//! # Examples
//!
//! ```rust
//! use cowseq::typeclass::{Foldable, FunctorMut};
//!
//! let marks = vec![4, 5, 8, 2, 9, 7];
//! let passed = marks
//!     .fmap_mut(|mark| if mark >= 7 { mark } else { 0 })
//!     .fold_left(0, |total, mark| total + mark);
//! assert_eq!(passed, 24);
//! ```

mod foldable;
mod functor;
mod higher;

pub use foldable::Foldable;
pub use functor::FunctorMut;
pub use higher::TypeConstructor;

pub(crate) use foldable::flip;
