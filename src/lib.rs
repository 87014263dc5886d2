//! # cowseq
//!
//! Value-semantic sequences with copy-on-write storage, and the small set of
//! higher-order transforms most array code is built from.
//!
//! ## Overview
//!
//! - **Sequences**: [`CowArray`](sequence::CowArray), a random-access array
//!   where every binding behaves as an independent copy, and
//!   [`ArraySlice`](sequence::ArraySlice), a storage-sharing view onto one
//! - **Transforms**: `map`, `filter`, `reduce`, `flat_map`, `compact_map`,
//!   `last_where` and `slice` on any `[T]` via
//!   [`SequenceOps`](sequence::SequenceOps)
//! - **Type Classes**: `FunctorMut` and `Foldable` over GAT-emulated
//!   higher-kinded types
//!
//! ## Feature Flags
//!
//! - `typeclass`: `TypeConstructor`, `FunctorMut` and `Foldable`
//! - `sequence`: `CowArray`, `ArraySlice`, `SequenceOps`
//! - `arc`: Share buffers through `Arc` instead of `Rc`, making arrays `Send + Sync`
//! - `rayon`: Order-preserving `par_map` / `par_filter` (implies `arc`)
//! - `serde`: Serialize arrays as plain sequences
//! - `full`: Enable all features except `arc` and `rayon`
//!
//! ## Example
//!
//! ```rust
//! use cowseq::prelude::*;
//!
//! let fibs = cow_array![0, 1, 1, 2, 3, 5];
//! let squares = fibs.map(|fib| fib * fib);
//! assert_eq!(squares, [0, 1, 1, 4, 9, 25]);
//!
//! let mut copy = squares.clone();
//! copy.push(64);
//! assert_eq!(squares.len(), 6);
//! assert_eq!(copy.len(), 7);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use cowseq::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "sequence")]
    pub use crate::cow_array;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "sequence")]
pub mod sequence;
