//! Order-preserving parallel transforms, available with the `rayon` feature.
//!
//! Results are identical to the sequential [`SequenceOps`](super::SequenceOps)
//! versions: rayon splits the work, and collecting an indexed parallel
//! iterator reassembles the results in the original order. Worth it only
//! when each element costs noticeably more than the thread hand-off.

use rayon::prelude::*;

use super::array::CowArray;

impl<T: Sync> CowArray<T> {
    /// Parallel counterpart of [`SequenceOps::map`](super::SequenceOps::map).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowseq::sequence::CowArray;
    ///
    /// let values: CowArray<u64> = (1..=1000).collect();
    /// let squares = values.par_map(|value| value * value);
    /// assert_eq!(squares[999], 1_000_000);
    /// ```
    pub fn par_map<R, F>(&self, transform: F) -> CowArray<R>
    where
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        let results: Vec<R> = self.as_slice().par_iter().map(transform).collect();
        CowArray::from(results)
    }

    /// Parallel counterpart of
    /// [`SequenceOps::filter`](super::SequenceOps::filter).
    pub fn par_filter<P>(&self, predicate: P) -> Self
    where
        T: Clone + Send,
        P: Fn(&T) -> bool + Sync + Send,
    {
        let results: Vec<T> = self
            .as_slice()
            .par_iter()
            .filter(|element| predicate(*element))
            .cloned()
            .collect();
        Self::from(results)
    }
}
