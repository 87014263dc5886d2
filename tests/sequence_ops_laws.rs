#![cfg(feature = "sequence")]
//! Property-based tests for the SequenceOps transforms and CowArray value
//! semantics.
//!
//! This module verifies the algebraic laws and invariants of the transforms
//! using proptest.

use cowseq::sequence::{CowArray, SequenceOps};
use proptest::prelude::*;

// =============================================================================
// map Laws
// =============================================================================

proptest! {
    /// Length Law: map never changes the number of elements
    #[test]
    fn prop_map_preserves_length(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let array: CowArray<i32> = elements.iter().copied().collect();
        let mapped = array.map(|value| i64::from(*value) * 2);
        prop_assert_eq!(mapped.len(), array.len());
    }

    /// Pointwise Law: result[i] == transform(input[i])
    #[test]
    fn prop_map_is_pointwise(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let array: CowArray<i32> = elements.iter().copied().collect();
        let transform = |value: &i32| value.wrapping_mul(3).wrapping_sub(1);
        let mapped = array.map(transform);
        for (index, element) in array.iter().enumerate() {
            prop_assert_eq!(mapped[index], transform(element));
        }
    }

    /// Identity Law: map(clone) == original
    #[test]
    fn prop_map_identity(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let array: CowArray<i32> = elements.into_iter().collect();
        prop_assert_eq!(array.map(|value| *value), array);
    }

    /// Composition Law: map(f).map(g) == map(g . f)
    #[test]
    fn prop_map_composition(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let array: CowArray<i32> = elements.into_iter().collect();
        let first = |value: &i32| value.wrapping_add(7);
        let second = |value: &i32| value.wrapping_mul(5);
        let chained = array.map(first).map(second);
        let composed = array.map(|value| second(&first(value)));
        prop_assert_eq!(chained, composed);
    }
}

// =============================================================================
// filter Laws
// =============================================================================

proptest! {
    /// Every kept element satisfies the predicate
    #[test]
    fn prop_filter_keeps_only_matches(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let array: CowArray<i32> = elements.into_iter().collect();
        let filtered = array.filter(|value| value % 2 == 0);
        prop_assert!(filtered.all_match(|value| value % 2 == 0));
        prop_assert!(filtered.len() <= array.len());
    }

    /// Kept elements appear as a subsequence of the input, in order
    #[test]
    fn prop_filter_preserves_relative_order(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let array: CowArray<i32> = elements.into_iter().collect();
        let filtered = array.filter(|value| *value > 0);
        let mut remaining = array.iter();
        for kept in &filtered {
            prop_assert!(remaining.any(|candidate| candidate == kept));
        }
    }

    /// filter(true) is the identity, filter(false) is empty
    #[test]
    fn prop_filter_constant_predicates(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let array: CowArray<i32> = elements.into_iter().collect();
        prop_assert_eq!(array.filter(|_| true), array.clone());
        prop_assert!(array.filter(|_| false).is_empty());
    }

    /// count_where agrees with the length of filter
    #[test]
    fn prop_count_where_matches_filter_length(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let array: CowArray<i32> = elements.into_iter().collect();
        let predicate = |value: &i32| value % 3 == 0;
        prop_assert_eq!(array.count_where(predicate), array.filter(predicate).len());
    }
}

// =============================================================================
// reduce and accumulate Laws
// =============================================================================

proptest! {
    /// reduce agrees with a left fold over the standard iterator
    #[test]
    fn prop_reduce_is_left_fold(
        elements in prop::collection::vec(any::<i64>(), 0..100)
    ) {
        let array: CowArray<i64> = elements.iter().copied().collect();
        let combine = |total: i64, value: &i64| total.wrapping_mul(31).wrapping_add(*value);
        prop_assert_eq!(
            array.reduce(17, combine),
            elements.iter().fold(17, combine)
        );
    }

    /// Empty Law: reduce over nothing returns the initial value
    #[test]
    fn prop_reduce_empty_returns_initial(initial in any::<i64>()) {
        let empty: CowArray<i64> = CowArray::new();
        prop_assert_eq!(empty.reduce(initial, |total, value| total + value), initial);
    }

    /// The last running value of accumulate equals reduce
    #[test]
    fn prop_accumulate_last_equals_reduce(
        elements in prop::collection::vec(any::<i32>(), 1..100)
    ) {
        let array: CowArray<i64> = elements.into_iter().map(i64::from).collect();
        let running = array.accumulate(0_i64, |total, value| total + value);
        let total = array.reduce(0, |total, value| total + value);
        prop_assert_eq!(running.len(), array.len());
        prop_assert_eq!(running.last(), Some(&total));
    }
}

// =============================================================================
// flat_map, compact_map and last_where Laws
// =============================================================================

proptest! {
    /// flat_map length is the sum of the produced sequence lengths
    #[test]
    fn prop_flat_map_length_is_sum(
        elements in prop::collection::vec(0_usize..8, 0..50)
    ) {
        let array: CowArray<usize> = elements.iter().copied().collect();
        let flattened = array.flat_map(|count| vec![*count; *count]);
        prop_assert_eq!(flattened.len(), elements.iter().sum::<usize>());
    }

    /// compact_map equals map followed by discarding None
    #[test]
    fn prop_compact_map_is_map_then_flatten(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let array: CowArray<i32> = elements.into_iter().collect();
        let transform = |value: &i32| (value % 2 != 0).then(|| value.wrapping_neg());
        let expected: Vec<i32> = array.map(transform).iter().flatten().copied().collect();
        prop_assert_eq!(array.compact_map(transform), expected);
    }

    /// last_where returns the element at the largest matching index
    #[test]
    fn prop_last_where_is_last_match(
        elements in prop::collection::vec(any::<i8>(), 0..100)
    ) {
        let array: CowArray<i8> = elements.into_iter().collect();
        let predicate = |value: &i8| *value < 0;
        let expected = array.indices_where(predicate).last().map(|index| &array[*index]);
        prop_assert_eq!(array.last_where(predicate), expected);
    }
}

// =============================================================================
// slice Laws
// =============================================================================

proptest! {
    /// Valid ranges produce exactly end - start elements from the source
    #[test]
    fn prop_slice_valid_range(
        elements in prop::collection::vec(any::<i32>(), 0..100),
        first in any::<prop::sample::Index>(),
        second in any::<prop::sample::Index>()
    ) {
        let array: CowArray<i32> = elements.iter().copied().collect();
        let bound_a = first.index(array.len() + 1);
        let bound_b = second.index(array.len() + 1);
        let (start, end) = (bound_a.min(bound_b), bound_a.max(bound_b));

        let view = array.slice(start..end).unwrap();
        let copy = array.as_slice().slice(start..end).unwrap();
        prop_assert_eq!(view.len(), end - start);
        prop_assert_eq!(view.as_slice(), &elements[start..end]);
        prop_assert_eq!(copy.as_slice(), &elements[start..end]);
    }

    /// Ranges ending past the last element are rejected
    #[test]
    fn prop_slice_past_end_is_error(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        overshoot in 1_usize..10
    ) {
        let array: CowArray<i32> = elements.into_iter().collect();
        let end = array.len() + overshoot;
        let error = array.slice(0..end).unwrap_err();
        prop_assert_eq!(error.end, end);
        prop_assert_eq!(error.length, array.len());
    }
}

// =============================================================================
// Value Semantics Laws
// =============================================================================

proptest! {
    /// A copy never observes mutations made through the original
    #[test]
    fn prop_copy_is_unaffected_by_original_mutation(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        appended in prop::collection::vec(any::<i32>(), 1..10)
    ) {
        let mut original: CowArray<i32> = elements.iter().copied().collect();
        let copy = original.clone();
        original.extend(appended.iter().copied());
        if let Some(first) = original.get_mut(0) {
            *first = first.wrapping_add(1);
        }
        prop_assert_eq!(original.len(), copy.len() + appended.len());
        prop_assert_eq!(copy, elements);
    }

    /// The original never observes mutations made through a copy
    #[test]
    fn prop_original_is_unaffected_by_copy_mutation(
        elements in prop::collection::vec(any::<i32>(), 1..50)
    ) {
        let original: CowArray<i32> = elements.iter().copied().collect();
        let mut copy = original.clone();
        copy.pop();
        copy.insert(0, i32::MIN).unwrap();
        prop_assert_eq!(original, elements);
    }

    /// Transforms never modify their input
    #[test]
    fn prop_transforms_leave_input_untouched(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let array: CowArray<i32> = elements.iter().copied().collect();
        let _ = array.map(|value| value.wrapping_add(1));
        let _ = array.filter(|value| *value > 0);
        let _ = array.compact_map(|value| value.checked_mul(2));
        let _ = array.flat_map(|value| [*value, *value]);
        prop_assert_eq!(array, elements);
    }
}
