//! Property-based tests shared by the three list encodings.
//!
//! Every encoding must satisfy the same observable laws, and all three must
//! materialize the same logical list to the same `Vec`.

use proptest::prelude::*;
use rstest::rstest;
use sumlist::{algebra, scott, tagged};

// =============================================================================
// Builders
// =============================================================================

/// Builds a tagged list as nested `cons` calls terminated by `empty`.
fn tagged_list(elements: &[i32]) -> tagged::List<i32> {
    elements
        .iter()
        .rev()
        .fold(tagged::empty(), |tail, element| tagged::cons(*element, tail))
}

/// Builds a Scott list as nested `cons` calls terminated by `empty`.
fn scott_list(elements: &[i32]) -> scott::List<i32> {
    elements
        .iter()
        .rev()
        .fold(scott::empty(), |tail, element| scott::cons(*element, tail))
}

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..20)
}

fn triple(value: &i32) -> i32 {
    value.wrapping_mul(3)
}

fn shift(value: &i32) -> i32 {
    value.wrapping_add(7)
}

// =============================================================================
// Law 1: to_vec(empty()) == []
// =============================================================================

#[rstest]
fn empty_materializes_to_empty_vec() {
    assert!(tagged::to_vec(&tagged::empty::<i32>()).is_empty());
    assert!(scott::to_vec(&scott::empty::<i32>()).is_empty());
    assert!(algebra::to_vec(&algebra::empty::<i32>()).is_empty());
}

proptest! {
    // =========================================================================
    // Law 2: to_vec(cons(x, xs)) == [x, ..to_vec(xs)]
    // =========================================================================

    #[test]
    fn prop_tagged_cons_unfolds(element: i32, elements in small_vec()) {
        let tail = tagged_list(&elements);
        let mut expected = vec![element];
        expected.extend(tagged::to_vec(&tail));
        prop_assert_eq!(tagged::to_vec(&tagged::cons(element, tail)), expected);
    }

    #[test]
    fn prop_scott_cons_unfolds(element: i32, elements in small_vec()) {
        let tail = scott_list(&elements);
        let mut expected = vec![element];
        expected.extend(scott::to_vec(&tail));
        prop_assert_eq!(scott::to_vec(&scott::cons(element, tail)), expected);
    }

    #[test]
    fn prop_algebra_cons_unfolds(element: i32, elements in small_vec()) {
        let mut expected = vec![element];
        expected.extend(algebra::to_vec(&elements));
        prop_assert_eq!(algebra::to_vec(&algebra::cons(element, elements)), expected);
    }

    // =========================================================================
    // Law 3: to_vec(map(list, f)) == to_vec(list).map(f)
    // =========================================================================

    #[test]
    fn prop_tagged_map_commutes_with_to_vec(elements in small_vec()) {
        let list = tagged_list(&elements);
        let expected: Vec<i32> = elements.iter().map(triple).collect();
        prop_assert_eq!(tagged::to_vec(&tagged::map(&list, triple)), expected);
    }

    #[test]
    fn prop_scott_map_commutes_with_to_vec(elements in small_vec()) {
        let list = scott_list(&elements);
        let expected: Vec<i32> = elements.iter().map(triple).collect();
        prop_assert_eq!(scott::to_vec(&scott::map(&list, triple)), expected);
    }

    #[test]
    fn prop_algebra_map_commutes_with_to_vec(elements in small_vec()) {
        let expected: Vec<i32> = elements.iter().map(triple).collect();
        prop_assert_eq!(algebra::to_vec(&algebra::map(&elements, triple)), expected);
    }

    // =========================================================================
    // Law 4: identity
    // =========================================================================

    #[test]
    fn prop_tagged_map_identity(elements in small_vec()) {
        let list = tagged_list(&elements);
        prop_assert_eq!(tagged::to_vec(&tagged::map(&list, |n| *n)), tagged::to_vec(&list));
    }

    #[test]
    fn prop_scott_map_identity(elements in small_vec()) {
        let list = scott_list(&elements);
        prop_assert_eq!(scott::to_vec(&scott::map(&list, |n| *n)), scott::to_vec(&list));
    }

    #[test]
    fn prop_algebra_map_identity(elements in small_vec()) {
        let mapped = algebra::map(&elements, |n: &i32| *n);
        prop_assert_eq!(algebra::to_vec(&mapped), algebra::to_vec(&elements));
    }

    // =========================================================================
    // Law 5: composition
    // =========================================================================

    #[test]
    fn prop_tagged_map_composition(elements in small_vec()) {
        let list = tagged_list(&elements);
        let chained = tagged::map(&tagged::map(&list, triple), shift);
        let composed = tagged::map(&list, |n| shift(&triple(n)));
        prop_assert_eq!(tagged::to_vec(&chained), tagged::to_vec(&composed));
    }

    #[test]
    fn prop_scott_map_composition(elements in small_vec()) {
        let list = scott_list(&elements);
        let chained = scott::map(&scott::map(&list, triple), shift);
        let composed = scott::map(&list, |n| shift(&triple(n)));
        prop_assert_eq!(scott::to_vec(&chained), scott::to_vec(&composed));
    }

    #[test]
    fn prop_algebra_map_composition(elements in small_vec()) {
        let chained = algebra::map(algebra::map(&elements, triple), shift);
        let composed = algebra::map(&elements, |n: &i32| shift(&triple(n)));
        prop_assert_eq!(algebra::to_vec(&chained), algebra::to_vec(&composed));
    }

    // =========================================================================
    // Law 6: cross-encoding equivalence
    // =========================================================================

    #[test]
    fn prop_encodings_materialize_identically(elements in small_vec()) {
        let from_tagged = tagged::to_vec(&tagged_list(&elements));
        let from_scott = scott::to_vec(&scott_list(&elements));
        let from_algebra = algebra::to_vec(&elements);
        prop_assert_eq!(&from_tagged, &elements);
        prop_assert_eq!(&from_scott, &elements);
        prop_assert_eq!(&from_algebra, &elements);
    }

    #[test]
    fn prop_encodings_map_identically(elements in small_vec()) {
        let from_tagged = tagged::to_vec(&tagged::map(&tagged_list(&elements), triple));
        let from_scott = scott::to_vec(&scott::map(&scott_list(&elements), triple));
        let from_algebra = algebra::to_vec(&algebra::map(&elements, triple));
        prop_assert_eq!(&from_tagged, &from_scott);
        prop_assert_eq!(&from_scott, &from_algebra);
    }

    #[test]
    fn prop_conversions_preserve_elements(elements in small_vec()) {
        let tagged_list = tagged_list(&elements);
        let as_scott = algebra::List::fold(&tagged_list, &algebra::ToScott);
        let back = algebra::List::fold(&as_scott, &algebra::ToTagged);
        prop_assert_eq!(back, tagged_list);
    }

    #[test]
    fn prop_length_agrees_across_encodings(elements in small_vec()) {
        let tagged_length = tagged_list(&elements).len();
        let scott_length = scott_list(&elements).len();
        let algebra_length = algebra::List::fold(&elements, &algebra::Length);
        prop_assert_eq!(tagged_length, elements.len());
        prop_assert_eq!(scott_length, elements.len());
        prop_assert_eq!(algebra_length, elements.len());
    }
}

// =============================================================================
// Type class laws
// =============================================================================

#[cfg(feature = "typeclass")]
mod functor_laws {
    use super::*;
    use sumlist::typeclass::{Foldable, Functor};

    fn identity_holds<L>(list: &L) -> bool
    where
        L: Functor<Inner = i32> + Foldable,
        L::WithType<i32>: Foldable<Inner = i32>,
    {
        list.fmap(|n| *n).to_vec() == list.to_vec()
    }

    proptest! {
        #[test]
        fn prop_functor_identity_for_tagged_and_scott(elements in small_vec()) {
            prop_assert!(identity_holds(&tagged_list(&elements)));
            prop_assert!(identity_holds(&scott_list(&elements)));
        }

        #[test]
        fn prop_fold_left_matches_to_vec(elements in small_vec()) {
            let expected = elements.iter().fold(0_i64, |sum, n| sum + i64::from(*n));
            let tagged_sum = tagged_list(&elements).fold_left(0_i64, |sum, n| sum + i64::from(*n));
            let scott_sum = scott_list(&elements).fold_left(0_i64, |sum, n| sum + i64::from(*n));
            prop_assert_eq!(tagged_sum, expected);
            prop_assert_eq!(scott_sum, expected);
        }
    }
}
