//! Property-based tests for set algebra laws.
//!
//! These tests verify that the operations satisfy the algebraic properties
//! expected of union, intersection, symmetric difference, and subtraction,
//! whatever the receiver's result type.

use std::collections::{BTreeSet, HashSet};

use lambars_sets::prelude::*;
use proptest::prelude::*;

fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20..20i32, 0..30)
}

// =============================================================================
// Idempotence Law
// Description: Combining a set with itself changes nothing, except xor
// =============================================================================

proptest! {
    #[test]
    fn prop_union_intersect_idempotence_law(values in elements()) {
        let set: HashSet<i32> = values.into_iter().collect();

        prop_assert_eq!(union(&set, &[&set]).unwrap(), set.clone());
        prop_assert_eq!(intersect(&set, &[&set]).unwrap(), set.clone());
        prop_assert!(xor(&set, &[&set]).unwrap().is_empty());
        prop_assert!(subtract(&set, &[&set]).unwrap().is_empty());
    }
}

// =============================================================================
// Commutativity Law
// Description: The operand order of union, intersect, and xor is irrelevant
// =============================================================================

proptest! {
    #[test]
    fn prop_commutativity_law(left in elements(), right in elements()) {
        let left: BTreeSet<i32> = left.into_iter().collect();
        let right: BTreeSet<i32> = right.into_iter().collect();

        prop_assert_eq!(union(&left, &[&right]).unwrap(), union(&right, &[&left]).unwrap());
        prop_assert_eq!(
            intersect(&left, &[&right]).unwrap(),
            intersect(&right, &[&left]).unwrap()
        );
        prop_assert_eq!(xor(&left, &[&right]).unwrap(), xor(&right, &[&left]).unwrap());
    }
}

// =============================================================================
// Disjoint Xor Law
// Description: The symmetric difference of disjoint sets is their union
// =============================================================================

proptest! {
    #[test]
    fn prop_disjoint_xor_law(values in elements()) {
        let negative: HashSet<i32> = values.iter().copied().filter(|value| *value < 0).collect();
        let rest: HashSet<i32> = values.into_iter().filter(|value| *value >= 0).collect();

        prop_assert_eq!(
            xor(&negative, &[&rest]).unwrap(),
            union(&negative, &[&rest]).unwrap()
        );
    }
}

// =============================================================================
// Partition Law
// Description: Subtracting and intersecting with the same operand splits the
// receiver into two parts whose union is the receiver
// =============================================================================

proptest! {
    #[test]
    fn prop_partition_law(left in elements(), right in elements()) {
        let set: HashSet<i32> = left.into_iter().collect();

        let outside = subtract(&set, &[&right]).unwrap();
        let inside = intersect(&set, &[&right]).unwrap();

        prop_assert!(intersect(&outside, &[&inside]).unwrap().is_empty());
        prop_assert_eq!(union(&outside, &[&inside]).unwrap(), set);
    }
}

// =============================================================================
// Duplicate Operand Law
// Description: Duplicates inside a sequence operand never change a result
// =============================================================================

proptest! {
    #[test]
    fn prop_duplicate_operand_law(left in elements(), right in elements()) {
        let set: HashSet<i32> = left.into_iter().collect();
        let doubled: Vec<i32> = right.iter().chain(right.iter()).copied().collect();

        prop_assert_eq!(union(&set, &[&doubled]).unwrap(), union(&set, &[&right]).unwrap());
        prop_assert_eq!(xor(&set, &[&doubled]).unwrap(), xor(&set, &[&right]).unwrap());
        prop_assert_eq!(
            intersect(&set, &[&doubled]).unwrap(),
            intersect(&set, &[&right]).unwrap()
        );
    }
}

// =============================================================================
// Cardinality Law
// Description: Results are bounded by the sizes of their inputs
// =============================================================================

proptest! {
    #[test]
    fn prop_cardinality_law(left in elements(), right in elements(), extra in elements()) {
        let set: HashSet<i32> = left.into_iter().collect();
        let other: HashSet<i32> = right.into_iter().collect();
        let third: HashSet<i32> = extra.into_iter().collect();

        let joined = union(&set, &[&other, &third]).unwrap();
        prop_assert!(joined.len() <= set.len() + other.len() + third.len());
        prop_assert!(joined.len() >= set.len());

        let common = intersect(&set, &[&other, &third]).unwrap();
        prop_assert!(common.len() <= set.len().min(other.len()).min(third.len()));

        prop_assert!(subtract(&set, &[&other, &third]).unwrap().len() <= set.len());
    }
}

// =============================================================================
// N-ary Xor Law
// Description: An element survives xor exactly when one input contains it
// =============================================================================

proptest! {
    #[test]
    fn prop_nary_xor_membership_law(
        first in elements(),
        second in elements(),
        third in elements()
    ) {
        let first: HashSet<i32> = first.into_iter().collect();
        let second: HashSet<i32> = second.into_iter().collect();
        let third: HashSet<i32> = third.into_iter().collect();

        let result = xor(&first, &[&second, &third]).unwrap();

        for candidate in -20..20 {
            let holders = [&first, &second, &third]
                .iter()
                .filter(|set| set.contains(&candidate))
                .count();
            prop_assert_eq!(result.contains(&candidate), holders == 1);
        }
    }
}

// =============================================================================
// Traversal Laws
// Description: filter agrees with some/every/find on the same predicate
// =============================================================================

proptest! {
    #[test]
    fn prop_filter_agrees_with_predicates_law(values in elements(), threshold in -20..20i32) {
        let set: BTreeSet<i32> = values.into_iter().collect();
        let exceeds = |element: &i32, _: &i32, _: &BTreeSet<i32>| *element > threshold;
        let above = filter(&set, exceeds).unwrap();

        prop_assert_eq!(some(&set, exceeds), !above.is_empty());
        prop_assert_eq!(every(&set, exceeds), above.len() == set.len());
        prop_assert_eq!(find(&set, exceeds), above.iter().next());
    }

    #[test]
    fn prop_map_identity_law(values in elements()) {
        let set: HashSet<i32> = values.into_iter().collect();
        prop_assert_eq!(map(&set, |element, _, _| *element).unwrap(), set);
    }
}

// =============================================================================
// Bulk Mutation Laws
// Description: add_elements and remove_elements agree with union and subtract
// =============================================================================

proptest! {
    #[test]
    fn prop_bulk_mutation_matches_combination_law(left in elements(), right in elements()) {
        let set: HashSet<i32> = left.into_iter().collect();

        let mut grown = set.clone();
        add_elements(&mut grown, right.iter().copied());
        prop_assert_eq!(&grown, &union(&set, &[&right]).unwrap());

        let mut shrunk = set.clone();
        remove_elements(&mut shrunk, &right);
        prop_assert_eq!(shrunk, subtract(&set, &[&right]).unwrap());
    }
}
