//! The [`SetLike`] capability and its implementations for std sets.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use super::Iterable;
use crate::species::{BTreeSpecies, HashSpecies, ResultType};

/// A mutable collection of unique elements.
///
/// Implementing `SetLike` is how a type declares that it can be the
/// receiver of the set algebra operations: it must support membership
/// testing, insertion, removal, enumeration (through [`Iterable`]), and
/// report its cardinality. Element equality is whatever the implementing
/// collection uses; the algebra never compares elements itself.
///
/// The associated [`Species`](SetLike::Species) names the result type that
/// operations construct when they derive a new set from this one.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use lambars_sets::SetLike;
///
/// fn count_new<S: SetLike<Element = i32>>(set: &mut S, candidates: &[i32]) -> usize {
///     candidates
///         .iter()
///         .filter(|candidate| SetLike::insert(set, **candidate))
///         .count()
/// }
///
/// let mut set: HashSet<i32> = [1, 2].into_iter().collect();
/// assert_eq!(count_new(&mut set, &[2, 3, 4]), 2);
/// assert_eq!(SetLike::len(&set), 4);
/// ```
pub trait SetLike: Iterable {
    /// The result type selector for sets derived from this one.
    type Species: ResultType<Self::Element>;

    /// Returns `true` if `element` is a member.
    fn contains(&self, element: &Self::Element) -> bool;

    /// Adds `element`, returning `true` if it was not already present.
    fn insert(&mut self, element: Self::Element) -> bool;

    /// Removes `element`, returning `true` if it was present.
    fn remove(&mut self, element: &Self::Element) -> bool;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the set has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the result type selector for sets derived from this one.
    fn species(&self) -> Self::Species;
}

impl<T, H> SetLike for HashSet<T, H>
where
    T: Hash + Eq,
    H: BuildHasher + Clone,
{
    type Species = HashSpecies<H>;

    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    #[inline]
    fn insert(&mut self, element: T) -> bool {
        Self::insert(self, element)
    }

    #[inline]
    fn remove(&mut self, element: &T) -> bool {
        Self::remove(self, element)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    /// Derived sets reuse a clone of this set's hasher.
    fn species(&self) -> HashSpecies<H> {
        HashSpecies::with_hasher(self.hasher().clone())
    }
}

impl<T: Ord> SetLike for BTreeSet<T> {
    type Species = BTreeSpecies;

    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    #[inline]
    fn insert(&mut self, element: T) -> bool {
        Self::insert(self, element)
    }

    #[inline]
    fn remove(&mut self, element: &T) -> bool {
        Self::remove(self, element)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn species(&self) -> BTreeSpecies {
        BTreeSpecies
    }
}
