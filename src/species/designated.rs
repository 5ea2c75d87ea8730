//! A set paired with an explicitly designated result type.

use std::fmt;

use super::ResultType;
use crate::capability::{Iterable, SetLike};

/// Wraps a set `C` so that sets derived from it are built by `R`.
///
/// Membership, insertion, removal, and enumeration delegate to the wrapped
/// set; only [`SetLike::species`] changes. This is the explicit replacement
/// for a subtype that redirects its derived collections to another type.
///
/// # Examples
///
/// ```rust
/// use std::collections::{BTreeSet, HashSet};
/// use lambars_sets::{filter, BTreeSpecies, Designated, SetLike};
///
/// let mut designated = Designated::new(HashSet::new(), BTreeSpecies);
/// SetLike::insert(&mut designated, 5);
/// SetLike::insert(&mut designated, 2);
///
/// let kept: BTreeSet<i32> = filter(&designated, |element, _, _| *element > 1).unwrap();
/// assert_eq!(kept.into_iter().collect::<Vec<_>>(), vec![2, 5]);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Designated<C, R> {
    set: C,
    species: R,
}

impl<C, R> Designated<C, R> {
    /// Pairs `set` with the result type selector `species`.
    #[must_use]
    pub const fn new(set: C, species: R) -> Self {
        Self { set, species }
    }

    /// Returns the wrapped set.
    pub const fn inner(&self) -> &C {
        &self.set
    }

    /// Returns the designated selector.
    pub const fn designated_species(&self) -> &R {
        &self.species
    }

    /// Unwraps the set, discarding the selector.
    pub fn into_inner(self) -> C {
        self.set
    }
}

impl<C: fmt::Debug, R: fmt::Debug> fmt::Debug for Designated<C, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Designated")
            .field("set", &self.set)
            .field("species", &self.species)
            .finish()
    }
}

impl<C: Iterable, R> Iterable for Designated<C, R> {
    type Element = C::Element;

    fn elements(&self) -> Box<dyn Iterator<Item = &C::Element> + '_> {
        self.set.elements()
    }

    fn len_hint(&self) -> usize {
        self.set.len_hint()
    }
}

impl<C, R> SetLike for Designated<C, R>
where
    C: SetLike,
    R: ResultType<C::Element> + Clone,
{
    type Species = R;

    fn contains(&self, element: &C::Element) -> bool {
        self.set.contains(element)
    }

    fn insert(&mut self, element: C::Element) -> bool {
        self.set.insert(element)
    }

    fn remove(&mut self, element: &C::Element) -> bool {
        self.set.remove(element)
    }

    fn len(&self) -> usize {
        self.set.len()
    }

    fn species(&self) -> R {
        self.species.clone()
    }
}
