//! Read-only traversal: filter, map, some, every, find.
//!
//! Callbacks receive `(element, element, receiver)`. The element is passed
//! twice because a set's value and key coincide, matching callbacks written
//! for map-like collections. Context a callback needs is captured by the
//! closure itself.
//!
//! Traversal follows the receiver's native iteration order.

use super::Derived;
use crate::capability::SetLike;
use crate::error::{SetAlgebraResult, rejected};
use crate::species::{ResultType, resolve_result_type};

/// Returns a new set holding the elements for which `predicate` returns
/// `true`.
///
/// # Errors
///
/// Returns [`SetAlgebraError::Configuration`](crate::SetAlgebraError) if the
/// result type cannot be constructed.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use lambars_sets::filter;
///
/// let set: HashSet<i32> = (1..=6).collect();
/// let even = filter(&set, |element, _, _| element % 2 == 0).unwrap();
/// assert_eq!(even, HashSet::from([2, 4, 6]));
/// ```
pub fn filter<S, P>(receiver: &S, mut predicate: P) -> SetAlgebraResult<Derived<S>>
where
    S: SetLike,
    S::Element: Clone,
    P: FnMut(&S::Element, &S::Element, &S) -> bool,
{
    tracing::trace!(
        operation = "filter",
        receiver_len = receiver.len(),
        "traversing set"
    );

    let mut result = resolve_result_type(receiver)
        .construct(receiver.len())
        .map_err(|error| rejected("filter", error))?;
    for element in receiver.elements() {
        if predicate(element, element, receiver) {
            result.insert(element.clone());
        }
    }
    Ok(result)
}

/// Returns a new set holding `transform` applied to every element.
///
/// Elements that transform to equal values collapse into one, so the result
/// may be smaller than the receiver. The result type is the receiver's
/// selector applied to the transformed element type.
///
/// # Errors
///
/// Returns [`SetAlgebraError::Configuration`](crate::SetAlgebraError) if the
/// result type cannot be constructed.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use lambars_sets::map;
///
/// let set: HashSet<i32> = [-2, -1, 1, 2, 3].into_iter().collect();
/// let magnitudes = map(&set, |element, _, _| element.unsigned_abs()).unwrap();
/// assert_eq!(magnitudes, HashSet::from([1, 2, 3]));
///
/// let labels = map(&set, |element, _, _| format!("#{element}")).unwrap();
/// assert!(labels.contains("#-2"));
/// ```
pub fn map<S, U, F>(
    receiver: &S,
    mut transform: F,
) -> SetAlgebraResult<<S::Species as ResultType<U>>::Output>
where
    S: SetLike,
    S::Species: ResultType<U>,
    F: FnMut(&S::Element, &S::Element, &S) -> U,
{
    tracing::trace!(
        operation = "map",
        receiver_len = receiver.len(),
        "traversing set"
    );

    let species = resolve_result_type(receiver);
    let mut result = <S::Species as ResultType<U>>::construct(&species, receiver.len())
        .map_err(|error| rejected("map", error))?;
    for element in receiver.elements() {
        result.insert(transform(element, element, receiver));
    }
    Ok(result)
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// Stops at the first element that satisfies `predicate`. An empty receiver
/// yields `false`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use lambars_sets::some;
///
/// let set: HashSet<i32> = [1, 3, 4].into_iter().collect();
/// assert!(some(&set, |element, _, _| element % 2 == 0));
/// assert!(!some(&HashSet::<i32>::new(), |_, _, _| true));
/// ```
pub fn some<S, P>(receiver: &S, mut predicate: P) -> bool
where
    S: SetLike,
    P: FnMut(&S::Element, &S::Element, &S) -> bool,
{
    tracing::trace!(
        operation = "some",
        receiver_len = receiver.len(),
        "traversing set"
    );

    receiver
        .elements()
        .any(|element| predicate(element, element, receiver))
}

/// Returns `true` if `predicate` holds for every element.
///
/// Stops at the first element that fails `predicate`. An empty receiver
/// yields `true`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use lambars_sets::every;
///
/// let set: HashSet<i32> = [2, 4, 6].into_iter().collect();
/// assert!(every(&set, |element, _, _| element % 2 == 0));
/// assert!(every(&HashSet::<i32>::new(), |_, _, _| false));
/// ```
pub fn every<S, P>(receiver: &S, mut predicate: P) -> bool
where
    S: SetLike,
    P: FnMut(&S::Element, &S::Element, &S) -> bool,
{
    tracing::trace!(
        operation = "every",
        receiver_len = receiver.len(),
        "traversing set"
    );

    receiver
        .elements()
        .all(|element| predicate(element, element, receiver))
}

/// Returns the first element, in iteration order, for which `predicate`
/// holds, or `None` if there is none.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use lambars_sets::find;
///
/// let set: BTreeSet<i32> = [5, 10, 15].into_iter().collect();
/// assert_eq!(find(&set, |element, _, _| *element > 7), Some(&10));
/// assert_eq!(find(&set, |element, _, _| *element > 70), None);
/// ```
pub fn find<S, P>(receiver: &S, mut predicate: P) -> Option<&S::Element>
where
    S: SetLike,
    P: FnMut(&S::Element, &S::Element, &S) -> bool,
{
    tracing::trace!(
        operation = "find",
        receiver_len = receiver.len(),
        "traversing set"
    );

    receiver
        .elements()
        .find(|element| predicate(*element, *element, receiver))
}
