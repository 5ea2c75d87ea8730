//! Bulk mutation: the only operations that modify their receiver.

use std::borrow::Borrow;

use crate::capability::SetLike;

/// Inserts every element of `elements` into `receiver` and returns the
/// receiver for chaining.
///
/// Elements already present are left as they are.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use lambars_sets::{add_elements, remove_elements};
///
/// let mut set: HashSet<i32> = [1].into_iter().collect();
/// remove_elements(add_elements(&mut set, [2, 3, 1]), [1]);
/// assert_eq!(set, HashSet::from([2, 3]));
/// ```
pub fn add_elements<S, I>(receiver: &mut S, elements: I) -> &mut S
where
    S: SetLike,
    I: IntoIterator<Item = S::Element>,
{
    let mut added = 0_usize;
    for element in elements {
        added += usize::from(receiver.insert(element));
    }
    tracing::trace!(operation = "add_elements", added, "mutated receiver");
    receiver
}

/// Removes every element of `elements` from `receiver` and returns the
/// receiver for chaining.
///
/// Elements that are not present are ignored; removal never fails.
/// `elements` may yield owned elements or references to them.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use lambars_sets::remove_elements;
///
/// let mut set: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
/// remove_elements(&mut set, [4, 5]);
/// assert_eq!(set, BTreeSet::from([1, 2, 3]));
///
/// let doomed = vec![1, 2];
/// remove_elements(&mut set, &doomed);
/// assert_eq!(set, BTreeSet::from([3]));
/// ```
pub fn remove_elements<S, I>(receiver: &mut S, elements: I) -> &mut S
where
    S: SetLike,
    I: IntoIterator,
    I::Item: Borrow<S::Element>,
{
    let mut removed = 0_usize;
    for element in elements {
        removed += usize::from(receiver.remove(element.borrow()));
    }
    tracing::trace!(operation = "remove_elements", removed, "mutated receiver");
    receiver
}
