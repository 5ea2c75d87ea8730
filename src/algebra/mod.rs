//! Set algebra over [`SetLike`] receivers.
//!
//! Every operation takes its receiver explicitly. Operations fall into
//! three groups:
//!
//! - Combining: [`union`], [`intersect`], [`xor`], [`subtract`],
//!   [`relative_complement`]. Operands are `&dyn Iterable`, so sets and
//!   plain sequences may be mixed.
//! - Traversal: [`filter`], [`map`], [`some`], [`every`], [`find`].
//! - Bulk mutation: [`add_elements`], [`remove_elements`].
//!
//! Only the bulk mutations modify their receiver. Every other operation
//! leaves its inputs untouched and, when it produces a set, constructs a
//! fresh one through the receiver's result type selector
//! ([`SetLike::Species`]).
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashSet;
//! use lambars_sets::{intersect, subtract, union, xor};
//!
//! let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
//! let other: HashSet<i32> = [1, 4].into_iter().collect();
//! let list = vec![2, 5];
//!
//! let all = union(&set, &[&other, &list]).unwrap();
//! assert_eq!(all, HashSet::from([1, 2, 3, 4, 5]));
//!
//! let remaining = subtract(&set, &[&other, &list]).unwrap();
//! assert_eq!(remaining, HashSet::from([3]));
//!
//! let common = intersect(&set, &[&other, &list]).unwrap();
//! assert!(common.is_empty());
//!
//! let exclusive = xor(&set, &[&other]).unwrap();
//! assert_eq!(exclusive, HashSet::from([2, 3, 4]));
//! ```

mod bulk;
mod combine;
mod traverse;

pub use bulk::{add_elements, remove_elements};
pub use combine::{intersect, relative_complement, subtract, union, xor};
pub use traverse::{every, filter, find, map, some};

use crate::capability::{Iterable, SetLike};
use crate::error::ConfigurationError;
use crate::species::{ResultType, resolve_result_type};

/// The set type derived from receiver `S` by its result type selector.
pub type Derived<S> = <<S as SetLike>::Species as ResultType<<S as Iterable>::Element>>::Output;

/// Builds a set of type `R::Output` holding every element of `operand`.
///
/// Converting an operand this way gives constant-time membership tests even
/// when the operand is a plain sequence.
fn normalize<T, R>(
    species: &R,
    operand: &dyn Iterable<Element = T>,
) -> Result<R::Output, ConfigurationError>
where
    T: Clone,
    R: ResultType<T>,
{
    let mut normalized = species.construct(operand.len_hint())?;
    for element in operand.elements() {
        normalized.insert(element.clone());
    }
    Ok(normalized)
}

/// Copies `receiver` into a fresh set of its derived type.
fn copy_of<S>(receiver: &S, capacity_hint: usize) -> Result<Derived<S>, ConfigurationError>
where
    S: SetLike,
    S::Element: Clone,
{
    let mut copy = resolve_result_type(receiver).construct(capacity_hint)?;
    for element in receiver.elements() {
        copy.insert(element.clone());
    }
    Ok(copy)
}
