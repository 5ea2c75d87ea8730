//! Combining operations: union, intersection, symmetric difference, and
//! subtraction over a receiver and any number of operands.

use super::{Derived, copy_of, normalize};
use crate::capability::{Iterable, SetLike};
use crate::error::{PreconditionError, PreconditionKind, SetAlgebraResult, rejected};
use crate::species::{ResultType, resolve_result_type};

/// Returns a new set holding every element of `receiver` and of each operand.
///
/// With no operands the result is a copy of `receiver`. Duplicates across
/// operands collapse.
///
/// # Errors
///
/// Returns [`SetAlgebraError::Configuration`](crate::SetAlgebraError) if the
/// receiver's result type cannot be constructed.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use lambars_sets::union;
///
/// let set: HashSet<i32> = [1, 2].into_iter().collect();
/// let other: HashSet<i32> = [1, 4, 5].into_iter().collect();
///
/// assert_eq!(union(&set, &[&other]).unwrap(), HashSet::from([1, 2, 4, 5]));
/// assert_eq!(union(&set, &[&other, &[4, 6, 7]]).unwrap(), HashSet::from([1, 2, 4, 5, 6, 7]));
/// ```
pub fn union<S>(
    receiver: &S,
    operands: &[&dyn Iterable<Element = S::Element>],
) -> SetAlgebraResult<Derived<S>>
where
    S: SetLike,
    S::Element: Clone,
{
    tracing::trace!(
        operation = "union",
        operands = operands.len(),
        "combining sets"
    );

    let operand_hint: usize = operands.iter().map(|operand| operand.len_hint()).sum();
    let mut result =
        copy_of(receiver, receiver.len() + operand_hint).map_err(|error| rejected("union", error))?;
    for operand in operands {
        for element in operand.elements() {
            result.insert(element.clone());
        }
    }
    Ok(result)
}

/// Returns a new set holding the elements present in `receiver` and in
/// every operand.
///
/// Each input is first converted to the receiver's result type, so
/// membership tests are as cheap as the result type allows regardless of
/// whether an operand is a set or a sequence. The result does not depend on
/// the order of the inputs.
///
/// # Errors
///
/// Returns [`SetAlgebraError::Precondition`](crate::SetAlgebraError) with
/// [`PreconditionKind::MissingOperand`] if `operands` is empty, and
/// [`SetAlgebraError::Configuration`](crate::SetAlgebraError) if the result
/// type cannot be constructed.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use lambars_sets::intersect;
///
/// let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
///
/// assert_eq!(intersect(&set, &[&vec![2, 3, 4]]).unwrap(), HashSet::from([2, 3]));
/// assert!(intersect(&set, &[&[1, 4], &[2, 5]]).unwrap().is_empty());
/// assert!(intersect(&set, &[]).is_err());
/// ```
pub fn intersect<S>(
    receiver: &S,
    operands: &[&dyn Iterable<Element = S::Element>],
) -> SetAlgebraResult<Derived<S>>
where
    S: SetLike,
    S::Element: Clone,
{
    tracing::trace!(
        operation = "intersect",
        operands = operands.len(),
        "combining sets"
    );

    if operands.is_empty() {
        let missing = PreconditionKind::MissingOperand { required: 1 };
        let error = PreconditionError::new("intersect", missing);
        return Err(rejected("intersect", error));
    }

    let species = resolve_result_type(receiver);
    let normalized = std::iter::once(receiver as &dyn Iterable<Element = S::Element>)
        .chain(operands.iter().copied())
        .map(|operand| normalize(&species, operand))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| rejected("intersect", error))?;

    // The smallest input bounds the result.
    let smallest = normalized.iter().min_by_key(|set| set.len());
    let mut result = species
        .construct(smallest.map_or(0, SetLike::len))
        .map_err(|error| rejected("intersect", error))?;
    if let Some(smallest) = smallest {
        for element in smallest.elements() {
            if normalized.iter().all(|set| set.contains(element)) {
                result.insert(element.clone());
            }
        }
    }
    Ok(result)
}

/// Returns a new set holding the elements present in exactly one of the
/// inputs (`receiver` plus every operand).
///
/// With a single operand this is the classical symmetric difference. With
/// more, an element shared by any two inputs is excluded, even if a third
/// input lacks it. With no operands the result is a copy of `receiver`.
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
/// use lambars_sets::xor;
///
/// let set: HashSet<i32> = [1, 2].into_iter().collect();
///
/// assert_eq!(xor(&set, &[&[2, 3]]).unwrap(), HashSet::from([1, 3]));
/// assert_eq!(xor(&set, &[&[2, 3], &[3, 4]]).unwrap(), HashSet::from([1, 4]));
/// ```
pub fn xor<S>(
    receiver: &S,
    operands: &[&dyn Iterable<Element = S::Element>],
) -> SetAlgebraResult<Derived<S>>
where
    S: SetLike,
    S::Element: Clone,
{
    tracing::trace!(
        operation = "xor",
        operands = operands.len(),
        "combining sets"
    );

    let species = resolve_result_type(receiver);
    let normalized = std::iter::once(receiver as &dyn Iterable<Element = S::Element>)
        .chain(operands.iter().copied())
        .map(|operand| normalize(&species, operand))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| rejected("xor", error))?;

    let capacity_hint = normalized.iter().map(SetLike::len).sum();
    let mut result = species
        .construct(capacity_hint)
        .map_err(|error| rejected("xor", error))?;
    for (index, set) in normalized.iter().enumerate() {
        for element in set.elements() {
            let shared = normalized
                .iter()
                .enumerate()
                .any(|(other_index, other)| other_index != index && other.contains(element));
            if !shared {
                result.insert(element.clone());
            }
        }
    }
    Ok(result)
}

/// Returns a new set holding the elements of `receiver` that appear in none
/// of the operands.
///
/// With no operands the result is a copy of `receiver`.
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
/// use lambars_sets::subtract;
///
/// let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
/// let other: HashSet<i32> = [1, 4].into_iter().collect();
///
/// assert_eq!(subtract(&set, &[&other, &vec![2, 5]]).unwrap(), HashSet::from([3]));
/// ```
pub fn subtract<S>(
    receiver: &S,
    operands: &[&dyn Iterable<Element = S::Element>],
) -> SetAlgebraResult<Derived<S>>
where
    S: SetLike,
    S::Element: Clone,
{
    tracing::trace!(
        operation = "subtract",
        operands = operands.len(),
        "combining sets"
    );

    let mut result =
        copy_of(receiver, receiver.len()).map_err(|error| rejected("subtract", error))?;
    for operand in operands {
        for element in operand.elements() {
            result.remove(element);
        }
    }
    Ok(result)
}

/// Returns the complement of `other` relative to `receiver`: the elements
/// of `receiver` not in `other`.
///
/// This is [`subtract`] with exactly one operand.
///
/// # Errors
///
/// Returns [`SetAlgebraError::Configuration`](crate::SetAlgebraError) if the
/// result type cannot be constructed.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use lambars_sets::relative_complement;
///
/// let set: BTreeSet<i32> = [1, 2].into_iter().collect();
/// assert_eq!(relative_complement(&set, &vec![1, 3]).unwrap(), BTreeSet::from([2]));
/// ```
pub fn relative_complement<S>(
    receiver: &S,
    other: &dyn Iterable<Element = S::Element>,
) -> SetAlgebraResult<Derived<S>>
where
    S: SetLike,
    S::Element: Clone,
{
    subtract(receiver, &[other])
}
