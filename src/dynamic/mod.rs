//! Set algebra across dynamically-typed boundaries.
//!
//! The static operations in this crate let the compiler check that a
//! receiver is [`SetLike`](crate::SetLike) and that operands are
//! [`Iterable`]. Input that arrives without that guarantee, such as a
//! deserialized payload, is represented as a [`Value`] and goes through
//! the functions in this module instead. Each one probes its inputs at
//! runtime and reports a [`PreconditionError`] before doing any work:
//!
//! - a receiver that is not a [`Value::Set`] is an
//!   [`InvalidReceiver`](PreconditionKind::InvalidReceiver)
//! - an operand that is neither a set nor a sequence is an
//!   [`InvalidArgument`](PreconditionKind::InvalidArgument)
//! - a missing callback is [`NotCallable`](PreconditionKind::NotCallable)
//!
//! Once validated, the work is delegated to the static operations.
//!
//! # Examples
//!
//! ```rust
//! use lambars_sets::dynamic::{self, Value};
//! use lambars_sets::PreconditionKind;
//!
//! let set = Value::set([1, 2]);
//! let list = Value::sequence([1, 4, 5]);
//!
//! assert_eq!(dynamic::union(&set, &[list.clone()]).unwrap(), Value::set([1, 2, 4, 5]));
//!
//! let error = dynamic::union(&list, &[set]).unwrap_err();
//! assert!(error.is_precondition());
//! ```

mod value;

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

use crate::capability::Iterable;
use crate::error::{PreconditionError, PreconditionKind, SetAlgebraResult, rejected};

pub use value::Value;

/// Returns `true` if `candidate` can be the receiver of a set operation.
///
/// # Examples
///
/// ```rust
/// use lambars_sets::dynamic::{is_set_like, Value};
///
/// assert!(is_set_like(&Value::set([1])));
/// assert!(!is_set_like(&Value::sequence([1])));
/// assert!(!is_set_like(&Value::<i32>::Null));
/// ```
pub const fn is_set_like<T: Hash + Eq>(candidate: &Value<T>) -> bool {
    candidate.as_set().is_some()
}

/// Returns `true` if `candidate` can be an operand of a set operation.
pub fn is_iterable<T: Hash + Eq>(candidate: &Value<T>) -> bool {
    candidate.as_iterable().is_some()
}

fn precondition(operation: &'static str, kind: PreconditionKind) -> crate::SetAlgebraError {
    rejected(operation, PreconditionError::new(operation, kind))
}

fn receiver<'a, T: Hash + Eq>(
    operation: &'static str,
    candidate: &'a Value<T>,
) -> SetAlgebraResult<&'a HashSet<T>> {
    candidate
        .as_set()
        .ok_or_else(|| precondition(operation, PreconditionKind::InvalidReceiver))
}

fn receiver_mut<'a, T: Hash + Eq>(
    operation: &'static str,
    candidate: &'a mut Value<T>,
) -> SetAlgebraResult<&'a mut HashSet<T>> {
    candidate
        .as_set_mut()
        .ok_or_else(|| precondition(operation, PreconditionKind::InvalidReceiver))
}

fn operands<'a, T: Hash + Eq>(
    operation: &'static str,
    candidates: &'a [Value<T>],
) -> SetAlgebraResult<Vec<&'a dyn Iterable<Element = T>>> {
    candidates
        .iter()
        .enumerate()
        .map(|(position, candidate)| {
            let invalid = PreconditionKind::InvalidArgument { position };
            candidate
                .as_iterable()
                .ok_or_else(|| precondition(operation, invalid))
        })
        .collect()
}

fn callback<F>(operation: &'static str, candidate: Option<F>) -> SetAlgebraResult<F> {
    let missing = PreconditionKind::NotCallable { position: 0 };
    candidate.ok_or_else(|| precondition(operation, missing))
}

// =============================================================================
// Combining operations
// =============================================================================

/// Dynamic counterpart of [`union`](crate::union).
///
/// # Errors
///
/// Returns a precondition error if `receiver` is not a set or an operand is
/// not iterable.
pub fn union<T>(
    receiver_value: &Value<T>,
    operand_values: &[Value<T>],
) -> SetAlgebraResult<Value<T>>
where
    T: Hash + Eq + Clone,
{
    let set = receiver("union", receiver_value)?;
    let operand_list = operands("union", operand_values)?;
    crate::union(set, &operand_list).map(Value::Set)
}

/// Dynamic counterpart of [`intersect`](crate::intersect).
///
/// # Errors
///
/// Returns a precondition error if `receiver` is not a set, an operand is
/// not iterable, or no operand is given.
pub fn intersect<T>(
    receiver_value: &Value<T>,
    operand_values: &[Value<T>],
) -> SetAlgebraResult<Value<T>>
where
    T: Hash + Eq + Clone,
{
    let set = receiver("intersect", receiver_value)?;
    let operand_list = operands("intersect", operand_values)?;
    crate::intersect(set, &operand_list).map(Value::Set)
}

/// Dynamic counterpart of [`xor`](crate::xor).
///
/// # Errors
///
/// Returns a precondition error if `receiver` is not a set or an operand is
/// not iterable.
pub fn xor<T>(receiver_value: &Value<T>, operand_values: &[Value<T>]) -> SetAlgebraResult<Value<T>>
where
    T: Hash + Eq + Clone,
{
    let set = receiver("xor", receiver_value)?;
    let operand_list = operands("xor", operand_values)?;
    crate::xor(set, &operand_list).map(Value::Set)
}

/// Dynamic counterpart of [`subtract`](crate::subtract).
///
/// # Errors
///
/// Returns a precondition error if `receiver` is not a set or an operand is
/// not iterable.
pub fn subtract<T>(
    receiver_value: &Value<T>,
    operand_values: &[Value<T>],
) -> SetAlgebraResult<Value<T>>
where
    T: Hash + Eq + Clone,
{
    let set = receiver("subtract", receiver_value)?;
    let operand_list = operands("subtract", operand_values)?;
    crate::subtract(set, &operand_list).map(Value::Set)
}

// =============================================================================
// Traversal
// =============================================================================

/// Dynamic counterpart of [`filter`](crate::filter).
///
/// # Errors
///
/// Returns a precondition error if `receiver` is not a set or `predicate`
/// is `None`.
pub fn filter<T, P>(receiver_value: &Value<T>, predicate: Option<P>) -> SetAlgebraResult<Value<T>>
where
    T: Hash + Eq + Clone,
    P: FnMut(&T, &T, &HashSet<T>) -> bool,
{
    let set = receiver("filter", receiver_value)?;
    let predicate = callback("filter", predicate)?;
    crate::filter(set, predicate).map(Value::Set)
}

/// Dynamic counterpart of [`map`](crate::map).
///
/// # Errors
///
/// Returns a precondition error if `receiver` is not a set or `transform`
/// is `None`.
///
/// # Examples
///
/// ```rust
/// use lambars_sets::dynamic::{self, Value};
///
/// let set = Value::set([1, 2, 3]);
/// let halves = dynamic::map(&set, Some(|element: &i32, _: &i32, _: &_| element / 2)).unwrap();
/// assert_eq!(halves, Value::set([0, 1]));
/// ```
pub fn map<T, U, F>(receiver_value: &Value<T>, transform: Option<F>) -> SetAlgebraResult<Value<U>>
where
    T: Hash + Eq,
    U: Hash + Eq,
    F: FnMut(&T, &T, &HashSet<T>) -> U,
{
    let set = receiver("map", receiver_value)?;
    let transform = callback("map", transform)?;
    crate::map(set, transform).map(Value::Set)
}

/// Dynamic counterpart of [`some`](crate::some).
///
/// # Errors
///
/// Returns a precondition error if `receiver` is not a set or `predicate`
/// is `None`.
pub fn some<T, P>(receiver_value: &Value<T>, predicate: Option<P>) -> SetAlgebraResult<bool>
where
    T: Hash + Eq,
    P: FnMut(&T, &T, &HashSet<T>) -> bool,
{
    let set = receiver("some", receiver_value)?;
    let predicate = callback("some", predicate)?;
    Ok(crate::some(set, predicate))
}

/// Dynamic counterpart of [`every`](crate::every).
///
/// # Errors
///
/// Returns a precondition error if `receiver` is not a set or `predicate`
/// is `None`.
pub fn every<T, P>(receiver_value: &Value<T>, predicate: Option<P>) -> SetAlgebraResult<bool>
where
    T: Hash + Eq,
    P: FnMut(&T, &T, &HashSet<T>) -> bool,
{
    let set = receiver("every", receiver_value)?;
    let predicate = callback("every", predicate)?;
    Ok(crate::every(set, predicate))
}

/// Dynamic counterpart of [`find`](crate::find).
///
/// # Errors
///
/// Returns a precondition error if `receiver` is not a set or `predicate`
/// is `None`. A missing match is `Ok(None)`, not an error.
pub fn find<T, P>(
    receiver_value: &Value<T>,
    predicate: Option<P>,
) -> SetAlgebraResult<Option<&T>>
where
    T: Hash + Eq,
    P: FnMut(&T, &T, &HashSet<T>) -> bool,
{
    let set = receiver("find", receiver_value)?;
    let predicate = callback("find", predicate)?;
    Ok(crate::find(set, predicate))
}

// =============================================================================
// Bulk mutation
// =============================================================================

/// Dynamic counterpart of [`add_elements`](crate::add_elements).
///
/// # Errors
///
/// Returns a precondition error, leaving `receiver` untouched, if it is not
/// a set.
pub fn add_elements<T, I>(
    receiver_value: &mut Value<T>,
    elements: I,
) -> SetAlgebraResult<&mut Value<T>>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    crate::add_elements(receiver_mut("add_elements", receiver_value)?, elements);
    Ok(receiver_value)
}

/// Dynamic counterpart of [`remove_elements`](crate::remove_elements).
///
/// # Errors
///
/// Returns a precondition error, leaving `receiver` untouched, if it is not
/// a set.
pub fn remove_elements<T, I>(
    receiver_value: &mut Value<T>,
    elements: I,
) -> SetAlgebraResult<&mut Value<T>>
where
    T: Hash + Eq,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    crate::remove_elements(receiver_mut("remove_elements", receiver_value)?, elements);
    Ok(receiver_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetAlgebraError;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type Predicate = fn(&i32, &i32, &HashSet<i32>) -> bool;

    /// Counts `debug` events.
    #[derive(Clone, Default)]
    struct DebugEvents(Arc<AtomicUsize>);

    impl DebugEvents {
        fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl tracing::Subscriber for DebugEvents {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }

        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}

        fn event(&self, event: &tracing::Event<'_>) {
            if *event.metadata().level() == tracing::Level::DEBUG {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn enter(&self, _: &tracing::span::Id) {}

        fn exit(&self, _: &tracing::span::Id) {}
    }

    fn precondition_kind(error: SetAlgebraError) -> PreconditionKind {
        match error {
            SetAlgebraError::Precondition(precondition) => precondition.kind,
            SetAlgebraError::Configuration(configuration) => {
                panic!("unexpected configuration error: {configuration}")
            }
        }
    }

    #[rstest]
    #[case(Value::Null)]
    #[case(Value::Scalar(1))]
    #[case(Value::sequence([1, 2]))]
    fn test_non_set_receiver_is_rejected(#[case] candidate: Value<i32>) {
        assert!(!is_set_like(&candidate));
        let error = union(&candidate, &[]).unwrap_err();
        assert_eq!(precondition_kind(error), PreconditionKind::InvalidReceiver);
    }

    #[rstest]
    fn test_non_iterable_operand_reports_position() {
        let set = Value::set([1]);
        let error = subtract(&set, &[Value::sequence([1]), Value::Scalar(2)]).unwrap_err();
        assert_eq!(
            precondition_kind(error),
            PreconditionKind::InvalidArgument { position: 1 }
        );
    }

    #[rstest]
    fn test_receiver_checked_before_operands() {
        let error = xor(&Value::<i32>::Null, &[Value::Null]).unwrap_err();
        assert_eq!(precondition_kind(error), PreconditionKind::InvalidReceiver);
    }

    #[rstest]
    fn test_each_rejection_is_logged_once() {
        let events = DebugEvents::default();
        tracing::subscriber::with_default(events.clone(), || {
            let mut scalar = Value::Scalar(1);
            assert!(union(&scalar, &[]).is_err());
            assert!(xor(&Value::set([1]), &[Value::Null]).is_err());
            assert!(add_elements(&mut scalar, [2]).is_err());
            assert!(some(&Value::set([1]), None::<Predicate>).is_err());
        });
        assert_eq!(events.count(), 4);
    }

    #[rstest]
    fn test_missing_callback_is_not_callable() {
        let set = Value::set([1]);
        let error = filter(&set, None::<Predicate>).unwrap_err();
        assert_eq!(
            precondition_kind(error),
            PreconditionKind::NotCallable { position: 0 }
        );
    }

    #[rstest]
    fn test_intersect_without_operands_is_rejected() {
        let error = intersect(&Value::set([1]), &[]).unwrap_err();
        assert_eq!(
            precondition_kind(error),
            PreconditionKind::MissingOperand { required: 1 }
        );
    }

    #[rstest]
    fn test_bulk_mutation_on_invalid_receiver_leaves_it_untouched() {
        let mut sequence = Value::sequence([1, 2]);
        assert!(remove_elements(&mut sequence, [1]).is_err());
        assert!(add_elements(&mut sequence, [3]).is_err());
        assert_eq!(sequence, Value::sequence([1, 2]));
    }

    #[rstest]
    fn test_bulk_mutation_chains() {
        let mut set = Value::set([1, 2, 3]);
        let value = remove_elements(&mut set, [1, 2]).unwrap();
        assert_eq!(*value, Value::set([3]));
    }

    #[rstest]
    fn test_traversal_delegates() {
        let set = Value::set([1, 2, 3]);
        let is_two: Predicate = |element, _, _| *element == 2;
        let is_positive: Predicate = |element, _, _| *element > 0;
        let above_two: Predicate = |element, _, _| *element > 2;

        assert!(some(&set, Some(is_two)).unwrap());
        assert!(every(&set, Some(is_positive)).unwrap());
        assert_eq!(find(&set, Some(above_two)).unwrap(), Some(&3));
    }
}
