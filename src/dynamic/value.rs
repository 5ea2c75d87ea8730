//! The [`Value`] type for data arriving without static typing.

use std::collections::HashSet;
use std::hash::Hash;

use crate::capability::Iterable;

/// A value received across a dynamically-typed boundary.
///
/// Only [`Value::Set`] may be the receiver of a set operation; both
/// [`Value::Set`] and [`Value::Sequence`] may be operands.
///
/// With the `serde` feature, values use serde's externally tagged form,
/// e.g. `{"set":[1,2]}` or `"null"`.
///
/// # Examples
///
/// ```rust
/// use lambars_sets::dynamic::Value;
///
/// let value = Value::set([1, 2, 2]);
/// assert_eq!(value.as_set().map(|set| set.len()), Some(2));
/// assert_eq!(Value::<i32>::Null.kind(), "null");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Value<T: Hash + Eq> {
    /// The absence of a value.
    Null,
    /// A single, non-iterable element.
    Scalar(T),
    /// A finite sequence, possibly with duplicates.
    Sequence(Vec<T>),
    /// A set of unique elements.
    Set(HashSet<T>),
}

impl<T: Hash + Eq> Value<T> {
    /// Creates a [`Value::Set`] from `elements`, dropping duplicates.
    pub fn set<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self::Set(elements.into_iter().collect())
    }

    /// Creates a [`Value::Sequence`] from `elements`, keeping duplicates.
    pub fn sequence<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self::Sequence(elements.into_iter().collect())
    }

    /// Returns a short name for the variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Scalar(_) => "scalar",
            Self::Sequence(_) => "sequence",
            Self::Set(_) => "set",
        }
    }

    /// Returns the set if this is a [`Value::Set`].
    #[must_use]
    pub const fn as_set(&self) -> Option<&HashSet<T>> {
        match self {
            Self::Set(set) => Some(set),
            _ => None,
        }
    }

    /// Returns the set mutably if this is a [`Value::Set`].
    pub const fn as_set_mut(&mut self) -> Option<&mut HashSet<T>> {
        match self {
            Self::Set(set) => Some(set),
            _ => None,
        }
    }

    /// Consumes the value, returning the set if this is a [`Value::Set`].
    pub fn into_set(self) -> Option<HashSet<T>> {
        match self {
            Self::Set(set) => Some(set),
            _ => None,
        }
    }

    /// Views the value as an operand if it is iterable.
    #[must_use]
    pub fn as_iterable(&self) -> Option<&dyn Iterable<Element = T>> {
        match self {
            Self::Sequence(sequence) => Some(sequence),
            Self::Set(set) => Some(set),
            Self::Null | Self::Scalar(_) => None,
        }
    }
}

impl<T: Hash + Eq> From<HashSet<T>> for Value<T> {
    fn from(set: HashSet<T>) -> Self {
        Self::Set(set)
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Value<T> {
    fn from(sequence: Vec<T>) -> Self {
        Self::Sequence(sequence)
    }
}

impl<T: Hash + Eq> From<Option<T>> for Value<T> {
    fn from(scalar: Option<T>) -> Self {
        scalar.map_or(Self::Null, Self::Scalar)
    }
}
