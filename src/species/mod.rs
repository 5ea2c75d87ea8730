//! Result-type selection for derived sets.
//!
//! When an operation produces a new set, the type of that set is chosen by
//! the receiver's [`SetLike::Species`], a [`ResultType`] selector. The
//! selector is part of the receiver's type, so resolution happens at compile
//! time; only *construction* can fail at runtime, and it does so with a
//! [`ConfigurationError`] before any element is copied.
//!
//! Provided selectors:
//!
//! - [`HashSpecies`]: builds `HashSet<T, H>`, cloning a hasher
//! - [`BTreeSpecies`]: builds `BTreeSet<T>`
//! - [`SelfSpecies`]: builds the receiver's own type via `Default`
//! - [`Factory`]: calls a caller-supplied constructor that may refuse
//!
//! [`Designated`] pairs any set with an explicitly chosen selector.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::{BTreeSet, HashSet};
//! use lambars_sets::{union, BTreeSpecies, Designated};
//!
//! let hashed: HashSet<i32> = [3, 1].into_iter().collect();
//! let designated = Designated::new(hashed, BTreeSpecies);
//!
//! // Results derived from `designated` are ordered sets.
//! let result: BTreeSet<i32> = union(&designated, &[&vec![2]]).unwrap();
//! assert_eq!(result.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

mod designated;

use std::collections::hash_map::RandomState;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use crate::capability::SetLike;
use crate::error::ConfigurationError;

pub use designated::Designated;

/// Chooses and constructs the concrete type of derived sets.
///
/// A selector may implement `ResultType<T>` for many element types `T`;
/// that is how [`map`](crate::map) derives a set of transformed elements
/// from the receiver's selector.
pub trait ResultType<T> {
    /// The set type this selector constructs.
    type Output: SetLike<Element = T>;

    /// Constructs an empty result set.
    ///
    /// `capacity_hint` is the expected number of elements; selectors are
    /// free to ignore it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the target type cannot be
    /// constructed.
    fn construct(&self, capacity_hint: usize) -> Result<Self::Output, ConfigurationError>;
}

/// Returns the result type selector for sets derived from `set`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use lambars_sets::{resolve_result_type, BTreeSpecies};
///
/// let set: BTreeSet<i32> = BTreeSet::new();
/// assert_eq!(resolve_result_type(&set), BTreeSpecies);
/// ```
pub fn resolve_result_type<S: SetLike + ?Sized>(set: &S) -> S::Species {
    set.species()
}

// =============================================================================
// HashSpecies
// =============================================================================

/// Builds `HashSet<T, H>` results that share a hasher configuration.
///
/// The selector of a `HashSet` carries a clone of that set's hasher, so
/// seeded or custom hashers propagate to derived sets.
#[derive(Clone, Default)]
pub struct HashSpecies<H = RandomState> {
    hasher: H,
}

impl<H> HashSpecies<H> {
    /// Creates a selector that builds sets with clones of `hasher`.
    #[must_use]
    pub const fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    /// Returns the hasher derived sets will use.
    pub const fn hasher(&self) -> &H {
        &self.hasher
    }
}

impl<H> fmt::Debug for HashSpecies<H> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("HashSpecies")
            .field("hasher", &std::any::type_name::<H>())
            .finish()
    }
}

impl<T, H> ResultType<T> for HashSpecies<H>
where
    T: Hash + Eq,
    H: BuildHasher + Clone,
{
    type Output = HashSet<T, H>;

    fn construct(&self, capacity_hint: usize) -> Result<HashSet<T, H>, ConfigurationError> {
        Ok(HashSet::with_capacity_and_hasher(
            capacity_hint,
            self.hasher.clone(),
        ))
    }
}

/// [`HashSpecies`] backed by `rustc-hash`.
#[cfg(feature = "fxhash")]
pub type FxHashSpecies = HashSpecies<rustc_hash::FxBuildHasher>;

/// `HashSet` backed by `rustc-hash`.
#[cfg(feature = "fxhash")]
pub type FxHashSet<T> = HashSet<T, rustc_hash::FxBuildHasher>;

/// [`HashSpecies`] backed by `ahash`.
#[cfg(feature = "ahash")]
pub type AHashSpecies = HashSpecies<ahash::RandomState>;

/// `HashSet` backed by `ahash`.
#[cfg(feature = "ahash")]
pub type AHashSet<T> = HashSet<T, ahash::RandomState>;

// =============================================================================
// BTreeSpecies
// =============================================================================

/// Builds `BTreeSet<T>` results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BTreeSpecies;

impl<T: Ord> ResultType<T> for BTreeSpecies {
    type Output = BTreeSet<T>;

    fn construct(&self, _capacity_hint: usize) -> Result<BTreeSet<T>, ConfigurationError> {
        Ok(BTreeSet::new())
    }
}

// =============================================================================
// SelfSpecies
// =============================================================================

/// Builds results of the receiver's own type `C` through `Default`.
///
/// This is the selector a wrapper type declares when derived sets should be
/// of the wrapper type too. Unlike [`HashSpecies`], it only supports the
/// receiver's own element type, so [`map`](crate::map) over such a receiver
/// must keep the element type.
pub struct SelfSpecies<C> {
    marker: PhantomData<fn() -> C>,
}

impl<C> SelfSpecies<C> {
    /// Creates the selector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<C> Default for SelfSpecies<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for SelfSpecies<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for SelfSpecies<C> {}

impl<C> fmt::Debug for SelfSpecies<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "SelfSpecies<{}>", std::any::type_name::<C>())
    }
}

impl<C> ResultType<C::Element> for SelfSpecies<C>
where
    C: SetLike + Default,
{
    type Output = C;

    fn construct(&self, _capacity_hint: usize) -> Result<C, ConfigurationError> {
        Ok(C::default())
    }
}

// =============================================================================
// Factory
// =============================================================================

/// Builds results with a caller-supplied constructor.
///
/// The constructor receives the capacity hint and may refuse by returning a
/// [`ConfigurationError`], which the operation reports unchanged.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use lambars_sets::{ConfigurationError, Factory, ResultType};
///
/// let bounded = Factory::new("Bounded", |capacity_hint: usize| {
///     if capacity_hint > 2 {
///         Err(ConfigurationError::new("Bounded", "at most 2 elements"))
///     } else {
///         Ok(HashSet::<i32>::with_capacity(capacity_hint))
///     }
/// });
///
/// assert!(bounded.construct(2).is_ok());
/// assert!(bounded.construct(3).is_err());
/// ```
pub struct Factory<F, O> {
    name: &'static str,
    constructor: F,
    marker: PhantomData<fn() -> O>,
}

impl<F, O> Factory<F, O>
where
    F: Fn(usize) -> Result<O, ConfigurationError>,
{
    /// Creates a selector named `name` that builds results with `constructor`.
    #[must_use]
    pub const fn new(name: &'static str, constructor: F) -> Self {
        Self {
            name,
            constructor,
            marker: PhantomData,
        }
    }
}

impl<F, O> Factory<F, O> {
    /// Returns the name given at creation.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<F: Clone, O> Clone for Factory<F, O> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            constructor: self.constructor.clone(),
            marker: PhantomData,
        }
    }
}

impl<F, O> fmt::Debug for Factory<F, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Factory")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F, O> ResultType<O::Element> for Factory<F, O>
where
    O: SetLike,
    F: Fn(usize) -> Result<O, ConfigurationError>,
{
    type Output = O;

    fn construct(&self, capacity_hint: usize) -> Result<O, ConfigurationError> {
        (self.constructor)(capacity_hint)
    }
}
