//! # lambars-sets
//!
//! Set algebra for Rust collections: union, intersection, symmetric
//! difference, subtraction, and higher-order traversal over any collection
//! that declares itself [`SetLike`].
//!
//! ## Overview
//!
//! The operations are free functions that take their receiver explicitly;
//! nothing is attached to the standard library types. They are generic over
//! two capabilities:
//!
//! - **[`Iterable`]**: anything that can enumerate its elements. Operands of
//!   the combining operations only need to be iterable, so sets and plain
//!   sequences can be mixed in one call.
//! - **[`SetLike`]**: an iterable collection with membership, insertion,
//!   removal, and cardinality. Receivers must be set-like.
//!
//! Every operation that builds a new set asks the receiver's result type
//! selector ([`SetLike::Species`]) which type to build. `HashSet` receivers
//! produce `HashSet`s with the same hasher, `BTreeSet` receivers produce
//! `BTreeSet`s, and [`Designated`] lets a caller pick any other
//! [`ResultType`].
//!
//! ## Operations
//!
//! | Operation              | Result          | Mutates receiver |
//! |------------------------|-----------------|------------------|
//! | [`union`]              | new set         | no               |
//! | [`intersect`]          | new set         | no               |
//! | [`xor`]                | new set         | no               |
//! | [`subtract`]           | new set         | no               |
//! | [`relative_complement`]| new set         | no               |
//! | [`filter`], [`map`]    | new set         | no               |
//! | [`some`], [`every`]    | `bool`          | no               |
//! | [`find`]               | `Option<&T>`    | no               |
//! | [`add_elements`]       | the receiver    | yes              |
//! | [`remove_elements`]    | the receiver    | yes              |
//!
//! ## Feature Flags
//!
//! - `dynamic` (default): runtime-probed operations over [`dynamic::Value`]
//! - `serde`: serialization for [`dynamic::Value`] and the error types
//! - `fxhash`: `rustc-hash` backed result types ([`FxHashSpecies`])
//! - `ahash`: `ahash` backed result types ([`AHashSpecies`])
//! - `smallvec`: `SmallVec` operands
//! - `full`: all of the above
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use lambars_sets::prelude::*;
//!
//! let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
//!
//! let grown = union(&set, &[&vec![3, 4]]).unwrap();
//! let odd = filter(&grown, |element, _, _| element % 2 == 1).unwrap();
//! assert_eq!(odd, HashSet::from([1, 3]));
//! assert!(every(&odd, |element, _, _| grown.contains(element)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the capability traits, result type selectors, errors, and
/// every static operation.
///
/// # Usage
///
/// ```rust
/// use lambars_sets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::*;
    pub use crate::capability::*;
    pub use crate::error::*;
    pub use crate::species::*;
}

pub mod algebra;
pub mod capability;
pub mod error;
pub mod species;

#[cfg(feature = "dynamic")]
pub mod dynamic;

pub use algebra::{
    Derived, add_elements, every, filter, find, intersect, map, relative_complement,
    remove_elements, some, subtract, union, xor,
};
pub use capability::{Iterable, SetLike};
pub use error::{
    ConfigurationError, PreconditionError, PreconditionKind, SetAlgebraError, SetAlgebraResult,
};
#[cfg(feature = "ahash")]
pub use species::{AHashSet, AHashSpecies};
pub use species::{
    BTreeSpecies, Designated, Factory, HashSpecies, ResultType, SelfSpecies, resolve_result_type,
};
#[cfg(feature = "fxhash")]
pub use species::{FxHashSet, FxHashSpecies};
