//! Capabilities a collection declares to take part in set algebra.
//!
//! - [`Iterable`]: enumerates borrowed elements; every operand must be one
//! - [`SetLike`]: an [`Iterable`] that also supports membership, insertion,
//!   removal, and cardinality; every receiver must be one
//!
//! Both are ordinary traits, so "is this value set-like?" is answered by the
//! compiler. Values that cross a dynamically-typed boundary are probed at
//! runtime with [`dynamic::is_set_like`](crate::dynamic::is_set_like)
//! instead.
//!
//! Implementations are provided for `HashSet` (any hasher) and `BTreeSet`
//! as receivers, and additionally for `Vec`, `VecDeque`, arrays, slices,
//! and (with the `smallvec` feature) `SmallVec` as operands.

mod iterable;
mod set_like;

pub use iterable::Iterable;
pub use set_like::SetLike;

// The operand slices are `&[&dyn Iterable<Element = T>]`.
static_assertions::assert_obj_safe!(Iterable<Element = i32>);

// Sequences are operands, never receivers.
static_assertions::assert_impl_all!(std::collections::HashSet<i32>: SetLike, Iterable);
static_assertions::assert_impl_all!(std::collections::BTreeSet<i32>: SetLike, Iterable);
static_assertions::assert_impl_all!(Vec<i32>: Iterable);
static_assertions::assert_not_impl_any!(Vec<i32>: SetLike);
static_assertions::assert_not_impl_any!(std::collections::VecDeque<i32>: SetLike);
