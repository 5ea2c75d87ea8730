//! The [`Iterable`] capability: anything whose elements can be enumerated.

use std::collections::{BTreeSet, HashSet, VecDeque};

/// A finite collection whose elements can be enumerated by reference.
///
/// Operands of [`union`](crate::union), [`intersect`](crate::intersect),
/// [`xor`](crate::xor), and [`subtract`](crate::subtract) are passed as
/// `&dyn Iterable<Element = T>`, so set-like values and plain sequences can
/// be mixed in a single call.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use lambars_sets::Iterable;
///
/// let list = vec![1, 2, 2, 3];
/// let set: HashSet<i32> = [1, 2].into_iter().collect();
///
/// let operands: [&dyn Iterable<Element = i32>; 2] = [&list, &set];
/// let total: usize = operands.iter().map(|operand| operand.elements().count()).sum();
/// assert_eq!(total, 6);
/// ```
pub trait Iterable {
    /// The type of the enumerated elements.
    type Element;

    /// Returns an iterator over borrowed elements in native order.
    fn elements(&self) -> Box<dyn Iterator<Item = &Self::Element> + '_>;

    /// Returns the number of elements the iterator will yield, when known
    /// without iterating.
    ///
    /// Used only as a capacity hint; the default is `0`.
    fn len_hint(&self) -> usize {
        0
    }
}

impl<T> Iterable for [T] {
    type Element = T;

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }

    fn len_hint(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Iterable for [T; N] {
    type Element = T;

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }

    fn len_hint(&self) -> usize {
        N
    }
}

impl<T> Iterable for Vec<T> {
    type Element = T;

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }

    fn len_hint(&self) -> usize {
        self.len()
    }
}

impl<T> Iterable for VecDeque<T> {
    type Element = T;

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }

    fn len_hint(&self) -> usize {
        self.len()
    }
}

impl<T, H> Iterable for HashSet<T, H> {
    type Element = T;

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }

    fn len_hint(&self) -> usize {
        self.len()
    }
}

impl<T> Iterable for BTreeSet<T> {
    type Element = T;

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }

    fn len_hint(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Iterable for smallvec::SmallVec<A> {
    type Element = A::Item;

    fn elements(&self) -> Box<dyn Iterator<Item = &A::Item> + '_> {
        Box::new(self.iter())
    }

    fn len_hint(&self) -> usize {
        self.len()
    }
}
