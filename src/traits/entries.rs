use crate::types::alloc_type::Vec;
use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use smallvec::{Array, SmallVec};

/// Containers whose size the size checks can measure.
///
/// Sequences report their element count, maps their key count, so a list and
/// a map of equal cardinality are judged the same way.
///
/// # Examples
///
/// ```
/// use field_rail::traits::Entries;
/// use std::collections::BTreeMap;
///
/// let tags = vec!["a", "b"];
/// let mut labels = BTreeMap::new();
/// labels.insert("env", "prod");
/// labels.insert("tier", "web");
///
/// assert_eq!(tags.entries(), labels.entries());
/// ```
pub trait Entries {
    /// Number of entries held by the container.
    fn entries(&self) -> usize;
}

impl<T> Entries for [T] {
    #[inline]
    fn entries(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Entries for [T; N] {
    #[inline]
    fn entries(&self) -> usize {
        N
    }
}

impl<T> Entries for Vec<T> {
    #[inline]
    fn entries(&self) -> usize {
        self.len()
    }
}

impl<T> Entries for VecDeque<T> {
    #[inline]
    fn entries(&self) -> usize {
        self.len()
    }
}

impl<A: Array> Entries for SmallVec<A> {
    #[inline]
    fn entries(&self) -> usize {
        self.len()
    }
}

impl<K, V> Entries for BTreeMap<K, V> {
    #[inline]
    fn entries(&self) -> usize {
        self.len()
    }
}

impl<T> Entries for BTreeSet<T> {
    #[inline]
    fn entries(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "std")]
impl<K, V, S> Entries for std::collections::HashMap<K, V, S> {
    #[inline]
    fn entries(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "std")]
impl<T, S> Entries for std::collections::HashSet<T, S> {
    #[inline]
    fn entries(&self) -> usize {
        self.len()
    }
}

impl<C: Entries + ?Sized> Entries for &C {
    #[inline]
    fn entries(&self) -> usize {
        (**self).entries()
    }
}
