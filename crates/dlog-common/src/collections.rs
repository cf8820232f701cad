//! Small container helpers.
//!
//! The map helpers accept anything that iterates as `(&K, &V)` pairs, so they
//! work with `&BTreeMap`, `&HashMap` and similar, and preserve the map's own
//! iteration order.

use alloc::{boxed::Box, vec::Vec};
use core::borrow::Borrow;

/// Sorts `items` ascending and returns them.
///
/// ```rust
/// use dlog_common::sorted;
///
/// assert_eq!(sorted(vec![3, 1, 2]), [1, 2, 3]);
/// ```
#[must_use]
pub fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items
}

/// Returns a copy of the keys of `map`.
pub fn keys<'a, K, V, M>(map: M) -> Vec<K>
where
    M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: 'a,
{
    map.into_iter().map(|(k, _)| k.clone()).collect()
}

/// Returns a copy of the values of `map`.
pub fn values<'a, K, V, M>(map: M) -> Vec<V>
where
    M: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: Clone + 'a,
{
    map.into_iter().map(|(_, v)| v.clone()).collect()
}

/// Returns a copy of the key-value pairs of `map`.
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// use dlog_common::items;
///
/// let map = BTreeMap::from([(2, "b"), (1, "a")]);
/// assert_eq!(items(&map), [(1, "a"), (2, "b")]);
/// ```
pub fn items<'a, K, V, M>(map: M) -> Vec<(K, V)>
where
    M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
{
    map.into_iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// Returns true if every element of `haystack` equals `needle`.
///
/// Owned and borrowed iterables are compared the same way. An empty
/// `haystack` trivially satisfies this.
///
/// ```rust
/// use dlog_common::has_only;
///
/// let zeros = vec![0u8; 4];
/// assert!(has_only(&zeros, &0u8));
/// assert!(has_only(zeros, &0u8));
/// ```
pub fn has_only<I, T>(haystack: I, needle: &T) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: PartialEq + ?Sized,
{
    haystack
        .into_iter()
        .all(|item| <I::Item as Borrow<T>>::borrow(&item) == needle)
}

/// Moves `value` onto the heap under exclusive ownership.
#[must_use]
pub fn unique<T>(value: T) -> Box<T> {
    Box::new(value)
}
