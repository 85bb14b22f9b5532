use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::slice;
use std::vec;

/// A single chain of a [`HashTable`](super::HashTable): every entry whose key hashes to the same
/// index, kept in insertion order.
///
/// The Bucket doesn't know anything about hashing, it only stores entries and finds them by key.
/// The table is responsible for ensuring that each key appears at most once.
#[derive(Clone)]
pub(crate) struct Bucket<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Bucket<K, V> {
    pub(crate) const fn new() -> Bucket<K, V> {
        Bucket {
            entries: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Appends an entry to the end of the chain. The caller must ensure that `key` isn't already
    /// present.
    pub(crate) fn append(&mut self, key: K, value: V) {
        self.entries.push((key, value));
    }

    /// Returns the position of the first entry matching `predicate`.
    pub(crate) fn find<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&(K, V)) -> bool,
    {
        self.entries.iter().position(predicate)
    }

    /// Returns the position of the entry with a key equal to `key`.
    pub(crate) fn find_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.find(|(k, _)| k.borrow() == key)
    }

    pub(crate) fn entry(&self, index: usize) -> Option<&(K, V)> {
        self.entries.get(index)
    }

    pub(crate) fn entry_mut(&mut self, index: usize) -> Option<&mut (K, V)> {
        self.entries.get_mut(index)
    }

    /// Removes and returns the entry at `index`. Later entries shift down by one, so the chain
    /// keeps its insertion order.
    pub(crate) fn delete(&mut self, index: usize) -> Option<(K, V)> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub(crate) fn iter(&self) -> slice::Iter<'_, (K, V)> {
        self.entries.iter()
    }
}

impl<K, V> Default for Bucket<K, V> {
    fn default() -> Self {
        Bucket::new()
    }
}

impl<K: Debug, V: Debug> Debug for Bucket<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

impl<K, V> IntoIterator for Bucket<K, V> {
    type Item = (K, V);

    type IntoIter = vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Bucket<K, V> {
    type Item = &'a (K, V);

    type IntoIter = slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
