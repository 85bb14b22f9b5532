use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::{cmp, iter, mem};

use tracing::debug;

use super::bucket::Bucket;
use super::{Iter, KeyNotFound};

/// The number of buckets allocated by [`HashTable::new`].
pub const DEFAULT_CAP: usize = 8;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 3;
const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// A map of keys to values which resolves hash collisions by separate chaining.
///
/// The table owns an array of buckets. A key is always stored in the bucket at
/// `hash(key) % cap`, where the hash is produced by the table's [`BuildHasher`], and each bucket is
/// a list of the entries whose keys landed there. After an insertion pushes the load factor
/// (`len / cap`) above 3/4, the table doubles its capacity and rehashes every entry so that chains
/// stay short.
///
/// It is a logic error for keys in a HashTable to be manipulated in a way that changes their hash.
/// Because of this, HashTable's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashTable.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `load_factor` | `O(1)` |
/// | `set` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `delete` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `keys`, `values`, `items` | `O(n)` |
/// | `resize` | `O(n)` |
///
/// \* Each of these scans a single chain, so the cost grows with the length of that chain. Keeping
/// the load factor at or below 3/4 keeps the expected chain length constant, but a poor hasher can
/// still put every key in one bucket.
///
/// \** If the insertion pushes the load factor over 3/4, `set` resizes the table, which is `O(n)`.
/// \* applies as well.
pub struct HashTable<K, V, B = RandomState> {
    pub(crate) buckets: Box<[Bucket<K, V>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashTable<K, V, B> {
    /// Creates a new HashTable with [`DEFAULT_CAP`] buckets and the default value for `B`.
    pub fn new() -> HashTable<K, V, B> {
        HashTable::with_cap(DEFAULT_CAP)
    }

    /// Creates a new HashTable with the provided `cap`acity and the default hasher. A capacity of 0
    /// is raised to a single bucket.
    pub fn with_cap(cap: usize) -> HashTable<K, V, B> {
        HashTable::with_cap_and_hasher(cap, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashTable<K, V, B> {
    /// Creates a new HashTable with [`DEFAULT_CAP`] buckets and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashTable<K, V, B> {
        HashTable::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates a new HashTable with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashTable<K, V, B> {
        HashTable {
            buckets: alloc_buckets(cmp::max(cap, MIN_CAP)),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the HashTable.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashTable contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets in the HashTable.
    pub fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the ratio of entries to buckets.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.cap() as f64
    }

    /// Returns a reference to the provided `hasher`.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Calculates the index of the bucket that `key` belongs in, given the current capacity.
    ///
    /// The result is only valid until the capacity changes, which [`set`](HashTable::set) may do.
    pub fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        let key_hash = self.hasher.hash_one(key);
        // The capacity is never 0.
        (key_hash % self.cap() as u64) as usize
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[self.bucket_index(key)].find_key(key).is_some()
    }

    /// Returns the entry for the provided `key` as a key-value pair.
    pub fn get_entry<Q>(&self, key: &Q) -> Result<(&K, &V), KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let bucket = &self.buckets[self.bucket_index(key)];

        bucket.find_key(key)
            .and_then(|pos| bucket.entry(pos))
            .map(|(k, v)| (k, v))
            .ok_or(KeyNotFound)
    }

    /// Returns a reference to the value associated with the provided `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];

        match bucket.find_key(key) {
            Some(pos) => bucket.entry_mut(pos).map(|(_, v)| v).ok_or(KeyNotFound),
            None => Err(KeyNotFound),
        }
    }

    /// Associates `value` with `key`. If the key was already associated with a value, that value is
    /// replaced in place and returned, without changing the length.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    ///
    /// If inserting a new entry pushes the load factor over 3/4, the table is resized to double its
    /// capacity before this method returns. Any bucket index obtained before calling `set` should
    /// be considered stale afterwards.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        if let Some(pos) = bucket.find_key(&key)
            && let Some(existing) = bucket.entry_mut(pos)
        {
            return Some(mem::replace(&mut existing.1, value));
        }

        bucket.append(key, value);
        self.len += 1;

        if self.should_grow() {
            self.resize(None);
        }

        None
    }

    /// Removes the entry associated with `key`, returning it.
    pub fn delete_entry<Q>(&mut self, key: &Q) -> Result<(K, V), KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];

        let removed = bucket.find_key(key)
            .and_then(|pos| bucket.delete(pos))
            .ok_or(KeyNotFound)?;

        self.len -= 1;
        Ok(removed)
    }

    /// Removes the entry associated with `key`, returning the value.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.delete_entry(key).map(|(_, v)| v)
    }

    /// Removes every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        self.buckets = alloc_buckets(self.cap());
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the HashTable, as references. Entries are
    /// produced in bucket order, then in insertion order within each bucket.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Collects references to every key, in the same order as [`HashTable::iter`].
    pub fn keys(&self) -> Vec<&K> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// Collects references to every value, in the same order as [`HashTable::iter`].
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// Collects references to every key-value pair, in the same order as [`HashTable::iter`].
    pub fn items(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    /// Reallocates the buckets and rehashes every entry into them.
    ///
    /// With `None`, the capacity is doubled. `Some(0)` halves the capacity, and any other value is
    /// used as the new capacity directly. The resulting capacity is never allowed to put the load
    /// factor over 3/4, so a request that is too small is raised to the smallest capacity that
    /// holds the current entries.
    pub fn resize(&mut self, new_cap: Option<usize>) {
        let requested = match new_cap {
            None => self.cap().saturating_mul(GROWTH_FACTOR),
            Some(0) => self.cap() / GROWTH_FACTOR,
            Some(cap) => cap,
        };

        self.realloc_with_cap(cmp::max(requested, min_cap_for(self.len)));
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashTable<K, V, B> {
    /// Determines whether the load factor has passed 3/4.
    pub(crate) fn should_grow(&self) -> bool {
        self.len.saturating_mul(LOAD_FACTOR_DENOMINATOR)
            > self.cap().saturating_mul(LOAD_FACTOR_NUMERATOR)
    }

    /// Replaces the buckets with `new_cap` empty ones and moves every entry into the bucket
    /// matching its hash under the new capacity.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        let old_cap = self.cap();
        // Replace the buckets first so that we can consume the old ones.
        let old_buckets = mem::replace(&mut self.buckets, alloc_buckets(new_cap));
        self.len = 0;

        for (key, value) in old_buckets.into_vec().into_iter().flatten() {
            // Keys were unique in the old buckets, so there is nothing to replace.
            let index = self.bucket_index(&key);
            self.buckets[index].append(key, value);
            self.len += 1;
        }
        debug_assert_eq!(self.len, self.buckets.iter().map(Bucket::len).sum::<usize>());

        debug!(old_cap, new_cap, len = self.len, "rehashed HashTable");
    }
}

/// The smallest capacity that holds `len` entries without exceeding the load factor.
fn min_cap_for(len: usize) -> usize {
    cmp::max(
        len.saturating_mul(LOAD_FACTOR_DENOMINATOR).div_ceil(LOAD_FACTOR_NUMERATOR),
        MIN_CAP,
    )
}

fn alloc_buckets<K, V>(cap: usize) -> Box<[Bucket<K, V>]> {
    iter::repeat_with(Bucket::new).take(cap).collect()
}

impl<K: Hash + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        HashTable::new()
    }
}

impl<K: Clone, V: Clone, B: Clone> Clone for HashTable<K, V, B> {
    fn clone(&self) -> Self {
        HashTable {
            buckets: self.buckets.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashTable<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(k, v)| other.get(k).is_ok_and(|o| o == v))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashTable<K, V, B> {}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashTable<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut table = HashTable::with_cap(cmp::max(min_cap_for(iter.size_hint().0), DEFAULT_CAP));
        table.extend(iter);
        table
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashTable<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Debug, V: Debug, B: Debug> Debug for HashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("buckets", &self.buckets)
            .field("len", &self.len)
            .field("cap", &self.buckets.len())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
