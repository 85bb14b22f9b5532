use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitOr, Sub};

use super::{ElementNotFound, Iter};
use crate::collections::hash::HashTable;

/// A collection of unique elements, stored as the keys of a [`HashTable`].
///
/// Set operations ([`union`](Set::union), [`intersection`](Set::intersection) and
/// [`difference`](Set::difference)) borrow both operands and build a new Set, cloning the elements
/// they keep. The result uses a clone of the receiver's hasher.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in `self`.
/// - `m`: The number of elements in `other`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `union` | `O(n + m)` |
/// | `intersection` | `O(min(n, m))` |
/// | `difference` | `O(n)` |
/// | `is_subset` | `O(m)` |
///
/// \* See [`HashTable`]: these are bounded by the length of a single chain, and `add` may resize.
#[derive(Clone)]
pub struct Set<T, B = RandomState> {
    // Unit values cost nothing to store.
    pub(crate) inner: HashTable<T, (), B>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> Set<T, B> {
    /// Creates a new, empty Set with the default capacity and hasher.
    pub fn new() -> Set<T, B> {
        Set {
            inner: HashTable::new(),
        }
    }

    /// Creates a new, empty Set with the provided `cap`acity.
    pub fn with_cap(cap: usize) -> Set<T, B> {
        Set {
            inner: HashTable::with_cap(cap),
        }
    }

    /// Creates a Set containing each of the provided `elements` once.
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I) -> Set<T, B> {
        elements.into_iter().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T, B> {
    pub fn with_hasher(hasher: B) -> Set<T, B> {
        Set {
            inner: HashTable::with_hasher(hasher),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> Set<T, B> {
        Set {
            inner: HashTable::with_cap_and_hasher(cap, hasher),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Returns the [`HashTable`] backing this Set.
    pub const fn collection(&self) -> &HashTable<T, (), B> {
        &self.inner
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(item)
    }

    /// Adds `item` to the Set, returning true if it wasn't already present. Adding an element that
    /// is already in the Set leaves it unchanged.
    pub fn add(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }

        self.inner.set(item, ());
        true
    }

    /// Removes `item` from the Set, returning the stored element.
    pub fn remove<Q>(&mut self, item: &Q) -> Result<T, ElementNotFound>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.delete_entry(item)
            .map(|(e, _)| e)
            .map_err(|_| ElementNotFound)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns an iterator over all elements in the Set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns true if every element of `other` is contained in `self`.
    ///
    /// Note the direction: this asks whether `other` is a subset of `self` (`other ⊆ self`), so
    /// `{1, 2, 3}.is_subset({2, 3})` is true and `{2, 3}.is_subset({1, 2, 3})` is false.
    pub fn is_subset(&self, other: &Set<T, B>) -> bool {
        if other.len() > self.len() {
            return false;
        }

        other.iter().all(|item| self.contains(item))
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Set<T, B> {
    /// Creates a new Set containing every element that is in either `self` or `other`. (`self ∪
    /// other`)
    pub fn union(&self, other: &Set<T, B>) -> Set<T, B> {
        let mut union = self.clone();
        union.extend(other.iter().cloned());
        union
    }

    /// Creates a new Set containing every element that is in both `self` and `other`. (`self ∩
    /// other`)
    ///
    /// Only the smaller of the two Sets is iterated, each of its elements being looked up in the
    /// larger one.
    pub fn intersection(&self, other: &Set<T, B>) -> Set<T, B> {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        self.collect_with_hasher(
            smaller.len(),
            smaller.iter().filter(|item| larger.contains(*item)),
        )
    }

    /// Creates a new Set containing every element that is in `self` but not `other`. (`self \
    /// other`)
    pub fn difference(&self, other: &Set<T, B>) -> Set<T, B> {
        self.collect_with_hasher(
            self.len(),
            self.iter().filter(|item| !other.contains(*item)),
        )
    }

    /// Builds a Set from `items` using a clone of this Set's hasher.
    fn collect_with_hasher<'a, I>(&self, cap: usize, items: I) -> Set<T, B>
    where
        I: Iterator<Item = &'a T>,
        T: 'a,
    {
        let mut set = Set::with_cap_and_hasher(cap, self.inner.hasher().clone());
        set.extend(items.cloned());
        set
    }
}

impl<T: Hash + Eq> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for Set<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        // Sized the same way as the table's own FromIterator, so no resize happens while filling.
        Set {
            inner: value.into_iter().map(|item| (item, ())).collect(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default, const N: usize> From<[T; N]> for Set<T, B> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for Set<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for Set<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for Set<T, B> {}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitOr for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitAnd for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Sub for &Set<T, B> {
    type Output = Set<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Set")
            .field("elements", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", self.inner.hasher())
            .finish()
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Display for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
