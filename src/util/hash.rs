//! Deterministic hashing for tests, so that bucket placement can be asserted on.

use std::cell::Cell;
use std::hash::{BuildHasher, Hash, Hasher};
use std::rc::Rc;

/// A key whose hash is pinned by the test rather than derived from its value. Equality only
/// considers the value, so distinct keys can be forced into the same chain, and equal hashes never
/// make two different keys look equal.
#[derive(Debug, Clone)]
pub struct PinnedHash<T> {
    pin: u64,
    value: T,
}

impl<T> PinnedHash<T> {
    pub const fn new(pin: u64, value: T) -> PinnedHash<T> {
        PinnedHash {
            pin,
            value,
        }
    }

    /// The hash this key produces under any Hasher that keeps the last `u64` written to it.
    pub const fn pin(&self) -> u64 {
        self.pin
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T> Hash for PinnedHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.pin);
    }
}

impl<T: PartialEq> PartialEq for PinnedHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for PinnedHash<T> {}

/// A Hasher that returns the integer written to it unchanged. Bytes are folded in little-endian
/// order, so every unsigned integer up to 64 bits hashes to itself.
#[derive(Debug)]
pub struct IdentityHasher {
    state: u64,
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for (offset, byte) in bytes.iter().enumerate() {
            self.state ^= (*byte as u64) << ((offset % 8) * 8);
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.state = i;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityHasherBuilder;

impl BuildHasher for IdentityHasherBuilder {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher {
            state: 0
        }
    }
}

/// An [`IdentityHasherBuilder`] that counts how many hashes it has been asked for. Clones share the
/// same count.
#[derive(Debug, Clone, Default)]
pub struct CountingHasherBuilder {
    count: Rc<Cell<usize>>,
}

impl CountingHasherBuilder {
    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn reset(&self) {
        self.count.set(0);
    }
}

impl BuildHasher for CountingHasherBuilder {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        self.count.set(self.count.get() + 1);
        IdentityHasherBuilder.build_hasher()
    }
}
