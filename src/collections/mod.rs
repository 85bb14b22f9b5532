//! General-purpose collection types.
//!
//! At the moment, this is only the [`hash`] module: a chained [`HashTable`](hash::HashTable) and
//! the [`Set`](hash::Set) that wraps it.

#[cfg(feature = "hash")]
pub mod hash;
