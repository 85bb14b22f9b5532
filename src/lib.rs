//! This crate provides a hash table that resolves collisions through separate chaining, and a set
//! type built directly on top of it.
//!
//! # Purpose
//! The collections here are written to be read. [`HashTable`](collections::hash::HashTable) keeps
//! an array of buckets, each bucket being a short owned list of entries, and grows whenever the
//! ratio of entries to buckets passes 3/4. [`Set`](collections::hash::Set) stores its elements as
//! the keys of a table and adds set algebra on top.
//!
//! # Error Handling
//! Looking up or removing something that isn't there is an ordinary outcome for a collection, so
//! those operations return [`Result`]s instead of panicking. The errors are strongly typed ZSTs
//! ([`KeyNotFound`](collections::hash::KeyNotFound) and
//! [`ElementNotFound`](collections::hash::ElementNotFound)), with an enum over both for callers who
//! want to propagate either with a single `?`.
//!
//! # Hashing
//! Neither type hashes anything itself. The hash function is supplied through a [`BuildHasher`]
//! type parameter, defaulting to [`RandomState`]. Any deterministic hasher will do, which keeps
//! the bucket layout reproducible in tests.
//!
//! # Dependencies
//! This crate depends on `derive_more` for its error types and on `tracing` to report when a table
//! reallocates. No subscriber is installed here; that is left to the binary using the crate.
//!
//! [`BuildHasher`]: std::hash::BuildHasher
//! [`RandomState`]: std::hash::RandomState
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
