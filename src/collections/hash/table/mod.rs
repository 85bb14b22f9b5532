//! A module containing [`HashTable`] and associated types.
//!
//! Besides the table itself, this includes its iterators and the [`KeyNotFound`] error returned by
//! lookups and removals of absent keys. The buckets that make up each chain are private to this
//! module.
//!
//! [`HashTable`] is also re-exported under the parent module.

mod bucket;
mod error;
mod hash_table;
mod iter;
mod tests;

pub use error::*;
pub use hash_table::*;
pub use iter::*;
