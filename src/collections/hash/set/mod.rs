//! A module containing [`Set`] and associated types.
//!
//! A Set stores its elements as the keys of a [`HashTable`](super::HashTable) whose values are all
//! `()`. The set operations here produce new Sets rather than lazy views, so their results can
//! outlive the operands.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error.
//!
//! [`Set`] is also re-exported under the parent module.

mod error;
mod iter;
mod set;

pub use error::*;
pub use iter::*;
pub use set::*;
