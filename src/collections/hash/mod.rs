//! Hash-based collections. [`HashTable`] maps keys to values, while [`Set`] stores unique
//! elements using a HashTable with unit values.

mod error;
pub mod set;
pub mod table;

pub use error::*;

#[doc(inline)]
pub use set::{ElementNotFound, Set};
#[doc(inline)]
pub use table::{HashTable, KeyNotFound};
