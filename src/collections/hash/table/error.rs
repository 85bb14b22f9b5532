use derive_more::{Display, Error};

/// The error returned when a [`HashTable`](super::HashTable) is asked for (or to remove) a key that
/// it doesn't contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Key not found in HashTable!")]
pub struct KeyNotFound;
