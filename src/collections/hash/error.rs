use derive_more::{Display, Error, From, IsVariant, TryInto};

use super::{ElementNotFound, KeyNotFound};

/// Either of the lookup failures produced by the hash collections, for callers that handle tables
/// and sets through the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum LookupError {
    KeyNotFound(KeyNotFound),
    ElementNotFound(ElementNotFound),
}
