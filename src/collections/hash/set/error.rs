use derive_more::{Display, Error};

/// The error returned when removing an element that isn't in a [`Set`](super::Set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Element not found in Set!")]
pub struct ElementNotFound;
