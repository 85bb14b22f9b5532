#[cfg(test)]
pub mod hash;
