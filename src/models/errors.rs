//! Error types for pitch tuples
//!
//! The arithmetic itself never fails: absent values propagate as `None`.
//! The only fallible edge is turning an untyped array into a `Pitch`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TupleError {
    /// Array does not have 2 or 3 components
    #[error("pitch array must have 2 or 3 components, got {0}")]
    Length(usize),

    /// Step or alteration is null
    #[error("pitch array component {0} is null")]
    MissingComponent(usize),
}
