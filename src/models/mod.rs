//! Models module for pitch arithmetic
//!
//! Value types shared by the arithmetic, the fifths codec and the JS API.

pub mod errors;
pub mod pitch;

// Re-export commonly used types
pub use errors::TupleError;
pub use pitch::{FifthsPair, Pitch, SEMITONES};
