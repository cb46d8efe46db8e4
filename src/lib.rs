//! Pitch arithmetic WASM module
//!
//! Transposition, distance, scaling and ordering of pitches and intervals
//! written as `[step, alt, octave]` tuples. The arithmetic runs on the line
//! of fifths, see `transposition::fifths`.

pub mod models;
pub mod transposition;
pub mod api;

// Re-export commonly used types
pub use models::{FifthsPair, Pitch, TupleError};
pub use transposition::{FifthsCodec, FifthsEncoding, PitchOps};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only when a logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Pitch arithmetic WASM module initialized");
}
