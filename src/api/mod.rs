//! Pitch arithmetic WASM API
//!
//! This module provides the JavaScript-facing API for the pitch arithmetic.
//!
//! # Module Structure
//!
//! - `helpers`: Conversion between JS arrays and pitch tuples, error logging
//! - `core`: The exported functions, under their camelCase JS names

pub mod helpers;
pub mod core;

pub use self::core::*;
