//! Pitch and interval tuples
//!
//! A pitch (or interval) is the triple `[step, alt, octave]`:
//! - `step`: diatonic step index, 0..=6 for C D E F G A B
//! - `alt`: alteration in semitones (-1 flat, 1 sharp, ...)
//! - `octave`: octave number, or `None` for a pitch class / octave-less interval
//!
//! Tuples cross the JS boundary as plain arrays, so serde maps them to
//! `[step, alt, octave]` and accepts `[step, alt]` as a pitch class.

use serde::{Deserialize, Serialize};

use super::errors::TupleError;

/// Diatonic step to semitone offset from C
pub const SEMITONES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Pitch or interval in step/alteration/octave form
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "Vec<Option<i32>>", into = "(i32, i32, Option<i32>)")]
pub struct Pitch {
    pub step: i32,
    pub alt: i32,
    pub octave: Option<i32>,
}

impl Pitch {
    pub const fn new(step: i32, alt: i32, octave: i32) -> Self {
        Self { step, alt, octave: Some(octave) }
    }

    /// Pitch with no octave
    pub const fn class(step: i32, alt: i32) -> Self {
        Self { step, alt, octave: None }
    }

    pub fn pitch_class(self) -> Pitch {
        Pitch { octave: None, ..self }
    }

    pub fn with_octave(self, octave: i32) -> Pitch {
        Pitch { octave: Some(octave), ..self }
    }

    /// Fill in the octave only when it is unset
    pub fn with_default_octave(self, octave: i32) -> Pitch {
        match self.octave {
            Some(_) => self,
            None => self.with_octave(octave),
        }
    }

    /// Force the octave to 0; step and alteration are left as they are
    pub fn simplify(self) -> Pitch {
        self.with_octave(0)
    }

    /// Height in semitones above `[0, 0, 0]`, `None` when the octave is unset.
    /// Wraps on overflow.
    pub fn semitones(&self) -> Option<i32> {
        let octave = self.octave?;
        Some(
            SEMITONES[self.step.rem_euclid(7) as usize]
                .wrapping_add(self.alt)
                .wrapping_add(octave.wrapping_mul(12)),
        )
    }
}

impl TryFrom<Vec<Option<i32>>> for Pitch {
    type Error = TupleError;

    fn try_from(values: Vec<Option<i32>>) -> Result<Self, Self::Error> {
        if values.len() < 2 || values.len() > 3 {
            return Err(TupleError::Length(values.len()));
        }
        let step = values[0].ok_or(TupleError::MissingComponent(0))?;
        let alt = values[1].ok_or(TupleError::MissingComponent(1))?;
        let octave = values.get(2).copied().flatten();

        Ok(Pitch { step, alt, octave })
    }
}

impl From<Pitch> for (i32, i32, Option<i32>) {
    fn from(p: Pitch) -> Self {
        (p.step, p.alt, p.octave)
    }
}

/// A tuple in fifths space: position on the line of fifths plus an octave
/// count. Addition and scaling are linear here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct FifthsPair {
    pub fifths: i32,
    pub octaves: Option<i32>,
}

impl FifthsPair {
    pub const fn new(fifths: i32, octaves: Option<i32>) -> Self {
        Self { fifths, octaves }
    }
}
