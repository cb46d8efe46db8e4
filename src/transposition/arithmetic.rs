//! Pitch and interval arithmetic
//!
//! Every operation takes and returns `Option<Pitch>` so calls chain without
//! checks: an absent operand gives an absent result, and an unset octave in
//! either operand gives an unset octave in the result.
//!
//! Integer overflow wraps, here and in the fifths codec, so every operation
//! stays total.

use std::cmp::Ordering;

use crate::models::{FifthsPair, Pitch};
use super::fifths::{FifthsCodec, FifthsEncoding};

pub fn pitch_class(p: Option<Pitch>) -> Option<Pitch> {
    p.map(Pitch::pitch_class)
}

pub fn set_octave(octave: i32, p: Option<Pitch>) -> Option<Pitch> {
    p.map(|p| p.with_octave(octave))
}

/// Partial form of `set_octave`
pub fn with_octave(octave: i32) -> impl Fn(Option<Pitch>) -> Option<Pitch> {
    move |p| set_octave(octave, p)
}

/// Octave forced to 0. Step and alteration are not reduced.
pub fn simplify(p: Option<Pitch>) -> Option<Pitch> {
    set_octave(0, p)
}

pub fn set_default_octave(octave: i32, p: Option<Pitch>) -> Option<Pitch> {
    p.map(|p| p.with_default_octave(octave))
}

/// Partial form of `set_default_octave`
pub fn with_default_octave(octave: i32) -> impl Fn(Option<Pitch>) -> Option<Pitch> {
    move |p| set_default_octave(octave, p)
}

/// Semitones above `[0, 0, 0]`. `None` for an absent pitch and for a pitch
/// without octave.
pub fn semitones(p: Option<Pitch>) -> Option<i32> {
    p.and_then(|p| p.semitones())
}

/// Ordering by semitone height, for `sort_by`.
///
/// Pitches without an octave have no height and sort before all others.
pub fn comparator(descending: bool) -> impl Fn(&Pitch, &Pitch) -> Ordering {
    move |a, b| {
        let ord = a.semitones().cmp(&b.semitones());
        if descending {
            ord.reverse()
        } else {
            ord
        }
    }
}

pub fn add(a: Option<Pitch>, b: Option<Pitch>) -> Option<Pitch> {
    STANDARD.add(a, b)
}

/// Interval from `a` to `b`
pub fn subtract(a: Option<Pitch>, b: Option<Pitch>) -> Option<Pitch> {
    STANDARD.subtract(a, b)
}

pub fn multiply(factor: i32, a: Option<Pitch>) -> Option<Pitch> {
    STANDARD.multiply(factor, a)
}

const STANDARD: PitchOps = PitchOps { codec: FifthsEncoding };

/// Fifths-space arithmetic over an injected codec
#[derive(Debug, Clone, Copy, Default)]
pub struct PitchOps<C = FifthsEncoding> {
    codec: C,
}

impl<C: FifthsCodec> PitchOps<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    pub fn add(&self, a: Option<Pitch>, b: Option<Pitch>) -> Option<Pitch> {
        let (fa, fb) = (self.codec.encode(&a?), self.codec.encode(&b?));
        let octaves = fa.octaves.zip(fb.octaves).map(|(oa, ob)| oa.wrapping_add(ob));

        Some(self.codec.decode(FifthsPair::new(fa.fifths.wrapping_add(fb.fifths), octaves)))
    }

    /// `b - a` in fifths space
    pub fn subtract(&self, a: Option<Pitch>, b: Option<Pitch>) -> Option<Pitch> {
        let (fa, fb) = (self.codec.encode(&a?), self.codec.encode(&b?));
        let octaves = fa.octaves.zip(fb.octaves).map(|(oa, ob)| ob.wrapping_sub(oa));

        Some(self.codec.decode(FifthsPair::new(fb.fifths.wrapping_sub(fa.fifths), octaves)))
    }

    pub fn multiply(&self, factor: i32, a: Option<Pitch>) -> Option<Pitch> {
        let fa = self.codec.encode(&a?);
        let octaves = fa.octaves.map(|o| o.wrapping_mul(factor));

        Some(self.codec.decode(FifthsPair::new(fa.fifths.wrapping_mul(factor), octaves)))
    }
}
