//! Line-of-fifths encoding for pitch arithmetic
//!
//! Adding intervals in step/alteration form needs carries between step,
//! alteration and octave. On the line of fifths it is plain integer addition:
//! every pitch is a number of fifths from C plus a number of octaves.
//!
//! Example: F = -1 fifths, G = 1 fifth. F + G = 0 fifths with one octave,
//! i.e. a fourth plus a fifth is an octave.

use crate::models::{FifthsPair, Pitch};

/// Fifths from C for each diatonic step: C D E F G A B
const FIFTHS: [i32; 7] = [0, 2, 4, -1, 1, 3, 5];

/// Octaves spanned by stacking FIFTHS[step] fifths: floor(FIFTHS[step] * 7 / 12)
const FIFTH_OCTAVES: [i32; 7] = [0, 1, 2, -1, 0, 1, 2];

/// Step for each position of (fifths + 1) mod 7: F C G D A E B
const STEPS: [i32; 7] = [3, 0, 4, 1, 5, 2, 6];

/// Conversion between the public tuple and fifths space
pub trait FifthsCodec {
    fn encode(&self, pitch: &Pitch) -> FifthsPair;

    fn decode(&self, pair: FifthsPair) -> Pitch;
}

/// Standard encoding: a sharp is seven fifths up and four octaves down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FifthsEncoding;

impl FifthsCodec for FifthsEncoding {
    fn encode(&self, pitch: &Pitch) -> FifthsPair {
        let step = pitch.step.rem_euclid(7) as usize;
        let fifths = FIFTHS[step].wrapping_add(pitch.alt.wrapping_mul(7));
        let octaves = pitch
            .octave
            .map(|octave| {
                octave
                    .wrapping_sub(FIFTH_OCTAVES[step])
                    .wrapping_sub(pitch.alt.wrapping_mul(4))
            });

        FifthsPair { fifths, octaves }
    }

    fn decode(&self, pair: FifthsPair) -> Pitch {
        let shifted = pair.fifths.wrapping_add(1);
        let step = STEPS[shifted.rem_euclid(7) as usize];
        let alt = shifted.div_euclid(7);
        let octave = pair
            .octaves
            .map(|octaves| {
                octaves
                    .wrapping_add(alt.wrapping_mul(4))
                    .wrapping_add(FIFTH_OCTAVES[step as usize])
            });

        Pitch { step, alt, octave }
    }
}
