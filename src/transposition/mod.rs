pub mod arithmetic;
pub mod fifths;

pub use arithmetic::{
    add, comparator, multiply, pitch_class, semitones, set_default_octave, set_octave, simplify,
    subtract, with_default_octave, with_octave, PitchOps,
};
pub use fifths::{FifthsCodec, FifthsEncoding};
