// Pitch arithmetic through the public Rust API

use pitch_op_wasm::transposition::{
    add, comparator, multiply, pitch_class, semitones, set_default_octave, set_octave, simplify,
    subtract, with_default_octave,
};
use pitch_op_wasm::{FifthsCodec, FifthsEncoding, FifthsPair, Pitch, PitchOps};

fn p(step: i32, alt: i32, octave: i32) -> Option<Pitch> {
    Some(Pitch::new(step, alt, octave))
}

#[test]
fn test_fourth_plus_fifth_is_octave() {
    assert_eq!(add(p(3, 0, 0), p(4, 0, 0)), p(0, 0, 1));
}

#[test]
fn test_interval_from_f_to_g() {
    assert_eq!(subtract(p(3, 0, 0), p(4, 0, 0)), p(1, 0, 0));
    // And back down again
    assert_eq!(subtract(p(4, 0, 0), p(3, 0, 0)), p(6, -1, -1));
}

#[test]
fn test_double_fifth_is_ninth() {
    assert_eq!(multiply(2, p(4, 0, 0)), p(1, 0, 1));
}

#[test]
fn test_transpose_pitch_by_interval() {
    // C4 up a major third is E4
    assert_eq!(add(p(0, 0, 4), p(2, 0, 0)), p(2, 0, 4));
    // E4 up a minor third is G4
    assert_eq!(add(p(2, 0, 4), p(2, -1, 0)), p(4, 0, 4));
    // B3 up a major second is C#4
    assert_eq!(add(p(6, 0, 3), p(1, 0, 0)), p(0, 1, 4));
}

#[test]
fn test_add_subtract_roundtrip() {
    let pitches = [p(0, 0, 4), p(3, 1, 2), p(6, -1, 5), p(2, -2, 0), p(5, 2, -1)];
    for &a in &pitches {
        for &b in &pitches {
            assert_eq!(add(a, subtract(a, b)), b, "a = {:?}, b = {:?}", a, b);
        }
    }
}

#[test]
fn test_add_propagates_unset_octave() {
    let c = Some(Pitch::class(0, 0));
    let result = add(c, p(4, 0, 0));
    assert_eq!(result, Some(Pitch::class(4, 0)));
    assert_eq!(subtract(p(4, 0, 0), c).and_then(|r| r.octave), None);
}

#[test]
fn test_absent_values_chain() {
    let missing = subtract(None, p(1, 0, 0));
    assert_eq!(add(missing, p(2, 0, 0)), None);
    assert_eq!(multiply(3, missing), None);
    assert_eq!(simplify(missing), None);
    assert_eq!(semitones(missing), None);
}

#[test]
fn test_multiply_identity_and_zero() {
    let codec = FifthsEncoding;
    for &a in &[p(0, 0, 4), p(3, 1, 2), p(6, -1, 5)] {
        assert_eq!(multiply(1, a), a);
        assert_eq!(multiply(0, a), Some(codec.decode(FifthsPair::new(0, Some(0)))));
    }
}

#[test]
fn test_octave_setters() {
    let pc = Some(Pitch::class(4, 1));
    assert_eq!(pitch_class(p(4, 1, 3)), pc);
    assert_eq!(set_octave(2, pc), p(4, 1, 2));
    assert_eq!(simplify(p(4, 1, 3)), set_octave(0, p(4, 1, 3)));

    let defaulted = with_default_octave(4)(pc);
    assert_eq!(defaulted, p(4, 1, 4));
    assert_eq!(set_default_octave(1, defaulted), defaulted);
}

#[test]
fn test_sort_by_height() {
    let mut melody: Vec<Pitch> = [p(4, 0, 4), p(0, 0, 4), p(2, 0, 4), p(0, 0, 5)]
        .iter()
        .flatten()
        .copied()
        .collect();

    melody.sort_by(comparator(false));
    let heights: Vec<_> = melody.iter().map(|p| p.semitones()).collect();
    assert_eq!(heights, vec![Some(48), Some(52), Some(55), Some(60)]);

    melody.sort_by(comparator(true));
    assert_eq!(melody.first(), p(0, 0, 5).as_ref());
}

#[test]
fn test_custom_codec_ops() {
    let ops: PitchOps = PitchOps::new(FifthsEncoding);
    assert_eq!(ops.add(p(3, 0, 0), p(4, 0, 0)), add(p(3, 0, 0), p(4, 0, 0)));
}

#[test]
fn test_extreme_values_wrap_without_panic() {
    assert_eq!(
        multiply(1 << 30, p(1, 0, 0)),
        Some(Pitch { step: 6, alt: -306_783_379, octave: Some(1_994_091_958) })
    );
    assert_eq!(semitones(p(0, 0, 200_000_000)), Some(-1_894_967_296));
    assert_eq!(add(p(0, 0, i32::MAX), p(0, 0, 1)), p(0, 0, i32::MIN));

    // Results are defined even where they no longer round-trip
    let huge = p(0, 1 << 30, 0);
    assert!(subtract(huge, huge).is_some());
    assert!(multiply(i32::MIN, huge).is_some());
}
