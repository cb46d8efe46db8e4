//! Pitch arithmetic exported to JavaScript
//!
//! Pitches are plain arrays `[step, alt, octave]`, with `null` for an absent
//! pitch or an unset octave. `setOctave`, `setDefaultOctave` and `comparator`
//! return JS functions when called without the pitch arguments.

use wasm_bindgen::prelude::*;

use super::helpers::{pitch_arg, pitch_result};
use crate::transposition as ops;

#[wasm_bindgen(js_name = pitchClass)]
pub fn pitch_class(pitch: JsValue) -> Result<JsValue, JsValue> {
    pitch_result(ops::pitch_class(pitch_arg(pitch, "pitchClass")?))
}

/// `setOctave(octave, pitch)`, or `setOctave(octave)` for a unary function
#[wasm_bindgen(js_name = setOctave)]
pub fn set_octave(octave: i32, pitch: JsValue) -> Result<JsValue, JsValue> {
    if pitch.is_undefined() {
        log::debug!("setOctave({}) partially applied", octave);
        return Ok(unary(move |p| pitch_result(ops::set_octave(octave, pitch_arg(p, "setOctave")?))));
    }
    pitch_result(ops::set_octave(octave, pitch_arg(pitch, "setOctave")?))
}

#[wasm_bindgen]
pub fn simplify(interval: JsValue) -> Result<JsValue, JsValue> {
    pitch_result(ops::simplify(pitch_arg(interval, "simplify")?))
}

/// `setDefaultOctave(octave, pitch)`, or `setDefaultOctave(octave)` for a unary function
#[wasm_bindgen(js_name = setDefaultOctave)]
pub fn set_default_octave(octave: i32, pitch: JsValue) -> Result<JsValue, JsValue> {
    if pitch.is_undefined() {
        log::debug!("setDefaultOctave({}) partially applied", octave);
        return Ok(unary(move |p| {
            pitch_result(ops::set_default_octave(octave, pitch_arg(p, "setDefaultOctave")?))
        }));
    }
    pitch_result(ops::set_default_octave(octave, pitch_arg(pitch, "setDefaultOctave")?))
}

/// `null` for an absent pitch, `NaN` when the octave is unset
#[wasm_bindgen]
pub fn semitones(pitch: JsValue) -> Result<JsValue, JsValue> {
    Ok(match pitch_arg(pitch, "semitones")? {
        None => JsValue::NULL,
        Some(p) => JsValue::from_f64(height(Some(p))),
    })
}

/// Returns `(a, b) => number` for `Array.prototype.sort`
#[wasm_bindgen]
pub fn comparator(descending: Option<bool>) -> JsValue {
    let sign = if descending.unwrap_or(false) { -1.0 } else { 1.0 };
    let compare = move |a: JsValue, b: JsValue| -> Result<f64, JsValue> {
        let a = pitch_arg(a, "comparator")?;
        let b = pitch_arg(b, "comparator")?;
        Ok(sign * (sort_height(a) - sort_height(b)))
    };
    Closure::<dyn Fn(JsValue, JsValue) -> Result<f64, JsValue>>::new(compare).into_js_value()
}

#[wasm_bindgen]
pub fn add(a: JsValue, b: JsValue) -> Result<JsValue, JsValue> {
    pitch_result(ops::add(pitch_arg(a, "add")?, pitch_arg(b, "add")?))
}

/// Interval from `a` to `b`
#[wasm_bindgen]
pub fn subtract(a: JsValue, b: JsValue) -> Result<JsValue, JsValue> {
    pitch_result(ops::subtract(pitch_arg(a, "subtract")?, pitch_arg(b, "subtract")?))
}

/// The JS factor is truncated to an integer
#[wasm_bindgen]
pub fn multiply(factor: i32, a: JsValue) -> Result<JsValue, JsValue> {
    pitch_result(ops::multiply(factor, pitch_arg(a, "multiply")?))
}

fn height(pitch: Option<crate::models::Pitch>) -> f64 {
    ops::semitones(pitch).map_or(f64::NAN, f64::from)
}

/// Like `height`, but an absent pitch counts as 0 when sorting
fn sort_height(pitch: Option<crate::models::Pitch>) -> f64 {
    pitch.map_or(0.0, |p| height(Some(p)))
}

fn unary<F>(f: F) -> JsValue
where
    F: Fn(JsValue) -> Result<JsValue, JsValue> + 'static,
{
    Closure::<dyn Fn(JsValue) -> Result<JsValue, JsValue>>::new(f).into_js_value()
}
