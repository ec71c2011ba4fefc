//! Laetus Pharmacode, one-track and two-track.
//!
//! Pharmacode encodes an integer rather than a string. The one-track variant
//! is a binary representation in narrow and wide bars; the two-track variant
//! is bijective base 3 in descender, ascender and full bars.

use crate::alphabet;
use crate::bars::{BarSequence, Element, HeightClass, WidthBuilder};
use crate::error::{BarcodeError, Result};
use crate::symbology::Symbology;

pub const ONE_TRACK_MIN: u64 = 3;
pub const ONE_TRACK_MAX: u64 = 131_070;
pub const TWO_TRACK_MIN: u64 = 4;
pub const TWO_TRACK_MAX: u64 = 64_570_080;

const NARROW: u8 = 1;
const WIDE: u8 = 3;
const GAP: u8 = 2;

fn parse(symbology: Symbology, payload: &str, min: u64, max: u64) -> Result<u64> {
    let digits = alphabet::digits(symbology, payload)?;
    let value = digits
        .iter()
        .try_fold(0u64, |acc, &d| acc.checked_mul(10)?.checked_add(u64::from(d)))
        .filter(|v| (min..=max).contains(v));
    value.ok_or_else(|| BarcodeError::OutOfRange {
        symbology,
        value: payload.to_owned(),
        min,
        max,
    })
}

/// Encodes a one-track Pharmacode in the range 3..=131070.
///
/// Values above the Laetus limits are rejected rather than encoded as
/// oversized symbols, so `"123456789"` is `OutOfRange` for both variants.
pub fn encode_one_track(symbology: Symbology, payload: &str) -> Result<BarSequence> {
    let value = parse(symbology, payload, ONE_TRACK_MIN, ONE_TRACK_MAX)?;

    let mut v = value;
    // least significant bar first
    let mut bars = Vec::new();
    while v > 0 {
        if v % 2 == 0 {
            bars.push(WIDE);
            v -= 2;
        } else {
            bars.push(NARROW);
            v -= 1;
        }
        v /= 2;
    }

    let mut b = WidthBuilder::new();
    for &w in bars.iter().rev() {
        b.bar(w);
        b.space(GAP);
    }
    Ok(b.finish(symbology, value.to_string()))
}

/// Encodes a two-track Pharmacode in the range 4..=64570080.
pub fn encode_two_track(symbology: Symbology, payload: &str) -> Result<BarSequence> {
    let value = parse(symbology, payload, TWO_TRACK_MIN, TWO_TRACK_MAX)?;

    let mut v = value;
    let mut tracks = Vec::new();
    while v > 0 {
        // bijective digits are 1..=3, a remainder of zero stands for 3
        let (class, digit) = match v % 3 {
            0 => (HeightClass::Full, 3),
            1 => (HeightClass::Descender, 1),
            _ => (HeightClass::Ascender, 2),
        };
        tracks.push(Element::Track(class));
        v = (v - digit) / 3;
    }
    tracks.reverse();

    Ok(BarSequence::new(symbology, value.to_string(), tracks))
}
