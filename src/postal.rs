//! Height-modulated postal codes: POSTNET, PLANET, RMS4CC and KIX.

use crate::alphabet::{self, BASE36};
use crate::bars::{BarSequence, Element, HeightClass};
use crate::checksum;
use crate::error::{BarcodeError, Result};
use crate::symbology::Symbology;

/// POSTNET bars per digit, `true` = full height.
const POSTNET: [[bool; 5]; 10] = [
    [true, true, false, false, false],
    [false, false, false, true, true],
    [false, false, true, false, true],
    [false, false, true, true, false],
    [false, true, false, false, true],
    [false, true, false, true, false],
    [false, true, true, false, false],
    [true, false, false, false, true],
    [true, false, false, true, false],
    [true, false, true, false, false],
];

/// 4-state bars per character of [`BASE36`]:
/// 1 = ascender, 2 = full, 3 = tracker, 4 = descender.
const FOUR_STATE: [[u8; 4]; 36] = [
    [3, 3, 2, 2], [3, 4, 1, 2], [3, 4, 2, 1], [4, 3, 1, 2], [4, 3, 2, 1], [4, 4, 1, 1], // 0-5
    [3, 1, 4, 2], [3, 2, 3, 2], [3, 2, 4, 1], [4, 1, 3, 2], [4, 1, 4, 1], [4, 2, 3, 1], // 6-B
    [3, 1, 2, 4], [3, 2, 1, 4], [3, 2, 2, 3], [4, 1, 1, 4], [4, 1, 2, 3], [4, 2, 1, 3], // C-H
    [1, 3, 4, 2], [1, 4, 3, 2], [1, 4, 4, 1], [2, 3, 3, 2], [2, 3, 4, 1], [2, 4, 3, 1], // I-N
    [1, 3, 2, 4], [1, 4, 1, 4], [1, 4, 2, 3], [2, 3, 1, 4], [2, 3, 2, 3], [2, 4, 1, 3], // O-T
    [1, 1, 4, 4], [1, 2, 3, 4], [1, 2, 4, 3], [2, 1, 3, 4], [2, 1, 4, 3], [2, 2, 3, 3], // U-Z
];

fn four_state(mode: u8) -> HeightClass {
    match mode {
        1 => HeightClass::Ascender,
        2 => HeightClass::Full,
        3 => HeightClass::Tracker,
        _ => HeightClass::Descender,
    }
}

/// Encodes POSTNET, or PLANET when `planet` is set (same layout, inverted
/// heights). Spaces and dashes in the payload are ignored.
pub fn encode_postnet(symbology: Symbology, payload: &str, planet: bool) -> Result<BarSequence> {
    let cleaned: String = payload.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    if cleaned.is_empty() {
        return Err(BarcodeError::invalid_length(symbology, 0, "payload has no digits"));
    }
    let mut digits = alphabet::digits(symbology, &cleaned)?;
    digits.push(checksum::postal(&digits));

    let mut elements = Vec::with_capacity(digits.len() * 5 + 2);
    elements.push(Element::Track(HeightClass::Full));
    for &d in &digits {
        for &full in &POSTNET[usize::from(d)] {
            let class = if full != planet {
                HeightClass::Full
            } else {
                HeightClass::Tracker
            };
            elements.push(Element::Track(class));
        }
    }
    elements.push(Element::Track(HeightClass::Full));
    Ok(BarSequence::new(symbology, alphabet::digit_string(&digits), elements))
}

/// Encodes RMS4CC, or KIX when `kix` is set.
///
/// RMS4CC is framed by an ascender start bar and a full stop bar and may
/// carry a check character; KIX has neither.
pub fn encode_four_state(symbology: Symbology, payload: &str, kix: bool, checksum: bool) -> Result<BarSequence> {
    let upper = payload.to_ascii_uppercase();
    let mut values = alphabet::values(symbology, BASE36, &upper)?;
    if checksum && !kix {
        values.push(checksum::rms4cc(&values));
    }

    let mut elements = Vec::with_capacity(values.len() * 4 + 2);
    if !kix {
        elements.push(Element::Track(HeightClass::Ascender));
    }
    for &v in &values {
        elements.extend(
            FOUR_STATE[usize::from(v)]
                .iter()
                .map(|&mode| Element::Track(four_state(mode))),
        );
    }
    if !kix {
        elements.push(Element::Track(HeightClass::Full));
    }

    let data = values
        .iter()
        .map(|&v| char::from(BASE36.as_bytes()[usize::from(v)]))
        .collect();
    Ok(BarSequence::new(symbology, data, elements))
}
