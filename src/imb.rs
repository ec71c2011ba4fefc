//! USPS Intelligent Mail Barcode (4-state customer barcode).
//!
//! The payload is a tracking code of up to 20 digits, optionally followed by
//! `-` and a routing (ZIP) code of 5, 9 or 11 digits. Both are folded into a
//! single 102-bit integer, protected by an 11-bit CRC, split into ten
//! codewords and mapped to 13-bit characters whose bits drive the ascenders
//! and descenders of 65 bars.

use crate::alphabet;
use crate::bars::{BarSequence, Element, HeightClass};
use crate::error::{BarcodeError, Result};
use crate::symbology::Symbology;

pub const TRACKING_LEN: usize = 20;
pub const BAR_COUNT: usize = 65;

const CRC_POLY: u16 = 0x0F35;

/// Character holding each bar's ascender bit.
const ASC_CHR: [usize; BAR_COUNT] = [
    4, 0, 2, 6, 3, 5, 1, 9, 8, 7, 1, 2, 0, 6, 4, 8, 2, 9, 5, 3, 0, 1, 3, 7, 4, 6, 8, 9, 2, 0, 5,
    1, 9, 4, 3, 8, 6, 7, 1, 2, 4, 3, 9, 5, 7, 8, 3, 0, 2, 1, 4, 0, 9, 1, 7, 0, 2, 4, 6, 3, 7, 1,
    9, 5, 8,
];
/// Character holding each bar's descender bit.
const DSC_CHR: [usize; BAR_COUNT] = [
    7, 1, 9, 5, 8, 0, 2, 4, 6, 3, 5, 8, 9, 7, 3, 0, 6, 1, 7, 4, 6, 8, 9, 2, 5, 1, 7, 5, 4, 3, 8,
    7, 6, 0, 2, 5, 4, 9, 3, 0, 1, 6, 8, 2, 0, 4, 5, 9, 6, 7, 5, 2, 6, 3, 8, 5, 1, 9, 8, 7, 4, 0,
    2, 6, 3,
];
const ASC_POS: [u8; BAR_COUNT] = [
    3, 0, 8, 11, 1, 12, 8, 11, 10, 6, 4, 12, 2, 7, 9, 6, 7, 9, 2, 8, 4, 0, 12, 7, 10, 9, 0, 7, 10,
    5, 7, 9, 6, 8, 2, 12, 1, 4, 2, 0, 1, 5, 4, 6, 12, 1, 0, 9, 4, 7, 5, 10, 2, 6, 9, 11, 2, 12, 6,
    7, 5, 11, 0, 3, 2,
];
const DSC_POS: [u8; BAR_COUNT] = [
    2, 10, 12, 5, 9, 1, 5, 4, 3, 9, 11, 5, 10, 1, 6, 3, 4, 1, 10, 0, 2, 11, 8, 6, 1, 12, 3, 8, 6,
    4, 4, 11, 0, 6, 1, 9, 11, 5, 3, 7, 3, 10, 7, 11, 8, 2, 10, 3, 5, 8, 0, 3, 12, 11, 8, 4, 5, 1,
    3, 0, 7, 12, 9, 8, 10,
];

/// 13-bit characters with five bits set.
static TABLE_5_OF_13: [u16; 1287] = n_of_13(5);
/// 13-bit characters with two bits set.
static TABLE_2_OF_13: [u16; 78] = n_of_13(2);

const fn reverse13(v: u16) -> u16 {
    let mut out = 0;
    let mut i = 0;
    while i < 13 {
        out = (out << 1) | ((v >> i) & 1);
        i += 1;
    }
    out
}

/// Builds the table of 13-bit values with `ones` bits set. Pairs of mirror
/// images fill the table from the front, palindromes from the back.
const fn n_of_13<const N: usize>(ones: u32) -> [u16; N] {
    let mut table = [0u16; N];
    let mut lower = 0;
    let mut upper = N - 1;
    let mut count: u16 = 0;
    while count < 1 << 13 {
        if count.count_ones() == ones {
            let rev = reverse13(count);
            if rev == count {
                table[upper] = count;
                upper -= 1;
            } else if rev > count {
                table[lower] = count;
                table[lower + 1] = rev;
                lower += 2;
            }
        }
        count += 1;
    }
    table
}

fn crc_step(mut fcs: u16, mut data: u16, bits: usize) -> u16 {
    for _ in 0..bits {
        fcs = if (fcs ^ data) & 0x400 != 0 {
            (fcs << 1) ^ CRC_POLY
        } else {
            fcs << 1
        };
        fcs &= 0x7FF;
        data <<= 1;
    }
    fcs
}

/// Frame check sequence over the 102-bit binary value, most significant
/// byte first. The two leading pad bits of the first byte are skipped.
fn crc11(bytes: &[u8; 13]) -> u16 {
    let fcs = crc_step(0x07FF, u16::from(bytes[0]) << 5, 6);
    bytes[1..]
        .iter()
        .fold(fcs, |fcs, &byte| crc_step(fcs, u16::from(byte) << 3, 8))
}

fn routing_value(routing: &[u8]) -> u128 {
    let value = routing
        .iter()
        .fold(0u128, |acc, &d| acc * 10 + u128::from(d));
    match routing.len() {
        5 => value + 1,
        9 => value + 100_001,
        11 => value + 1_000_100_001,
        _ => 0,
    }
}

/// The second tracking digit is base 5.
fn binary_value(tracking: &[u8; TRACKING_LEN], routing: &[u8]) -> u128 {
    let mut value = routing_value(routing);
    value = value * 10 + u128::from(tracking[0]);
    value = value * 5 + u128::from(tracking[1]);
    tracking[2..]
        .iter()
        .fold(value, |acc, &d| acc * 10 + u128::from(d))
}

fn frame_check(value: u128) -> u16 {
    let mut bytes = [0u8; 13];
    bytes.copy_from_slice(&value.to_be_bytes()[3..]);
    crc11(&bytes)
}

/// Computes the 65 bars for a validated tracking code and routing code.
///
/// `routing` must be empty or 5, 9 or 11 digits long.
pub fn bars(tracking: &[u8; TRACKING_LEN], routing: &[u8]) -> [HeightClass; BAR_COUNT] {
    let mut value = binary_value(tracking, routing);
    let fcs = frame_check(value);

    let mut codewords = [0u16; 10];
    codewords[9] = (value % 636) as u16;
    value /= 636;
    for cw in codewords[1..9].iter_mut().rev() {
        *cw = (value % 1365) as u16;
        value /= 1365;
    }
    codewords[0] = value as u16;
    codewords[9] *= 2;
    if fcs & 0x400 != 0 {
        codewords[0] += 659;
    }

    let mut chars = [0u16; 10];
    for (i, (ch, &cw)) in chars.iter_mut().zip(codewords.iter()).enumerate() {
        let cw = usize::from(cw);
        *ch = if cw < TABLE_5_OF_13.len() {
            TABLE_5_OF_13[cw]
        } else {
            TABLE_2_OF_13[cw - TABLE_5_OF_13.len()]
        };
        if fcs & (1 << i) != 0 {
            *ch ^= 0x1FFF;
        }
    }

    let mut out = [HeightClass::Tracker; BAR_COUNT];
    for (k, bar) in out.iter_mut().enumerate() {
        let ascender = (chars[ASC_CHR[k]] >> ASC_POS[k]) & 1 == 1;
        let descender = (chars[DSC_CHR[k]] >> DSC_POS[k]) & 1 == 1;
        *bar = match (ascender, descender) {
            (true, true) => HeightClass::Full,
            (true, false) => HeightClass::Ascender,
            (false, true) => HeightClass::Descender,
            (false, false) => HeightClass::Tracker,
        };
    }
    out
}

fn digits_at(symbology: Symbology, text: &str, offset: usize) -> Result<Vec<u8>> {
    alphabet::digits(symbology, text).map_err(|err| match err {
        BarcodeError::InvalidCharacter {
            symbology,
            character,
            position,
        } => BarcodeError::invalid_char(symbology, character, position + offset),
        other => other,
    })
}

/// Encodes `tracking[-routing]` as an Intelligent Mail Barcode.
///
/// Tracking codes shorter than 20 digits are left-padded with zeros. The
/// second tracking digit must be 0 to 4.
pub fn encode(symbology: Symbology, payload: &str) -> Result<BarSequence> {
    let (tracking_text, routing_text) = match payload.split_once('-') {
        Some((tracking, routing)) => (tracking, routing),
        None => (payload, ""),
    };

    let digits = digits_at(symbology, tracking_text, 0)?;
    if digits.is_empty() {
        return Err(BarcodeError::invalid_length(symbology, 0, "tracking code is empty"));
    }
    if digits.len() > TRACKING_LEN {
        return Err(BarcodeError::invalid_length(
            symbology,
            digits.len(),
            "tracking code has at most 20 digits",
        ));
    }
    let routing = digits_at(symbology, routing_text, tracking_text.len() + 1)?;
    if !matches!(routing.len(), 0 | 5 | 9 | 11) {
        return Err(BarcodeError::invalid_length(
            symbology,
            routing.len(),
            "routing code has 5, 9 or 11 digits",
        ));
    }

    let mut tracking = [0u8; TRACKING_LEN];
    tracking[TRACKING_LEN - digits.len()..].copy_from_slice(&digits);
    if tracking[1] > 4 {
        return Err(BarcodeError::OutOfRange {
            symbology,
            value: tracking[1].to_string(),
            min: 0,
            max: 4,
        });
    }

    log::trace!("imb tracking={tracking:?} routing={routing:?}");
    let elements = bars(&tracking, &routing).map(Element::Track).to_vec();

    let mut data = alphabet::digit_string(&tracking);
    data.push_str(&alphabet::digit_string(&routing));
    Ok(BarSequence::new(symbology, data, elements))
}
