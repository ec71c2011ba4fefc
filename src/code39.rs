//! Code 39, optionally with modulo 43 check character and full ASCII escapes.

use crate::alphabet::{self, CODE39};
use crate::bars::{BarSequence, WidthBuilder};
use crate::checksum;
use crate::error::{BarcodeError, Result};
use crate::symbology::Symbology;

/// Bar/space widths in [`CODE39`] order, followed by the `*` start/stop.
const PATTERNS: [&[u8; 9]; 44] = [
    b"111331311", // 0
    b"311311113", // 1
    b"113311113", // 2
    b"313311111", // 3
    b"111331113", // 4
    b"311331111", // 5
    b"113331111", // 6
    b"111311313", // 7
    b"311311311", // 8
    b"113311311", // 9
    b"311113113", // A
    b"113113113", // B
    b"313113111", // C
    b"111133113", // D
    b"311133111", // E
    b"113133111", // F
    b"111113313", // G
    b"311113311", // H
    b"113113311", // I
    b"111133311", // J
    b"311111133", // K
    b"113111133", // L
    b"313111131", // M
    b"111131133", // N
    b"311131131", // O
    b"113131131", // P
    b"111111333", // Q
    b"311111331", // R
    b"113111331", // S
    b"111131331", // T
    b"331111113", // U
    b"133111113", // V
    b"333111111", // W
    b"131131113", // X
    b"331131111", // Y
    b"133131111", // Z
    b"131111313", // -
    b"331111311", // .
    b"133111311", // space
    b"131313111", // $
    b"131311131", // /
    b"131113131", // +
    b"111313131", // %
    b"131131311", // *
];

const START_STOP: usize = 43;

/// Encodes `payload` as Code 39.
///
/// Plain mode upper-cases the payload. Extended mode maps every ASCII
/// character onto one or two symbols of the base alphabet first.
pub fn encode(symbology: Symbology, payload: &str, extended: bool, checksum: bool) -> Result<BarSequence> {
    let text = if extended {
        expand(symbology, payload)?
    } else {
        payload.to_ascii_uppercase()
    };
    let mut values = alphabet::values(symbology, CODE39, &text)?;
    if checksum {
        values.push(checksum::mod43(&values));
    }

    let mut b = WidthBuilder::new();
    b.pattern(PATTERNS[START_STOP]);
    for &v in &values {
        b.space(1);
        b.pattern(PATTERNS[usize::from(v)]);
    }
    b.space(1);
    b.pattern(PATTERNS[START_STOP]);

    let mut data = payload.to_string();
    if checksum {
        if let Some(&check) = values.last() {
            data.push(char::from(CODE39.as_bytes()[usize::from(check)]));
        }
    }
    Ok(b.finish(symbology, data))
}

fn expand(symbology: Symbology, payload: &str) -> Result<String> {
    let mut out = String::with_capacity(payload.len() * 2);
    for (position, c) in payload.chars().enumerate() {
        let (shift, base) =
            alphabet::full_ascii(c).ok_or(BarcodeError::invalid_char(symbology, c, position))?;
        out.extend(shift);
        out.push(base);
    }
    Ok(out)
}
