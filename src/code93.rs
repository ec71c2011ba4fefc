//! Code 93 with full ASCII through its four shift symbols.

use crate::alphabet::{self, CODE39};
use crate::bars::{BarSequence, WidthBuilder};
use crate::checksum;
use crate::error::{BarcodeError, Result};
use crate::symbology::Symbology;

/// Bar/space widths for symbol values 0..=47: the [`CODE39`] alphabet, the
/// shift symbols ($) (%) (/) (+) and the start/stop symbol.
const PATTERNS: [&[u8; 6]; 48] = [
    b"131112", b"111213", b"111312", b"111411", b"121113", // 0-4
    b"121212", b"121311", b"111114", b"131211", b"141111", // 5-9
    b"211113", b"211212", b"211311", b"221112", b"221211", // A-E
    b"231111", b"112113", b"112212", b"112311", b"122112", // F-J
    b"132111", b"111123", b"111222", b"111321", b"121122", // K-O
    b"131121", b"212112", b"212211", b"211122", b"211221", // P-T
    b"221121", b"222111", b"112122", b"112221", b"122121", // U-Y
    b"123111", b"121131", b"311112", b"311211", b"321111", // Z - . space $
    b"112131", b"113121", b"211131", b"121221", b"312111", // / + % ($) (%)
    b"311121", b"122211", b"111141",                       // (/) (+) start/stop
];

const START_STOP: usize = 47;

fn shift_value(shift: char) -> u8 {
    match shift {
        '$' => 43,
        '%' => 44,
        '/' => 45,
        _ => 46,
    }
}

/// Encodes `payload` as Code 93 with both check symbols.
pub fn encode(symbology: Symbology, payload: &str) -> Result<BarSequence> {
    let mut values = Vec::with_capacity(payload.len() + 2);
    for (position, c) in payload.chars().enumerate() {
        let (shift, base) =
            alphabet::full_ascii(c).ok_or(BarcodeError::invalid_char(symbology, c, position))?;
        if let Some(shift) = shift {
            values.push(shift_value(shift));
        }
        let value = CODE39
            .find(base)
            .ok_or(BarcodeError::invalid_char(symbology, c, position))?;
        values.push(value as u8);
    }
    let (c, k) = checksum::code93(&values);
    values.push(c);
    values.push(k);

    let mut b = WidthBuilder::new();
    b.pattern(PATTERNS[START_STOP]);
    for &v in &values {
        b.pattern(PATTERNS[usize::from(v)]);
    }
    b.pattern(PATTERNS[START_STOP]);
    // termination bar
    b.bar(1);
    Ok(b.finish(symbology, payload.to_string()))
}
