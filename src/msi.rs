//! MSI (Modified Plessey).

use crate::alphabet;
use crate::bars::{BarSequence, WidthBuilder};
use crate::checksum;
use crate::error::Result;
use crate::symbology::Symbology;

/// Check digit algorithm for [`Symbology::MsiChecksum`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MsiCheck {
    /// Luhn modulo 10.
    Mod10,
    /// Modulo 11 with weights 2..=7. A check value of 10 is printed as the
    /// two digits `10`.
    #[default]
    Mod11,
}

const START: &str = "110";
const STOP: &str = "1001";

/// Encodes `payload` as MSI, each digit as four BCD bits where a one is a
/// wide bar followed by a narrow space and a zero the reverse.
pub fn encode(symbology: Symbology, payload: &str, check: Option<MsiCheck>) -> Result<BarSequence> {
    let mut digits = alphabet::digits(symbology, payload)?;
    match check {
        Some(MsiCheck::Mod10) => digits.push(checksum::msi_mod10(&digits)),
        Some(MsiCheck::Mod11) => match checksum::msi_mod11(&digits) {
            10 => digits.extend([1, 0]),
            d => digits.push(d),
        },
        None => {}
    }

    let mut b = WidthBuilder::new();
    b.modules(START);
    for &d in &digits {
        for bit in (0..4).rev() {
            b.modules(if (d >> bit) & 1 == 1 { "110" } else { "100" });
        }
    }
    b.modules(STOP);
    Ok(b.finish(symbology, alphabet::digit_string(&digits)))
}
