//! Check digit algorithms.
//!
//! Every function is pure and takes symbol values (digits, or indices into a
//! symbology alphabet) in payload order.

use crate::error::{BarcodeError, Result};
use crate::symbology::Symbology;

/// Weighted modulo 10: weights 3, 1, 3, ... starting at the rightmost digit.
///
/// Used by EAN-13, EAN-8, UPC-A, UPC-E and the 2 of 5 checksum variants.
pub fn mod10_weighted(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Compares a supplied check digit with the derived one.
pub fn verify(symbology: Symbology, expected: u8, found: u8) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(BarcodeError::InvalidCheckDigit {
            symbology,
            expected: char::from(b'0' + expected),
            found: char::from(b'0' + found),
        })
    }
}

/// EAN-2 add-on parity selector.
pub fn ean2(digits: &[u8; 2]) -> u8 {
    (digits[0] * 10 + digits[1]) % 4
}

/// EAN-5 add-on parity selector.
pub fn ean5(digits: &[u8; 5]) -> u8 {
    let odd: u32 = [digits[0], digits[2], digits[4]].iter().map(|&d| u32::from(d)).sum();
    let even: u32 = [digits[1], digits[3]].iter().map(|&d| u32::from(d)).sum();
    ((odd * 3 + even * 9) % 10) as u8
}

/// Code 39 modulo 43 over alphabet values.
pub fn mod43(values: &[u8]) -> u8 {
    (values.iter().map(|&v| u32::from(v)).sum::<u32>() % 43) as u8
}

/// Sum of values weighted 1, 2, ..., `max_weight`, 1, ... from the right,
/// reduced modulo `modulus`.
fn cyclic_weighted(values: &[u8], max_weight: u32, modulus: u32) -> u8 {
    let sum: u32 = values
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &v)| u32::from(v) * (i as u32 % max_weight + 1))
        .sum();
    (sum % modulus) as u8
}

/// Code 93 `C` and `K` check values.
pub fn code93(values: &[u8]) -> (u8, u8) {
    let c = cyclic_weighted(values, 20, 47);
    let mut with_c = values.to_vec();
    with_c.push(c);
    (c, cyclic_weighted(&with_c, 15, 47))
}

/// Code 11 `C` check value, and `K` for payloads longer than ten symbols.
/// A value of 10 stands for the `-` symbol.
pub fn code11(values: &[u8]) -> (u8, Option<u8>) {
    let c = cyclic_weighted(values, 10, 11);
    if values.len() <= 10 {
        return (c, None);
    }
    let mut with_c = values.to_vec();
    with_c.push(c);
    (c, Some(cyclic_weighted(&with_c, 9, 11)))
}

/// MSI modulo 10 (Luhn): every second digit from the right is doubled.
pub fn msi_mod10(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// MSI modulo 11 with weights 2..=7 from the right. May return 10.
pub fn msi_mod11(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (i as u32 % 6 + 2))
        .sum();
    ((11 - sum % 11) % 11) as u8
}

/// Code 128 modulo 103 over the start code and data codewords.
pub fn mod103(codewords: &[u8]) -> u8 {
    let sum: u32 = codewords
        .iter()
        .enumerate()
        .map(|(i, &v)| u32::from(v) * (i as u32).max(1))
        .sum();
    (sum % 103) as u8
}

/// POSTNET and PLANET frame check digit.
pub fn postal(digits: &[u8]) -> u8 {
    let sum: u32 = digits.iter().map(|&d| u32::from(d)).sum();
    ((10 - sum % 10) % 10) as u8
}

/// RMS4CC check character, as an index into the 36-symbol table.
///
/// Each symbol sits at a (row, column) position of a 6x6 matrix; rows and
/// columns are summed separately modulo 6, where a remainder of 0 selects
/// the sixth row or column.
pub fn rms4cc(values: &[u8]) -> u8 {
    let (rows, cols) = values.iter().fold((0u32, 0u32), |(r, c), &v| {
        (r + u32::from(v / 6) + 1, c + u32::from(v % 6) + 1)
    });
    let row = (rows + 5) % 6;
    let col = (cols + 5) % 6;
    (row * 6 + col) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;

    #[test]
    fn test_mod10_weighted() {
        assert_eq!(mod10_weighted(&[0, 0, 4, 9, 0, 0, 0, 0, 0, 4, 6, 3]), 2);
        assert_eq!(mod10_weighted(&[0, 8, 1, 2, 3, 1, 7, 2, 3, 8, 9, 7]), 3);
        // EAN-8 and UPC-A use the same weights from the right.
        assert_eq!(mod10_weighted(&[1, 2, 3, 4, 5, 6, 8]), 7);
        assert_eq!(mod10_weighted(&[0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9]), 5);
        // A leading zero never changes the result.
        assert_eq!(mod10_weighted(&[1, 2, 3]), mod10_weighted(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_verify() {
        assert!(verify(Symbology::Ean13, 2, 2).is_ok());
        assert_eq!(
            verify(Symbology::Ean13, 2, 3),
            Err(BarcodeError::InvalidCheckDigit {
                symbology: Symbology::Ean13,
                expected: '2',
                found: '3',
            })
        );
    }

    #[test]
    fn test_addons() {
        assert_eq!(ean2(&[1, 2]), 0);
        assert_eq!(ean2(&[5, 3]), 1);
        assert_eq!(ean5(&[5, 2, 4, 9, 5]), 1);
        assert_eq!(ean5(&[1, 2, 3, 4, 5]), 1);
    }

    #[test]
    fn test_mod43() {
        let values = alphabet::values(Symbology::Code39, alphabet::CODE39, "CODE39").unwrap();
        assert_eq!(alphabet::CODE39.as_bytes()[mod43(&values) as usize], b'W');
    }

    #[test]
    fn test_code93() {
        let values = alphabet::values(Symbology::Code93, alphabet::CODE39, "TEST93").unwrap();
        // "+6"
        assert_eq!(code93(&values), (41, 6));
    }

    #[test]
    fn test_code11() {
        assert_eq!(code11(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), (0, None));
        assert_eq!(code11(&[1, 2, 3, 10, 4, 5]), (5, None));
        assert_eq!(code11(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1]), (4, Some(10)));
    }

    #[test]
    fn test_msi() {
        assert_eq!(msi_mod10(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 7);
        assert_eq!(msi_mod10(&[1, 2, 3, 4]), 4);
        assert_eq!(msi_mod11(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 2);
        assert_eq!(msi_mod11(&[1, 2, 3, 4]), 3);
    }

    #[test]
    fn test_mod103() {
        assert_eq!(mod103(&[105, 12, 34, 56, 78, 90]), 85);
        assert_eq!(mod103(&[103, 17, 18, 19, 20, 21, 22, 23, 24, 25, 16]), 32);
    }

    #[test]
    fn test_postal() {
        assert_eq!(postal(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 5);
        assert_eq!(postal(&[5, 5]), 0);
    }

    #[test]
    fn test_rms4cc() {
        // '0' sits at row 1, column 1: two of them sum to (2, 2).
        assert_eq!(rms4cc(&[0, 0]), 7);
        // Sums that are multiples of six select the last row and column.
        assert_eq!(rms4cc(&[35]), 35);
        assert_eq!(rms4cc(&[35, 35]), 35);
    }
}
