//! EAN/UPC family: EAN-13, EAN-8, UPC-A, UPC-E and the EAN-2/EAN-5 add-ons.

use crate::alphabet;
use crate::bars::{BarSequence, WidthBuilder};
use crate::checksum;
use crate::error::{BarcodeError, Result};
use crate::symbology::Symbology;

/// Odd parity (set A) left-hand digits.
const L: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011", "0110001", "0101111", "0111011",
    "0110111", "0001011",
];

/// Even parity (set B) left-hand digits.
const G: [&str; 10] = [
    "0100111", "0110011", "0011011", "0100001", "0011101", "0111001", "0000101", "0010001",
    "0001001", "0010111",
];

/// Right-hand digits (set C).
const R: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100", "1001110", "1010000", "1000100",
    "1001000", "1110100",
];

/// EAN-13 left-half parities, selected by the first digit.
const EAN13_PARITY: [&str; 10] = [
    "LLLLLL", "LLGLGG", "LLGGLG", "LLGGGL", "LGLLGG", "LGGLLG", "LGGGLL", "LGLGLG", "LGLGGL",
    "LGGLGL",
];

/// UPC-E parities for number system 0, selected by the check digit. Number
/// system 1 uses the inverse.
const UPCE_PARITY: [&str; 10] = [
    "GGGLLL", "GGLGLL", "GGLLGL", "GGLLLG", "GLGGLL", "GLLGGL", "GLLLGG", "GLGLGL", "GLGLLG",
    "GLLGLG",
];

const EAN2_PARITY: [&str; 4] = ["LL", "LG", "GL", "GG"];

const EAN5_PARITY: [&str; 10] = [
    "GGLLL", "GLGLL", "GLLGL", "GLLLG", "LGGLL", "LLGGL", "LLLGG", "LGLGL", "LGLLG", "LLGLG",
];

const GUARD: &str = "101";
const CENTER: &str = "01010";
const UPCE_END: &str = "010101";
const ADDON_START: &str = "1011";
const ADDON_SEPARATOR: &str = "01";

fn left(parity: u8, digit: u8) -> &'static str {
    if parity == b'G' {
        G[usize::from(digit)]
    } else {
        L[usize::from(digit)]
    }
}

/// Parses a payload of `len` digits including the check digit.
///
/// `len - 1` digits get the check digit appended; `len` digits have theirs
/// verified. Shorter payloads are left-padded with zeros first.
fn with_check_digit(symbology: Symbology, payload: &str, len: usize) -> Result<Vec<u8>> {
    let mut digits = alphabet::digits(symbology, payload)?;
    if digits.len() > len {
        return Err(BarcodeError::invalid_length(
            symbology,
            digits.len(),
            "too many digits",
        ));
    }
    if digits.len() < len - 1 {
        let mut padded = vec![0; len - 1 - digits.len()];
        padded.append(&mut digits);
        digits = padded;
    }
    let check = checksum::mod10_weighted(&digits[..len - 1]);
    if digits.len() == len {
        checksum::verify(symbology, check, digits[len - 1])?;
    } else {
        digits.push(check);
    }
    Ok(digits)
}

fn ean13_modules(digits: &[u8]) -> String {
    let parity = EAN13_PARITY[usize::from(digits[0])].as_bytes();
    let mut s = String::with_capacity(95);
    s.push_str(GUARD);
    for (i, &d) in digits[1..7].iter().enumerate() {
        s.push_str(left(parity[i], d));
    }
    s.push_str(CENTER);
    for &d in &digits[7..13] {
        s.push_str(R[usize::from(d)]);
    }
    s.push_str(GUARD);
    s
}

fn finish(symbology: Symbology, modules: &str, digits: &[u8]) -> BarSequence {
    let mut b = WidthBuilder::new();
    b.modules(modules);
    b.finish(symbology, alphabet::digit_string(digits))
}

/// Encodes `payload` as EAN-13.
pub fn encode_ean13(symbology: Symbology, payload: &str) -> Result<BarSequence> {
    let digits = with_check_digit(symbology, payload, 13)?;
    Ok(finish(symbology, &ean13_modules(&digits), &digits))
}

/// Encodes `payload` as UPC-A: an EAN-13 symbol with a leading zero.
pub fn encode_upca(symbology: Symbology, payload: &str) -> Result<BarSequence> {
    let digits = with_check_digit(symbology, payload, 12)?;
    let mut ean = Vec::with_capacity(13);
    ean.push(0);
    ean.extend_from_slice(&digits);
    Ok(finish(symbology, &ean13_modules(&ean), &digits))
}

/// Encodes `payload` as EAN-8.
pub fn encode_ean8(symbology: Symbology, payload: &str) -> Result<BarSequence> {
    let digits = with_check_digit(symbology, payload, 8)?;
    let mut s = String::with_capacity(67);
    s.push_str(GUARD);
    for &d in &digits[..4] {
        s.push_str(L[usize::from(d)]);
    }
    s.push_str(CENTER);
    for &d in &digits[4..] {
        s.push_str(R[usize::from(d)]);
    }
    s.push_str(GUARD);
    Ok(finish(symbology, &s, &digits))
}

/// Compresses a 12 digit UPC-A number (with check digit) to the six UPC-E
/// data digits.
fn compress_upce(upca: &[u8]) -> [u8; 6] {
    let m = &upca[1..6];
    let p = &upca[6..11];
    if m[2..5] == [0, 0, 0] || m[2..5] == [1, 0, 0] || m[2..5] == [2, 0, 0] {
        [m[0], m[1], p[2], p[3], p[4], m[2]]
    } else if m[3..5] == [0, 0] {
        [m[0], m[1], m[2], p[3], p[4], 3]
    } else if m[4] == 0 {
        [m[0], m[1], m[2], m[3], p[4], 4]
    } else {
        [m[0], m[1], m[2], m[3], m[4], p[4]]
    }
}

/// Encodes a UPC-A `payload` as a zero-suppressed UPC-E symbol.
///
/// Only number systems 0 and 1 exist in UPC-E.
pub fn encode_upce(symbology: Symbology, payload: &str) -> Result<BarSequence> {
    let upca = with_check_digit(symbology, payload, 12)?;
    let system = upca[0];
    if system > 1 {
        return Err(BarcodeError::invalid_char(symbology, char::from(b'0' + system), 0));
    }
    let check = upca[11];
    let body = compress_upce(&upca);

    let parity = UPCE_PARITY[usize::from(check)].as_bytes();
    let mut s = String::with_capacity(51);
    s.push_str(GUARD);
    for (&p, &d) in parity.iter().zip(body.iter()) {
        let p = match (system, p) {
            (0, p) => p,
            (_, b'G') => b'L',
            _ => b'G',
        };
        s.push_str(left(p, d));
    }
    s.push_str(UPCE_END);

    let mut digits = Vec::with_capacity(8);
    digits.push(system);
    digits.extend_from_slice(&body);
    digits.push(check);
    Ok(finish(symbology, &s, &digits))
}

fn addon_modules(digits: &[u8], parity: &str) -> String {
    let mut s = String::from(ADDON_START);
    for (i, (&d, p)) in digits.iter().zip(parity.bytes()).enumerate() {
        if i > 0 {
            s.push_str(ADDON_SEPARATOR);
        }
        s.push_str(left(p, d));
    }
    s
}

fn addon_digits<const N: usize>(symbology: Symbology, payload: &str) -> Result<[u8; N]> {
    let digits = alphabet::digits(symbology, payload)?;
    if digits.len() > N {
        return Err(BarcodeError::invalid_length(
            symbology,
            digits.len(),
            "too many digits for an add-on",
        ));
    }
    let mut out = [0u8; N];
    out[N - digits.len()..].copy_from_slice(&digits);
    Ok(out)
}

/// Encodes `payload` as a two digit EAN add-on.
pub fn encode_ean2(symbology: Symbology, payload: &str) -> Result<BarSequence> {
    let digits = addon_digits::<2>(symbology, payload)?;
    let parity = EAN2_PARITY[usize::from(checksum::ean2(&digits))];
    Ok(finish(symbology, &addon_modules(&digits, parity), &digits))
}

/// Encodes `payload` as a five digit EAN add-on.
pub fn encode_ean5(symbology: Symbology, payload: &str) -> Result<BarSequence> {
    let digits = addon_digits::<5>(symbology, payload)?;
    let parity = EAN5_PARITY[usize::from(checksum::ean5(&digits))];
    Ok(finish(symbology, &addon_modules(&digits, parity), &digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_consistent() {
        for d in 0..10 {
            let complement: String = L[d]
                .chars()
                .map(|c| if c == '0' { '1' } else { '0' })
                .collect();
            assert_eq!(R[d], complement);
            assert_eq!(G[d], R[d].chars().rev().collect::<String>());
        }
    }

    #[test]
    fn test_ean13_check_digit_is_derived() {
        let seq = encode_ean13(Symbology::Ean13, "081231723897").unwrap();
        assert_eq!(seq.data(), "0812317238973");
        assert_eq!(seq.module_width(), 95);
        assert_eq!(seq.len(), 59);
    }

    #[test]
    fn test_ean13_accepts_12_and_13_digits() {
        let derived = encode_ean13(Symbology::Ean13, "004900000463").unwrap();
        let supplied = encode_ean13(Symbology::Ean13, "0049000004632").unwrap();
        assert_eq!(derived, supplied);
    }

    #[test]
    fn test_ean13_pads_short_payloads() {
        let short = encode_ean13(Symbology::Ean13, "04900000463").unwrap();
        let full = encode_ean13(Symbology::Ean13, "0049000004632").unwrap();
        assert_eq!(short, full);
    }

    #[test]
    fn test_ean13_rejects_wrong_check_digit() {
        assert_eq!(
            encode_ean13(Symbology::Ean13, "0049000004633").unwrap_err(),
            BarcodeError::InvalidCheckDigit {
                symbology: Symbology::Ean13,
                expected: '2',
                found: '3',
            }
        );
    }

    #[test]
    fn test_ean13_rejects_letters_and_long_input() {
        assert_eq!(
            encode_ean13(Symbology::Ean13, "A123").unwrap_err(),
            BarcodeError::invalid_char(Symbology::Ean13, 'A', 0)
        );
        assert!(matches!(
            encode_ean13(Symbology::Ean13, "00490000046321"),
            Err(BarcodeError::InvalidLength { length: 14, .. })
        ));
    }

    #[test]
    fn test_ean8() {
        let seq = encode_ean8(Symbology::Ean8, "1234568").unwrap();
        assert_eq!(seq.data(), "12345687");
        assert_eq!(seq.module_width(), 67);
        assert_eq!(seq.len(), 43);
    }

    #[test]
    fn test_upca_matches_ean13_with_leading_zero() {
        let upca = encode_upca(Symbology::UpcA, "123456789").unwrap();
        assert_eq!(upca.data(), "001234567895");
        let ean = encode_ean13(Symbology::Ean13, "0001234567895").unwrap();
        assert_eq!(upca.elements(), ean.elements());
    }

    #[test]
    fn test_upce() {
        let seq = encode_upce(Symbology::UpcE, "123456789").unwrap();
        assert_eq!(seq.data(), "00123495");
        assert_eq!(seq.module_width(), 51);
        assert_eq!(seq.len(), 33);
    }

    #[test]
    fn test_upce_zero_suppression() {
        // manufacturer 12000, product 00345 -> 12 345 0
        assert_eq!(compress_upce(&[0, 1, 2, 0, 0, 0, 0, 0, 3, 4, 5, 0]), [1, 2, 3, 4, 5, 0]);
        // manufacturer 12300, product 00045 -> 123 45 3
        assert_eq!(compress_upce(&[0, 1, 2, 3, 0, 0, 0, 0, 0, 4, 5, 0]), [1, 2, 3, 4, 5, 3]);
        // manufacturer 12340, product 00005 -> 1234 5 4
        assert_eq!(compress_upce(&[0, 1, 2, 3, 4, 0, 0, 0, 0, 0, 5, 0]), [1, 2, 3, 4, 5, 4]);
        // manufacturer 12345, product 00007 -> 12345 7
        assert_eq!(compress_upce(&[0, 1, 2, 3, 4, 5, 0, 0, 0, 0, 7, 0]), [1, 2, 3, 4, 5, 7]);
    }

    #[test]
    fn test_upce_number_system() {
        let ns0 = encode_upce(Symbology::UpcE, "01234500007").unwrap();
        let ns1 = encode_upce(Symbology::UpcE, "11234500007").unwrap();
        assert_ne!(ns0.elements(), ns1.elements());
        assert!(matches!(
            encode_upce(Symbology::UpcE, "21234500007"),
            Err(BarcodeError::InvalidCharacter { character: '2', .. })
        ));
    }

    #[test]
    fn test_addons() {
        let ean2 = encode_ean2(Symbology::Ean2, "12").unwrap();
        assert_eq!(ean2.module_width(), 20);
        let ean5 = encode_ean5(Symbology::Ean5, "52495").unwrap();
        assert_eq!(ean5.module_width(), 47);
        // short add-ons are zero padded
        assert_eq!(encode_ean2(Symbology::Ean2, "7").unwrap().data(), "07");
        assert!(encode_ean5(Symbology::Ean5, "123456").is_err());
    }
}
