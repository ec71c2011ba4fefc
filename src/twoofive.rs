//! Standard (industrial) and Interleaved 2 of 5.

use crate::alphabet;
use crate::bars::{BarSequence, WidthBuilder};
use crate::checksum;
use crate::error::Result;
use crate::symbology::Symbology;

const NARROW: u8 = 1;
const WIDE: u8 = 3;

/// Narrow/wide flags of the five elements of each digit, `1` = wide.
const PATTERNS: [&[u8; 5]; 10] = [
    b"00110", b"10001", b"01001", b"11000", b"00101", b"10100", b"01100", b"00011", b"10010",
    b"01010",
];

fn width(flag: u8) -> u8 {
    if flag == b'1' {
        WIDE
    } else {
        NARROW
    }
}

/// Encodes `payload` as Standard 2 of 5. Only the bars carry data; every
/// bar is followed by a narrow space.
pub fn encode_standard(symbology: Symbology, payload: &str, checksum: bool) -> Result<BarSequence> {
    let mut digits = alphabet::digits(symbology, payload)?;
    if checksum {
        digits.push(checksum::mod10_weighted(&digits));
    }

    let mut b = WidthBuilder::new();
    for w in [WIDE, WIDE, NARROW] {
        b.bar(w);
        b.space(NARROW);
    }
    for &d in &digits {
        for &flag in PATTERNS[usize::from(d)] {
            b.bar(width(flag));
            b.space(NARROW);
        }
    }
    b.bar(WIDE);
    b.space(NARROW);
    b.bar(NARROW);
    b.space(NARROW);
    b.bar(WIDE);

    Ok(b.finish(symbology, alphabet::digit_string(&digits)))
}

/// Encodes `payload` as Interleaved 2 of 5. Digits are paired, the first of
/// each pair on the bars and the second on the spaces. An odd number of
/// digits (after the optional check digit) gets a leading zero.
pub fn encode_interleaved(symbology: Symbology, payload: &str, checksum: bool) -> Result<BarSequence> {
    let mut digits = alphabet::digits(symbology, payload)?;
    if checksum {
        digits.push(checksum::mod10_weighted(&digits));
    }
    if digits.len() % 2 != 0 {
        digits.insert(0, 0);
    }

    let mut b = WidthBuilder::new();
    for _ in 0..2 {
        b.bar(NARROW);
        b.space(NARROW);
    }
    for pair in digits.chunks_exact(2) {
        let bars = PATTERNS[usize::from(pair[0])];
        let spaces = PATTERNS[usize::from(pair[1])];
        for (&bar, &space) in bars.iter().zip(spaces.iter()) {
            b.bar(width(bar));
            b.space(width(space));
        }
    }
    b.bar(WIDE);
    b.space(NARROW);
    b.bar(NARROW);

    Ok(b.finish(symbology, alphabet::digit_string(&digits)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bars::{Element, Role};

    #[test]
    fn test_patterns_have_two_wide_elements() {
        for pattern in PATTERNS {
            assert_eq!(pattern.iter().filter(|&&f| f == b'1').count(), 2);
        }
    }

    #[test]
    fn test_standard_structure() {
        let seq = encode_standard(Symbology::Standard2of5, "1234567890", false).unwrap();
        assert_eq!(seq.len(), 6 + 10 * 10 + 5);
        assert_eq!(seq.data(), "1234567890");
    }

    #[test]
    fn test_standard_checksum() {
        let seq = encode_standard(Symbology::Standard2of5Checksum, "1234567890", true).unwrap();
        assert_eq!(seq.data(), "12345678905");
        assert_eq!(seq.len(), 6 + 11 * 10 + 5);
    }

    #[test]
    fn test_interleaved_structure() {
        let seq = encode_interleaved(Symbology::Interleaved2of5, "1234567890", false).unwrap();
        assert_eq!(seq.len(), 4 + 5 * 10 + 3);
        // the first digit of a pair is drawn with the bars
        assert_eq!(seq.elements()[4], Element::Module { role: Role::Bar, width: WIDE });
    }

    #[test]
    fn test_interleaved_odd_length_is_zero_padded() {
        let padded = encode_interleaved(Symbology::Interleaved2of5, "123", false).unwrap();
        let explicit = encode_interleaved(Symbology::Interleaved2of5, "0123", false).unwrap();
        assert_eq!(padded.data(), "0123");
        assert_eq!(padded, explicit);
    }

    #[test]
    fn test_interleaved_checksum_padding() {
        // 1234567890 + 5 is odd: a leading zero is added after the check digit
        let seq = encode_interleaved(Symbology::Interleaved2of5Checksum, "1234567890", true).unwrap();
        assert_eq!(seq.data(), "012345678905");
        // 123 + 6 is even: no padding
        let seq = encode_interleaved(Symbology::Interleaved2of5Checksum, "123", true).unwrap();
        assert_eq!(seq.data(), "1236");
    }

    #[test]
    fn test_padding_is_deterministic() {
        let first = encode_interleaved(Symbology::Interleaved2of5Checksum, "12345", true).unwrap();
        for _ in 0..3 {
            let again = encode_interleaved(Symbology::Interleaved2of5Checksum, "12345", true).unwrap();
            assert_eq!(first, again);
        }
    }
}
