//! Code 11 (USD-8).

use crate::bars::{BarSequence, WidthBuilder};
use crate::checksum;
use crate::error::{BarcodeError, Result};
use crate::symbology::Symbology;

/// Widths for `0`-`9` and `-` (value 10).
const PATTERNS: [&[u8; 5]; 11] = [
    b"11112", b"21112", b"12112", b"22111", b"11212", b"21211", b"12211", b"11122", b"21121",
    b"21111", b"11211",
];

const START_STOP: &[u8; 5] = b"11221";

fn value(c: char) -> Option<u8> {
    match c {
        '-' => Some(10),
        _ => c.to_digit(10).map(|d| d as u8),
    }
}

fn symbol(v: u8) -> char {
    if v == 10 {
        '-'
    } else {
        char::from(b'0' + v)
    }
}

/// Encodes `payload` as Code 11 with its `C` check character, plus `K` for
/// payloads longer than ten characters.
pub fn encode(symbology: Symbology, payload: &str) -> Result<BarSequence> {
    let mut values = payload
        .chars()
        .enumerate()
        .map(|(position, c)| value(c).ok_or(BarcodeError::invalid_char(symbology, c, position)))
        .collect::<Result<Vec<u8>>>()?;
    let (c, k) = checksum::code11(&values);
    values.push(c);
    values.extend(k);

    let mut b = WidthBuilder::new();
    b.pattern(START_STOP);
    for &v in &values {
        b.space(1);
        b.pattern(PATTERNS[usize::from(v)]);
    }
    b.space(1);
    b.pattern(START_STOP);

    let data = values.iter().map(|&v| symbol(v)).collect();
    Ok(b.finish(symbology, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_check_character() {
        let seq = encode(Symbology::Code11, "123456789").unwrap();
        assert_eq!(seq.data(), "1234567890");
        // start + 10 symbols + stop, 5 elements each, separated by gaps
        assert_eq!(seq.len(), 12 * 5 + 11);
    }

    #[test]
    fn test_dash_check_character() {
        let seq = encode(Symbology::Code11, "123-45").unwrap();
        assert_eq!(seq.data(), "123-455");
    }

    #[test]
    fn test_second_check_character_for_long_payloads() {
        let seq = encode(Symbology::Code11, "12345678901").unwrap();
        assert_eq!(seq.data(), "123456789014-");
        assert_eq!(seq.len(), 15 * 5 + 14);
    }

    #[test]
    fn test_rejects_letters() {
        assert_eq!(
            encode(Symbology::Code11, "12A").unwrap_err(),
            BarcodeError::invalid_char(Symbology::Code11, 'A', 2)
        );
    }
}
