//! Character sets and the full ASCII escape table.

use crate::error::{BarcodeError, Result};
use crate::symbology::Symbology;

/// Base alphabet of Code 39 and Code 93, in symbol value order.
pub const CODE39: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

/// Alphabet of the RMS4CC and KIX 4-state codes, in table order.
pub const BASE36: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Parses a numeric payload into digit values.
pub fn digits(symbology: Symbology, payload: &str) -> Result<Vec<u8>> {
    payload
        .chars()
        .enumerate()
        .map(|(position, c)| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or(BarcodeError::invalid_char(symbology, c, position))
        })
        .collect()
}

/// Maps every character of `payload` to its index in `alphabet`.
///
/// `alphabet` must be ASCII.
pub fn values(symbology: Symbology, alphabet: &str, payload: &str) -> Result<Vec<u8>> {
    payload
        .chars()
        .enumerate()
        .map(|(position, c)| {
            alphabet
                .find(c)
                .map(|i| i as u8)
                .ok_or(BarcodeError::invalid_char(symbology, c, position))
        })
        .collect()
}

/// Renders digit values back to ASCII.
pub fn digit_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// Returns the full ASCII escape of `c`: an optional shift character out of
/// `$ % / +` followed by a character of the [`CODE39`] alphabet.
///
/// Returns `None` for characters above ASCII 127.
pub fn full_ascii(c: char) -> Option<(Option<char>, char)> {
    let code = u8::try_from(u32::from(c)).ok().filter(|code| *code < 128)?;
    let shifted = |shift: char, base: u8| Some((Some(shift), char::from(base)));
    match code {
        0 => shifted('%', b'U'),
        1..=26 => shifted('$', b'A' + code - 1),
        27..=31 => shifted('%', b'A' + code - 27),
        b' ' | b'-' | b'.' | b'0'..=b'9' | b'A'..=b'Z' => Some((None, char::from(code))),
        b'!'..=b',' => shifted('/', b'A' + code - b'!'),
        b'/' => shifted('/', b'O'),
        b':' => shifted('/', b'Z'),
        b';'..=b'?' => shifted('%', b'F' + code - b';'),
        b'@' => shifted('%', b'V'),
        b'['..=b'_' => shifted('%', b'K' + code - b'['),
        b'`' => shifted('%', b'W'),
        b'a'..=b'z' => shifted('+', code - 32),
        _ => shifted('%', b'P' + code - b'{'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(digits(Symbology::Ean13, "0123"), Ok(vec![0, 1, 2, 3]));
        assert_eq!(
            digits(Symbology::Ean13, "12a4"),
            Err(BarcodeError::invalid_char(Symbology::Ean13, 'a', 2))
        );
        // Non-ASCII digits are not accepted.
        assert!(digits(Symbology::Ean13, "١٢").is_err());
    }

    #[test]
    fn test_values() {
        assert_eq!(values(Symbology::Code39, CODE39, "A-%"), Ok(vec![10, 36, 42]));
        assert!(values(Symbology::Code39, CODE39, "a").is_err());
    }

    #[test]
    fn test_full_ascii_table() {
        assert_eq!(full_ascii('\0'), Some((Some('%'), 'U')));
        assert_eq!(full_ascii('\r'), Some((Some('$'), 'M')));
        assert_eq!(full_ascii('\x1b'), Some((Some('%'), 'A')));
        assert_eq!(full_ascii('!'), Some((Some('/'), 'A')));
        assert_eq!(full_ascii(','), Some((Some('/'), 'L')));
        assert_eq!(full_ascii('/'), Some((Some('/'), 'O')));
        assert_eq!(full_ascii(':'), Some((Some('/'), 'Z')));
        assert_eq!(full_ascii('?'), Some((Some('%'), 'J')));
        assert_eq!(full_ascii('@'), Some((Some('%'), 'V')));
        assert_eq!(full_ascii('_'), Some((Some('%'), 'O')));
        assert_eq!(full_ascii('`'), Some((Some('%'), 'W')));
        assert_eq!(full_ascii('a'), Some((Some('+'), 'A')));
        assert_eq!(full_ascii('z'), Some((Some('+'), 'Z')));
        assert_eq!(full_ascii('\x7f'), Some((Some('%'), 'T')));
        assert_eq!(full_ascii('Q'), Some((None, 'Q')));
        assert_eq!(full_ascii('é'), None);
    }

    #[test]
    fn test_full_ascii_targets_base_alphabet() {
        for code in 0u8..128 {
            let (shift, base) = full_ascii(char::from(code)).unwrap();
            assert!(CODE39.contains(base));
            if let Some(shift) = shift {
                assert!("$%/+".contains(shift));
            }
        }
    }
}
