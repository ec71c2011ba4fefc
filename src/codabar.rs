//! Codabar (NW-7).

use crate::bars::{BarSequence, WidthBuilder};
use crate::error::{BarcodeError, Result};
use crate::symbology::Symbology;

const ALPHABET: &str = "0123456789-$:/.+ABCD";

/// Widths in [`ALPHABET`] order; narrow 1, wide 2.
const PATTERNS: [&[u8; 7]; 20] = [
    b"1111122", // 0
    b"1111221", // 1
    b"1112112", // 2
    b"2211111", // 3
    b"1121121", // 4
    b"2111121", // 5
    b"1211112", // 6
    b"1211211", // 7
    b"1221111", // 8
    b"2112111", // 9
    b"1112211", // -
    b"1122111", // $
    b"2111212", // :
    b"2121112", // /
    b"2121211", // .
    b"1122222", // +
    b"1122121", // A
    b"1212112", // B
    b"1112122", // C
    b"1112221", // D
];

fn is_guard(c: char) -> bool {
    matches!(c, 'A'..='D')
}

/// Encodes `payload` as Codabar.
///
/// A payload that starts and ends with one of `A`-`D` supplies its own
/// start and stop characters; anything else is framed as `A...A`.
pub fn encode(symbology: Symbology, payload: &str) -> Result<BarSequence> {
    let upper = payload.to_ascii_uppercase();
    let chars: Vec<char> = upper.chars().collect();
    let framed = chars.len() >= 2 && is_guard(chars[0]) && is_guard(chars[chars.len() - 1]);
    let (text, offset) = if framed {
        (upper.clone(), 0)
    } else {
        (format!("A{}A", upper), 1)
    };

    let last = text.chars().count() - 1;
    let mut b = WidthBuilder::new();
    for (i, c) in text.chars().enumerate() {
        let index = ALPHABET
            .find(c)
            .filter(|_| !is_guard(c) || i == 0 || i == last)
            .ok_or(BarcodeError::invalid_char(symbology, c, i.saturating_sub(offset)))?;
        if i > 0 {
            b.space(1);
        }
        b.pattern(PATTERNS[index]);
    }
    Ok(b.finish(symbology, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_framing() {
        let seq = encode(Symbology::Codabar, "123456789").unwrap();
        assert_eq!(seq.data(), "A123456789A");
        assert_eq!(seq.len(), 11 * 7 + 10);
    }

    #[test]
    fn test_explicit_framing() {
        let explicit = encode(Symbology::Codabar, "b40156c").unwrap();
        assert_eq!(explicit.data(), "B40156C");
        assert_eq!(explicit.len(), 7 * 7 + 6);

        let default = encode(Symbology::Codabar, "40156").unwrap();
        assert_ne!(explicit.elements(), default.elements());
    }

    #[test]
    fn test_rejects_inner_guard() {
        assert_eq!(
            encode(Symbology::Codabar, "12B4").unwrap_err(),
            BarcodeError::invalid_char(Symbology::Codabar, 'B', 2)
        );
        assert!(encode(Symbology::Codabar, "12*4").is_err());
    }
}
