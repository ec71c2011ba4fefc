//! Code 128: pinned subsets A, B and C, and automatic subset planning.
//!
//! A symbol is a start codeword naming the initial subset, data codewords
//! (with optional subset switches and shifts), a modulo 103 check codeword
//! and the stop pattern. [`plan`] picks the subsets for generic input.

use crate::alphabet;
use crate::bars::{BarSequence, WidthBuilder};
use crate::checksum;
use crate::error::{BarcodeError, Result};
use crate::symbology::Symbology;

/// Bar/space widths of codeword values 0..=105.
const PATTERNS: [&[u8; 6]; 106] = [
    b"212222", b"222122", b"222221", b"121223", b"121322", b"131222", b"122213", b"122312",
    b"132212", b"221213", b"221312", b"231212", b"112232", b"122132", b"122231", b"113222",
    b"123122", b"123221", b"223211", b"221132", b"221231", b"213212", b"223112", b"312131",
    b"311222", b"321122", b"321221", b"312212", b"322112", b"322211", b"212123", b"212321",
    b"232121", b"111323", b"131123", b"131321", b"112313", b"132113", b"132311", b"211313",
    b"231113", b"231311", b"112133", b"112331", b"132131", b"113123", b"113321", b"133121",
    b"313121", b"211331", b"231131", b"213113", b"213311", b"213131", b"311123", b"311321",
    b"331121", b"312113", b"312311", b"332111", b"314111", b"221411", b"431111", b"111224",
    b"111422", b"121124", b"121421", b"141122", b"141221", b"112214", b"112412", b"122114",
    b"122411", b"142112", b"142211", b"241211", b"221114", b"413111", b"241112", b"134111",
    b"111242", b"121142", b"121241", b"114212", b"124112", b"124211", b"411212", b"421112",
    b"421211", b"212141", b"214121", b"412121", b"111143", b"111341", b"131141", b"114113",
    b"114311", b"411113", b"411311", b"113141", b"114131", b"311141", b"411131", b"211412",
    b"211214", b"211232",
];

const STOP: &[u8; 7] = b"2331112";

const SHIFT: u8 = 98;
const CODE_C: u8 = 99;
const CODE_B: u8 = 100;
const CODE_A: u8 = 101;
const START_A: u8 = 103;
const START_B: u8 = 104;
const START_C: u8 = 105;

/// One of the three Code 128 character subsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subset {
    /// ASCII 0..=95: control characters and upper case.
    A,
    /// ASCII 32..=127: printable characters.
    B,
    /// Digit pairs 00..=99.
    C,
}

impl Subset {
    fn start(self) -> u8 {
        match self {
            Subset::A => START_A,
            Subset::B => START_B,
            Subset::C => START_C,
        }
    }

    /// The codeword that switches into this subset.
    fn switch(self) -> u8 {
        match self {
            Subset::A => CODE_A,
            Subset::B => CODE_B,
            Subset::C => CODE_C,
        }
    }

    /// Codeword value of an ASCII character in subset A or B.
    fn value(self, c: u8) -> Option<u8> {
        match (self, c) {
            (Subset::A, 0..=31) => Some(c + 64),
            (Subset::A, 32..=95) | (Subset::B, 32..=127) => Some(c - 32),
            _ => None,
        }
    }

    fn covers(self, c: u8) -> bool {
        self.value(c).is_some()
    }

    fn other(self) -> Subset {
        match self {
            Subset::A => Subset::B,
            _ => Subset::A,
        }
    }
}

/// Encodes `payload` entirely in `subset`.
///
/// Subset C accepts digits only and pads an odd count with a leading zero.
pub fn encode_pinned(symbology: Symbology, payload: &str, subset: Subset) -> Result<BarSequence> {
    let mut codewords = vec![subset.start()];
    let data = match subset {
        Subset::C => {
            let mut digits = alphabet::digits(symbology, payload)?;
            if digits.len() % 2 != 0 {
                digits.insert(0, 0);
            }
            codewords.extend(digits.chunks_exact(2).map(|pair| pair[0] * 10 + pair[1]));
            alphabet::digit_string(&digits)
        }
        Subset::A | Subset::B => {
            for (position, c) in payload.chars().enumerate() {
                let value = u8::try_from(u32::from(c))
                    .ok()
                    .and_then(|byte| subset.value(byte))
                    .ok_or(BarcodeError::invalid_char(symbology, c, position))?;
                codewords.push(value);
            }
            payload.to_string()
        }
    };
    Ok(finish(symbology, codewords, data))
}

/// Encodes `payload` with automatically chosen subsets.
pub fn encode_auto(symbology: Symbology, payload: &str) -> Result<BarSequence> {
    let bytes = payload
        .chars()
        .enumerate()
        .map(|(position, c)| {
            u8::try_from(u32::from(c))
                .ok()
                .filter(|b| *b < 128)
                .ok_or(BarcodeError::invalid_char(symbology, c, position))
        })
        .collect::<Result<Vec<u8>>>()?;
    Ok(finish(symbology, plan(&bytes), payload.to_string()))
}

fn finish(symbology: Symbology, mut codewords: Vec<u8>, data: String) -> BarSequence {
    codewords.push(checksum::mod103(&codewords));
    let mut b = WidthBuilder::new();
    for &cw in &codewords {
        b.pattern(PATTERNS[usize::from(cw)]);
    }
    b.pattern(STOP);
    b.finish(symbology, data)
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// The A/B subset for a fresh start at `rest`: the subset of the first
/// character only one of them covers, B when there is none.
fn preferred_text_subset(rest: &[u8]) -> Subset {
    rest.iter()
        .find_map(|&c| match c {
            0..=31 => Some(Subset::A),
            96..=127 => Some(Subset::B),
            _ => None,
        })
        .unwrap_or(Subset::B)
}

/// Plans the codewords for an ASCII payload: start code and data
/// codewords, without the check codeword.
///
/// Runs of four or more digits, and payloads made only of an even number of
/// digits, go to subset C. An odd run leaves its first digit in the current
/// text subset. Text uses the current subset while it covers the next
/// character; a single character of the other subset is shifted, longer
/// stretches switch.
pub fn plan(bytes: &[u8]) -> Vec<u8> {
    let mut codewords = Vec::with_capacity(bytes.len() + 2);
    let mut current: Option<Subset> = None;
    let mut i = 0;

    while i < bytes.len() {
        let run = digit_run(&bytes[i..]);
        let whole_payload = run == bytes.len() && run % 2 == 0;
        if run >= 4 || whole_payload {
            let mut start = i;
            if run % 2 == 1 {
                push_text(&mut codewords, &mut current, bytes, i);
                start += 1;
            }
            match current {
                None => codewords.push(START_C),
                Some(Subset::C) => {}
                Some(_) => codewords.push(CODE_C),
            }
            if current != Some(Subset::C) {
                log::trace!("code 128: subset C at {}", start);
            }
            current = Some(Subset::C);
            codewords.extend(
                bytes[start..i + run]
                    .chunks_exact(2)
                    .map(|pair| (pair[0] - b'0') * 10 + (pair[1] - b'0')),
            );
            i += run;
        } else {
            push_text(&mut codewords, &mut current, bytes, i);
            i += 1;
        }
    }
    codewords
}

fn push_text(codewords: &mut Vec<u8>, current: &mut Option<Subset>, bytes: &[u8], i: usize) {
    let c = bytes[i];
    let subset = match *current {
        Some(s @ (Subset::A | Subset::B)) if s.covers(c) => s,
        Some(s @ (Subset::A | Subset::B)) => {
            let other = s.other();
            let next_in_current = bytes.get(i + 1).map_or(false, |&n| s.covers(n));
            if next_in_current {
                log::trace!("code 128: shift to {:?} at {}", other, i);
                codewords.push(SHIFT);
                if let Some(v) = other.value(c) {
                    codewords.push(v);
                }
                return;
            }
            log::trace!("code 128: subset {:?} at {}", other, i);
            codewords.push(other.switch());
            other
        }
        Some(Subset::C) => {
            let next = preferred_text_subset(&bytes[i..]);
            log::trace!("code 128: subset {:?} at {}", next, i);
            codewords.push(next.switch());
            next
        }
        None => {
            let first = preferred_text_subset(&bytes[i..]);
            log::trace!("code 128: start in subset {:?}", first);
            codewords.push(first.start());
            first
        }
    };
    *current = Some(subset);
    if let Some(v) = subset.value(c) {
        codewords.push(v);
    }
}
