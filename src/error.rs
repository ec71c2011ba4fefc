//! Error type shared by every encoder.
//!
//! Validation failures are deterministic functions of the input, so nothing
//! here is retryable. An encoder either returns a complete [`BarSequence`]
//! or one of these values.
//!
//! [`BarSequence`]: crate::bars::BarSequence

use thiserror::Error;

use crate::symbology::Symbology;

/// Errors reported by the encoding engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    /// The payload contains a character outside the symbology's alphabet.
    #[error("character {character:?} at position {position} cannot be encoded as {symbology}")]
    InvalidCharacter {
        symbology: Symbology,
        character: char,
        position: usize,
    },

    /// A supplied trailing check digit does not match the derived one.
    #[error("invalid check digit for {symbology}: expected {expected}, found {found}")]
    InvalidCheckDigit {
        symbology: Symbology,
        expected: char,
        found: char,
    },

    /// The payload length is not accepted by the symbology.
    #[error("invalid length {length} for {symbology}: {reason}")]
    InvalidLength {
        symbology: Symbology,
        length: usize,
        reason: &'static str,
    },

    /// The numeric value of the payload is outside the symbology's bounds.
    #[error("value {value} out of range for {symbology} (allowed {min}..={max})")]
    OutOfRange {
        symbology: Symbology,
        value: String,
        min: u64,
        max: u64,
    },

    /// The requested type identifier does not name a symbology.
    #[error("unknown barcode type {0:?}")]
    UnknownSymbology(String),
}

impl BarcodeError {
    pub(crate) fn invalid_char(symbology: Symbology, character: char, position: usize) -> Self {
        Self::InvalidCharacter {
            symbology,
            character,
            position,
        }
    }

    pub(crate) fn invalid_length(symbology: Symbology, length: usize, reason: &'static str) -> Self {
        Self::InvalidLength {
            symbology,
            length,
            reason,
        }
    }
}

/// Type alias for Result with our error type.
pub type Result<T> = std::result::Result<T, BarcodeError>;
