//! Symbology dispatch.
//!
//! [`Encoder`] routes a payload to the encoder of the requested symbology.
//! The free functions [`encode`] and [`encode_type`] use the default
//! [`EncodeOptions`].

use std::str::FromStr;

use crate::bars::BarSequence;
use crate::error::{BarcodeError, Result};
use crate::msi::MsiCheck;
use crate::symbology::Symbology;
use crate::{code11, code128, code39, code93, codabar, ean, imb, msi, pharma, postal, twoofive};

/// Options for symbologies with more than one check digit convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EncodeOptions {
    /// Check digit used by [`Symbology::MsiChecksum`]. Defaults to modulo 11.
    pub msi_check: MsiCheck,
    /// Append the check character to [`Symbology::Rms4cc`] symbols.
    /// Off by default. KIX never carries one.
    pub rms4cc_checksum: bool,
}

/// A barcode encoder with fixed options.
///
/// # Example
///
/// ```
/// use barust::{EncodeOptions, Encoder, MsiCheck, Symbology};
///
/// let encoder = Encoder::with_options(EncodeOptions {
///     msi_check: MsiCheck::Mod10,
///     ..EncodeOptions::default()
/// });
/// let seq = encoder.encode("1234", Symbology::MsiChecksum).unwrap();
/// assert_eq!(seq.data(), "12344");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EncodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EncodeOptions {
        self.options
    }

    /// Encodes `payload` as `symbology`.
    ///
    /// # Errors
    ///
    /// Returns a [`BarcodeError`] describing the first validation failure.
    /// An empty payload is always rejected with
    /// [`BarcodeError::InvalidLength`].
    pub fn encode(&self, payload: &str, symbology: Symbology) -> Result<BarSequence> {
        if payload.is_empty() {
            return Err(BarcodeError::invalid_length(symbology, 0, "payload is empty"));
        }
        log::debug!("encoding {} chars as {symbology}", payload.chars().count());

        use Symbology::*;
        let sym = symbology;
        match symbology {
            Code128 => code128::encode_auto(sym, payload),
            Code128A => code128::encode_pinned(sym, payload, code128::Subset::A),
            Code128B => code128::encode_pinned(sym, payload, code128::Subset::B),
            Code128C => code128::encode_pinned(sym, payload, code128::Subset::C),
            Ean13 => ean::encode_ean13(sym, payload),
            Ean8 => ean::encode_ean8(sym, payload),
            Ean2 => ean::encode_ean2(sym, payload),
            Ean5 => ean::encode_ean5(sym, payload),
            UpcA => ean::encode_upca(sym, payload),
            UpcE => ean::encode_upce(sym, payload),
            Code39 => code39::encode(sym, payload, false, false),
            Code39Checksum => code39::encode(sym, payload, false, true),
            Code39Extended => code39::encode(sym, payload, true, false),
            Code39ExtendedChecksum => code39::encode(sym, payload, true, true),
            Code93 => code93::encode(sym, payload),
            Standard2of5 => twoofive::encode_standard(sym, payload, false),
            Standard2of5Checksum => twoofive::encode_standard(sym, payload, true),
            Interleaved2of5 => twoofive::encode_interleaved(sym, payload, false),
            Interleaved2of5Checksum => twoofive::encode_interleaved(sym, payload, true),
            Msi => msi::encode(sym, payload, None),
            MsiChecksum => msi::encode(sym, payload, Some(self.options.msi_check)),
            Postnet => postal::encode_postnet(sym, payload, false),
            Planet => postal::encode_postnet(sym, payload, true),
            Rms4cc => postal::encode_four_state(sym, payload, false, self.options.rms4cc_checksum),
            Kix => postal::encode_four_state(sym, payload, true, false),
            Imb => imb::encode(sym, payload),
            Codabar => codabar::encode(sym, payload),
            Code11 => code11::encode(sym, payload),
            Pharmacode => pharma::encode_one_track(sym, payload),
            PharmacodeTwoTracks => pharma::encode_two_track(sym, payload),
        }
    }

    /// Encodes `payload` with the symbology named by a type identifier such
    /// as `"C128"` or `"EAN13"`.
    ///
    /// The identifier is resolved before the payload is looked at, so an
    /// unknown identifier always yields [`BarcodeError::UnknownSymbology`].
    pub fn encode_type(&self, payload: &str, type_id: &str) -> Result<BarSequence> {
        let symbology = Symbology::from_str(type_id)?;
        self.encode(payload, symbology)
    }
}

/// Encodes `payload` as `symbology` with default options.
///
/// # Example
///
/// ```
/// use barust::{encode, Symbology};
///
/// let seq = encode("081231723897", Symbology::Ean13).unwrap();
/// assert_eq!(seq.data(), "0812317238973");
/// assert_eq!(seq.module_width(), 95);
/// ```
pub fn encode(payload: &str, symbology: Symbology) -> Result<BarSequence> {
    Encoder::new().encode(payload, symbology)
}

/// Encodes `payload` with the symbology named by `type_id`, with default
/// options.
pub fn encode_type(payload: &str, type_id: &str) -> Result<BarSequence> {
    Encoder::new().encode_type(payload, type_id)
}
