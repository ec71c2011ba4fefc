//! The closed set of supported barcode types.

use core::fmt;
use core::str::FromStr;

use crate::error::BarcodeError;

/// A one-dimensional barcode symbology.
///
/// Every variant has a short type identifier (see [`Symbology::id`]) that can
/// be parsed back with [`str::parse`]:
///
/// ```rust
/// use barust::Symbology;
///
/// let symbology: Symbology = "EAN13".parse().unwrap();
/// assert_eq!(symbology, Symbology::Ean13);
/// assert!("vladimir".parse::<Symbology>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbology {
    /// Code 128 with automatic subset selection.
    Code128,
    /// Code 128 pinned to subset A.
    Code128A,
    /// Code 128 pinned to subset B.
    Code128B,
    /// Code 128 pinned to subset C.
    Code128C,
    Ean13,
    Ean8,
    /// Two-digit EAN add-on.
    Ean2,
    /// Five-digit EAN add-on.
    Ean5,
    UpcA,
    UpcE,
    Code39,
    Code39Checksum,
    /// Code 39 with full ASCII escapes.
    Code39Extended,
    Code39ExtendedChecksum,
    Code93,
    Standard2of5,
    Standard2of5Checksum,
    Interleaved2of5,
    Interleaved2of5Checksum,
    Msi,
    MsiChecksum,
    Postnet,
    Planet,
    /// Royal Mail 4-State Customer Code.
    Rms4cc,
    /// Dutch KIX code, RMS4CC without framing.
    Kix,
    /// USPS Intelligent Mail Barcode.
    Imb,
    Codabar,
    Code11,
    Pharmacode,
    PharmacodeTwoTracks,
}

impl Symbology {
    /// Every supported symbology, in declaration order.
    pub const ALL: [Symbology; 30] = [
        Symbology::Code128,
        Symbology::Code128A,
        Symbology::Code128B,
        Symbology::Code128C,
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::Ean2,
        Symbology::Ean5,
        Symbology::UpcA,
        Symbology::UpcE,
        Symbology::Code39,
        Symbology::Code39Checksum,
        Symbology::Code39Extended,
        Symbology::Code39ExtendedChecksum,
        Symbology::Code93,
        Symbology::Standard2of5,
        Symbology::Standard2of5Checksum,
        Symbology::Interleaved2of5,
        Symbology::Interleaved2of5Checksum,
        Symbology::Msi,
        Symbology::MsiChecksum,
        Symbology::Postnet,
        Symbology::Planet,
        Symbology::Rms4cc,
        Symbology::Kix,
        Symbology::Imb,
        Symbology::Codabar,
        Symbology::Code11,
        Symbology::Pharmacode,
        Symbology::PharmacodeTwoTracks,
    ];

    /// Returns the short type identifier, e.g. `"C128"` or `"EAN13"`.
    pub const fn id(self) -> &'static str {
        use Symbology::*;
        match self {
            Code128 => "C128",
            Code128A => "C128A",
            Code128B => "C128B",
            Code128C => "C128C",
            Ean13 => "EAN13",
            Ean8 => "EAN8",
            Ean2 => "EAN2",
            Ean5 => "EAN5",
            UpcA => "UPCA",
            UpcE => "UPCE",
            Code39 => "C39",
            Code39Checksum => "C39+",
            Code39Extended => "C39E",
            Code39ExtendedChecksum => "C39E+",
            Code93 => "C93",
            Standard2of5 => "S25",
            Standard2of5Checksum => "S25+",
            Interleaved2of5 => "I25",
            Interleaved2of5Checksum => "I25+",
            Msi => "MSI",
            MsiChecksum => "MSI+",
            Postnet => "POSTNET",
            Planet => "PLANET",
            Rms4cc => "RMS4CC",
            Kix => "KIX",
            Imb => "IMB",
            Codabar => "CODABAR",
            Code11 => "CODE11",
            Pharmacode => "PHARMA",
            PharmacodeTwoTracks => "PHARMA2T",
        }
    }

    /// Returns a human readable name, e.g. `"Code 128"`.
    pub const fn name(self) -> &'static str {
        use Symbology::*;
        match self {
            Code128 => "Code 128",
            Code128A => "Code 128 A",
            Code128B => "Code 128 B",
            Code128C => "Code 128 C",
            Ean13 => "EAN-13",
            Ean8 => "EAN-8",
            Ean2 => "EAN-2",
            Ean5 => "EAN-5",
            UpcA => "UPC-A",
            UpcE => "UPC-E",
            Code39 => "Code 39",
            Code39Checksum => "Code 39 with checksum",
            Code39Extended => "Code 39 Extended",
            Code39ExtendedChecksum => "Code 39 Extended with checksum",
            Code93 => "Code 93",
            Standard2of5 => "Standard 2 of 5",
            Standard2of5Checksum => "Standard 2 of 5 with checksum",
            Interleaved2of5 => "Interleaved 2 of 5",
            Interleaved2of5Checksum => "Interleaved 2 of 5 with checksum",
            Msi => "MSI",
            MsiChecksum => "MSI with checksum",
            Postnet => "POSTNET",
            Planet => "PLANET",
            Rms4cc => "RMS4CC",
            Kix => "KIX",
            Imb => "Intelligent Mail",
            Codabar => "Codabar",
            Code11 => "Code 11",
            Pharmacode => "Pharmacode",
            PharmacodeTwoTracks => "Pharmacode two-track",
        }
    }

    /// Returns `true` for symbologies whose output is a sequence of bar
    /// heights rather than bar/space widths.
    pub const fn is_height_modulated(self) -> bool {
        matches!(
            self,
            Symbology::Postnet
                | Symbology::Planet
                | Symbology::Rms4cc
                | Symbology::Kix
                | Symbology::Imb
                | Symbology::PharmacodeTwoTracks
        )
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbology {
    type Err = BarcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbology::ALL
            .iter()
            .copied()
            .find(|symbology| symbology.id() == s)
            .ok_or_else(|| BarcodeError::UnknownSymbology(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for symbology in Symbology::ALL {
            assert_eq!(symbology.id().parse::<Symbology>(), Ok(symbology));
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = Symbology::ALL.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Symbology::ALL.len());
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(
            "vladimir".parse::<Symbology>(),
            Err(BarcodeError::UnknownSymbology("vladimir".to_string()))
        );
        // Identifiers are matched exactly.
        assert!("ean13".parse::<Symbology>().is_err());
    }

    #[test]
    fn test_height_modulated() {
        assert!(Symbology::Imb.is_height_modulated());
        assert!(Symbology::PharmacodeTwoTracks.is_height_modulated());
        assert!(!Symbology::Pharmacode.is_height_modulated());
        assert!(!Symbology::Code128.is_height_modulated());
    }
}
