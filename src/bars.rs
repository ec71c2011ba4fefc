//! The renderer-agnostic output of the encoding engine.
//!
//! Every encoder produces a [`BarSequence`]: the symbol body from start
//! pattern to stop pattern, without quiet zones or human readable text.
//! Width-modulated symbologies are made of [`Element::Module`] values that
//! strictly alternate between bars and spaces, starting and ending with a
//! bar. Height-modulated symbologies are made of [`Element::Track`] values
//! only; a renderer places them at a fixed pitch with a one-module gap.

use crate::symbology::Symbology;

/// Whether a width element is inked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Bar,
    Space,
}

/// Vertical extent of a bar in a height-modulated symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeightClass {
    /// Ascender, tracker and descender.
    Full,
    /// Ascender and tracker.
    Ascender,
    /// Tracker and descender.
    Descender,
    /// The central tracker only.
    Tracker,
}

/// One unit of an encoded symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// A bar or space, `width` narrow modules wide.
    Module { role: Role, width: u8 },
    /// A single bar of a height-modulated symbol.
    Track(HeightClass),
}

impl Element {
    /// Returns the element's width in modules. Tracks are one module wide.
    pub fn width(&self) -> u32 {
        match *self {
            Element::Module { width, .. } => u32::from(width),
            Element::Track(_) => 1,
        }
    }

    /// Returns `true` if the element is inked.
    pub fn is_bar(&self) -> bool {
        !matches!(self, Element::Module { role: Role::Space, .. })
    }
}

/// An encoded barcode symbol.
///
/// Instances are created by [`encode`](crate::encode) and are immutable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarSequence {
    symbology: Symbology,
    /// The data actually encoded, after padding and check digit derivation.
    data: String,
    elements: Vec<Element>,
}

impl BarSequence {
    pub(crate) fn new(symbology: Symbology, data: String, elements: Vec<Element>) -> Self {
        debug_assert!(!elements.is_empty(), "encoders always emit framing");
        Self {
            symbology,
            data,
            elements,
        }
    }

    /// Returns the symbology this sequence was encoded with.
    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    /// Returns the encoded data, including any derived check characters and
    /// padding. For Code 93 and Code 128 the check values are not characters
    /// of the payload and are not included.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if the sequence is made of [`Element::Track`] values.
    pub fn is_height_modulated(&self) -> bool {
        self.symbology.is_height_modulated()
    }

    /// Returns the total width of the symbol in narrow modules.
    ///
    /// For height-modulated symbols each track and each gap between two
    /// tracks counts as one module.
    pub fn module_width(&self) -> u32 {
        if self.is_height_modulated() {
            (2 * self.elements.len() as u32).saturating_sub(1)
        } else {
            self.elements.iter().map(Element::width).sum()
        }
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}

impl<'a> IntoIterator for &'a BarSequence {
    type Item = &'a Element;
    type IntoIter = core::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Accumulates bar/space widths, merging adjacent elements of the same role.
pub(crate) struct WidthBuilder {
    elements: Vec<Element>,
}

impl WidthBuilder {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, role: Role, width: u8) {
        debug_assert!(width > 0);
        if let Some(Element::Module { role: last, width: w }) = self.elements.last_mut() {
            if *last == role {
                *w += width;
                return;
            }
        }
        self.elements.push(Element::Module { role, width });
    }

    pub fn bar(&mut self, width: u8) {
        self.push(Role::Bar, width);
    }

    pub fn space(&mut self, width: u8) {
        self.push(Role::Space, width);
    }

    /// Appends a pattern of ASCII digit widths, alternating bar and space,
    /// starting with a bar.
    pub fn pattern(&mut self, widths: &[u8]) {
        for (i, &w) in widths.iter().enumerate() {
            let role = if i % 2 == 0 { Role::Bar } else { Role::Space };
            self.push(role, w - b'0');
        }
    }

    /// Appends a module string where `1` is a dark and `0` a light module.
    pub fn modules(&mut self, bits: &str) {
        for b in bits.bytes() {
            let role = if b == b'1' { Role::Bar } else { Role::Space };
            self.push(role, 1);
        }
    }

    /// Finishes the sequence. Trailing spaces belong to the quiet zone and
    /// are dropped.
    pub fn finish(mut self, symbology: Symbology, data: String) -> BarSequence {
        while let Some(Element::Module { role: Role::Space, .. }) = self.elements.last() {
            self.elements.pop();
        }
        BarSequence::new(symbology, data, self.elements)
    }
}
