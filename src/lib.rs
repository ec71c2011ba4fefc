//! # barust
//!
//! A Rust library for encoding one-dimensional barcodes.
//!
//! `barust` turns a text or numeric payload into the bar/space pattern of one
//! of 30 symbologies. The result is a [`BarSequence`], a renderer-agnostic
//! list of elements that can be drawn by any backend; the [`helper`] module
//! ships SVG, HTML, text and raster renderers built on the `image` crate.
//!
//! ## Features
//!
//! - Code 128 with automatic subset planning, or pinned to subset A, B or C.
//! - EAN-13, EAN-8, UPC-A, UPC-E and the EAN-2/EAN-5 add-ons.
//! - Code 39 (plain, checksum, full ASCII), Code 93, Code 11, Codabar.
//! - Standard and Interleaved 2 of 5, MSI, one and two track Pharmacode.
//! - Height-modulated postal codes: POSTNET, PLANET, RMS4CC, KIX and the
//!   USPS Intelligent Mail Barcode.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! barust = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Encode a payload and inspect the result:
//!
//! ```rust
//! use barust::{encode, Symbology};
//!
//! let seq = encode("081231723897", Symbology::Ean13).unwrap();
//! assert_eq!(seq.data(), "0812317238973");
//! assert_eq!(seq.module_width(), 95);
//! ```
//!
//! Select the symbology by its type identifier and render it as SVG:
//!
//! ```rust
//! use barust::{encode_type, helper::{to_svg_string, RenderOptions}};
//!
//! let seq = encode_type("CODE39", "C39").unwrap();
//! let svg = to_svg_string(&seq, &RenderOptions::default());
//! assert!(svg.starts_with("<?xml"));
//!
//! assert!(encode_type("CODE39", "vladimir").is_err());
//! ```
//!
//! ## Modules
//!
//! - [`encoder`]: Symbology dispatch and encoder options.
//! - [`bars`]: The [`BarSequence`] output model.
//! - [`helper`]: Utilities for rendering symbols in various formats.
//! - [`checksum`] and [`alphabet`]: Check digit algorithms and character sets.
//! - One module per symbology family.

#![forbid(unsafe_code)]

pub mod alphabet;
pub mod bars;
pub mod checksum;
pub mod codabar;
pub mod code11;
pub mod code128;
pub mod code39;
pub mod code93;
pub mod ean;
pub mod encoder;
pub mod error;
pub mod helper;
pub mod imb;
pub mod msi;
pub mod pharma;
pub mod postal;
pub mod symbology;
pub mod twoofive;

pub use bars::{BarSequence, Element, HeightClass, Role};
pub use encoder::{encode, encode_type, EncodeOptions, Encoder};
pub use error::{BarcodeError, Result};
pub use msi::MsiCheck;
pub use symbology::Symbology;
