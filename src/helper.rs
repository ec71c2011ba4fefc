use image::{ImageBuffer, ImageFormat, Luma};
use std::io::Cursor;

use crate::bars::{BarSequence, Element, HeightClass};
use crate::symbology::Symbology;

/*---- Options ----*/

/// Scale of the rendered symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    /// Pixels per narrow module.
    pub width_factor: u32,
    /// Height of a full bar in pixels.
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width_factor: 2,
            height: 30,
        }
    }
}

/*---- Layout ----*/

/// A black rectangle in pixel coordinates, origin at the top left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Rect {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

// Vertical extent (top, bottom) of a height-modulated bar.
fn extent(symbology: Symbology, class: HeightClass, height: u32) -> (u32, u32) {
    match (symbology, class) {
        (_, HeightClass::Full) => (0, height),
        // POSTNET and PLANET short bars stand on the baseline
        (Symbology::Postnet | Symbology::Planet, _) => (height / 2, height),
        (Symbology::PharmacodeTwoTracks, HeightClass::Ascender) => (0, height / 2),
        (Symbology::PharmacodeTwoTracks, _) => (height / 2, height),
        (_, HeightClass::Ascender) => (0, height - height / 3),
        (_, HeightClass::Descender) => (height / 3, height),
        (_, HeightClass::Tracker) => (height / 3, height - height / 3),
    }
}

fn layout(seq: &BarSequence, opts: &RenderOptions) -> Vec<Rect> {
    let factor = opts.width_factor;
    let mut rects = Vec::new();
    let mut x = 0;
    for element in seq {
        match *element {
            Element::Module { width, .. } => {
                let width = u32::from(width) * factor;
                if element.is_bar() {
                    rects.push(Rect {
                        x,
                        y: 0,
                        width,
                        height: opts.height,
                    });
                }
                x += width;
            }
            Element::Track(class) => {
                let (top, bottom) = extent(seq.symbology(), class, opts.height);
                rects.push(Rect {
                    x,
                    y: top,
                    width: factor,
                    height: bottom - top,
                });
                x += 2 * factor;
            }
        }
    }
    rects
}

fn dimensions(seq: &BarSequence, opts: &RenderOptions) -> (u32, u32) {
    (seq.module_width() * opts.width_factor, opts.height)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/*---- Renderers ----*/

/// Returns a string of SVG code for an image depicting the given symbol.
/// The encoded data goes into the `<desc>` element.
/// The string always uses Unix newlines (\n), regardless of the platform.
///
/// # Example
///
/// ```
/// use barust::{encode, helper::{to_svg_string, RenderOptions}, Symbology};
///
/// let seq = encode("1234567890", Symbology::Code128C).unwrap();
/// let svg = to_svg_string(&seq, &RenderOptions::default());
/// assert!(svg.contains("<desc>1234567890</desc>"));
/// ```
pub fn to_svg_string(seq: &BarSequence, opts: &RenderOptions) -> String {
    let (width, height) = dimensions(seq, opts);
    let mut result = String::new();
    result += "<?xml version=\"1.0\" standalone=\"no\" ?>\n";
    result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
    result += &format!(
        "<svg width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    );
    result += &format!("\t<desc>{}</desc>\n", escape_xml(seq.data()));
    result += "\t<g id=\"bars\" fill=\"black\" stroke=\"none\">\n";
    for r in layout(seq, opts) {
        result += &format!(
            "\t\t<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" />\n",
            r.x, r.y, r.width, r.height
        );
    }
    result += "\t</g>\n";
    result += "</svg>\n";
    result
}

/// Returns an HTML fragment drawing the symbol with absolutely positioned
/// `div` elements.
pub fn to_html_string(seq: &BarSequence, opts: &RenderOptions) -> String {
    let (width, height) = dimensions(seq, opts);
    let mut result = format!(
        "<div style=\"font-size:0;position:relative;width:{width}px;height:{height}px;\">\n"
    );
    for r in layout(seq, opts) {
        result += &format!(
            "<div style=\"background-color:black;width:{}px;height:{}px;position:absolute;left:{}px;top:{}px;\">&nbsp;</div>\n",
            r.width, r.height, r.x, r.y
        );
    }
    result += "</div>\n";
    result
}

/// Renders the symbol into an 8-bit grayscale image: black bars on white,
/// without a quiet zone.
///
/// # Example
///
/// ```
/// use barust::{encode, helper::{to_image_buffer, RenderOptions}, Symbology};
///
/// let seq = encode("081231723897", Symbology::Ean13).unwrap();
/// let img = to_image_buffer(&seq, &RenderOptions::default());
/// assert_eq!(img.dimensions(), (190, 30));
/// ```
pub fn to_image_buffer(seq: &BarSequence, opts: &RenderOptions) -> ImageBuffer<Luma<u8>, Vec<u8>> {
    let (width, height) = dimensions(seq, opts);
    let mut img = ImageBuffer::from_pixel(width, height, Luma([255u8]));
    for r in layout(seq, opts) {
        for y in r.y..r.y + r.height {
            for x in r.x..r.x + r.width {
                img.put_pixel(x, y, Luma([0u8])); // Black
            }
        }
    }
    img
}

/// Encodes the rendered symbol as an image file in memory, e.g. PNG or
/// JPEG.
///
/// # Errors
///
/// Returns an `image::ImageError` if the format is unsupported or encoding
/// fails.
pub fn to_image_bytes(
    seq: &BarSequence,
    opts: &RenderOptions,
    format: ImageFormat,
) -> Result<Vec<u8>, image::ImageError> {
    let img = to_image_buffer(seq, opts);
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), format)?;
    Ok(bytes)
}

/// Returns the symbol as text, one character per module: `█` for ink and a
/// space otherwise. Width-modulated symbols take one line; height-modulated
/// symbols take three (ascender, tracker, descender).
pub fn to_text_string(seq: &BarSequence) -> String {
    let rows = if seq.is_height_modulated() { 3 } else { 1 };
    let opts = RenderOptions {
        width_factor: 1,
        height: rows,
    };
    let img = to_image_buffer(seq, &opts);
    let mut result = String::new();
    for y in 0..img.height() {
        for x in 0..img.width() {
            result.push(if img.get_pixel(x, y)[0] == 0 { '█' } else { ' ' });
        }
        result.push('\n');
    }
    result
}
