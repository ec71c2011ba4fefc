use barust::helper::{
    to_html_string, to_image_buffer, to_image_bytes, to_svg_string, to_text_string, RenderOptions,
};
use barust::{encode_type, Symbology};
use image::ImageFormat;

fn samples() -> Vec<barust::BarSequence> {
    [
        ("081231723897", "EAN13"),
        ("1234567890abcABC-283*33", "C128"),
        ("1234567890abcABC", "C39E+"),
        ("123456789", "POSTNET"),
        ("123456789", "RMS4CC"),
        ("01234567094987654321-01234567891", "IMB"),
        ("12345", "PHARMA2T"),
    ]
    .iter()
    .map(|(payload, type_id)| encode_type(payload, type_id).unwrap())
    .collect()
}

#[test]
fn test_image_dimensions_follow_module_width() {
    let opts = RenderOptions {
        width_factor: 3,
        height: 45,
    };
    for seq in samples() {
        let img = to_image_buffer(&seq, &opts);
        assert_eq!(img.dimensions(), (seq.module_width() * 3, 45), "{}", seq.symbology());
        // no quiet zone: the first column is inked
        assert!((0..45).any(|y| img.get_pixel(0, y)[0] == 0), "{}", seq.symbology());
    }
}

#[test]
fn test_renderers_agree_on_bar_count() {
    let opts = RenderOptions::default();
    for seq in samples() {
        let bars = seq.iter().filter(|e| e.is_bar()).count();
        assert_eq!(to_svg_string(&seq, &opts).matches("<rect ").count(), bars);
        assert_eq!(to_html_string(&seq, &opts).matches("&nbsp;").count(), bars);
    }
}

#[test]
fn test_text_rows() {
    for seq in samples() {
        let text = to_text_string(&seq);
        let rows = if seq.is_height_modulated() { 3 } else { 1 };
        assert_eq!(text.lines().count(), rows, "{}", seq.symbology());
        for line in text.lines() {
            assert_eq!(line.chars().count() as u32, seq.module_width());
        }
    }
}

#[test]
fn test_image_bytes() {
    let seq = encode_type("081231723897", "EAN13").unwrap();
    let opts = RenderOptions::default();

    let png = to_image_bytes(&seq, &opts, ImageFormat::Png).unwrap();
    assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);

    let jpeg = to_image_bytes(&seq, &opts, ImageFormat::Jpeg).unwrap();
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

    let decoded = image::load_from_memory(&png).unwrap().to_luma8();
    assert_eq!(decoded, to_image_buffer(&seq, &opts));
}

#[test]
fn test_height_modulated_flags() {
    for seq in samples() {
        assert_eq!(seq.is_height_modulated(), seq.symbology().is_height_modulated());
    }
    assert!(Symbology::Imb.is_height_modulated());
    assert!(!Symbology::Pharmacode.is_height_modulated());
}
