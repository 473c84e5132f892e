//! Test fixtures: in-memory images and EXIF payloads.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, ImageReader, Rgb, RgbImage};

/// Gradient RGB image; every pixel distinct enough to notice rotations.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }))
}

/// Encode an image fixture into the given container.
pub fn encode_image(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format)
        .expect("encode fixture");
    buf
}

/// Decode response bytes back into pixels.
pub fn decode_image(data: &[u8]) -> DynamicImage {
    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .expect("guess format")
        .decode()
        .expect("decode fixture")
}

/// Minimal little-endian TIFF buffer holding only an EXIF orientation
/// field.
pub fn exif_payload(orientation: u16) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"II*\0");
    buf.extend_from_slice(&8u32.to_le_bytes()); // offset of IFD0
    buf.extend_from_slice(&1u16.to_le_bytes()); // one entry
    buf.extend_from_slice(&0x0112u16.to_le_bytes()); // Orientation tag
    buf.extend_from_slice(&3u16.to_le_bytes()); // SHORT
    buf.extend_from_slice(&1u32.to_le_bytes()); // count
    buf.extend_from_slice(&orientation.to_le_bytes());
    buf.extend_from_slice(&[0, 0]); // value field padding
    buf.extend_from_slice(&0u32.to_le_bytes()); // no next IFD
    buf
}

/// JPEG carrying an EXIF APP1 segment with the given orientation value.
/// The segment is spliced in right after SOI; both the JPEG decoder and
/// the EXIF reader accept it there.
pub fn jpeg_with_orientation(width: u32, height: u32, orientation: u16) -> Vec<u8> {
    let jpeg = encode_image(&gradient_image(width, height), ImageFormat::Jpeg);
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "fixture must start with SOI");

    let mut app1_body = Vec::new();
    app1_body.extend_from_slice(b"Exif\0\0");
    app1_body.extend_from_slice(&exif_payload(orientation));
    let segment_len = (app1_body.len() + 2) as u16;

    let mut out = Vec::with_capacity(jpeg.len() + app1_body.len() + 4);
    out.extend_from_slice(&jpeg[..2]); // SOI
    out.extend_from_slice(&[0xFF, 0xE1]); // APP1 marker
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(&app1_body);
    out.extend_from_slice(&jpeg[2..]);
    out
}
