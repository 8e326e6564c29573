use std::io::Cursor;

use super::*;

fn png_bytes(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_packs_gray_with_alpha() {
    let img = image::RgbaImage::from_raw(2, 1, vec![90, 90, 90, 255, 200, 200, 200, 128]).unwrap();
    let frame = decode_frame(&png_bytes(img)).unwrap();

    assert_eq!(frame.width(), 2);
    assert_eq!(frame.height(), 1);
    assert_eq!(frame.pixels(), &[0xff5a_5a5a, 0x80c8_c8c8]);
}

#[test]
fn rgba_export_unpacks_channels() {
    let frame = FrameArgb32::new(1, 2, vec![0xff11_2233, 0x0044_5566]).unwrap();
    let img = frame_to_rgba_image(&frame).unwrap();
    assert_eq!(img.into_raw(), vec![0x11, 0x22, 0x33, 0xff, 0x44, 0x55, 0x66, 0x00]);
}

#[test]
fn decode_rejects_garbage() {
    assert!(decode_frame(b"not an image").is_err());
}
