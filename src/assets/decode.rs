use anyhow::Context;

use crate::foundation::core::{FrameArgb32, pack_gray};
use crate::foundation::error::{PxlError, PxlResult};

/// Decode encoded image bytes into a monochrome packed frame.
pub fn decode_frame(bytes: &[u8]) -> PxlResult<FrameArgb32> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    frame_from_dynamic_image(&dyn_img)
}

/// Convert any `image` buffer to luma + alpha and pack it as gray ARGB.
pub fn frame_from_dynamic_image(img: &image::DynamicImage) -> PxlResult<FrameArgb32> {
    let la = img.to_luma_alpha8();
    let (width, height) = la.dimensions();
    let pixels = la
        .pixels()
        .map(|px| pack_gray(px.0[1], px.0[0]))
        .collect::<Vec<_>>();
    FrameArgb32::new(width, height, pixels)
}

/// Unpack a frame into straight RGBA8.
pub fn frame_to_rgba_image(frame: &FrameArgb32) -> PxlResult<image::RgbaImage> {
    let mut raw = Vec::with_capacity(frame.len() * 4);
    for &px in frame.pixels() {
        let [a, r, g, b] = px.to_be_bytes();
        raw.extend_from_slice(&[r, g, b, a]);
    }
    image::RgbaImage::from_raw(frame.width(), frame.height(), raw)
        .ok_or_else(|| PxlError::validation("frame buffer does not match its dimensions"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
