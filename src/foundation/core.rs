use crate::foundation::error::{PxlError, PxlResult};

/// Number of frames processed by a filter instance.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Packed `0xAARRGGBB` color.
pub type Argb32 = u32;

/// Opaque black, the default border color.
pub const OPAQUE_BLACK: Argb32 = 0xff00_0000;

/// Alpha byte of a packed color.
#[inline]
pub fn alpha_of(px: Argb32) -> u8 {
    (px >> 24) as u8
}

/// Luma of a packed color: its low byte. Monochrome content carries equal channels.
#[inline]
pub fn luma_of(px: Argb32) -> u8 {
    (px & 0xff) as u8
}

/// Pack a gray level into all three color channels under the given alpha.
#[inline]
pub fn pack_gray(alpha: u8, luma: u8) -> Argb32 {
    let v = u32::from(luma);
    (u32::from(alpha) << 24) | (v << 16) | (v << 8) | v
}

/// Row-major frame of packed ARGB pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameArgb32 {
    width: u32,
    height: u32,
    pixels: Vec<Argb32>,
}

impl FrameArgb32 {
    /// Wrap an existing pixel buffer. `pixels.len()` must equal `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Argb32>) -> PxlResult<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(PxlError::validation(format!(
                "frame expects {expected} pixels for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A frame filled with one color.
    pub fn filled(width: u32, height: u32, color: Argb32) -> PxlResult<Self> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; len],
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width * height`).
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True for a zero-area frame.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Option<Argb32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Argb32] {
        &self.pixels
    }

    /// Mutable access to all pixels, row-major.
    pub fn pixels_mut(&mut self) -> &mut [Argb32] {
        &mut self.pixels
    }

    /// One row of pixels.
    pub fn row(&self, y: u32) -> &[Argb32] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    /// Consume the frame and return its pixel buffer.
    pub fn into_pixels(self) -> Vec<Argb32> {
        self.pixels
    }
}

fn pixel_count(width: u32, height: u32) -> PxlResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| PxlError::validation("frame size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
