use crate::foundation::core::{Argb32, FrameArgb32, alpha_of, luma_of, pack_gray};
use crate::foundation::error::{PxlError, PxlResult};

/// Family of a palette handed to downstream color conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteKind {
    /// Evenly spaced gray ramp from black to white.
    Monochrome,
}

/// What a filter tells the color-conversion stage about its output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PaletteDescriptor {
    /// Palette family.
    pub kind: PaletteKind,
    /// Number of discrete levels.
    pub levels: u8,
}

impl PaletteDescriptor {
    /// Monochrome ramp with `levels` entries.
    pub const fn monochrome(levels: u8) -> Self {
        Self {
            kind: PaletteKind::Monochrome,
            levels,
        }
    }
}

/// Gray ramp with `levels` entries, `0` and `255` included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonochromePalette {
    ramp: Vec<u8>,
}

impl MonochromePalette {
    /// Build a ramp. At least two levels are required.
    pub fn new(levels: u8) -> PxlResult<Self> {
        if levels < 2 {
            return Err(PxlError::validation(
                "monochrome palette needs at least 2 levels",
            ));
        }
        let top = f32::from(levels - 1);
        let ramp = (0..levels)
            .map(|i| (f32::from(i) * 255.0 / top).round() as u8)
            .collect();
        Ok(Self { ramp })
    }

    /// Build the palette a descriptor names.
    pub fn from_descriptor(desc: PaletteDescriptor) -> PxlResult<Self> {
        match desc.kind {
            PaletteKind::Monochrome => Self::new(desc.levels),
        }
    }

    /// Number of levels.
    pub fn levels(&self) -> usize {
        self.ramp.len()
    }

    /// Opaque packed colors of the ramp, darkest first.
    pub fn colors(&self) -> Vec<Argb32> {
        self.ramp.iter().map(|&v| pack_gray(0xff, v)).collect()
    }

    /// Index of the ramp entry closest to `luma`.
    pub fn nearest_index(&self, luma: u8) -> usize {
        let top = (self.ramp.len() - 1) as f32;
        (f32::from(luma) * top / 255.0).round() as usize
    }

    /// Ramp entry closest to `luma`.
    pub fn nearest(&self, luma: u8) -> u8 {
        self.ramp[self.nearest_index(luma)]
    }

    /// Snap every pixel of a monochrome frame onto the ramp, keeping alpha.
    pub fn quantize_frame(&self, frame: &mut FrameArgb32) {
        for px in frame.pixels_mut() {
            *px = pack_gray(alpha_of(*px), self.nearest(luma_of(*px)));
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/palette.rs"]
mod tests;
