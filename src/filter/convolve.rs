use std::ops::Range;

use crate::filter::params::Pxl2000Params;
use crate::filter::sequence::{SequenceController, refreshed_columns};
use crate::foundation::core::{Argb32, alpha_of, luma_of, pack_gray};

/// Inputs shared by every row of one frame's pass.
///
/// `frame` is the incoming frame and `prev` the frozen accumulator (last frame's processed output);
/// both are read-only for the whole pass, so a `RowPass` can be shared across workers.
#[derive(Clone, Copy)]
pub(crate) struct RowPass<'a> {
    pub(crate) params: &'a Pxl2000Params,
    pub(crate) frame: &'a [Argb32],
    pub(crate) prev: &'a [Argb32],
    pub(crate) width: usize,
    pub(crate) border: usize,
    pub(crate) sequence: SequenceController,
}

impl RowPass<'_> {
    /// Process `rows`, writing into `out`, which covers exactly those rows of the accumulator.
    ///
    /// Callers keep `rows` inside `[border, height - border)` with `border >= 1`, so every
    /// neighbor index stays in bounds.
    pub(crate) fn run(&self, rows: Range<usize>, out: &mut [Argb32]) {
        debug_assert_eq!(out.len(), rows.len() * self.width);
        for (y, out_row) in rows.zip(out.chunks_exact_mut(self.width)) {
            self.process_row(y, out_row);
        }
    }

    fn process_row(&self, y: usize, out_row: &mut [Argb32]) {
        let row_start = y * self.width;
        let phase = self.sequence.phase_for(y);
        for x in refreshed_columns(self.width, self.border, phase) {
            out_row[x] = self.process_pixel(row_start + x);
        }
    }

    fn process_pixel(&self, i: usize) -> Argb32 {
        let w = self.width;
        let k = &self.params.blur_kernel;
        let (src, acc) = (self.frame, self.prev);
        let pixel = src[i];

        // Diagonals and center from the incoming frame, orthogonal neighbors from last output.
        let mut lum = 0.0f32;
        lum += sample(src[i - w - 1]) * k[0];
        lum += sample(acc[i - w]) * k[1];
        lum += sample(src[i - w + 1]) * k[2];
        lum += sample(acc[i - 1]) * k[3];
        lum += sample(src[i]) * k[4];
        lum += sample(acc[i + 1]) * k[5];
        lum += sample(src[i + w - 1]) * k[6];
        lum += sample(acc[i + w]) * k[7];
        lum += sample(src[i + w + 1]) * k[8];

        let out = tone_map(self.params, sample(pixel), lum);
        pack_gray(alpha_of(pixel), out)
    }
}

#[inline]
fn sample(px: Argb32) -> f32 {
    f32::from(luma_of(px))
}

/// Unsharp mask, light-level clamp, dynamic-range scale, posterize, clamp.
///
/// `orig` is the unblurred luma of the pixel, `blurred` the kernel response.
pub(crate) fn tone_map(params: &Pxl2000Params, orig: f32, blurred: f32) -> u8 {
    let (lo, hi) = (params.clamp_min, params.clamp_max);

    let contrast = (orig - blurred).abs() * params.sharpen_amount;
    let factor = (259.0 * (contrast + 255.0)) / (255.0 * (259.0 - contrast));
    let mut lum = factor * (blurred - 128.0) + 128.0;

    lum = lum.clamp(lo, hi);
    lum *= params.dynamic_range_compression;

    let step = params.posterize_step();
    lum = (lum / step).round() * step;

    lum.clamp(lo, hi) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/filter/convolve.rs"]
mod tests;
