use crate::foundation::core::{Argb32, OPAQUE_BLACK};
use crate::foundation::error::{PxlError, PxlResult};

/// 3x3 Gaussian kernel, row-major, weights summing to ~1.0.
pub const DEFAULT_BLUR_KERNEL: [f32; 9] = [
    0.0947416, 0.118317, 0.0947416, //
    0.1183180, 0.147761, 0.1183180, //
    0.0947416, 0.118317, 0.0947416,
];

/// Numeric constants of the PXL-2000 effect.
///
/// `Default` yields the canonical look. Every field may be overridden from JSON; missing fields
/// fall back to their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Pxl2000Params {
    /// Border width as a fraction of the frame width (`floor(width * fraction)`).
    pub border_fraction: f64,
    /// Packed color painted over the border.
    pub border_color: Argb32,
    /// Blur weights applied to (up-left, up, up-right, left, center, right, down-left, down,
    /// down-right).
    pub blur_kernel: [f32; 9],
    /// Unsharp-mask strength.
    pub sharpen_amount: f32,
    /// Number of posterization levels over `0..=255`.
    pub posterize_levels: f32,
    /// Multiplicative dynamic-range scale.
    pub dynamic_range_compression: f32,
    /// Light-level floor (5%).
    pub clamp_min: f32,
    /// Light-level ceiling (95%).
    pub clamp_max: f32,
}

impl Default for Pxl2000Params {
    fn default() -> Self {
        Self {
            border_fraction: 0.125,
            border_color: OPAQUE_BLACK,
            blur_kernel: DEFAULT_BLUR_KERNEL,
            sharpen_amount: 0.7,
            posterize_levels: 90.0,
            dynamic_range_compression: 1.2,
            clamp_min: 12.75,
            clamp_max: 242.25,
        }
    }
}

impl Pxl2000Params {
    /// Parse parameters from JSON. Absent fields take their default value.
    pub fn from_json_str(s: &str) -> PxlResult<Self> {
        let params: Self = serde_json::from_str(s).map_err(|e| PxlError::serde(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Reject parameter sets the row processor cannot run with.
    pub fn validate(&self) -> PxlResult<()> {
        if !self.border_fraction.is_finite() || !(0.0..0.5).contains(&self.border_fraction) {
            return Err(PxlError::validation(
                "border_fraction must be finite and within [0, 0.5)",
            ));
        }
        if self.blur_kernel.iter().any(|w| !w.is_finite()) {
            return Err(PxlError::validation("blur_kernel weights must be finite"));
        }
        if !self.sharpen_amount.is_finite() || self.sharpen_amount < 0.0 {
            return Err(PxlError::validation(
                "sharpen_amount must be finite and >= 0",
            ));
        }
        // Contrast peaks at 255 * amount; the unsharp factor diverges at 259.
        if self.sharpen_amount * 255.0 >= 259.0 {
            return Err(PxlError::validation(
                "sharpen_amount must keep 255 * amount below 259",
            ));
        }
        if !self.posterize_levels.is_finite() || self.posterize_levels <= 0.0 {
            return Err(PxlError::validation(
                "posterize_levels must be finite and > 0",
            ));
        }
        if !self.dynamic_range_compression.is_finite() || self.dynamic_range_compression <= 0.0 {
            return Err(PxlError::validation(
                "dynamic_range_compression must be finite and > 0",
            ));
        }
        if !self.clamp_min.is_finite() || !self.clamp_max.is_finite() {
            return Err(PxlError::validation("clamp bounds must be finite"));
        }
        if self.clamp_min < 0.0 || self.clamp_max > 255.0 || self.clamp_min > self.clamp_max {
            return Err(PxlError::validation(
                "clamp bounds must satisfy 0 <= clamp_min <= clamp_max <= 255",
            ));
        }
        Ok(())
    }

    /// Width of the border mask for a frame of the given width.
    pub fn border_width(&self, frame_width: u32) -> u32 {
        (f64::from(frame_width) * self.border_fraction).floor() as u32
    }

    /// Distance between two adjacent posterization levels.
    pub fn posterize_step(&self) -> f32 {
        255.0 / self.posterize_levels
    }
}

/// Execution options for a filter instance.
#[derive(Clone, Debug, Default)]
pub struct FilterOpts {
    /// Process row ranges on a dedicated rayon thread pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Rows per partition in parallel mode. `None` splits the interior evenly across workers.
    pub rows_per_chunk: Option<usize>,
}

#[cfg(test)]
#[path = "../../tests/unit/filter/params.rs"]
mod tests;
