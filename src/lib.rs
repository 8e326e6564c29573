//! pxl2000 simulates the look of a PXL-2000 toy camcorder on a live monochrome image stream.
//!
//! A [`Pxl2000Filter`] is fed the frames of one stream in order and rewrites each frame in place:
//!
//! 1. **Blur**: 3x3 Gaussian mixing the incoming frame with last frame's output
//! 2. **Tone**: unsharp mask, 5%/95% light-level clamps, dynamic-range scale, 90-level posterize
//! 3. **Interleave**: only half of the pixels are refreshed per frame, in a checkerboard that flips
//!    every frame and every row, which produces the characteristic lag and ghosting
//! 4. **Mask**: a solid border of 1/8 of the frame width is painted over the edges
//!
//! Rows are processed by a pluggable [`RowScheduler`]; [`ParallelRows`] runs them on a rayon pool.
//! Workers read the previous output from a frozen buffer, so results do not depend on how rows
//! are partitioned.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same frame sequence always yields the same output bytes.
//! - **No IO in the filter**: decoding and encoding live in [`decode_frame`] and friends.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod filter;
mod foundation;
mod palette;
mod render;

pub use assets::decode::{decode_frame, frame_from_dynamic_image, frame_to_rgba_image};
pub use filter::Pxl2000Filter;
pub use filter::params::{DEFAULT_BLUR_KERNEL, FilterOpts, Pxl2000Params};
pub use foundation::core::{
    Argb32, FrameArgb32, FrameIndex, OPAQUE_BLACK, alpha_of, luma_of, pack_gray,
};
pub use foundation::error::{PxlError, PxlResult};
pub use palette::{MonochromePalette, PaletteDescriptor, PaletteKind};
pub use render::scheduler::{ParallelRows, RowBody, RowScheduler, SequentialRows};
