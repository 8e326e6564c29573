//! The PXL-2000 filter: per-frame blur, sharpen, tone mapping and checkerboard interleave over a
//! persistent prior-frame buffer, finished with a solid border mask.

pub(crate) mod accumulator;
pub(crate) mod border;
pub(crate) mod convolve;
pub(crate) mod params;
pub(crate) mod sequence;

use crate::filter::accumulator::FrameAccumulator;
use crate::filter::border::composite_with_border;
use crate::filter::convolve::RowPass;
use crate::filter::params::{FilterOpts, Pxl2000Params};
use crate::filter::sequence::SequenceController;
use crate::foundation::core::{FrameArgb32, FrameIndex};
use crate::foundation::error::PxlResult;
use crate::palette::PaletteDescriptor;
use crate::render::scheduler::{ParallelRows, RowScheduler, SequentialRows};

/// Levels of the monochrome ramp the filter advertises downstream.
const PALETTE_LEVELS: u8 = 7;

/// Stateful PXL-2000 filter instance.
///
/// Each call to [`process`](Self::process) refreshes half of the interior pixels (alternating every
/// frame and every row) from the incoming frame blended with last frame's output, so the
/// instance must see the frames of one stream in order. `process` takes `&mut self`: one frame is
/// in flight per instance at any time. Share an instance across threads behind a `Mutex`.
pub struct Pxl2000Filter {
    params: Pxl2000Params,
    scheduler: Box<dyn RowScheduler>,
    accumulator: FrameAccumulator,
    sequence: SequenceController,
}

impl std::fmt::Debug for Pxl2000Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pxl2000Filter")
            .field("params", &self.params)
            .field("accumulator_len", &self.accumulator.len())
            .field("frame_index", &self.sequence.frame_index())
            .finish_non_exhaustive()
    }
}

impl Default for Pxl2000Filter {
    fn default() -> Self {
        Self::with_scheduler(Pxl2000Params::default(), Box::new(SequentialRows))
    }
}

impl Pxl2000Filter {
    /// Validate `params` and build a filter with the scheduler `opts` asks for.
    pub fn new(params: Pxl2000Params, opts: FilterOpts) -> PxlResult<Self> {
        params.validate()?;
        let scheduler: Box<dyn RowScheduler> = if opts.parallel {
            Box::new(ParallelRows::new(opts.threads, opts.rows_per_chunk)?)
        } else {
            Box::new(SequentialRows)
        };
        Ok(Self::with_scheduler(params, scheduler))
    }

    /// Build a filter on a caller-provided row scheduler. `params` are trusted as given.
    pub fn with_scheduler(params: Pxl2000Params, scheduler: Box<dyn RowScheduler>) -> Self {
        Self {
            params,
            scheduler,
            accumulator: FrameAccumulator::default(),
            sequence: SequenceController::default(),
        }
    }

    /// Effect constants in use.
    pub fn params(&self) -> &Pxl2000Params {
        &self.params
    }

    /// Number of frames completed so far.
    pub fn frame_index(&self) -> FrameIndex {
        self.sequence.frame_index()
    }

    /// Output channels are always equal: downstream conversion should treat them as luma.
    pub fn is_monochrome(&self) -> bool {
        true
    }

    /// Palette the downstream color conversion should map this filter's output onto.
    pub fn described_palette(&self) -> PaletteDescriptor {
        PaletteDescriptor::monochrome(PALETTE_LEVELS)
    }

    /// Drop the prior-frame memory. The next frame reseeds it; the frame counter keeps running.
    pub fn reset(&mut self) {
        self.accumulator.reset();
    }

    /// Apply the effect to `frame` in place.
    ///
    /// Fails only when the prior-frame buffer cannot be (re)allocated, in which case `frame` is
    /// left untouched and the frame counter does not advance.
    #[tracing::instrument(skip_all, fields(width = frame.width(), height = frame.height()))]
    pub fn process(&mut self, frame: &mut FrameArgb32) -> PxlResult<()> {
        self.accumulator.ensure_capacity(frame)?;

        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let border = self.params.border_width(frame.width()) as usize;
        let color = self.params.border_color;

        let interior = border..height.saturating_sub(border);
        if border == 0 || interior.is_empty() || width <= 2 * border {
            tracing::debug!(border, "no interior to process, masking whole frame");
            frame.pixels_mut().fill(color);
            self.sequence.advance();
            return Ok(());
        }

        let (prev, next) = self.accumulator.split_for_pass();
        let pass = RowPass {
            params: &self.params,
            frame: frame.pixels(),
            prev,
            width,
            border,
            sequence: self.sequence,
        };
        let rows_out = &mut next[interior.start * width..interior.end * width];
        self.scheduler
            .run_rows(interior, width, rows_out, &|rows, out| pass.run(rows, out));
        self.accumulator.commit();

        composite_with_border(
            self.accumulator.as_slice(),
            frame.pixels_mut(),
            width,
            height,
            border,
            color,
        );
        self.sequence.advance();

        tracing::trace!(frame = self.sequence.frame_index().0, "frame processed");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/mod.rs"]
mod tests;
