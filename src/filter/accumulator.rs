use crate::foundation::core::{Argb32, FrameArgb32};
use crate::foundation::error::{PxlError, PxlResult};

/// Persistent prior-frame memory.
///
/// Holds two equal-length buffers. `current` is last frame's fully processed output and stays
/// frozen while rows are processed; `next` receives the new values. `commit` swaps them.
#[derive(Debug, Default)]
pub(crate) struct FrameAccumulator {
    current: Vec<Argb32>,
    next: Vec<Argb32>,
}

impl FrameAccumulator {
    /// Reallocate and reseed from `frame` when the pixel count changed (or on first use).
    ///
    /// Returns `true` when a reallocation happened. Allocation failure leaves the accumulator
    /// empty and reports [`PxlError::Resource`].
    pub(crate) fn ensure_capacity(&mut self, frame: &FrameArgb32) -> PxlResult<bool> {
        if !self.current.is_empty() && self.current.len() == frame.len() {
            return Ok(false);
        }

        self.reset();
        let current = seeded_copy(frame.pixels())?;
        let next = seeded_copy(frame.pixels())?;
        self.current = current;
        self.next = next;

        tracing::debug!(
            width = frame.width(),
            height = frame.height(),
            len = self.current.len(),
            "accumulator reseeded from frame"
        );
        Ok(true)
    }

    /// Frozen previous output plus the buffer to write, with `next` refreshed from `current` so
    /// pixels skipped this frame keep last frame's value.
    pub(crate) fn split_for_pass(&mut self) -> (&[Argb32], &mut [Argb32]) {
        self.next.copy_from_slice(&self.current);
        (&self.current, &mut self.next)
    }

    /// Publish the buffer written during the pass as the new prior-frame memory.
    pub(crate) fn commit(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    pub(crate) fn as_slice(&self) -> &[Argb32] {
        &self.current
    }

    pub(crate) fn len(&self) -> usize {
        self.current.len()
    }

    pub(crate) fn reset(&mut self) {
        self.current = Vec::new();
        self.next = Vec::new();
    }
}

fn seeded_copy(src: &[Argb32]) -> PxlResult<Vec<Argb32>> {
    let mut buf = Vec::<Argb32>::new();
    buf.try_reserve_exact(src.len()).map_err(|e| {
        PxlError::resource(format!(
            "failed to allocate accumulator of {} pixels: {e}",
            src.len()
        ))
    })?;
    buf.extend_from_slice(src);
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/filter/accumulator.rs"]
mod tests;
