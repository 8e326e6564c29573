use crate::foundation::core::FrameIndex;

/// Frame counter driving the checkerboard interleave.
///
/// Single writer: the owning filter advances it once per completed frame. Phases are read with
/// the value in effect before that frame's `advance`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SequenceController {
    counter: u64,
}

impl SequenceController {
    pub(crate) fn frame_index(&self) -> FrameIndex {
        FrameIndex(self.counter)
    }

    /// 0 or 1: the column offset (past the border) of the first pixel refreshed in `row`.
    pub(crate) fn phase_for(&self, row: usize) -> usize {
        phase_for(self.counter, row)
    }

    pub(crate) fn advance(&mut self) {
        self.counter = self.counter.wrapping_add(1);
    }
}

/// `(counter + row) mod 2` without overflowing for large counters.
#[inline]
pub(crate) fn phase_for(counter: u64, row: usize) -> usize {
    ((counter & 1) as usize + (row & 1)) & 1
}

/// Columns refreshed in a row with the given phase: `border + phase, border + phase + 2, ...`
/// below `width - border`.
pub(crate) fn refreshed_columns(
    width: usize,
    border: usize,
    phase: usize,
) -> impl Iterator<Item = usize> {
    let end = width.saturating_sub(border);
    (border + phase..end).step_by(2)
}

#[cfg(test)]
#[path = "../../tests/unit/filter/sequence.rs"]
mod tests;
