use crate::foundation::core::Argb32;

/// Copy the accumulator into `out` and paint the border mask over it.
///
/// Top and bottom `border` rows are painted whole; rows in between get `border` columns on each
/// side. Rows or columns overlapping on tiny frames are simply painted twice.
pub(crate) fn composite_with_border(
    accumulator: &[Argb32],
    out: &mut [Argb32],
    width: usize,
    height: usize,
    border: usize,
    color: Argb32,
) {
    out.copy_from_slice(accumulator);
    paint_border(out, width, height, border, color);
}

pub(crate) fn paint_border(
    out: &mut [Argb32],
    width: usize,
    height: usize,
    border: usize,
    color: Argb32,
) {
    if border == 0 || width == 0 {
        return;
    }
    let band = border.min(height);

    out[..band * width].fill(color);
    out[(height - band) * width..height * width].fill(color);

    let side = border.min(width);
    for row in out.chunks_exact_mut(width).take(height - band).skip(band) {
        row[..side].fill(color);
        row[width - side..].fill(color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/border.rs"]
mod tests;
