use super::*;
use crate::foundation::core::{luma_of, pack_gray};

const BLACK: u32 = 0xff00_0000;

#[test]
fn resize_reseeds_accumulator_from_new_frame() {
    let mut filter = Pxl2000Filter::default();

    let mut small = FrameArgb32::filled(4, 4, pack_gray(0xff, 200)).unwrap();
    filter.process(&mut small).unwrap();
    assert_eq!(filter.accumulator.len(), 16);

    let mut big = FrameArgb32::filled(8, 8, pack_gray(0xff, 128)).unwrap();
    filter.process(&mut big).unwrap();
    assert_eq!(filter.accumulator.len(), 64);
    assert_eq!(filter.frame_index(), FrameIndex(2));

    for y in 0..8u32 {
        for x in 0..8u32 {
            let px = big.get(x, y).unwrap();
            if y < 1 || y >= 7 || x < 1 || x >= 7 {
                assert_eq!(px, BLACK);
                continue;
            }
            // Counter 1: rows with odd (1 + y) start one column later.
            let refreshed = (x - 1) % 2 == (1 + y) % 2;
            let expected = if refreshed { 153 } else { 128 };
            assert_eq!(luma_of(px), expected, "({x},{y})");
            assert_ne!(luma_of(px), 200);
        }
    }
}

#[test]
fn frame_without_interior_becomes_border_color() {
    let mut filter = Pxl2000Filter::default();

    // floor(7 * 0.125) == 0: no border, no interior.
    let mut narrow = FrameArgb32::filled(7, 7, pack_gray(0xff, 90)).unwrap();
    filter.process(&mut narrow).unwrap();
    assert!(narrow.pixels().iter().all(|&px| px == BLACK));

    // Border of 2 rows swallows a 2-row frame.
    let mut flat = FrameArgb32::filled(16, 2, pack_gray(0xff, 90)).unwrap();
    filter.process(&mut flat).unwrap();
    assert!(flat.pixels().iter().all(|&px| px == BLACK));

    let mut empty = FrameArgb32::new(0, 0, Vec::new()).unwrap();
    filter.process(&mut empty).unwrap();

    assert_eq!(filter.frame_index(), FrameIndex(3));
}

#[test]
fn custom_border_color_is_painted() {
    let params = Pxl2000Params {
        border_color: 0xff20_4060,
        ..Pxl2000Params::default()
    };
    let mut filter = Pxl2000Filter::new(params, FilterOpts::default()).unwrap();
    let mut f = FrameArgb32::filled(16, 16, pack_gray(0xff, 128)).unwrap();
    filter.process(&mut f).unwrap();
    assert_eq!(f.get(0, 0), Some(0xff20_4060));
    assert_eq!(f.get(15, 8), Some(0xff20_4060));
}

#[test]
fn reset_drops_prior_frame_memory_but_keeps_counter() {
    let mut filter = Pxl2000Filter::default();
    let mut f = FrameArgb32::filled(16, 16, pack_gray(0xff, 128)).unwrap();
    filter.process(&mut f).unwrap();

    filter.reset();
    assert_eq!(filter.accumulator.len(), 0);
    assert_eq!(filter.frame_index(), FrameIndex(1));
}

#[test]
fn new_rejects_invalid_params_and_options() {
    let bad = Pxl2000Params {
        posterize_levels: -1.0,
        ..Pxl2000Params::default()
    };
    assert!(Pxl2000Filter::new(bad, FilterOpts::default()).is_err());

    let opts = FilterOpts {
        parallel: true,
        threads: Some(0),
        rows_per_chunk: None,
    };
    assert!(Pxl2000Filter::new(Pxl2000Params::default(), opts).is_err());
}

#[test]
fn advertises_monochrome_seven_level_palette() {
    let filter = Pxl2000Filter::default();
    assert!(filter.is_monochrome());
    assert_eq!(filter.described_palette(), PaletteDescriptor::monochrome(7));
}
