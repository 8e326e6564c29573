use super::*;

fn lattice(params: &Pxl2000Params) -> Vec<u8> {
    let step = params.posterize_step();
    let mut out: Vec<u8> = (0..=params.posterize_levels as u32)
        .map(|k| k as f32 * step)
        .filter(|&v| v >= params.clamp_min && v <= params.clamp_max)
        .map(|v| v as u8)
        .collect();
    out.push(params.clamp_min as u8);
    out.push(params.clamp_max as u8);
    out
}

#[test]
fn steady_state_mid_gray_maps_to_153() {
    let params = Pxl2000Params::default();
    let blurred: f32 = params.blur_kernel.iter().map(|k| 128.0 * k).sum();
    assert_eq!(tone_map(&params, 128.0, blurred), 153);
    assert_eq!(tone_map(&params, 128.0, 128.0), 153);
}

#[test]
fn tone_map_output_lies_on_posterize_lattice() {
    let params = Pxl2000Params::default();
    let allowed = lattice(&params);
    for orig in (0..=255).step_by(5) {
        for blurred in (0..=255).step_by(3) {
            let v = tone_map(&params, orig as f32, blurred as f32);
            assert!(allowed.contains(&v), "orig={orig} blurred={blurred} -> {v}");
        }
    }
}

#[test]
fn tone_map_respects_light_level_clamps() {
    let params = Pxl2000Params::default();
    // The floor is applied before the 1.2 scale, so black lands one level above it.
    assert_eq!(tone_map(&params, 0.0, 0.0), 14);
    assert_eq!(tone_map(&params, 255.0, 255.0), 242);
}

fn seq(frames: u64) -> SequenceController {
    let mut s = SequenceController::default();
    for _ in 0..frames {
        s.advance();
    }
    s
}

fn pass<'a>(
    params: &'a Pxl2000Params,
    frame: &'a [u32],
    prev: &'a [u32],
    counter: u64,
) -> RowPass<'a> {
    RowPass {
        params,
        frame,
        prev,
        width: 3,
        border: 1,
        sequence: seq(counter),
    }
}

#[test]
fn center_pixel_mixes_frame_diagonals_with_previous_orthogonals() {
    let params = Pxl2000Params::default();
    let frame = vec![pack_gray(0xff, 128); 9];
    let prev = vec![pack_gray(0xff, 128); 9];

    // Row 1 with counter 1 has phase 0: only column 1 (the center) is refreshed.
    let mut base = prev.clone();
    pass(&params, &frame, &prev, 1).run(1..2, &mut base[3..6]);
    assert_eq!(base[4], pack_gray(0xff, 153));

    // Orthogonal neighbors are read from the previous output.
    let mut prev_dark = prev.clone();
    for i in [1, 3, 5, 7] {
        prev_dark[i] = pack_gray(0xff, 0);
    }
    let mut out = prev_dark.clone();
    pass(&params, &frame, &prev_dark, 1).run(1..2, &mut out[3..6]);
    assert_ne!(out[4], base[4]);

    // Diagonals of the previous output are ignored.
    let mut prev_diag = prev.clone();
    for i in [0, 2, 6, 8] {
        prev_diag[i] = pack_gray(0xff, 0);
    }
    let mut out = prev_diag.clone();
    pass(&params, &frame, &prev_diag, 1).run(1..2, &mut out[3..6]);
    assert_eq!(out[4], base[4]);

    // Diagonals of the incoming frame are not.
    let mut frame_diag = frame.clone();
    for i in [0, 2, 6, 8] {
        frame_diag[i] = pack_gray(0xff, 0);
    }
    let mut out = prev.clone();
    pass(&params, &frame_diag, &prev, 1).run(1..2, &mut out[3..6]);
    assert_ne!(out[4], base[4]);
}

#[test]
fn refreshed_pixel_takes_alpha_from_incoming_frame() {
    let params = Pxl2000Params::default();
    let frame = vec![pack_gray(0x40, 128); 9];
    let prev = vec![pack_gray(0xff, 128); 9];

    let mut out = prev.clone();
    pass(&params, &frame, &prev, 1).run(1..2, &mut out[3..6]);
    assert_eq!(alpha_of(out[4]), 0x40);
    // Border columns of the row are left alone.
    assert_eq!(out[3], prev[3]);
    assert_eq!(out[5], prev[5]);
}

#[test]
fn pixel_is_skipped_on_off_phase() {
    let params = Pxl2000Params::default();
    let frame = vec![pack_gray(0xff, 10); 9];
    let prev = vec![pack_gray(0xff, 128); 9];

    // Row 1 with counter 0 has phase 1: the only interior column is skipped.
    let mut out = prev.clone();
    pass(&params, &frame, &prev, 0).run(1..2, &mut out[3..6]);
    assert_eq!(out, prev);

    let mut out = prev.clone();
    pass(&params, &frame, &prev, 1).run(1..2, &mut out[3..6]);
    assert_ne!(out[4], prev[4]);

    // Counter 0 on a 4-wide row with border 1: phase 1 refreshes column 2 only.
    let frame4 = vec![pack_gray(0xff, 10); 12];
    let prev4 = vec![pack_gray(0xff, 128); 12];
    let mut out4 = prev4.clone();
    RowPass {
        params: &params,
        frame: &frame4,
        prev: &prev4,
        width: 4,
        border: 1,
        sequence: seq(0),
    }
    .run(1..2, &mut out4[4..8]);
    assert_eq!(out4[5], prev4[5]);
    assert_ne!(out4[6], prev4[6]);
}
