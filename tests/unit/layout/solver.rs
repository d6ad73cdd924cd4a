use super::*;
use crate::composition::model::DESIGN_CANVAS;

const EPS: f64 = 1e-9;

fn design_layout(frame_count: u32) -> StripLayout {
    let style = StripStyle {
        frame_count,
        ..StripStyle::default()
    };
    resolve_strip_layout(DESIGN_CANVAS, &style).unwrap()
}

#[test]
fn card_and_header_follow_canvas_proportions() {
    let layout = design_layout(4);
    let (w, h) = (DESIGN_CANVAS.width_f64(), DESIGN_CANVAS.height_f64());

    assert!((layout.card.x0 - w * 0.04).abs() < EPS);
    assert!((layout.card.y0 - w * 0.04).abs() < EPS);
    assert!((layout.card.x1 - (w - w * 0.04)).abs() < EPS);
    assert!((layout.card.y1 - (h - w * 0.04)).abs() < EPS);

    assert!((layout.header.height() - h * 0.12).abs() < EPS);
    assert!((layout.header.width() - (layout.card.width() - 2.0 * layout.inner_pad)).abs() < EPS);
    assert!((layout.header.y0 - (layout.card.y0 + layout.inner_pad)).abs() < EPS);
}

#[test]
fn frame_stack_fits_reserved_band_for_every_count() {
    for count in 2..=4u32 {
        let layout = design_layout(count);
        assert_eq!(layout.frames.len(), count as usize);

        let heights: f64 = layout.frames.iter().map(|f| f.height()).sum();
        let gaps = 24.0 * f64::from(count - 1);
        assert!(
            heights + gaps <= layout.frame_area.height() + EPS,
            "count {count}: stack overflows the reserved band"
        );
        for frame in &layout.frames {
            assert!(frame.x0 >= layout.frame_area.x0 - EPS);
            assert!(frame.x1 <= layout.frame_area.x1 + EPS);
            assert!(frame.y0 >= layout.frame_area.y0 - EPS);
            assert!(frame.y1 <= layout.frame_area.y1 + EPS);
        }
    }
}

#[test]
fn two_frames_are_width_limited_at_design_size() {
    // At 3:10 the two-frame stack has vertical room to spare, so the 3:4
    // frames grow until they hit the padded card width.
    let layout = design_layout(2);
    let frame = layout.frames[0];
    assert!((frame.width() - layout.frame_area.width()).abs() < EPS);
    assert!((frame.width() / frame.height() - 0.75).abs() < EPS);
}

#[test]
fn four_frames_are_height_limited_at_design_size() {
    // Four 4:3 frames exhaust the band instead: the stack plus gaps spans
    // the full reserved height and leaves horizontal slack.
    let layout = design_layout(4);
    let heights: f64 = layout.frames.iter().map(|f| f.height()).sum();
    assert!((heights + 24.0 * 3.0 - layout.frame_area.height()).abs() < EPS);
    assert!(layout.frames[0].width() < layout.frame_area.width() - EPS);
}

#[test]
fn frames_are_centered_and_evenly_gapped() {
    let layout = design_layout(3);
    for frame in &layout.frames {
        let left = frame.x0 - layout.frame_area.x0;
        let right = layout.frame_area.x1 - frame.x1;
        assert!((left - right).abs() < EPS, "frame not centered");
    }
    for pair in layout.frames.windows(2) {
        assert!((pair[1].y0 - pair[0].y1 - 24.0).abs() < EPS);
    }
    assert!((layout.frames[0].y0 - layout.frame_area.y0).abs() < EPS);
}

#[test]
fn drawables_inset_frames_by_the_proportional_amount() {
    let layout = design_layout(4);
    // 12 canvas units at the 3000-wide design size.
    assert!((layout.drawables[0].x0 - layout.frames[0].x0 - 12.0).abs() < EPS);
    assert!((layout.frames[0].x1 - layout.drawables[0].x1 - 12.0).abs() < EPS);
    assert!((layout.drawables[0].y0 - layout.frames[0].y0 - 12.0).abs() < EPS);
    assert!((layout.frames[0].y1 - layout.drawables[0].y1 - 12.0).abs() < EPS);
}

#[test]
fn anchors_and_type_sizes_scale_with_the_canvas() {
    let layout = design_layout(4);
    let w = DESIGN_CANVAS.width_f64();

    assert!((layout.footer_anchor.x - w / 2.0).abs() < EPS);
    assert!((layout.footer_anchor.y - (layout.card.y1 - 2.0 * layout.inner_pad)).abs() < EPS);
    assert!((layout.header_text_anchor.x - layout.header.center().x).abs() < EPS);
    assert!((layout.header_text_anchor.y - layout.header.center().y).abs() < EPS);

    assert!((layout.header_font_px - w * 0.028).abs() < EPS);
    assert!((layout.footer_font_px - w * 0.018).abs() < EPS);
    assert!((layout.header_corner_radius - 20.0).abs() < EPS);
    assert!((layout.photo_corner_radius - 18.0).abs() < EPS);
    assert!((layout.watermark_offset - 10.0).abs() < EPS);
}

#[test]
fn oversized_gap_is_rejected() {
    let style = StripStyle {
        gap: 1.0e9,
        ..StripStyle::default()
    };
    let err = resolve_strip_layout(DESIGN_CANVAS, &style).unwrap_err();
    assert!(matches!(err, StripError::Validation(_)));
}
