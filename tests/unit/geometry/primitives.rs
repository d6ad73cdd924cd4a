use kurbo::{PathEl, Shape};

use super::*;

#[test]
fn aspect_lookup_is_total_over_valid_counts() {
    assert_eq!(aspect_for_frame_count(2).unwrap(), 0.75);
    assert_eq!(aspect_for_frame_count(3).unwrap(), 1.0);
    let four = aspect_for_frame_count(4).unwrap();
    assert!((four - 4.0 / 3.0).abs() < 1e-12);
}

#[test]
fn aspect_lookup_rejects_other_counts() {
    for n in [0u32, 1, 5, 17, u32::MAX] {
        match aspect_for_frame_count(n) {
            Err(StripError::InvalidFrameCount(got)) => assert_eq!(got, n),
            other => panic!("expected InvalidFrameCount for {n}, got {other:?}"),
        }
    }
}

#[test]
fn rounded_rect_path_is_closed_and_stays_in_bounds() {
    let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
    let path = rounded_rect_path(rect, 8.0);

    assert!(matches!(path.elements().first(), Some(PathEl::MoveTo(_))));
    assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));

    let bbox = path.bounding_box();
    assert!(bbox.x0 >= rect.x0 - 1e-6 && bbox.x1 <= rect.x1 + 1e-6);
    assert!(bbox.y0 >= rect.y0 - 1e-6 && bbox.y1 <= rect.y1 + 1e-6);
}

#[test]
fn rounded_rect_radius_clamps_on_degenerate_rects() {
    // Radius far larger than the short side must not invert the arcs; the
    // path still spans the full rectangle.
    let rect = Rect::new(0.0, 0.0, 40.0, 6.0);
    let path = rounded_rect_path(rect, 500.0);
    let bbox = path.bounding_box();
    assert!((bbox.width() - 40.0).abs() < 1e-6);
    assert!((bbox.height() - 6.0).abs() < 1e-6);

    // Negative radius behaves as zero.
    let path = rounded_rect_path(rect, -3.0);
    assert!((path.bounding_box().area() - rect.area()).abs() < 1e-6);
}

#[test]
fn cover_fit_uses_max_ratio_and_centers() {
    // Wide image into a square: height-limited, horizontal overflow cropped.
    let dst = Rect::new(100.0, 200.0, 300.0, 400.0);
    let fit = cover_fit(400.0, 300.0, dst);
    assert!((fit.scale - (200.0f64 / 300.0).max(200.0 / 400.0)).abs() < 1e-12);

    let overflow_x = fit.placement.width() - dst.width();
    assert!(overflow_x > 0.0);
    let left_crop = dst.x0 - fit.placement.x0;
    let right_crop = fit.placement.x1 - dst.x1;
    assert!((left_crop - right_crop).abs() <= 1.0);

    // The covered axis matches the destination exactly.
    assert!((fit.placement.height() - dst.height()).abs() < 1e-9);
    assert!((fit.placement.y0 - dst.y0).abs() < 1e-9);
}

#[test]
fn cover_fit_preserves_aspect_ratio() {
    let dst = Rect::new(0.0, 0.0, 123.0, 456.0);
    let fit = cover_fit(640.0, 480.0, dst);
    let drawn_ar = fit.placement.width() / fit.placement.height();
    assert!((drawn_ar - 640.0 / 480.0).abs() < 1e-9);
}

#[test]
fn cover_fit_transform_maps_source_corners_onto_placement() {
    let dst = Rect::new(50.0, 60.0, 250.0, 160.0);
    let fit = cover_fit(100.0, 80.0, dst);
    let tl = fit.transform * kurbo::Point::new(0.0, 0.0);
    let br = fit.transform * kurbo::Point::new(100.0, 80.0);
    assert!((tl.x - fit.placement.x0).abs() < 1e-9);
    assert!((tl.y - fit.placement.y0).abs() < 1e-9);
    assert!((br.x - fit.placement.x1).abs() < 1e-9);
    assert!((br.y - fit.placement.y1).abs() < 1e-9);
}

#[test]
fn contain_fit_meets_exactly_one_bound_for_skewed_aspects() {
    // Very wide logo: width-limited.
    let fit = contain_fit(1000.0, 10.0, 200.0, 100.0, true);
    assert!((fit.width - 200.0).abs() < 1e-9);
    assert!(fit.height <= 100.0 + 1e-9);

    // Very tall logo: height-limited.
    let fit = contain_fit(10.0, 1000.0, 200.0, 100.0, true);
    assert!((fit.height - 100.0).abs() < 1e-9);
    assert!(fit.width <= 200.0 + 1e-9);
}

#[test]
fn contain_fit_upscale_policy() {
    // Small logo in a big box upscales freely by default.
    let fit = contain_fit(10.0, 10.0, 200.0, 100.0, true);
    assert!((fit.scale - 10.0).abs() < 1e-9);

    // With upscaling disallowed the scale caps at native size.
    let fit = contain_fit(10.0, 10.0, 200.0, 100.0, false);
    assert_eq!(fit.scale, 1.0);
    assert_eq!(fit.width, 10.0);
    assert_eq!(fit.height, 10.0);
}
