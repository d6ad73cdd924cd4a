use super::*;

#[test]
fn default_style_matches_design_values() {
    let s = StripStyle::default();
    assert_eq!(s.frame_count, 4);
    assert_eq!(s.theme, Theme::Blue);
    assert_eq!(s.background, StripBackground::White);
    assert_eq!(s.border_radius, 28.0);
    assert_eq!(s.gap, 24.0);
    assert_eq!(s.footer_text, "riesbeads.com • Singapore");
    assert_eq!(s.logo_scale, 0.7);
    assert_eq!(s.watermark_opacity, 1.0);
    assert_eq!(s.logo_fit, LogoFitPolicy::AllowUpscale);
    s.validate().unwrap();
}

#[test]
fn theme_color_pairings() {
    assert_eq!(Theme::Blue.header_fill(), PALETTE_BLUE);
    assert_eq!(Theme::Blue.header_text(), PALETTE_WHITE);
    assert_eq!(Theme::White.header_fill(), PALETTE_WHITE);
    assert_eq!(Theme::White.header_text(), PALETTE_INK);
    assert_eq!(StripBackground::BlueSoft.fill(), PALETTE_BLUE_SOFT);
}

#[test]
fn style_validation_rejects_out_of_range_knobs() {
    let mut s = StripStyle::default();
    s.frame_count = 5;
    assert!(matches!(
        s.validate(),
        Err(StripError::InvalidFrameCount(5))
    ));

    let mut s = StripStyle::default();
    s.logo_scale = 0.29;
    assert!(s.validate().is_err());
    s.logo_scale = 0.91;
    assert!(s.validate().is_err());

    let mut s = StripStyle::default();
    s.watermark_opacity = 0.1;
    assert!(s.validate().is_err());
    s.watermark_opacity = f64::NAN;
    assert!(s.validate().is_err());

    let mut s = StripStyle::default();
    s.gap = -1.0;
    assert!(s.validate().is_err());

    let mut s = StripStyle::default();
    s.border_radius = f64::INFINITY;
    assert!(s.validate().is_err());
}

#[test]
fn partial_style_json_fills_defaults() {
    let s: StripStyle = serde_json::from_str(r#"{ "frame_count": 3, "theme": "White" }"#).unwrap();
    assert_eq!(s.frame_count, 3);
    assert_eq!(s.theme, Theme::White);
    assert_eq!(s.gap, 24.0);
    assert_eq!(s.footer_text, "riesbeads.com • Singapore");

    let round: StripStyle =
        serde_json::from_str(&serde_json::to_string(&StripStyle::default()).unwrap()).unwrap();
    assert_eq!(round, StripStyle::default());
}

#[test]
fn config_validation_covers_canvas_bounds() {
    let cfg = StripConfig::new(
        Canvas {
            width: 0,
            height: 10,
        },
        StripStyle::default(),
    );
    assert!(cfg.validate().is_err());

    let cfg = StripConfig::new(
        Canvas {
            width: 3000,
            height: 100_000,
        },
        StripStyle::default(),
    );
    assert!(cfg.validate().is_err());

    let cfg = StripConfig::new(DESIGN_CANVAS, StripStyle::default());
    cfg.validate().unwrap();
}
