use super::*;

#[test]
fn default_layout_matches_reference_geometry() {
    let l = LayoutConfig::default();
    assert_eq!(l.cell_origin(0, 0), (10.0, 30.0));
    assert_eq!(l.cell_origin(1, 1), (23.0, 43.0));
    assert_eq!(l.canvas_width(), 706.0);
    assert_eq!(l.canvas_height(), 128.0);
    assert_eq!(l.exit_x(), 1006.0);
    assert_eq!(l.center_offset(), 5.0);
}

#[test]
fn default_config_validates() {
    EngineConfig::default().validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = EngineConfig::from_reader(
        r##"{ "timing": { "speed_px_per_sec": 220.0 }, "theme": "light" }"##.as_bytes(),
    )
    .unwrap();
    assert_eq!(cfg.timing.speed_px_per_sec, 220.0);
    assert_eq!(cfg.timing.min_duration_secs, 5.0);
    assert_eq!(cfg.layout, LayoutConfig::default());
    assert_eq!(cfg.theme, Theme::Light);
}

#[test]
fn rejects_unusable_constants() {
    let mut cfg = EngineConfig::default();
    cfg.timing.speed_px_per_sec = 0.0;
    assert!(matches!(cfg.validate(), Err(SnakeError::Validation(_))));

    let mut cfg = EngineConfig::default();
    cfg.body.length = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = EngineConfig::default();
    cfg.timing.finish_ceiling = 1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = EngineConfig::default();
    cfg.layout.cell_gap = -1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = EngineConfig::default();
    cfg.body.min_opacity = 1.5;
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = EngineConfig::from_reader("{ nope".as_bytes()).unwrap_err();
    assert!(matches!(err, SnakeError::Serde(_)));
}

#[test]
fn theme_clamps_levels() {
    assert_eq!(Theme::Dark.level_color(9), Theme::Dark.level_color(4));
    assert_ne!(Theme::Dark.level_color(0), Theme::Light.level_color(0));
}
