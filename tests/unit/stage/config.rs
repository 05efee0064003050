use super::*;
use crate::foundation::core::Rgb;

const LANDING: &str = include_str!("../../data/landing.json");

#[test]
fn landing_document_parses() {
    let cfg = StageConfig::from_json_str(LANDING).unwrap();
    let particles = cfg.particle_config().unwrap();
    assert_eq!(particles.count, 800);
    assert_eq!(particles.color, Rgb::from_u32(0x4ade80));
    assert_eq!(particles.bounds.x, AxisRange::new(-15.0, 15.0));
    assert_eq!(particles.bounce, 0.3);
    assert!(!particles.threading.parallel);

    assert_eq!(cfg.morph.as_ref().map(|m| m.keys().len()), Some(4));
    assert_eq!(cfg.reveals.len(), 2);
    assert_eq!(cfg.reveals[0].stagger, 0.1);
    assert_eq!(cfg.reveals[1].on_leave_back, LeaveAction::Reset);
    assert_eq!(cfg.parallax.as_ref().map(|p| p.layers.len()), Some(3));
}

#[test]
fn empty_document_uses_defaults() {
    let cfg = StageConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, StageConfig::default());
    assert_eq!(cfg.particle_config().unwrap(), ParticleConfig::default());
}

#[test]
fn unknown_fields_are_rejected() {
    let err = StageConfig::from_json_str(r#"{ "particles": { "cout": 10 } }"#).unwrap_err();
    assert!(matches!(err, ScrollscapeError::Serde(_)), "{err}");
}

#[test]
fn invalid_particle_bounds_are_rejected() {
    let doc = r#"{ "particles": { "bounds": { "x": [1, -1], "y": [-1, 1], "z": [-1, 1] } } }"#;
    assert!(StageConfig::from_json_str(doc).is_err());
}

#[test]
fn bad_morph_track_fails_to_parse() {
    let doc = r#"{ "morph": [ { "progress": 0.0, "path": "M0,0" } ] }"#;
    assert!(StageConfig::from_json_str(doc).is_err());
}

#[test]
fn negative_stagger_names_the_sequence() {
    let doc = r#"{ "reveals": [ { "elements": [], "stagger": -1 } ] }"#;
    let err = StageConfig::from_json_str(doc).unwrap_err();
    assert!(err.to_string().contains("reveals[0]"), "{err}");
}

#[test]
fn element_config_layers_preset_then_patches() {
    let el: RevealElementConfig = serde_json::from_str(
        r#"{ "target": "card", "preset": "fadeLeft", "from": { "opacity": 0.5 }, "delay": 0.3 }"#,
    )
    .unwrap();
    let entry = el.to_entry();
    assert_eq!(entry.from.x, 50.0);
    assert_eq!(entry.from.opacity, 0.5);
    assert_eq!(entry.start_offset, 0.3);
    assert_eq!(entry.duration, RevealEntry::DEFAULT_DURATION);
    assert_eq!(entry.ease, Ease::OutCubic);
}

#[test]
fn sequence_build_applies_stagger_and_delay() {
    let cfg = StageConfig::from_json_str(LANDING).unwrap();
    let seq = cfg.reveals[0].build();
    let offsets: Vec<f64> = seq.entries().iter().map(|e| e.start_offset).collect();
    assert_eq!(offsets, vec![0.0, 0.1, 0.4]);

    let features = cfg.reveals[1].build();
    assert_eq!(features.entries()[2].ease, Ease::OutQuart);
    assert_eq!(features.total_duration(), 0.3 + 1.2);
}

#[test]
fn parallax_rejects_non_finite_scrub() {
    let cfg = ParallaxConfig {
        layers: Vec::new(),
        scrub: Some(f64::INFINITY),
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn from_path_reports_missing_file() {
    let err = StageConfig::from_path("tests/data/does-not-exist.json").unwrap_err();
    assert!(matches!(err, ScrollscapeError::Config(_)), "{err}");
}

#[test]
fn element_ease_accepts_back_out_with_overshoot() {
    let el: RevealElementConfig =
        serde_json::from_str(r#"{ "target": "badge", "ease": "back.out(1.7)" }"#).unwrap();
    assert_eq!(el.to_entry().ease, Ease::OutBack(1.7));
}
