use super::*;

#[test]
fn defaults_match_hidden_and_shown() {
    let e = RevealEntry::new("title");
    assert_eq!(e.target, TargetId::new("title"));
    assert_eq!(e.from, RevealState::HIDDEN);
    assert_eq!(e.to, RevealState::SHOWN);
    assert_eq!(e.duration, 0.8);
    assert_eq!(e.ease, Ease::OutCubic);
}

#[test]
fn presets_layer_over_defaults() {
    let e = RevealEntry::new("text").with_preset(RevealPreset::FadeLeft);
    assert_eq!(e.from.x, 50.0);
    assert_eq!(e.from.y, 30.0);
    assert_eq!(e.from.opacity, 0.0);
    assert_eq!(e.to, RevealState::SHOWN);

    let e = RevealEntry::new("badge").with_preset(RevealPreset::RotateIn);
    assert_eq!(e.from.rotation, 180.0);
    assert_eq!(e.from.scale, 0.5);
    assert_eq!(e.ease, Ease::OutBack(1.7));
}

#[test]
fn offsets_are_sanitized() {
    let e = RevealEntry::new("a").at(-1.0).lasting(f64::NAN);
    assert_eq!(e.start_offset, 0.0);
    assert_eq!(e.duration, 0.0);

    let e = RevealEntry::new("a").at(0.5).lasting(1.0);
    assert_eq!(e.end_offset(), 1.5);
    let t = e.tween();
    assert_eq!(t.sample(0.25), RevealState::HIDDEN);
    assert_eq!(t.sample(1.5), RevealState::SHOWN);
}

#[test]
fn preset_names_are_camel_case() {
    let p: RevealPreset = serde_json::from_str("\"fadeUp\"").unwrap();
    assert_eq!(p, RevealPreset::FadeUp);
    let p: RevealPreset = serde_json::from_str("\"scaleIn\"").unwrap();
    assert_eq!(p, RevealPreset::ScaleIn);
}

#[test]
fn slide_up_rises_with_quartic_ease() {
    let e = RevealEntry::new("panel").with_preset(RevealPreset::SlideUp);
    assert_eq!(e.from.y, 100.0);
    assert_eq!(e.from.opacity, 0.0);
    assert_eq!(e.to, RevealState::SHOWN);
    assert_eq!(e.ease, Ease::OutQuart);
    let preset: RevealPreset = serde_json::from_str("\"slideUp\"").unwrap();
    assert_eq!(preset, RevealPreset::SlideUp);
}
