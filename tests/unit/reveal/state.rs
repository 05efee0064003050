use super::*;

#[test]
fn patch_overrides_only_set_fields() {
    let patch = RevealPatch {
        x: Some(50.0),
        opacity: Some(0.0),
        ..RevealPatch::default()
    };
    let s = patch.over(RevealState::HIDDEN);
    assert_eq!(s.x, 50.0);
    assert_eq!(s.y, 30.0);
    assert_eq!(s.scale, 0.9);
    assert!(!s.is_visible());
}

#[test]
fn merged_prefers_the_top_patch() {
    let preset = RevealPatch {
        y: Some(50.0),
        opacity: Some(0.0),
        ..RevealPatch::default()
    };
    let user = RevealPatch {
        y: Some(10.0),
        ..RevealPatch::default()
    };
    let m = preset.merged(&user);
    assert_eq!(m.y, Some(10.0));
    assert_eq!(m.opacity, Some(0.0));
}

#[test]
fn lerp_blends_every_channel() {
    let mid = RevealState::lerp(&RevealState::HIDDEN, &RevealState::SHOWN, 0.5);
    assert_eq!(mid.opacity, 0.5);
    assert_eq!(mid.y, 15.0);
    assert!((mid.scale - 0.95).abs() < 1e-12);
}

#[test]
fn css_transform_formats_units() {
    assert_eq!(
        RevealState::HIDDEN.css_transform(),
        "translate(0px, 30px) scale(0.9) rotate(0deg)"
    );
}

#[test]
fn patch_rejects_unknown_fields() {
    assert!(serde_json::from_str::<RevealPatch>(r#"{ "autoAlpha": 0 }"#).is_err());
    let p: RevealPatch = serde_json::from_str(r#"{ "y": -50 }"#).unwrap();
    assert_eq!(p.y, Some(-50.0));
}
