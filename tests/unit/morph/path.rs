use super::*;

fn shape(s: &str) -> ShapeDescriptor {
    ShapeDescriptor::parse(s).unwrap()
}

#[test]
fn parses_and_formats_canonically() {
    let s = shape("M0,50 Q25,0 50,50 T100,50");
    assert_eq!(s.commands().len(), 3);
    assert_eq!(s.commands()[1].kind, CommandKind::QuadTo);
    assert_eq!(s.to_string(), "M0,50 Q25,0,50,50 T100,50");
}

#[test]
fn accepts_compact_number_syntax() {
    let s = shape("m1-2l.5.25 1e1,-1.5E-1z");
    assert_eq!(s.to_string(), "m1,-2 l0.5,0.25,10,-0.15 z");
    assert!(s.commands()[0].relative);
    assert_eq!(s.commands()[2].kind, CommandKind::Close);
}

#[test]
fn rejects_malformed_input() {
    assert!(ShapeDescriptor::parse("10,10").is_err());
    assert!(ShapeDescriptor::parse("M0").is_err());
    assert!(ShapeDescriptor::parse("M0,0 Z 1").is_err());
    assert!(ShapeDescriptor::parse("M0,0 X1,1").is_err());
    assert!(ShapeDescriptor::parse("M1e,2").is_err());
    let err = ShapeDescriptor::parse("M0,0 L1").unwrap_err();
    assert!(err.to_string().contains("multiple of 2"));
}

#[test]
fn rejects_overflowing_numbers() {
    let err = ShapeDescriptor::parse("M1e400,0").unwrap_err();
    assert!(
        matches!(err, ScrollscapeError::Path { offset: 1, .. }),
        "{err}"
    );
    assert!(ShapeDescriptor::parse("M0,-1e309").is_err());
}

#[test]
fn compatible_shapes_blend_per_value() {
    let a = shape("M0,0");
    let b = shape("M10,10");
    assert_eq!(ShapeDescriptor::lerp(&a, &b, 0.5).to_string(), "M5,5");
    assert_eq!(ShapeDescriptor::lerp(&a, &b, 0.0), a);
    assert_eq!(ShapeDescriptor::lerp(&a, &b, 1.0), b);
}

#[test]
fn mismatched_shapes_switch_at_half() {
    let a = shape("M0,0 L10,0");
    let b = shape("M0,0 Q5,5 10,0");
    assert!(!a.is_compatible(&b));
    assert_eq!(ShapeDescriptor::lerp(&a, &b, 0.49), a);
    assert_eq!(ShapeDescriptor::lerp(&a, &b, 0.5), b);

    let rel = shape("m0,0 l10,0");
    assert!(!a.is_compatible(&rel));
}

#[test]
fn arc_flags_are_not_blended() {
    let a = shape("M0,0 A5,5 0 0 1 10,0");
    let b = shape("M0,0 A15,15 90 1 0 20,0");
    let mid = ShapeDescriptor::lerp(&a, &b, 0.25);
    assert_eq!(mid.to_string(), "M0,0 A7.5,7.5,22.5,0,1,12.5,0");
}

#[test]
fn converts_to_kurbo() {
    let path = shape("M0,0 L10,0 L10,10 Z").to_bez_path().unwrap();
    assert_eq!(path.elements().len(), 4);
}

#[test]
fn serde_uses_the_path_string() {
    let s: ShapeDescriptor = serde_json::from_str("\"M0,0 L1,1\"").unwrap();
    assert_eq!(serde_json::to_string(&s).unwrap(), "\"M0,0 L1,1\"");
    assert!(serde_json::from_str::<ShapeDescriptor>("\"nope\"").is_err());
}
