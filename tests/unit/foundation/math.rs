use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn streams_diverge() {
    let mut a = Rng64::stream(7, 0);
    let mut b = Rng64::stream(7, 1);
    assert_ne!(a.next_u64(), b.next_u64());
}

#[test]
fn unit_samples_are_half_open() {
    let mut rng = Rng64::new(42);
    for _ in 0..1000 {
        let v = rng.next_f64_01();
        assert!((0.0..1.0).contains(&v));
        let c = rng.next_centered();
        assert!((-0.5..0.5).contains(&c));
    }
}

#[test]
fn clamp01_handles_nan_and_range() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(-2.0), 0.0);
    assert_eq!(clamp01(0.25), 0.25);
    assert_eq!(clamp01(f64::INFINITY), 1.0);
    assert_eq!(finite_or(f64::NAN, 3.0), 3.0);
    assert_eq!(finite_or(2.0, 3.0), 2.0);
}
