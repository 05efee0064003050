use super::*;
use crate::foundation::core::DVec3;

#[test]
fn write_applies_quadratic_fade() {
    let mut fresh = Particle::at(DVec3::new(1.0, 2.0, 3.0), DVec3::ZERO, 1.0);
    fresh.size = 2.0;
    let mut old = fresh.clone();
    old.age = 0.5;

    let mut buf = ParticleBuffers::with_count(2, 0.8);
    buf.write(&[fresh, old], Rgb::new(1.0, 0.5, 0.0));

    assert_eq!(buf.len(), 2);
    assert_eq!(buf.position(0), [1.0, 2.0, 3.0]);
    assert_eq!(buf.color(0), [1.0, 0.5, 0.0]);
    assert_eq!(buf.sizes[0], 2.0);

    assert_eq!(buf.color(1), [0.75, 0.375, 0.0]);
    assert_eq!(buf.sizes[1], 1.5);
    assert!((buf.opacity - 0.8).abs() < 1e-6);
}

#[test]
fn empty_pool_has_empty_buffers() {
    let buf = ParticleBuffers::with_count(0, 1.0);
    assert!(buf.is_empty());
    assert!(buf.positions.is_empty());
}
