use super::*;
use crate::foundation::core::{AxisRange, Bounds3};

fn still_config() -> ParticleConfig {
    ParticleConfig {
        wind_force: 0.0,
        gravity: 0.0,
        bounds: Bounds3::symmetric(1.0),
        ..ParticleConfig::default()
    }
}

#[test]
fn spawn_respects_config_ranges() {
    let cfg = ParticleConfig::default();
    for i in 0..128 {
        let p = Particle::spawn(&cfg, Rng64::stream(3, i));
        assert!(cfg.bounds.contains(p.position));
        assert!((0.0..1.0).contains(&p.age));
        assert!(p.lifetime >= 1.0 && p.lifetime < 3.0);
        assert!(p.velocity.abs().max_element() <= 0.5);
        assert!(p.size >= 0.75 && p.size <= 1.25);
    }
}

#[test]
fn wall_hit_reflects_and_clamps() {
    let cfg = ParticleConfig {
        bounce: 0.5,
        ..still_config()
    };
    let mut p = Particle::at(DVec3::new(0.9, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0), 10.0);
    let respawned = p.integrate(DVec3::ZERO, 0.2, &cfg);
    assert!(!respawned);
    assert!((p.position.x - 1.0).abs() < 1e-12);
    assert!((p.velocity.x + 0.5).abs() < 1e-12);
}

#[test]
fn expiry_respawns_on_top_plane() {
    let cfg = ParticleConfig {
        bounds: Bounds3 {
            x: AxisRange::new(-2.0, 2.0),
            y: AxisRange::new(-1.0, 4.0),
            z: AxisRange::new(-2.0, 2.0),
        },
        ..still_config()
    };
    let mut p = Particle::at(DVec3::ZERO, DVec3::ZERO, 1.0);
    p.age = 0.95;
    assert!(p.integrate(DVec3::ZERO, 0.1, &cfg));
    assert_eq!(p.age, 0.0);
    assert!(p.lifetime > 0.0);
    assert_eq!(p.position.y, 4.0);
    assert_eq!(p.fade(), 1.0);
}

#[test]
fn non_finite_state_is_recycled() {
    let cfg = still_config();
    let mut p = Particle::at(DVec3::ZERO, DVec3::new(f64::NAN, 0.0, 0.0), 10.0);
    assert!(p.integrate(DVec3::ZERO, 0.1, &cfg));
    assert!(p.position.is_finite());
    assert!(cfg.bounds.contains(p.position));
}

#[test]
fn hand_placed_particles_recycle_independently() {
    let cfg = ParticleConfig {
        bounds: Bounds3::symmetric(5.0),
        ..still_config()
    };
    let mut a = Particle::at(DVec3::new(1.0, 0.0, 0.0), DVec3::ZERO, 1.0);
    let mut b = Particle::at(DVec3::new(-1.0, 0.0, 0.0), DVec3::ZERO, 1.0);
    a.respawn(&cfg);
    b.respawn(&cfg);
    assert_ne!(a.position, b.position);

    let mut c = Particle::at(DVec3::ZERO, DVec3::ZERO, 1.0).with_stream(9, 0);
    let mut d = Particle::at(DVec3::ZERO, DVec3::ZERO, 1.0).with_stream(9, 1);
    c.respawn(&cfg);
    d.respawn(&cfg);
    assert_ne!(c.position, d.position);
}
