use rayon::prelude::*;

use crate::foundation::core::{DVec3, Rgb};
use crate::foundation::error::ScrollscapeResult;
use crate::foundation::math::{DISTANCE_EPSILON, Rng64};
use crate::particles::buffers::ParticleBuffers;
use crate::particles::config::ParticleConfig;
use crate::particles::particle::Particle;

/// Fixed-size particle pool driven by wind, gravity and wall bounces.
///
/// One [`ParticleField::step`] per rendered frame; the renderer reads [`ParticleField::buffers`]
/// afterwards. No method fails once the field is built.
#[derive(Clone, Debug)]
pub struct ParticleField {
    cfg: ParticleConfig,
    particles: Vec<Particle>,
    tint: Rgb,
    elapsed: f64,
    respawns: u64,
    buffers: ParticleBuffers,
}

/// Counters reported by [`ParticleField::stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct FieldStats {
    /// Pool size.
    pub count: usize,
    /// Simulated seconds.
    pub elapsed: f64,
    /// Respawns since the field was built.
    pub respawns: u64,
}

impl ParticleField {
    /// Build a field; every particle is seeded from `cfg.seed` and its index.
    #[tracing::instrument(skip(cfg), fields(count = cfg.count))]
    pub fn new(cfg: &ParticleConfig) -> ScrollscapeResult<Self> {
        let cfg = cfg.validated()?;
        let particles = (0..cfg.count)
            .map(|i| Particle::spawn(&cfg, Rng64::stream(cfg.seed, i as u64)))
            .collect();
        let mut field = Self {
            tint: cfg.color,
            buffers: ParticleBuffers::with_count(cfg.count, cfg.opacity),
            cfg,
            particles,
            elapsed: 0.0,
            respawns: 0,
        };
        field.refresh();
        Ok(field)
    }

    /// Validated configuration in use.
    pub fn config(&self) -> &ParticleConfig {
        &self.cfg
    }

    /// Current particle states.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access for hosts that seed or edit particle state directly.
    ///
    /// Changes show up in [`ParticleField::buffers`] after the next `step`.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Attributes written by the last `step` (or construction).
    pub fn buffers(&self) -> &ParticleBuffers {
        &self.buffers
    }

    /// Shared tint.
    pub fn tint(&self) -> Rgb {
        self.tint
    }

    /// Seconds simulated so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Counters for diagnostics.
    pub fn stats(&self) -> FieldStats {
        FieldStats {
            count: self.particles.len(),
            elapsed: self.elapsed,
            respawns: self.respawns,
        }
    }

    /// Wind at simulated time `t`: two out-of-phase signals on the horizontal axes.
    pub fn wind_at(&self, t: f64) -> DVec3 {
        let w = self.cfg.wind_force;
        DVec3::new((t * 0.5).sin() * w, 0.0, (t * 0.3).cos() * w)
    }

    /// Advance every particle by `dt` seconds.
    ///
    /// Zero, negative or non-finite `dt` skips integration but still refreshes the buffers.
    pub fn step(&mut self, dt: f64) {
        if !(dt > 0.0 && dt.is_finite()) {
            self.refresh();
            return;
        }

        self.elapsed += dt;
        let force = self.wind_at(self.elapsed) + DVec3::new(0.0, self.cfg.gravity, 0.0);
        let cfg = &self.cfg;

        let parallel =
            cfg.threading.parallel && self.particles.len() >= cfg.threading.min_parallel_count;
        let respawned: u64 = if parallel {
            self.particles
                .par_iter_mut()
                .map(|p| u64::from(p.integrate(force, dt, cfg)))
                .sum()
        } else {
            self.particles
                .iter_mut()
                .map(|p| u64::from(p.integrate(force, dt, cfg)))
                .sum()
        };
        self.respawns += respawned;
        if respawned > 0 {
            tracing::trace!(respawned, elapsed = self.elapsed, "particles recycled");
        }

        self.refresh();
    }

    /// Push particles within the impulse radius of `origin` away from it.
    ///
    /// The velocity change is `strength / (distance + 1)`; a particle sitting exactly on
    /// `origin` is pushed along `+Y`.
    pub fn apply_impulse(&mut self, origin: DVec3, strength: f64) {
        if !origin.is_finite() || !strength.is_finite() {
            return;
        }
        let radius = self.cfg.impulse_radius;
        for p in &mut self.particles {
            let offset = p.position - origin;
            let distance = offset.length();
            if distance >= radius {
                continue;
            }
            let dir = if distance > DISTANCE_EPSILON {
                offset / distance
            } else {
                DVec3::Y
            };
            p.velocity += dir * (strength / (distance.max(DISTANCE_EPSILON) + 1.0));
        }
    }

    /// Add a uniform horizontal gust to every particle.
    pub fn push_wind(&mut self, wind_x: f64, wind_z: f64) {
        if !wind_x.is_finite() || !wind_z.is_finite() {
            return;
        }
        for p in &mut self.particles {
            p.velocity.x += wind_x;
            p.velocity.z += wind_z;
        }
    }

    /// Change the shared tint; colors are rewritten immediately.
    pub fn set_tint(&mut self, color: Rgb) {
        self.tint = color;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.buffers.write(&self.particles, self.tint);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/field.rs"]
mod tests;
