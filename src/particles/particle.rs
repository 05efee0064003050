use crate::foundation::core::DVec3;
use crate::foundation::math::Rng64;
use crate::particles::config::ParticleConfig;

/// One pooled particle.
///
/// Particles are never destroyed; when `age` passes `1` they are respawned in place.
#[derive(Clone, Debug)]
pub struct Particle {
    /// Position in world units, kept inside the field bounds.
    pub position: DVec3,
    /// Velocity in world units per second.
    pub velocity: DVec3,
    /// Fraction of the lifetime elapsed, in `[0, 1]`.
    pub age: f64,
    /// Lifetime in seconds (`> 0`).
    pub lifetime: f64,
    /// Unfaded point size.
    pub size: f64,
    /// Brightness multiplier applied to the shared tint.
    pub tint_scale: f64,
    rng: Rng64,
}

impl Particle {
    /// Particle with an explicit kinematic state, zero age, and unit size and tint.
    ///
    /// The respawn stream is derived from the given state, so particles placed differently
    /// recycle differently. Use [`Particle::with_stream`] to pick the stream explicitly.
    pub fn at(position: DVec3, velocity: DVec3, lifetime: f64) -> Self {
        let seed = [position, velocity]
            .iter()
            .flat_map(|v| v.to_array())
            .chain([lifetime])
            .fold(0u64, |acc, x| Rng64::new(acc ^ x.to_bits()).next_u64());
        Self {
            position,
            velocity,
            age: 0.0,
            lifetime: lifetime.max(f64::MIN_POSITIVE),
            size: 1.0,
            tint_scale: 1.0,
            rng: Rng64::new(seed),
        }
    }

    /// Replace the respawn stream with stream `index` of `seed`.
    pub fn with_stream(mut self, seed: u64, index: u64) -> Self {
        self.rng = Rng64::stream(seed, index);
        self
    }

    /// Initial spawn: anywhere in the box, with a random age so the pool does not pulse.
    pub(crate) fn spawn(cfg: &ParticleConfig, mut rng: Rng64) -> Self {
        let position = cfg.bounds.sample(&mut rng);
        let velocity = random_velocity(cfg, &mut rng);
        let age = rng.next_f64_01();
        let lifetime = cfg.lifetime.sample(&mut rng);
        let size = cfg.size * (1.0 + rng.next_centered() * cfg.size_variation);
        let tint_scale = 1.0 + rng.next_centered() * cfg.color_variation;
        Self {
            position,
            velocity,
            age,
            lifetime,
            size,
            tint_scale,
            rng,
        }
    }

    /// Recycle in place on the top plane of the box.
    pub(crate) fn respawn(&mut self, cfg: &ParticleConfig) {
        self.position = cfg.bounds.sample_top(&mut self.rng);
        self.velocity = random_velocity(cfg, &mut self.rng);
        self.lifetime = cfg.lifetime.sample(&mut self.rng);
        self.age = 0.0;
    }

    /// Advance one frame under `force`. Returns `true` when the particle was respawned.
    pub(crate) fn integrate(&mut self, force: DVec3, dt: f64, cfg: &ParticleConfig) -> bool {
        self.velocity += force * dt;
        self.position += self.velocity * dt;

        let b = &cfg.bounds;
        let axes = [(0, b.x), (1, b.y), (2, b.z)];
        for (i, range) in axes {
            let p = self.position[i];
            if p < range.min || p > range.max {
                self.velocity[i] *= -cfg.bounce;
                self.position[i] = range.clamp(p);
            }
        }

        self.age += dt / self.lifetime;
        if self.age > 1.0 || !self.position.is_finite() || !self.velocity.is_finite() {
            self.respawn(cfg);
            return true;
        }
        false
    }

    /// Quadratic fade, `1` at birth and `0` at end of life.
    pub fn fade(&self) -> f64 {
        1.0 - self.age * self.age
    }
}

fn random_velocity(cfg: &ParticleConfig, rng: &mut Rng64) -> DVec3 {
    let x = rng.next_centered() * cfg.speed;
    let y = rng.next_centered() * cfg.speed;
    let z = rng.next_centered() * cfg.speed;
    DVec3::new(x, y, z)
}

#[cfg(test)]
#[path = "../../tests/unit/particles/particle.rs"]
mod tests;
