use crate::foundation::core::Rgb;
use crate::particles::particle::Particle;

/// Per-frame vertex attributes for a point-sprite renderer.
///
/// Layout matches interleaving-free GPU attribute arrays: `positions` and `colors` hold three
/// `f32` per particle, `sizes` one.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ParticleBuffers {
    /// `x, y, z` per particle.
    pub positions: Vec<f32>,
    /// Faded `r, g, b` per particle.
    pub colors: Vec<f32>,
    /// Faded point size per particle.
    pub sizes: Vec<f32>,
    /// Material opacity shared by every point.
    pub opacity: f32,
}

impl ParticleBuffers {
    pub(crate) fn with_count(count: usize, opacity: f64) -> Self {
        Self {
            positions: vec![0.0; count * 3],
            colors: vec![0.0; count * 3],
            sizes: vec![0.0; count],
            opacity: opacity as f32,
        }
    }

    /// Number of particles described.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Return `true` when there are no particles.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Position of particle `i`.
    pub fn position(&self, i: usize) -> [f32; 3] {
        let p = &self.positions[i * 3..i * 3 + 3];
        [p[0], p[1], p[2]]
    }

    /// Color of particle `i`.
    pub fn color(&self, i: usize) -> [f32; 3] {
        let c = &self.colors[i * 3..i * 3 + 3];
        [c[0], c[1], c[2]]
    }

    pub(crate) fn write(&mut self, particles: &[Particle], tint: Rgb) {
        let rows = self
            .positions
            .chunks_exact_mut(3)
            .zip(self.colors.chunks_exact_mut(3))
            .zip(self.sizes.iter_mut())
            .zip(particles);
        for (((pos, col), size), p) in rows {
            let fade = p.fade();
            pos.copy_from_slice(&p.position.as_vec3().to_array());
            col.copy_from_slice(&tint.scale(p.tint_scale * fade).to_f32_array());
            *size = (p.size * fade) as f32;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/buffers.rs"]
mod tests;
