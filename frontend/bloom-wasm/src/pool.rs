use crate::draw::DrawList;
use crate::particle::Particle;

/// Live particles of one variant, in spawn order.
#[derive(Debug, Default)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn spawn(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Updates every particle once, then drops the faded ones.
    /// Returns how many were removed.
    pub fn tick(&mut self) -> usize {
        for particle in self.particles.iter_mut() {
            particle.update();
        }
        let before = self.particles.len();
        self.particles.retain(|particle| !particle.is_faded());
        before - self.particles.len()
    }

    pub fn render(&self, out: &mut DrawList) {
        for particle in &self.particles {
            particle.render(out);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }
}
