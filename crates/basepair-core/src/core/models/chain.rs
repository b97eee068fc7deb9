use super::ids::{BodyId, ConstraintId};
use super::particle::Particle;

/// A fixed-length distance constraint between two neighboring particles.
///
/// `body_a` is the later particle in chain order and `body_b` its predecessor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainLink {
    pub body_a: BodyId,
    pub body_b: BodyId,
    pub constraint: ConstraintId,
    pub length: f64,
    pub stiffness: f64,
}

/// An ordered sequence of particles joined by neighbor constraints.
///
/// Link `i` always joins particle `i + 1` to particle `i`. Links are created
/// together with the chain and live as long as it does.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chain {
    pub(crate) particles: Vec<Particle>,
    pub(crate) links: Vec<ChainLink>,
}

impl Chain {
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub(crate) fn particle_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    pub fn links(&self) -> &[ChainLink] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn index_of(&self, body: BodyId) -> Option<usize> {
        self.particles.iter().position(|p| p.body == body)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.particles.iter().position(|p| p.selected)
    }

    /// The current type symbols in chain order, e.g. `"AUGC"`.
    pub fn sequence(&self) -> String {
        self.particles
            .iter()
            .map(|p| p.particle_type.symbol())
            .collect()
    }
}
