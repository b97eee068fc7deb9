use super::color::Color;
use super::ids::BodyId;
use super::particle_type::ParticleType;

/// A typed particle backed by a body in the host engine.
///
/// The host owns the body's position; the particle owns its type, display
/// color and selection flag. Only the engine's chain, selection and recolor
/// operations mutate these fields, so the host-side tag and fill always mirror
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub body: BodyId,
    pub(crate) particle_type: ParticleType,
    pub(crate) color: Color,
    pub(crate) selected: bool,
}

impl Particle {
    pub(crate) fn new(body: BodyId, particle_type: ParticleType, color: Color) -> Self {
        Self {
            body,
            particle_type,
            color,
            selected: false,
        }
    }

    pub fn particle_type(&self) -> ParticleType {
        self.particle_type
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}
