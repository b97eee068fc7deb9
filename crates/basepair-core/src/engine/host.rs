use super::error::HostError;
use crate::core::forcefield::bond::{BondSite, PairBondModel};
use crate::core::models::color::Color;
use crate::core::models::ids::{BodyId, ConstraintId};
use crate::core::models::particle_type::ParticleType;
use nalgebra::{Point2, Vector2};

/// Geometry of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    /// Half extents of the axis-aligned bounding box.
    pub fn half_extents(&self) -> Vector2<f64> {
        match *self {
            Shape::Circle { radius } => Vector2::new(radius, radius),
            Shape::Rectangle { width, height } => Vector2::new(width / 2.0, height / 2.0),
        }
    }
}

/// Fill and outline of a body as drawn by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub fill: Option<Color>,
    pub stroke: Color,
    pub line_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: Color::BLACK,
            line_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodyOptions {
    pub is_static: bool,
    /// Particle type mirrored onto the body so attractors can read it.
    pub tag: Option<ParticleType>,
    pub render: RenderStyle,
}

/// A per-pair force callback evaluated during the host's force accumulation.
///
/// For an ordered pair `(a, b)` the returned vector is applied to `b`.
pub trait Attractor {
    fn attract(&self, a: &BondSite, b: &BondSite) -> Vector2<f64>;
}

impl Attractor for PairBondModel {
    #[inline]
    fn attract(&self, a: &BondSite, b: &BondSite) -> Vector2<f64> {
        self.force(a, b)
    }
}

impl<F> Attractor for F
where
    F: Fn(&BondSite, &BondSite) -> Vector2<f64>,
{
    fn attract(&self, a: &BondSite, b: &BondSite) -> Vector2<f64> {
        self(a, b)
    }
}

/// The surface of a 2D rigid-body engine that chain and selection logic rely on.
///
/// Implementors own body integration, constraint solving, rendering and the run
/// loop. Everything here is a synchronous call on the thread that drives the
/// simulation.
pub trait HostEngine {
    fn create_body(&mut self, position: Point2<f64>, shape: Shape, options: BodyOptions) -> BodyId;

    fn create_constraint(
        &mut self,
        body_a: BodyId,
        body_b: BodyId,
        length: f64,
        stiffness: f64,
    ) -> Result<ConstraintId, HostError>;

    fn add_body_to_world(&mut self, body: BodyId) -> Result<(), HostError>;

    fn add_constraint_to_world(&mut self, constraint: ConstraintId) -> Result<(), HostError>;

    fn register_attractor(&mut self, attractor: Box<dyn Attractor>);

    /// Whether `point` lies inside the body's hit region. Unknown bodies never contain a point.
    fn point_in_bounds(&self, body: BodyId, point: &Point2<f64>) -> bool;

    fn position(&self, body: BodyId) -> Option<Point2<f64>>;

    fn set_body_tag(&mut self, body: BodyId, tag: Option<ParticleType>) -> Result<(), HostError>;

    fn set_fill(&mut self, body: BodyId, color: Color) -> Result<(), HostError>;

    fn set_outline(&mut self, body: BodyId, color: Color, line_width: f64) -> Result<(), HostError>;

    fn set_gravity(&mut self, gravity: Vector2<f64>);

    fn set_mass(&mut self, body: BodyId, mass: f64) -> Result<(), HostError>;

    fn set_air_friction(&mut self, body: BodyId, air_friction: f64) -> Result<(), HostError>;

    fn set_time_scale(&mut self, body: BodyId, time_scale: f64) -> Result<(), HostError>;

    fn apply_force(&mut self, body: BodyId, force: Vector2<f64>) -> Result<(), HostError>;
}
