use super::error::HostError;
use super::host::{Attractor, BodyOptions, HostEngine, RenderStyle, Shape};
use crate::core::forcefield::bond::BondSite;
use crate::core::models::color::Color;
use crate::core::models::ids::{BodyId, ConstraintId};
use crate::core::models::particle_type::ParticleType;
use itertools::Itertools;
use nalgebra::{Point2, Vector2};
use slotmap::{SecondaryMap, SlotMap};
use std::fmt;
use tracing::trace;

const DEFAULT_GRAVITY_Y: f64 = 1.0;
const DEFAULT_AIR_FRICTION: f64 = 0.01;

/// A body stored in a [`MemoryWorld`].
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Point2<f64>,
    pub shape: Shape,
    pub is_static: bool,
    pub tag: Option<ParticleType>,
    pub render: RenderStyle,
    pub mass: f64,
    pub air_friction: f64,
    pub time_scale: f64,
    /// Sum of forces applied through [`HostEngine::apply_force`] since the last clear.
    pub applied_force: Vector2<f64>,
    pub in_world: bool,
}

impl Body {
    fn site(&self) -> BondSite {
        BondSite {
            particle_type: self.tag,
            position: self.position,
        }
    }

    /// Axis-aligned bounds test, edges inclusive.
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        let half = self.shape.half_extents();
        let offset = point - self.position;
        offset.x.abs() <= half.x && offset.y.abs() <= half.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub body_a: BodyId,
    pub body_b: BodyId,
    pub length: f64,
    pub stiffness: f64,
    pub in_world: bool,
}

/// An in-memory [`HostEngine`] that stores bodies and constraints and runs the
/// force-accumulation phase, but never integrates motion.
///
/// Positions change only through [`MemoryWorld::set_position`], which makes it a
/// convenient stand-in for a real engine in headless runs and tests.
pub struct MemoryWorld {
    bodies: SlotMap<BodyId, Body>,
    constraints: SlotMap<ConstraintId, Constraint>,
    attractors: Vec<Box<dyn Attractor>>,
    gravity: Vector2<f64>,
}

impl fmt::Debug for MemoryWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryWorld")
            .field("bodies", &self.bodies.len())
            .field("constraints", &self.constraints.len())
            .field("attractors", &self.attractors.len())
            .field("gravity", &self.gravity)
            .finish()
    }
}

impl Default for MemoryWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryWorld {
    pub fn new() -> Self {
        Self {
            bodies: SlotMap::with_key(),
            constraints: SlotMap::with_key(),
            attractors: Vec::new(),
            gravity: Vector2::new(0.0, DEFAULT_GRAVITY_Y),
        }
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn constraint(&self, id: ConstraintId) -> Option<&Constraint> {
        self.constraints.get(id)
    }

    pub fn bodies_in_world(&self) -> impl Iterator<Item = (BodyId, &Body)> + Clone {
        self.bodies.iter().filter(|(_, body)| body.in_world)
    }

    pub fn constraints_in_world(&self) -> impl Iterator<Item = (ConstraintId, &Constraint)> {
        self.constraints.iter().filter(|(_, c)| c.in_world)
    }

    pub fn gravity(&self) -> Vector2<f64> {
        self.gravity
    }

    pub fn attractor_count(&self) -> usize {
        self.attractors.len()
    }

    pub fn set_position(&mut self, id: BodyId, position: Point2<f64>) -> Result<(), HostError> {
        self.body_mut(id)?.position = position;
        Ok(())
    }

    pub fn clear_applied_forces(&mut self) {
        for body in self.bodies.values_mut() {
            body.applied_force = Vector2::zeros();
        }
    }

    /// Evaluates every registered attractor over every ordered pair of distinct
    /// bodies in the world and returns the net attractor force on each.
    ///
    /// The force of pair `(a, b)` is credited to `b`. Static bodies act as sources
    /// but never receive force.
    pub fn accumulate_forces(&self) -> SecondaryMap<BodyId, Vector2<f64>> {
        let mut net: SecondaryMap<BodyId, Vector2<f64>> = SecondaryMap::new();
        for (id, body) in self.bodies_in_world() {
            if !body.is_static {
                net.insert(id, Vector2::zeros());
            }
        }

        for ((_, a), (b_id, b)) in self.bodies_in_world().tuple_combinations().flat_map(
            |(first, second)| [(first, second), (second, first)],
        ) {
            let Some(total) = net.get_mut(b_id) else {
                continue;
            };
            let (site_a, site_b) = (a.site(), b.site());
            for attractor in &self.attractors {
                *total += attractor.attract(&site_a, &site_b);
            }
        }

        trace!(bodies = net.len(), "Accumulated attractor forces.");
        net
    }

    fn body_mut(&mut self, id: BodyId) -> Result<&mut Body, HostError> {
        self.bodies.get_mut(id).ok_or(HostError::BodyNotFound(id))
    }
}

impl HostEngine for MemoryWorld {
    fn create_body(&mut self, position: Point2<f64>, shape: Shape, options: BodyOptions) -> BodyId {
        self.bodies.insert(Body {
            position,
            shape,
            is_static: options.is_static,
            tag: options.tag,
            render: options.render,
            mass: 1.0,
            air_friction: DEFAULT_AIR_FRICTION,
            time_scale: 1.0,
            applied_force: Vector2::zeros(),
            in_world: false,
        })
    }

    fn create_constraint(
        &mut self,
        body_a: BodyId,
        body_b: BodyId,
        length: f64,
        stiffness: f64,
    ) -> Result<ConstraintId, HostError> {
        for id in [body_a, body_b] {
            if !self.bodies.contains_key(id) {
                return Err(HostError::BodyNotFound(id));
            }
        }
        Ok(self.constraints.insert(Constraint {
            body_a,
            body_b,
            length,
            stiffness,
            in_world: false,
        }))
    }

    fn add_body_to_world(&mut self, body: BodyId) -> Result<(), HostError> {
        self.body_mut(body)?.in_world = true;
        Ok(())
    }

    fn add_constraint_to_world(&mut self, constraint: ConstraintId) -> Result<(), HostError> {
        self.constraints
            .get_mut(constraint)
            .ok_or(HostError::ConstraintNotFound(constraint))?
            .in_world = true;
        Ok(())
    }

    fn register_attractor(&mut self, attractor: Box<dyn Attractor>) {
        self.attractors.push(attractor);
    }

    fn point_in_bounds(&self, body: BodyId, point: &Point2<f64>) -> bool {
        self.bodies.get(body).is_some_and(|b| b.contains(point))
    }

    fn position(&self, body: BodyId) -> Option<Point2<f64>> {
        self.bodies.get(body).map(|b| b.position)
    }

    fn set_body_tag(&mut self, body: BodyId, tag: Option<ParticleType>) -> Result<(), HostError> {
        self.body_mut(body)?.tag = tag;
        Ok(())
    }

    fn set_fill(&mut self, body: BodyId, color: Color) -> Result<(), HostError> {
        self.body_mut(body)?.render.fill = Some(color);
        Ok(())
    }

    fn set_outline(
        &mut self,
        body: BodyId,
        color: Color,
        line_width: f64,
    ) -> Result<(), HostError> {
        let render = &mut self.body_mut(body)?.render;
        render.stroke = color;
        render.line_width = line_width;
        Ok(())
    }

    fn set_gravity(&mut self, gravity: Vector2<f64>) {
        self.gravity = gravity;
    }

    fn set_mass(&mut self, body: BodyId, mass: f64) -> Result<(), HostError> {
        self.body_mut(body)?.mass = mass;
        Ok(())
    }

    fn set_air_friction(&mut self, body: BodyId, air_friction: f64) -> Result<(), HostError> {
        self.body_mut(body)?.air_friction = air_friction;
        Ok(())
    }

    fn set_time_scale(&mut self, body: BodyId, time_scale: f64) -> Result<(), HostError> {
        self.body_mut(body)?.time_scale = time_scale;
        Ok(())
    }

    fn apply_force(&mut self, body: BodyId, force: Vector2<f64>) -> Result<(), HostError> {
        self.body_mut(body)?.applied_force += force;
        Ok(())
    }
}
