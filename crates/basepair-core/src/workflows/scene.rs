use crate::core::error::ConfigError;
use crate::core::forcefield::bond::PairBondModel;
use crate::core::forcefield::table::BondStrengthTable;
use crate::core::models::chain::Chain;
use crate::core::models::ids::BodyId;
use crate::core::models::registry::TypeRegistry;
use crate::engine::ambient::AmbientForces;
use crate::engine::chain::ParticleChain;
use crate::engine::config::{ArenaWalls, SimulationConfig};
use crate::engine::error::EngineError;
use crate::engine::host::{BodyOptions, HostEngine, RenderStyle, Shape};
use nalgebra::Point2;
use rand::Rng;
use tracing::{info, instrument, warn};

/// Everything [`setup`] placed on the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub chain: Chain,
    pub walls: Vec<BodyId>,
}

/// Prepares a host world and populates it with a bonded particle chain.
///
/// In order: world gravity, the optional arena walls, the chain itself with
/// per-body air friction, the pair bond attractor and a single application
/// of the configured ambient forces.
///
/// # Errors
///
/// Fails with [`EngineError::Config`] on an invalid configuration, an
/// incomplete color palette or a strand naming an undeclared type. All of these
/// are checked before the host is touched.
#[instrument(skip_all, name = "scene_setup", fields(strand_len = config.strand.len()))]
pub fn setup<H: HostEngine + ?Sized, R: Rng + ?Sized>(
    host: &mut H,
    registry: &TypeRegistry,
    bonds: &BondStrengthTable,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<Scene, EngineError> {
    config.validate()?;
    registry.validate_palette()?;
    if let Some(&undeclared) = config
        .strand
        .iter()
        .find(|&&particle_type| !registry.is_declared(particle_type))
    {
        return Err(ConfigError::UndeclaredType(undeclared).into());
    }
    let ambient = AmbientForces::from_config(&config.ambient)?;

    host.set_gravity(config.world.gravity);

    let walls = match &config.world.walls {
        Some(arena) => create_walls(host, arena)?,
        None => Vec::new(),
    };

    let missing = bonds.missing_pairs(registry);
    if !missing.is_empty() {
        warn!(
            missing = missing.len(),
            "Bond table is incomplete; missing pairs use the default repulsion."
        );
    }

    let chain = ParticleChain::new(registry, &config.chain).build(host, &config.strand)?;
    for particle in chain.particles() {
        host.set_air_friction(particle.body, config.world.air_friction)?;
    }

    host.register_attractor(Box::new(PairBondModel::new(bonds.clone())));
    ambient.apply(host, &chain, rng)?;

    info!(
        particles = chain.len(),
        walls = walls.len(),
        "Scene ready."
    );
    Ok(Scene { chain, walls })
}

fn create_walls<H: HostEngine + ?Sized>(
    host: &mut H,
    arena: &ArenaWalls,
) -> Result<Vec<BodyId>, EngineError> {
    let ArenaWalls {
        width: w,
        height: h,
        thickness: t,
        line_width,
    } = *arena;
    let options = BodyOptions {
        is_static: true,
        tag: None,
        render: RenderStyle {
            line_width,
            ..RenderStyle::default()
        },
    };

    // ceiling, ground, left, right
    let layout = [
        (Point2::new(w / 2.0, 0.0), w + 10.0, t),
        (Point2::new(w / 2.0, h + 10.0), w + 10.0, t),
        (Point2::new(0.0, h + 10.0), t, 2.0 * h + 50.0),
        (Point2::new(w, h + 10.0), t, 2.0 * h + 50.0),
    ];

    let mut walls = Vec::with_capacity(layout.len());
    for (position, width, height) in layout {
        let body = host.create_body(position, Shape::Rectangle { width, height }, options);
        host.add_body_to_world(body)?;
        walls.push(body);
    }
    Ok(walls)
}
