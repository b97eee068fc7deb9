use crate::core::error::ConfigError;
use crate::core::forcefield::ambient::Buoyancy;
use crate::core::models::color::Color;
use crate::core::models::particle_type::ParticleType;
use nalgebra::{Point2, Vector2};

/// Geometry and styling of the particles in a chain and of their links.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainConfig {
    pub radius: f64,
    pub spawn: Point2<f64>,
    pub rest_length: f64,
    pub stiffness: f64,
    pub outline: Color,
    pub line_width: f64,
    pub selected_outline: Color,
    pub selected_line_width: f64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            radius: 25.0,
            spawn: Point2::new(200.0, 100.0),
            rest_length: 50.0,
            stiffness: 0.4,
            outline: Color::BLACK,
            line_width: 6.0,
            selected_outline: Color::WHITE,
            selected_line_width: 8.0,
        }
    }
}

/// Static walls enclosing a `width` by `height` viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaWalls {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    pub line_width: f64,
}

impl Default for ArenaWalls {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            thickness: 60.0,
            line_width: 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    pub gravity: Vector2<f64>,
    pub air_friction: f64,
    pub walls: Option<ArenaWalls>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vector2::new(0.0, 1.0),
            air_friction: 0.01,
            walls: Some(ArenaWalls::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AmbientForceConfig {
    pub buoyancy: Option<Buoyancy>,
    pub brownian_std_dev: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub strand: Vec<ParticleType>,
    pub chain: ChainConfig,
    pub world: WorldConfig,
    pub ambient: AmbientForceConfig,
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    strand: Option<Vec<ParticleType>>,
    chain: Option<ChainConfig>,
    gravity: Option<Vector2<f64>>,
    air_friction: Option<f64>,
    walls: Option<Option<ArenaWalls>>,
    buoyancy: Option<Buoyancy>,
    brownian_std_dev: Option<f64>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strand(mut self, strand: Vec<ParticleType>) -> Self {
        self.strand = Some(strand);
        self
    }
    pub fn chain(mut self, chain: ChainConfig) -> Self {
        self.chain = Some(chain);
        self
    }
    pub fn gravity(mut self, gravity: Vector2<f64>) -> Self {
        self.gravity = Some(gravity);
        self
    }
    pub fn air_friction(mut self, air_friction: f64) -> Self {
        self.air_friction = Some(air_friction);
        self
    }
    pub fn walls(mut self, walls: Option<ArenaWalls>) -> Self {
        self.walls = Some(walls);
        self
    }
    pub fn buoyancy(mut self, buoyancy: Buoyancy) -> Self {
        self.buoyancy = Some(buoyancy);
        self
    }
    pub fn brownian_std_dev(mut self, std_dev: f64) -> Self {
        self.brownian_std_dev = Some(std_dev);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let world_defaults = WorldConfig::default();
        let config = SimulationConfig {
            strand: self.strand.ok_or(ConfigError::MissingParameter("strand"))?,
            chain: self.chain.unwrap_or_default(),
            world: WorldConfig {
                gravity: self.gravity.unwrap_or(world_defaults.gravity),
                air_friction: self.air_friction.unwrap_or(world_defaults.air_friction),
                walls: self.walls.unwrap_or(world_defaults.walls),
            },
            ambient: AmbientForceConfig {
                buoyancy: self.buoyancy,
                brownian_std_dev: self.brownian_std_dev,
            },
        };
        config.validate()?;
        Ok(config)
    }
}

fn ensure(name: &'static str, value: f64, valid: bool) -> Result<(), ConfigError> {
    if valid && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { name, value })
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let chain = &self.chain;
        ensure("radius", chain.radius, chain.radius > 0.0)?;
        ensure("rest_length", chain.rest_length, chain.rest_length > 0.0)?;
        ensure(
            "stiffness",
            chain.stiffness,
            chain.stiffness > 0.0 && chain.stiffness <= 1.0,
        )?;
        ensure("line_width", chain.line_width, chain.line_width >= 0.0)?;
        ensure(
            "selected_line_width",
            chain.selected_line_width,
            chain.selected_line_width >= 0.0,
        )?;
        ensure(
            "air_friction",
            self.world.air_friction,
            self.world.air_friction >= 0.0,
        )?;
        if let Some(walls) = &self.world.walls {
            ensure("walls.width", walls.width, walls.width > 0.0)?;
            ensure("walls.height", walls.height, walls.height > 0.0)?;
            ensure("walls.thickness", walls.thickness, walls.thickness > 0.0)?;
        }
        if let Some(buoyancy) = &self.ambient.buoyancy {
            ensure(
                "buoyancy.slowed_time_scale",
                buoyancy.slowed_time_scale,
                buoyancy.slowed_time_scale > 0.0,
            )?;
        }
        if let Some(std_dev) = self.ambient.brownian_std_dev {
            ensure("brownian_std_dev", std_dev, std_dev >= 0.0)?;
        }
        Ok(())
    }
}
