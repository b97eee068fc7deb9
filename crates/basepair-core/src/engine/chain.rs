use super::config::ChainConfig;
use super::error::{EngineError, InvalidArgument};
use super::host::{BodyOptions, HostEngine, RenderStyle, Shape};
use crate::core::error::ConfigError;
use crate::core::models::chain::{Chain, ChainLink};
use crate::core::models::ids::BodyId;
use crate::core::models::particle::Particle;
use crate::core::models::particle_type::ParticleType;
use crate::core::models::registry::TypeRegistry;
use tracing::{debug, info, instrument};

/// Builds chains of typed particles on a host engine and retypes their members.
pub struct ParticleChain<'a> {
    registry: &'a TypeRegistry,
    config: &'a ChainConfig,
}

impl<'a> ParticleChain<'a> {
    pub fn new(registry: &'a TypeRegistry, config: &'a ChainConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    pub fn config(&self) -> &'a ChainConfig {
        self.config
    }

    /// Creates one circular body per type, in order, and links each body to its
    /// predecessor with a distance constraint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingColor`] if any declared type has no color and
    /// [`ConfigError::UndeclaredType`] if `types` names an undeclared type. Both are
    /// checked before anything is created on the host.
    #[instrument(skip_all, name = "chain_build", fields(len = types.len()))]
    pub fn build<H: HostEngine + ?Sized>(
        &self,
        host: &mut H,
        types: &[ParticleType],
    ) -> Result<Chain, EngineError> {
        self.registry.validate_palette()?;
        let colors = types
            .iter()
            .map(|&particle_type| {
                if !self.registry.is_declared(particle_type) {
                    return Err(ConfigError::UndeclaredType(particle_type));
                }
                self.registry
                    .color(particle_type)
                    .ok_or(ConfigError::MissingColor(particle_type))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut chain = Chain::default();
        let mut previous: Option<BodyId> = None;

        for (&particle_type, color) in types.iter().zip(colors) {
            let body = host.create_body(
                self.config.spawn,
                Shape::Circle {
                    radius: self.config.radius,
                },
                BodyOptions {
                    is_static: false,
                    tag: Some(particle_type),
                    render: RenderStyle {
                        fill: Some(color),
                        stroke: self.config.outline,
                        line_width: self.config.line_width,
                    },
                },
            );

            if let Some(prev) = previous {
                let constraint = host.create_constraint(
                    body,
                    prev,
                    self.config.rest_length,
                    self.config.stiffness,
                )?;
                host.add_constraint_to_world(constraint)?;
                chain.links.push(ChainLink {
                    body_a: body,
                    body_b: prev,
                    constraint,
                    length: self.config.rest_length,
                    stiffness: self.config.stiffness,
                });
            }

            chain.particles.push(Particle::new(body, particle_type, color));
            previous = Some(body);
        }

        for particle in &chain.particles {
            host.add_body_to_world(particle.body)?;
        }

        info!(
            particles = chain.len(),
            links = chain.links.len(),
            sequence = %chain.sequence(),
            "Built particle chain."
        );
        Ok(chain)
    }

    /// Changes the type (and with it the color) of the particle at `index`.
    ///
    /// Constraints are left untouched. On error nothing is modified.
    pub fn reassign<H: HostEngine + ?Sized>(
        &self,
        host: &mut H,
        chain: &mut Chain,
        index: usize,
        new_type: ParticleType,
    ) -> Result<(), EngineError> {
        let len = chain.len();
        if index >= len {
            return Err(InvalidArgument::IndexOutOfRange { index, len }.into());
        }
        if !self.registry.is_declared(new_type) {
            return Err(InvalidArgument::UndeclaredType(new_type).into());
        }
        let color = self
            .registry
            .color(new_type)
            .ok_or(ConfigError::MissingColor(new_type))?;

        let particle = chain
            .particle_mut(index)
            .ok_or(InvalidArgument::IndexOutOfRange { index, len })?;
        host.set_body_tag(particle.body, Some(new_type))?;
        host.set_fill(particle.body, color)?;

        debug!(
            index,
            from = %particle.particle_type,
            to = %new_type,
            "Reassigned particle type."
        );
        particle.particle_type = new_type;
        particle.color = color;
        Ok(())
    }
}
