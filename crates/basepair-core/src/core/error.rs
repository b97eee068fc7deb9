use super::models::particle_type::ParticleType;
use thiserror::Error;

/// Errors raised while assembling or validating simulation configuration.
///
/// These are fatal for the operation that raised them: a chain is never
/// partially built and a table never partially updated when one is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("No display color declared for particle type '{0}'")]
    MissingColor(ParticleType),

    #[error("Particle type '{0}' is not declared in the type registry")]
    UndeclaredType(ParticleType),

    #[error("Same-type pair '{0}'-'{0}' must repel, but strength {1} was given")]
    SameTypeAttraction(ParticleType, f64),

    #[error("Default pair strength must be negative (repulsive), got {0}")]
    PositiveRepelDefault(f64),

    #[error("Key '{key}' is already bound to particle type '{bound_to}'")]
    KeyAlreadyBound { key: char, bound_to: ParticleType },

    #[error("Invalid value for '{name}': {value}")]
    InvalidValue { name: &'static str, value: f64 },
}
