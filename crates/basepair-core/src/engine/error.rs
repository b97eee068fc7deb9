use crate::core::error::ConfigError;
use crate::core::models::ids::{BodyId, ConstraintId};
use crate::core::models::particle_type::ParticleType;
use thiserror::Error;

/// Rejected arguments to a chain operation. No state is changed when one is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidArgument {
    #[error("Particle index {index} is out of range for a chain of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Particle type '{0}' is not declared")]
    UndeclaredType(ParticleType),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HostError {
    #[error("Body {0:?} not found in the host engine")]
    BodyNotFound(BodyId),

    #[error("Constraint {0:?} not found in the host engine")]
    ConstraintNotFound(ConstraintId),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Invalid argument: {source}")]
    InvalidArgument {
        #[from]
        source: InvalidArgument,
    },

    #[error("Host engine error: {source}")]
    Host {
        #[from]
        source: HostError,
    },
}
