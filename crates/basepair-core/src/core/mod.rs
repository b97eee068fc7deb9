//! # Core Module
//!
//! Stateless building blocks: particle and chain models, the pairwise bonding
//! force field, and parameter loading.
//!
//! Nothing in this layer talks to a host engine. The [`crate::engine`] layer
//! wires these pieces to one.
//!
//! - **Models** ([`models`]) - Particle types, colors, the type registry, particles and chains
//! - **Force field** ([`forcefield`]) - Bond strengths, the pair force model, ambient forces
//! - **Errors** ([`error`]) - Configuration errors shared by every layer

pub mod error;
pub mod forcefield;
pub mod models;
