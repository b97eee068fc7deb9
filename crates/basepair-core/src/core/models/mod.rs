//! # Core Models Module
//!
//! Data structures for typed particles and the chains they form.
//!
//! ## Key Components
//!
//! - [`particle_type`] - Single-symbol particle labels and the RNA base constants
//! - [`color`] - RGB display colors with parsing and shading helpers
//! - [`registry`] - The declared type set with colors and key bindings
//! - [`particle`] - A typed particle backed by a host body
//! - [`chain`] - Ordered particles joined by neighbor constraints
//! - [`ids`] - Handles into the host engine's body and constraint stores

pub mod chain;
pub mod color;
pub mod ids;
pub mod particle;
pub mod particle_type;
pub mod registry;
