//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::core`] models and the
//! [`crate::engine`] glue together into a ready-to-step host world.
//!
//! - **Scene setup** ([`scene`]) - Gravity, arena walls, the bonded chain, the
//!   pair attractor and the initial ambient forces in one call.

pub mod scene;
