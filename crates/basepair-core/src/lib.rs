//! # basepair
//!
//! A typed-particle bonding model for 2D rigid-body physics engines: chains of
//! colored particles (nucleotides by default) joined by distance constraints,
//! with a pairwise attraction or repulsion between every pair of bodies decided
//! by their types.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`ParticleType`, `Chain`,
//!   `TypeRegistry`), the pair force model (`PairBondModel`, `BondStrengthTable`),
//!   ambient force laws and parameter file loading.
//!
//! - **[`engine`]: The Glue.** The `HostEngine` trait the physics engine is
//!   driven through, an in-memory implementation of it, chain construction and
//!   retyping, and the `SelectionController` that turns pointer and key input into
//!   type changes.
//!
//! - **[`workflows`]: The Public API.** One-call scene setup that wires the layers
//!   below into a host world.
//!
//! ## Example
//!
//! ```
//! use basepair::core::forcefield::table::BondStrengthTable;
//! use basepair::core::models::particle_type::parse_strand;
//! use basepair::core::models::registry::TypeRegistry;
//! use basepair::engine::config::SimulationConfigBuilder;
//! use basepair::engine::world::MemoryWorld;
//! use basepair::workflows::scene;
//!
//! let config = SimulationConfigBuilder::new()
//!     .strand(parse_strand("AAGACUUC"))
//!     .build()?;
//! let mut world = MemoryWorld::new();
//! let scene = scene::setup(
//!     &mut world,
//!     &TypeRegistry::nucleotides(),
//!     &BondStrengthTable::nucleotides(),
//!     &config,
//!     &mut rand::thread_rng(),
//! )?;
//! assert_eq!(scene.chain.sequence(), "AAGACUUC");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
