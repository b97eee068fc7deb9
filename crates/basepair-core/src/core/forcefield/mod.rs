//! # Force Field Module
//!
//! Pairwise bonding and ambient forces for typed particles.
//!
//! ## Overview
//!
//! The central piece is [`bond::PairBondModel`], a pure function of two typed
//! positions and a [`table::BondStrengthTable`]. The host engine evaluates it once
//! per ordered pair of bodies on every step; the model itself never touches the
//! host. Pairs that the table does not mention fall back to a uniform repulsion,
//! so an incomplete table still yields a stable simulation.
//!
//! ## Key Components
//!
//! - [`table`] - Symmetric strength table with the default nucleotide pairing
//! - [`bond`] - The pairwise force model and the [`bond::BondSite`] view it consumes
//! - [`ambient`] - Buoyancy and Brownian kicks applied to individual bodies
//! - [`params`] - Loading types and strengths from TOML and CSV files
//!
//! ## Usage
//!
//! ```
//! use basepair::core::forcefield::bond::{BondSite, PairBondModel};
//! use basepair::core::forcefield::table::BondStrengthTable;
//! use basepair::core::models::particle_type::nucleotide::{C, G};
//! use nalgebra::Point2;
//!
//! let model = PairBondModel::new(BondStrengthTable::nucleotides());
//! let g = BondSite::new(G, Point2::new(0.0, 0.0));
//! let c = BondSite::new(C, Point2::new(10.0, 0.0));
//! assert!(model.force(&g, &c).x < 0.0);
//! ```

pub mod ambient;
pub mod bond;
pub mod params;
pub mod table;
