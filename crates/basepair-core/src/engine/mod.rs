//! # Engine Module
//!
//! Stateful glue between the pure models in [`crate::core`] and a host 2D
//! physics engine.
//!
//! ## Overview
//!
//! The host is abstracted behind the [`host::HostEngine`] trait. Everything in
//! this module talks to the host only through that trait, so the same chain and
//! selection logic runs against a real engine binding or the in-memory
//! [`world::MemoryWorld`].
//!
//! ## Architecture
//!
//! - **Host interface** ([`host`]) - Body shapes, render styles, the attractor hook
//! - **In-memory host** ([`world`]) - Slot-map backed world with force accumulation
//! - **Chains** ([`chain`]) - Building particle chains and retyping their members
//! - **Selection** ([`selection`], [`input`]) - Pointer and key driven selection state machine
//! - **Recoloring** ([`recolor`]) - Click-to-cycle and random particle colors
//! - **Ambient forces** ([`ambient`]) - Buoyancy and Brownian kicks applied per particle
//! - **Configuration** ([`config`]) - Chain geometry, world settings and their builder
//! - **Error Handling** ([`error`]) - Engine, host and argument errors

pub mod ambient;
pub mod chain;
pub mod config;
pub mod error;
pub mod host;
pub mod input;
pub mod recolor;
pub mod selection;
pub mod world;
