use super::config::AmbientForceConfig;
use super::error::EngineError;
use super::host::HostEngine;
use crate::core::forcefield::ambient::{BrownianMotion, Buoyancy};
use crate::core::models::chain::Chain;
use rand::Rng;
use tracing::trace;

/// Per-step forces that act on every chain particle independently of bonds.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmbientForces {
    buoyancy: Option<Buoyancy>,
    brownian: Option<BrownianMotion>,
}

impl AmbientForces {
    pub fn from_config(config: &AmbientForceConfig) -> Result<Self, EngineError> {
        let brownian = config
            .brownian_std_dev
            .map(BrownianMotion::new)
            .transpose()?;
        Ok(Self {
            buoyancy: config.buoyancy,
            brownian,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.buoyancy.is_none() && self.brownian.is_none()
    }

    pub fn buoyancy(&self) -> Option<&Buoyancy> {
        self.buoyancy.as_ref()
    }

    pub fn brownian(&self) -> Option<&BrownianMotion> {
        self.brownian.as_ref()
    }

    /// Applies one step of ambient forces to every particle of `chain`.
    ///
    /// Buoyancy resets each body to unit mass and sets its time scale from its
    /// distance to the water plane.
    pub fn apply<H: HostEngine + ?Sized, R: Rng + ?Sized>(
        &self,
        host: &mut H,
        chain: &Chain,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        if self.is_empty() {
            return Ok(());
        }
        for particle in chain.particles() {
            let body = particle.body;
            if let Some(buoyancy) = &self.buoyancy {
                if let Some(position) = host.position(body) {
                    let effect = buoyancy.evaluate(&position);
                    host.set_time_scale(body, effect.time_scale)?;
                    host.set_mass(body, 1.0)?;
                    host.apply_force(body, effect.force)?;
                }
            }
            if let Some(brownian) = &self.brownian {
                host.apply_force(body, brownian.sample(rng))?;
            }
        }
        trace!(particles = chain.len(), "Applied ambient forces.");
        Ok(())
    }
}
