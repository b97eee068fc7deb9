use crate::core::error::ConfigError;
use nalgebra::{Point2, Vector2};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Upward restoring force towards a horizontal water plane.
///
/// The force is proportional to the vertical distance from the plane. Bodies
/// farther from the plane than the plane is from the origin run at a slowed
/// time scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Buoyancy {
    pub water_plane_y: f64,
    pub coefficient: f64,
    pub slowed_time_scale: f64,
}

impl Default for Buoyancy {
    fn default() -> Self {
        Self {
            water_plane_y: 300.0,
            coefficient: 8e-5,
            slowed_time_scale: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuoyancyEffect {
    pub force: Vector2<f64>,
    pub time_scale: f64,
}

impl Buoyancy {
    pub fn evaluate(&self, position: &Point2<f64>) -> BuoyancyEffect {
        let distance = (position.y - self.water_plane_y).abs();
        let time_scale = if distance < self.water_plane_y {
            1.0
        } else {
            self.slowed_time_scale
        };
        BuoyancyEffect {
            force: Vector2::new(0.0, -distance * self.coefficient),
            time_scale,
        }
    }
}

/// Isotropic random kicks with normally distributed components.
#[derive(Debug, Clone, Copy)]
pub struct BrownianMotion {
    normal: Normal<f64>,
    std_dev: f64,
}

impl BrownianMotion {
    pub fn new(std_dev: f64) -> Result<Self, ConfigError> {
        let invalid = ConfigError::InvalidValue {
            name: "brownian std_dev",
            value: std_dev,
        };
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(invalid);
        }
        let normal = Normal::new(0.0, std_dev).map_err(|_| invalid.clone())?;
        Ok(Self { normal, std_dev })
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector2<f64> {
        Vector2::new(self.normal.sample(rng), self.normal.sample(rng))
    }
}
