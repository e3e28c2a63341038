use crate::constants::{EXOSPHERE, G, M_MARS, R_MARS};
use nalgebra as na;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub radius: f64,                 // m
    pub mass: f64,                   // kg
    pub gravitational_constant: f64, // m³/kg/s²
    pub exosphere: f64,              // m above the surface
}

impl Planet {
    pub const MARS: Planet = Planet {
        radius: R_MARS,
        mass: M_MARS,
        gravitational_constant: G,
        exosphere: EXOSPHERE,
    };

    /// Standard gravitational parameter GM.
    pub fn mu(&self) -> f64 {
        self.gravitational_constant * self.mass
    }

    pub fn surface_gravity(&self) -> f64 {
        self.mu() / (self.radius * self.radius)
    }

    pub fn altitude(&self, position: &na::Vector3<f64>) -> f64 {
        position.magnitude() - self.radius
    }
}
