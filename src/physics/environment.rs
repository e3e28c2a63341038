use crate::config::Planet;
use crate::constants::{SCALE_HEIGHT, SURFACE_DENSITY};
use nalgebra as na;

/// Local air density as a function of position.
pub trait Atmosphere {
    fn density(&self, position: &na::Vector3<f64>) -> f64;
}

/// Exponential atmosphere that ends abruptly at the exosphere. Nothing below the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialAtmosphere {
    pub planet_radius: f64,
    pub exosphere: f64,
    pub surface_density: f64, // kg/m³
    pub scale_height: f64,    // m
}

impl ExponentialAtmosphere {
    pub fn new(planet: &Planet) -> Self {
        Self {
            planet_radius: planet.radius,
            exosphere: planet.exosphere,
            surface_density: SURFACE_DENSITY,
            scale_height: SCALE_HEIGHT,
        }
    }
}

impl Atmosphere for ExponentialAtmosphere {
    fn density(&self, position: &na::Vector3<f64>) -> f64 {
        let altitude = position.magnitude() - self.planet_radius;
        if altitude > self.exosphere || altitude < 0.0 {
            0.0
        } else {
            self.surface_density * (-altitude / self.scale_height).exp()
        }
    }
}

/// No atmosphere at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vacuum;

impl Atmosphere for Vacuum {
    fn density(&self, _position: &na::Vector3<f64>) -> f64 {
        0.0
    }
}
