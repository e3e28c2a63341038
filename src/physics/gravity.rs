use crate::config::Planet;
use nalgebra as na;

/// Gravitational acceleration toward the planet centre.
pub fn gravity_acceleration(position: &na::Vector3<f64>, planet: &Planet) -> na::Vector3<f64> {
    let r: f64 = position.magnitude();
    let acceleration_magnitude: f64 = -planet.mu() / (r * r);
    position.normalize() * acceleration_magnitude
}

/// Weight of a body of the given mass; undefined at the planet centre.
pub fn gravity_force(position: &na::Vector3<f64>, mass: f64, planet: &Planet) -> na::Vector3<f64> {
    gravity_acceleration(position, planet) * mass
}
