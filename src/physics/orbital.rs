use crate::config::Planet;
use crate::constants::PI;
use nalgebra as na;

pub struct OrbitalMechanics;

impl OrbitalMechanics {
    pub fn compute_orbital_period(a: f64, planet: &Planet) -> f64 {
        2.0 * PI * (a.powi(3) / planet.mu()).sqrt()
    }

    pub fn compute_circular_velocity(r: f64, planet: &Planet) -> f64 {
        (planet.mu() / r).sqrt()
    }

    pub fn compute_escape_velocity(r: f64, planet: &Planet) -> f64 {
        (2.0 * planet.mu() / r).sqrt()
    }

    /// Semi-major axis from the vis-viva equation; negative for hyperbolic trajectories.
    pub fn compute_semi_major_axis(r: &na::Vector3<f64>, v: &na::Vector3<f64>, planet: &Planet) -> f64 {
        let specific_energy = v.magnitude_squared() / 2.0 - planet.mu() / r.magnitude();
        -planet.mu() / (2.0 * specific_energy)
    }

    /// Apoapsis and periapsis radii `(ra, rp)` of a bound orbit.
    pub fn compute_apsides(r: &na::Vector3<f64>, v: &na::Vector3<f64>, planet: &Planet) -> (f64, f64) {
        let mu = planet.mu();
        let specific_energy = v.magnitude_squared() / 2.0 - mu / r.magnitude();
        let h = r.cross(v);
        let h_mag2 = h.dot(&h);

        let a = -mu / (2.0 * specific_energy);
        let e = (1.0 + (2.0 * specific_energy * h_mag2) / (mu * mu)).max(0.0).sqrt();

        let ra = a * (1.0 + e);
        let rp = a * (1.0 - e);

        (ra, rp)
    }
}
