use crate::config::Planet;
use nalgebra as na;

/// Proportional throttle controller aiming for a soft touchdown.
///
/// The target descent rate is `descent_margin + kh * h`, so the lander is allowed to fall
/// faster high up and is slowed toward `descent_margin` m/s near the ground. The controller
/// keeps no state between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    kh: f64,
    kp: f64,
    delta: f64,
    descent_margin: f64,
    planet_radius: f64,
}

impl Autopilot {
    pub const KH: f64 = 0.03;
    pub const KP: f64 = 0.5;
    pub const DELTA: f64 = 0.5;
    pub const DESCENT_MARGIN: f64 = 0.5; // m/s

    pub fn new(planet: &Planet) -> Self {
        Self::with_gains(Self::KH, Self::KP, Self::DELTA, planet)
    }

    pub fn with_gains(kh: f64, kp: f64, delta: f64, planet: &Planet) -> Self {
        Self {
            kh,
            kp,
            delta,
            descent_margin: Self::DESCENT_MARGIN,
            planet_radius: planet.radius,
        }
    }

    /// Proportional output `Kp * e` with `e = -(margin + Kh * h + radial rate)`.
    pub fn proportional_output(&self, position: &na::Vector3<f64>, velocity: &na::Vector3<f64>) -> f64 {
        let r = position.magnitude();
        let h = r - self.planet_radius;
        let radial_rate = position.dot(velocity) / r;
        let e = -(self.descent_margin + self.kh * h + radial_rate);
        self.kp * e
    }

    pub fn throttle(&self, position: &na::Vector3<f64>, velocity: &na::Vector3<f64>) -> f64 {
        map_throttle(self.proportional_output(position, velocity), self.delta)
    }
}

/// Three-region saturation: 0 below `-delta`, 1 above `1 - delta`, `delta + p_out` between.
pub fn map_throttle(p_out: f64, delta: f64) -> f64 {
    if p_out <= -delta {
        0.0
    } else if p_out >= 1.0 - delta {
        1.0
    } else {
        delta + p_out
    }
}
