use crate::constants::*;
use crate::models::lander::LanderProperties;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanderSpec {
    pub unloaded_mass: f64,           // kg
    pub fuel_capacity: f64,           // l
    pub fuel_density: f64,            // kg/l
    pub fuel_rate_at_max_thrust: f64, // l/s
    pub size: f64,                    // m
    pub body_drag_coefficient: f64,
    pub chute_drag_coefficient: f64,
    pub max_parachute_drag: f64,      // N
    pub max_parachute_speed: f64,     // m/s
    pub max_impact_ground_speed: f64, // m/s
    pub max_impact_descent_rate: f64, // m/s
}

impl LanderSpec {
    pub const MARS_LANDER: LanderSpec = LanderSpec {
        unloaded_mass: UNLOADED_LANDER_MASS,
        fuel_capacity: FUEL_CAPACITY,
        fuel_density: FUEL_DENSITY,
        fuel_rate_at_max_thrust: FUEL_RATE_AT_MAX_THRUST,
        size: LANDER_SIZE,
        body_drag_coefficient: DRAG_COEF_LANDER,
        chute_drag_coefficient: DRAG_COEF_CHUTE,
        max_parachute_drag: MAX_PARACHUTE_DRAG,
        max_parachute_speed: MAX_PARACHUTE_SPEED,
        max_impact_ground_speed: MAX_IMPACT_GROUND_SPEED,
        max_impact_descent_rate: MAX_IMPACT_DESCENT_RATE,
    };

    /// Mass with a full tank.
    pub fn wet_mass(&self) -> f64 {
        self.mass(1.0)
    }

    /// Fraction of the tank burnt in `dt` seconds at the given throttle.
    pub fn fuel_burnt(&self, throttle: f64, dt: f64) -> f64 {
        dt * self.fuel_rate_at_max_thrust * throttle / self.fuel_capacity
    }
}

impl LanderProperties for LanderSpec {
    fn mass(&self, fuel: f64) -> f64 {
        self.unloaded_mass + fuel * self.fuel_capacity * self.fuel_density
    }

    fn drag_coefficient(&self) -> f64 {
        self.body_drag_coefficient
    }

    fn reference_area(&self) -> f64 {
        PI * self.size.powi(2)
    }

    fn chute_drag_coefficient(&self) -> f64 {
        self.chute_drag_coefficient
    }

    fn chute_reference_area(&self) -> f64 {
        5.0 * 2.0 * self.size * 2.0 * self.size
    }
}
