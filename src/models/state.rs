use crate::error::SimulationError;
use crate::integrators::{IntegrationEngine, IntegrationPolicy};
use nalgebra as na;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParachuteStatus {
    #[default]
    NotDeployed,
    Deployed,
    Lost,
}

impl fmt::Display for ParachuteStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParachuteStatus::NotDeployed => write!(f, "Not Deployed"),
            ParachuteStatus::Deployed => write!(f, "Deployed"),
            ParachuteStatus::Lost => write!(f, "Lost"),
        }
    }
}

/// Everything that changes while a lander simulation runs.
#[derive(Debug, Clone)]
pub struct SimulationState {
    // Translational state, planet-centred frame
    pub position: na::Vector3<f64>, // m
    pub velocity: na::Vector3<f64>, // m/s

    /// xyz Euler angles in degrees, lander body frame
    pub orientation: na::Vector3<f64>,

    pub fuel: f64,     // fraction of tank capacity, [0, 1]
    pub throttle: f64, // [0, 1]
    pub parachute_status: ParachuteStatus,

    pub simulation_time: f64, // s
    pub delta_t: f64,         // s, fixed for the whole run

    pub autopilot_enabled: bool,
    pub stabilized_attitude: bool,

    /// Owns the position history; reset by re-initialization.
    pub integrator: IntegrationEngine,
}

impl SimulationState {
    pub fn new(
        position: na::Vector3<f64>,
        velocity: na::Vector3<f64>,
        orientation: na::Vector3<f64>,
        delta_t: f64,
        policy: IntegrationPolicy,
    ) -> Self {
        SimulationState {
            position,
            velocity,
            orientation,
            fuel: 1.0,
            throttle: 0.0,
            parachute_status: ParachuteStatus::NotDeployed,
            simulation_time: 0.0,
            delta_t,
            autopilot_enabled: false,
            stabilized_attitude: false,
            integrator: IntegrationEngine::new(policy),
        }
    }

    /// Component of velocity along the radial direction; negative when falling.
    pub fn radial_velocity(&self) -> f64 {
        self.position.dot(&self.velocity) / self.position.magnitude()
    }

    /// Magnitude of the velocity component perpendicular to the radial direction.
    pub fn ground_speed(&self) -> f64 {
        let radial = self.position.normalize() * self.radial_velocity();
        (self.velocity - radial).magnitude()
    }

    /// Checks the preconditions the tick relies on but never verifies itself.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.delta_t <= 0.0 || !self.delta_t.is_finite() {
            return Err(SimulationError::InvalidTimestep(self.delta_t));
        }
        if self.position.magnitude() == 0.0 {
            return Err(SimulationError::DegeneratePosition);
        }
        if !(0.0..=1.0).contains(&self.fuel) {
            return Err(SimulationError::FuelOutOfRange(self.fuel));
        }
        Ok(())
    }
}
