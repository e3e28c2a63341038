use super::attitude::{AttitudeKinematics, EulerAttitude};
use super::drag::drag_force;
use super::environment::{Atmosphere, ExponentialAtmosphere};
use super::gravity::gravity_force;
use crate::config::Constants;
use crate::models::{LanderProperties, SimulationState};
use nalgebra as na;

pub trait EquationsOfMotion {
    fn acceleration(&self, state: &SimulationState) -> na::Vector3<f64>;
}

/// Individual forces acting on the lander at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub gravity: na::Vector3<f64>,
    pub thrust: na::Vector3<f64>,
    pub drag: na::Vector3<f64>,
    pub mass: f64,
}

impl ForceBreakdown {
    pub fn net(&self) -> na::Vector3<f64> {
        self.gravity + self.thrust + self.drag
    }

    pub fn acceleration(&self) -> na::Vector3<f64> {
        self.net() / self.mass
    }
}

/// Force model: gravity, body and parachute drag, and engine thrust.
pub struct LanderDynamics<A: Atmosphere = ExponentialAtmosphere, K: AttitudeKinematics = EulerAttitude> {
    constants: Constants,
    atmosphere: A,
    attitude: K,
}

impl LanderDynamics {
    pub fn new(constants: Constants) -> Self {
        let atmosphere = ExponentialAtmosphere::new(&constants.planet);
        let attitude = EulerAttitude::new(constants.max_thrust());
        Self::with_models(constants, atmosphere, attitude)
    }
}

impl<A: Atmosphere, K: AttitudeKinematics> LanderDynamics<A, K> {
    pub fn with_models(constants: Constants, atmosphere: A, attitude: K) -> Self {
        Self {
            constants,
            atmosphere,
            attitude,
        }
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn atmosphere(&self) -> &A {
        &self.atmosphere
    }

    pub fn attitude(&self) -> &K {
        &self.attitude
    }

    /// Commanded throttle limited to [0, 1]; an empty tank produces no thrust.
    pub fn effective_throttle(&self, state: &SimulationState) -> f64 {
        if state.fuel <= 0.0 {
            0.0
        } else {
            state.throttle.clamp(0.0, 1.0)
        }
    }

    pub fn forces(&self, state: &SimulationState) -> ForceBreakdown {
        let lander = &self.constants.lander;
        let mass = lander.mass(state.fuel);

        let gravity = gravity_force(&state.position, mass, &self.constants.planet);
        let thrust = self
            .attitude
            .thrust_in_world_frame(self.effective_throttle(state), &state.orientation);
        let density = self.atmosphere.density(&state.position);
        let drag = drag_force(lander, density, &state.velocity, state.parachute_status);

        ForceBreakdown {
            gravity,
            thrust,
            drag,
            mass,
        }
    }
}

impl<A: Atmosphere, K: AttitudeKinematics> EquationsOfMotion for LanderDynamics<A, K> {
    fn acceleration(&self, state: &SimulationState) -> na::Vector3<f64> {
        self.forces(state).acceleration()
    }
}
