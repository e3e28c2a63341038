use crate::config::Constants;
use crate::gnc::control::Autopilot;
use crate::models::SimulationState;
use crate::physics::{
    Atmosphere, AttitudeKinematics, EquationsOfMotion, EulerAttitude, ExponentialAtmosphere,
    LanderDynamics,
};

/// One fixed-step advance: force model, integration, then autopilot and attitude hold.
pub struct Simulator<A: Atmosphere = ExponentialAtmosphere, K: AttitudeKinematics = EulerAttitude> {
    dynamics: LanderDynamics<A, K>,
    autopilot: Autopilot,
}

impl Simulator {
    pub fn new(constants: Constants) -> Self {
        Self {
            dynamics: LanderDynamics::new(constants),
            autopilot: Autopilot::new(&constants.planet),
        }
    }
}

impl<A: Atmosphere, K: AttitudeKinematics> Simulator<A, K> {
    pub fn with_models(constants: Constants, atmosphere: A, attitude: K) -> Self {
        Self {
            dynamics: LanderDynamics::with_models(constants, atmosphere, attitude),
            autopilot: Autopilot::new(&constants.planet),
        }
    }

    pub fn with_autopilot(mut self, autopilot: Autopilot) -> Self {
        self.autopilot = autopilot;
        self
    }

    pub fn dynamics(&self) -> &LanderDynamics<A, K> {
        &self.dynamics
    }

    pub fn autopilot(&self) -> &Autopilot {
        &self.autopilot
    }

    /// Advances `state` by `state.delta_t`.
    ///
    /// The acceleration is evaluated once, at the start of the tick. A throttle set by the
    /// autopilot here only acts from the next tick on.
    pub fn tick(&self, state: &mut SimulationState) {
        let acceleration = self.dynamics.acceleration(state);

        let (position, velocity) = state.integrator.step(
            &state.position,
            &state.velocity,
            &acceleration,
            state.delta_t,
        );
        state.position = position;
        state.velocity = velocity;
        state.simulation_time += state.delta_t;

        if state.autopilot_enabled {
            state.throttle = self.autopilot.throttle(&state.position, &state.velocity);
        }

        if state.stabilized_attitude {
            state.orientation = self
                .dynamics
                .attitude()
                .stabilize(&state.position, &state.orientation);
        }
    }
}

/// Single tick with the default atmosphere and attitude models.
pub fn tick(state: &mut SimulationState, constants: &Constants) {
    Simulator::new(*constants).tick(state);
}
