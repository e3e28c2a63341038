use super::flight_states::FlightStatus;
use crate::models::{ParachuteStatus, SimulationState};
use crate::physics::drag::chute_drag;
use crate::physics::{Atmosphere, AttitudeKinematics, LanderDynamics};
use nalgebra as na;

/// Tracks touchdown and parachute integrity between ticks.
pub struct FlightMonitor {
    current_status: FlightStatus,
    last_status_change: f64,
}

impl Default for FlightMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightMonitor {
    pub fn new() -> Self {
        Self {
            current_status: FlightStatus::Flying,
            last_status_change: 0.0,
        }
    }

    pub fn get_current_status(&self) -> FlightStatus {
        self.current_status
    }

    pub fn get_last_status_change(&self) -> f64 {
        self.last_status_change
    }

    fn transition_to(&mut self, new_status: FlightStatus, time: f64) {
        if self.current_status != new_status {
            log::info!(
                "Flight status at t={:.2}s: {} -> {}",
                time,
                self.current_status,
                new_status
            );
            self.current_status = new_status;
            self.last_status_change = time;
        }
    }

    /// Applies parachute loss and touchdown to `state` after a tick.
    pub fn evaluate_transition<A: Atmosphere, K: AttitudeKinematics>(
        &mut self,
        state: &mut SimulationState,
        dynamics: &LanderDynamics<A, K>,
    ) {
        if self.current_status.is_terminal() {
            return;
        }

        if state.parachute_status == ParachuteStatus::Deployed
            && !safe_to_deploy_parachute(state, dynamics)
        {
            log::warn!(
                "Parachute lost at t={:.2}s, speed {:.1} m/s",
                state.simulation_time,
                state.velocity.magnitude()
            );
            state.parachute_status = ParachuteStatus::Lost;
        }

        let planet = &dynamics.constants().planet;
        if planet.altitude(&state.position) > 0.0 {
            return;
        }

        let lander = &dynamics.constants().lander;
        let ground_speed = state.ground_speed();
        let descent_rate = -state.radial_velocity();
        let crashed = ground_speed > lander.max_impact_ground_speed
            || descent_rate > lander.max_impact_descent_rate;

        log::info!(
            "Touchdown at t={:.2}s: descent rate {:.2} m/s, ground speed {:.2} m/s",
            state.simulation_time,
            descent_rate,
            ground_speed
        );

        state.position = state.position.normalize() * planet.radius;
        state.velocity = na::Vector3::zeros();
        state.throttle = 0.0;

        let status = if crashed {
            FlightStatus::Crashed
        } else {
            FlightStatus::Landed
        };
        self.transition_to(status, state.simulation_time);
    }

    /// Opens the parachute if it is still packed and the lander is airborne.
    pub fn command_parachute(&mut self, state: &mut SimulationState) -> bool {
        if self.current_status == FlightStatus::Flying
            && state.parachute_status == ParachuteStatus::NotDeployed
        {
            log::info!("Parachute deployed at t={:.2}s", state.simulation_time);
            state.parachute_status = ParachuteStatus::Deployed;
            true
        } else {
            false
        }
    }
}

/// Whether an open parachute would survive the current dynamic pressure and speed.
pub fn safe_to_deploy_parachute<A: Atmosphere, K: AttitudeKinematics>(
    state: &SimulationState,
    dynamics: &LanderDynamics<A, K>,
) -> bool {
    let constants = dynamics.constants();
    let lander = &constants.lander;
    let density = dynamics.atmosphere().density(&state.position);
    let drag = chute_drag(lander, density, &state.velocity);
    let in_atmosphere = constants.planet.altitude(&state.position) < constants.planet.exosphere;

    !(drag > lander.max_parachute_drag
        || (state.velocity.magnitude() > lander.max_parachute_speed && in_atmosphere))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Constants;
    use crate::constants::R_MARS;
    use crate::integrators::IntegrationPolicy;

    fn state_at(altitude: f64, descent_rate: f64) -> SimulationState {
        SimulationState::new(
            na::Vector3::new(0.0, -(R_MARS + altitude), 0.0),
            na::Vector3::new(0.0, descent_rate, 0.0),
            na::Vector3::zeros(),
            0.1,
            IntegrationPolicy::default(),
        )
    }

    #[test]
    fn soft_touchdown_lands() {
        let dynamics = LanderDynamics::new(Constants::default());
        let mut monitor = FlightMonitor::new();
        let mut state = state_at(-0.05, 0.8);
        state.simulation_time = 12.3;

        monitor.evaluate_transition(&mut state, &dynamics);

        assert_eq!(monitor.get_current_status(), FlightStatus::Landed);
        assert_eq!(monitor.get_last_status_change(), 12.3);
        assert_eq!(state.velocity, na::Vector3::zeros());
        assert!((state.position.magnitude() - R_MARS).abs() < 1e-6);
    }

    #[test]
    fn hard_touchdown_crashes() {
        let dynamics = LanderDynamics::new(Constants::default());
        let mut monitor = FlightMonitor::new();
        let mut state = state_at(-0.5, 20.0);

        monitor.evaluate_transition(&mut state, &dynamics);
        assert_eq!(monitor.get_current_status(), FlightStatus::Crashed);
    }

    #[test]
    fn sideways_touchdown_crashes() {
        let dynamics = LanderDynamics::new(Constants::default());
        let mut monitor = FlightMonitor::new();
        let mut state = state_at(-0.1, 0.2);
        state.velocity.x = 3.0;

        monitor.evaluate_transition(&mut state, &dynamics);
        assert_eq!(monitor.get_current_status(), FlightStatus::Crashed);
    }

    #[test]
    fn airborne_lander_keeps_flying() {
        let dynamics = LanderDynamics::new(Constants::default());
        let mut monitor = FlightMonitor::new();
        let mut state = state_at(1_000.0, 80.0);

        monitor.evaluate_transition(&mut state, &dynamics);
        assert_eq!(monitor.get_current_status(), FlightStatus::Flying);
        assert_eq!(state.velocity.y, 80.0);
    }

    #[test]
    fn parachute_is_lost_at_high_speed_in_atmosphere() {
        let dynamics = LanderDynamics::new(Constants::default());
        let mut monitor = FlightMonitor::new();
        let mut state = state_at(50_000.0, 900.0);

        assert!(!safe_to_deploy_parachute(&state, &dynamics));
        assert!(monitor.command_parachute(&mut state));
        monitor.evaluate_transition(&mut state, &dynamics);
        assert_eq!(state.parachute_status, ParachuteStatus::Lost);

        // Monotonic: a lost parachute cannot be redeployed
        assert!(!monitor.command_parachute(&mut state));
        assert_eq!(state.parachute_status, ParachuteStatus::Lost);
    }

    #[test]
    fn parachute_survives_gentle_descent() {
        let dynamics = LanderDynamics::new(Constants::default());
        let mut monitor = FlightMonitor::new();
        let mut state = state_at(5_000.0, 60.0);

        assert!(safe_to_deploy_parachute(&state, &dynamics));
        assert!(monitor.command_parachute(&mut state));
        monitor.evaluate_transition(&mut state, &dynamics);
        assert_eq!(state.parachute_status, ParachuteStatus::Deployed);
    }

    #[test]
    fn fast_above_exosphere_is_safe() {
        let dynamics = LanderDynamics::new(Constants::default());
        let state = state_at(300_000.0, 3_000.0);
        assert!(safe_to_deploy_parachute(&state, &dynamics));
    }
}
