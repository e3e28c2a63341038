//! Preset initial conditions, indexed 0..9.

use crate::constants::{EXOSPHERE, LANDER_SIZE, R_MARS};
use crate::error::SimulationError;
use crate::integrators::IntegrationPolicy;
use crate::models::{ParachuteStatus, SimulationState};
use lazy_static::lazy_static;
use nalgebra as na;

pub const SCENARIO_SLOTS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioPreset {
    pub position: na::Vector3<f64>,
    pub velocity: na::Vector3<f64>,
    pub orientation: na::Vector3<f64>,
    pub delta_t: f64,
    pub parachute_status: ParachuteStatus,
    pub stabilized_attitude: bool,
    pub autopilot_enabled: bool,
    pub description: &'static str,
}

impl ScenarioPreset {
    fn coasting(
        position: na::Vector3<f64>,
        velocity: na::Vector3<f64>,
        orientation: na::Vector3<f64>,
        stabilized_attitude: bool,
        description: &'static str,
    ) -> Self {
        Self {
            position,
            velocity,
            orientation,
            delta_t: 0.1,
            parachute_status: ParachuteStatus::NotDeployed,
            stabilized_attitude,
            autopilot_enabled: false,
            description,
        }
    }

    /// Fresh state for this preset: full tank, engine off, clock at zero, engine bootstrapping.
    pub fn to_state(&self, policy: IntegrationPolicy) -> SimulationState {
        let mut state = SimulationState::new(
            self.position,
            self.velocity,
            self.orientation,
            self.delta_t,
            policy,
        );
        self.apply(&mut state);
        state
    }

    /// Overwrites `state` with this preset. The integration policy is kept; its position
    /// history is discarded.
    pub fn apply(&self, state: &mut SimulationState) {
        state.position = self.position;
        state.velocity = self.velocity;
        state.orientation = self.orientation;
        state.delta_t = self.delta_t;
        state.fuel = 1.0;
        state.throttle = 0.0;
        state.simulation_time = 0.0;
        state.parachute_status = self.parachute_status;
        state.stabilized_attitude = self.stabilized_attitude;
        state.autopilot_enabled = self.autopilot_enabled;
        state.integrator.reset();
    }
}

lazy_static! {
    static ref SCENARIOS: [Option<ScenarioPreset>; SCENARIO_SLOTS] = [
        Some(ScenarioPreset::coasting(
            na::Vector3::new(1.2 * R_MARS, 0.0, 0.0),
            na::Vector3::new(0.0, -3247.087385863725, 0.0),
            na::Vector3::new(0.0, 90.0, 0.0),
            false,
            "circular orbit",
        )),
        Some(ScenarioPreset::coasting(
            na::Vector3::new(0.0, -(R_MARS + 10_000.0), 0.0),
            na::Vector3::zeros(),
            na::Vector3::new(0.0, 0.0, 90.0),
            true,
            "descent from 10km",
        )),
        Some(ScenarioPreset::coasting(
            na::Vector3::new(0.0, 0.0, 1.2 * R_MARS),
            na::Vector3::new(3500.0, 0.0, 0.0),
            na::Vector3::new(0.0, 0.0, 90.0),
            false,
            "elliptical orbit, thrust changes orbital plane",
        )),
        Some(ScenarioPreset::coasting(
            na::Vector3::new(0.0, 0.0, R_MARS + LANDER_SIZE / 2.0),
            na::Vector3::new(0.0, 0.0, 5027.0),
            na::Vector3::zeros(),
            false,
            "polar launch at escape velocity (but drag prevents escape)",
        )),
        Some(ScenarioPreset::coasting(
            na::Vector3::new(0.0, 0.0, R_MARS + 100_000.0),
            na::Vector3::new(4000.0, 0.0, 0.0),
            na::Vector3::new(0.0, 90.0, 0.0),
            false,
            "elliptical orbit that clips the atmosphere and decays",
        )),
        Some(ScenarioPreset::coasting(
            na::Vector3::new(0.0, -(R_MARS + EXOSPHERE), 0.0),
            na::Vector3::zeros(),
            na::Vector3::new(0.0, 0.0, 90.0),
            true,
            "descent from 200km",
        )),
        None,
        None,
        None,
        None,
    ];
}

pub fn preset(index: usize) -> Result<&'static ScenarioPreset, SimulationError> {
    SCENARIOS
        .get(index)
        .and_then(Option::as_ref)
        .ok_or(SimulationError::UnsupportedScenario(index))
}

/// Populated presets with their indices.
pub fn available() -> impl Iterator<Item = (usize, &'static ScenarioPreset)> {
    SCENARIOS
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| slot.as_ref().map(|preset| (index, preset)))
}

pub fn initialize_scenario(index: usize) -> Result<SimulationState, SimulationError> {
    initialize_scenario_with(index, IntegrationPolicy::default())
}

pub fn initialize_scenario_with(
    index: usize,
    policy: IntegrationPolicy,
) -> Result<SimulationState, SimulationError> {
    let preset = preset(index)?;
    log::info!("Scenario {}: {} ({:?})", index, preset.description, policy);
    Ok(preset.to_state(policy))
}

/// Re-initializes a running simulation in place with preset `index`.
pub fn reinitialize(state: &mut SimulationState, index: usize) -> Result<(), SimulationError> {
    let preset = preset(index)?;
    log::info!("Scenario {}: {} (re-initialized)", index, preset.description);
    preset.apply(state);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrators::{IntegrationEngine, Phase};
    use test_case::test_case;

    #[test]
    fn descent_from_10km_matches_preset() {
        let state = initialize_scenario(1).unwrap();
        assert_eq!(state.position, na::Vector3::new(0.0, -(R_MARS + 10_000.0), 0.0));
        assert_eq!(state.velocity, na::Vector3::zeros());
        assert_eq!(state.orientation, na::Vector3::new(0.0, 0.0, 90.0));
        assert_eq!(state.delta_t, 0.1);
        assert_eq!(state.parachute_status, ParachuteStatus::NotDeployed);
        assert!(state.stabilized_attitude);
        assert!(!state.autopilot_enabled);
        assert_eq!(state.fuel, 1.0);
        assert_eq!(state.throttle, 0.0);
        assert_eq!(state.simulation_time, 0.0);
        assert_eq!(state.integrator.phase(), Phase::Bootstrap);
    }

    #[test_case(6; "first reserved slot")]
    #[test_case(9; "last reserved slot")]
    #[test_case(10; "outside the table")]
    fn unpopulated_slots_are_rejected(index: usize) {
        assert!(matches!(
            initialize_scenario(index),
            Err(SimulationError::UnsupportedScenario(i)) if i == index
        ));
    }

    #[test]
    fn six_presets_are_available() {
        let indices: Vec<usize> = available().map(|(index, _)| index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
        for (_, preset) in available() {
            assert!(!preset.description.is_empty());
            assert!(preset.position.magnitude() > 0.0);
        }
    }

    #[test]
    fn reinitialize_discards_history() {
        let mut state = initialize_scenario(0).unwrap();
        state.integrator = IntegrationEngine::resume(state.position);
        state.simulation_time = 420.0;
        state.fuel = 0.3;
        state.throttle = 0.9;
        state.parachute_status = ParachuteStatus::Lost;

        reinitialize(&mut state, 1).unwrap();

        let expected = initialize_scenario(1).unwrap();
        assert_eq!(state.position, expected.position);
        assert_eq!(state.velocity, expected.velocity);
        assert_eq!(state.orientation, expected.orientation);
        assert_eq!(state.fuel, 1.0);
        assert_eq!(state.throttle, 0.0);
        assert_eq!(state.simulation_time, 0.0);
        assert_eq!(state.parachute_status, ParachuteStatus::NotDeployed);
        assert!(state.stabilized_attitude);
        assert_eq!(state.integrator.phase(), Phase::Bootstrap);
    }

    #[test]
    fn reinitialize_keeps_policy_and_rejects_empty_slots() {
        let mut state = initialize_scenario_with(2, IntegrationPolicy::Euler).unwrap();
        reinitialize(&mut state, 0).unwrap();
        assert_eq!(state.integrator.policy(), IntegrationPolicy::Euler);

        assert!(matches!(
            reinitialize(&mut state, 7),
            Err(SimulationError::UnsupportedScenario(7))
        ));
        assert_eq!(state.position, preset(0).unwrap().position);
    }

    #[test]
    fn policy_is_carried_into_state() {
        let state = initialize_scenario_with(0, IntegrationPolicy::Euler).unwrap();
        assert_eq!(state.integrator.policy(), IntegrationPolicy::Euler);
        assert!(state.validate().is_ok());
    }
}
