use approx::assert_abs_diff_eq;
use mars_lander::config::Constants;
use mars_lander::fsm::FlightStatus;
use mars_lander::integrators::{IntegrationPolicy, Phase};
use mars_lander::physics::energy::{calculate_angular_momentum, calculate_energy};
use mars_lander::physics::orbital::OrbitalMechanics;
use mars_lander::physics::EquationsOfMotion;
use mars_lander::scenarios::{initialize_scenario, initialize_scenario_with, reinitialize};
use mars_lander::simulation::{tick, FlightReport, FlightRunner, RunConfig, Simulator};
use mars_lander::telemetry::{TelemetryRecord, TelemetryWriter};
use mars_lander::SimulationState;

fn orbit_for_one_period(policy: IntegrationPolicy) -> (SimulationState, SimulationState) {
    let constants = Constants::default();
    let simulator = Simulator::new(constants);
    let initial = initialize_scenario_with(0, policy).unwrap();
    let period =
        OrbitalMechanics::compute_orbital_period(initial.position.magnitude(), &constants.planet);

    let mut state = initial.clone();
    let ticks = (period / state.delta_t).round() as usize;
    for _ in 0..ticks {
        simulator.tick(&mut state);
    }
    (initial, state)
}

fn relative_drift(initial: &SimulationState, last: &SimulationState) -> (f64, f64) {
    let planet = Constants::default().planet;
    let e0 = calculate_energy(initial, &planet);
    let h0 = calculate_angular_momentum(initial);
    let energy = (calculate_energy(last, &planet) - e0).abs() / e0.abs();
    let momentum = (calculate_angular_momentum(last) - h0).magnitude() / h0.magnitude();
    (energy, momentum)
}

fn fly(scenario: usize, autopilot: bool, parachute: bool) -> FlightReport {
    let mut state = initialize_scenario(scenario).unwrap();
    state.autopilot_enabled = autopilot;
    let config = RunConfig {
        deploy_parachute_when_safe: parachute,
        ..RunConfig::default()
    };
    let mut runner = FlightRunner::new(Simulator::new(Constants::default()), state, config).unwrap();
    runner.run(&mut Vec::<TelemetryRecord>::new()).unwrap()
}

#[test]
fn circular_orbit_closes_after_one_period() {
    let (initial, last) = orbit_for_one_period(IntegrationPolicy::BootstrappedLeapfrog);
    let (energy, momentum) = relative_drift(&initial, &last);

    assert!(energy < 1e-2, "energy drift {}", energy);
    assert!(momentum < 1e-2, "angular momentum drift {}", momentum);
    assert!((last.position - initial.position).magnitude() < 1_000.0);
}

#[test]
fn euler_policy_keeps_circular_orbit_bounded() {
    let (initial, last) = orbit_for_one_period(IntegrationPolicy::Euler);
    let (energy, momentum) = relative_drift(&initial, &last);

    assert!(energy < 1e-2, "energy drift {}", energy);
    assert!(momentum < 1e-2, "angular momentum drift {}", momentum);
    assert_eq!(last.integrator.phase(), Phase::Bootstrap);
}

#[test]
fn first_tick_after_initialization_is_an_euler_step() {
    let constants = Constants::default();
    let simulator = Simulator::new(constants);

    let mut state = initialize_scenario(2).unwrap();
    for _ in 0..100 {
        tick(&mut state, &constants);
    }
    assert!(state.simulation_time > 9.9);
    assert!(matches!(state.integrator.phase(), Phase::Steady { .. }));

    reinitialize(&mut state, 2).unwrap();
    let (p, v, dt) = (state.position, state.velocity, state.delta_t);
    let a = simulator.dynamics().acceleration(&state);
    tick(&mut state, &constants);

    assert_eq!(state.position, p + v * dt + 0.5 * a * dt * dt);
    assert_eq!(state.velocity, v + a * dt);
    assert_eq!(state.integrator.previous_position(), Some(p));
}

#[test]
fn autopilot_lands_softly_from_10km() {
    let report = fly(1, true, false);

    assert_eq!(report.status, FlightStatus::Landed);
    assert!(report.touchdown_descent_rate.unwrap() < 1.0);
    assert!(report.touchdown_ground_speed.unwrap() < 1.0);
    assert!(report.fuel_remaining > 0.0);
    assert!(report.flight_time > 100.0);
}

#[test]
fn parachute_saves_fuel_on_an_autopilot_descent() {
    let powered = fly(1, true, false);
    let assisted = fly(1, true, true);

    assert_eq!(assisted.status, FlightStatus::Landed);
    assert!(assisted.fuel_remaining > powered.fuel_remaining);
}

#[test]
fn parachute_slows_an_unpowered_descent() {
    let free_fall = fly(1, false, false);
    let under_canopy = fly(1, false, true);

    assert_eq!(free_fall.status, FlightStatus::Crashed);
    assert!(
        under_canopy.touchdown_descent_rate.unwrap() < 0.5 * free_fall.touchdown_descent_rate.unwrap()
    );
    assert_abs_diff_eq!(under_canopy.fuel_remaining, 1.0);
}

#[test]
fn telemetry_csv_covers_the_whole_flight() {
    let state = initialize_scenario(1).unwrap();
    let config = RunConfig {
        sample_interval: 50,
        ..RunConfig::default()
    };
    let mut runner = FlightRunner::new(Simulator::new(Constants::default()), state, config).unwrap();
    let mut writer = TelemetryWriter::new(Vec::new());
    let report = runner.run(&mut writer).unwrap();
    let bytes = writer.into_inner().unwrap();

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let rows: Vec<TelemetryRecord> = reader.deserialize().collect::<Result<_, _>>().unwrap();

    assert_eq!(rows.first().map(|r| r.time), Some(0.0));
    assert_abs_diff_eq!(rows[0].altitude, 10_000.0, epsilon = 1e-6);
    let last = rows.last().unwrap();
    assert_eq!(last.status, report.status.to_string());
    assert_abs_diff_eq!(last.time, report.flight_time, epsilon = 1e-9);
    assert!(rows.windows(2).all(|pair| pair[0].time < pair[1].time));
}
