use super::engine::Simulator;
use crate::error::SimulationError;
use crate::fsm::{safe_to_deploy_parachute, FlightMonitor, FlightStatus};
use crate::models::{ParachuteStatus, SimulationState};
use crate::physics::{Atmosphere, AttitudeKinematics};
use crate::telemetry::{TelemetryRecord, TelemetrySink};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfig {
    /// Simulated seconds after which a still-flying run is stopped
    pub max_time: f64,
    /// Telemetry is recorded every `sample_interval` ticks
    pub sample_interval: usize,
    pub deploy_parachute_when_safe: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_time: 20_000.0,
            sample_interval: 10,
            deploy_parachute_when_safe: false,
        }
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightReport {
    /// `Flying` when the time limit was reached first
    pub status: FlightStatus,
    pub flight_time: f64,
    pub ticks: usize,
    pub max_altitude: f64,
    pub touchdown_time: Option<f64>,
    pub touchdown_descent_rate: Option<f64>,
    pub touchdown_ground_speed: Option<f64>,
    pub fuel_remaining: f64,
    pub parachute_status: ParachuteStatus,
}

/// Host loop around [`Simulator::tick`]: fuel consumption, parachute, touchdown and telemetry.
pub struct FlightRunner<A: Atmosphere, K: AttitudeKinematics> {
    simulator: Simulator<A, K>,
    monitor: FlightMonitor,
    state: SimulationState,
    config: RunConfig,
    ticks: usize,
    max_altitude: f64,
    touchdown: Option<(f64, f64)>,
}

impl<A: Atmosphere, K: AttitudeKinematics> FlightRunner<A, K> {
    pub fn new(
        simulator: Simulator<A, K>,
        state: SimulationState,
        config: RunConfig,
    ) -> Result<Self, SimulationError> {
        state.validate()?;
        let max_altitude = simulator
            .dynamics()
            .constants()
            .planet
            .altitude(&state.position);

        Ok(Self {
            simulator,
            monitor: FlightMonitor::new(),
            state,
            config,
            ticks: 0,
            max_altitude,
            touchdown: None,
        })
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn status(&self) -> FlightStatus {
        self.monitor.get_current_status()
    }

    pub fn simulator(&self) -> &Simulator<A, K> {
        &self.simulator
    }

    /// Opens the parachute on request; returns whether it was opened.
    pub fn deploy_parachute(&mut self) -> bool {
        self.monitor.command_parachute(&mut self.state)
    }

    /// One tick plus the host bookkeeping around it.
    pub fn step(&mut self) -> FlightStatus {
        if self.status().is_terminal() {
            return self.status();
        }

        let dynamics = self.simulator.dynamics();
        let throttle = dynamics.effective_throttle(&self.state);
        let burnt = dynamics
            .constants()
            .lander
            .fuel_burnt(throttle, self.state.delta_t);

        self.simulator.tick(&mut self.state);
        self.ticks += 1;

        if self.state.fuel > 0.0 {
            self.state.fuel = (self.state.fuel - burnt).max(0.0);
            if self.state.fuel == 0.0 {
                log::warn!("Out of fuel at t={:.2}s", self.state.simulation_time);
            }
        }

        let dynamics = self.simulator.dynamics();
        if self.config.deploy_parachute_when_safe
            && self.state.parachute_status == ParachuteStatus::NotDeployed
            && safe_to_deploy_parachute(&self.state, dynamics)
        {
            let planet = &dynamics.constants().planet;
            if planet.altitude(&self.state.position) < planet.exosphere {
                self.monitor.command_parachute(&mut self.state);
            }
        }

        let altitude = dynamics.constants().planet.altitude(&self.state.position);
        self.max_altitude = self.max_altitude.max(altitude);

        let descent_rate = -self.state.radial_velocity();
        let ground_speed = self.state.ground_speed();
        self.monitor.evaluate_transition(&mut self.state, dynamics);

        let status = self.status();
        if status.is_terminal() {
            self.touchdown = Some((descent_rate, ground_speed));
        }
        status
    }

    /// Runs until touchdown or `max_time`, recording every `sample_interval` ticks.
    pub fn run<S: TelemetrySink>(&mut self, sink: &mut S) -> Result<FlightReport, SimulationError> {
        let interval = self.config.sample_interval.max(1);
        self.sample(sink)?;

        while !self.status().is_terminal() && self.state.simulation_time < self.config.max_time {
            let status = self.step();
            if status.is_terminal() || self.ticks % interval == 0 {
                self.sample(sink)?;
            }
        }

        if !self.status().is_terminal() {
            log::warn!(
                "Run stopped at t={:.1}s without touchdown",
                self.state.simulation_time
            );
        }

        Ok(self.report())
    }

    pub fn report(&self) -> FlightReport {
        FlightReport {
            status: self.status(),
            flight_time: self.state.simulation_time,
            ticks: self.ticks,
            max_altitude: self.max_altitude,
            touchdown_time: self
                .status()
                .is_terminal()
                .then(|| self.monitor.get_last_status_change()),
            touchdown_descent_rate: self.touchdown.map(|(rate, _)| rate),
            touchdown_ground_speed: self.touchdown.map(|(_, speed)| speed),
            fuel_remaining: self.state.fuel,
            parachute_status: self.state.parachute_status,
        }
    }

    fn sample<S: TelemetrySink>(&self, sink: &mut S) -> Result<(), SimulationError> {
        let record = TelemetryRecord::capture(&self.state, self.simulator.dynamics(), self.status());
        sink.record(&record)
    }
}
