use crate::error::SimulationError;
use crate::fsm::FlightStatus;
use crate::models::{LanderProperties, SimulationState};
use crate::physics::energy::calculate_energy;
use crate::physics::{Atmosphere, AttitudeKinematics, LanderDynamics};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// One sampled row of flight telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    #[serde(rename = "Time (s)")]
    pub time: f64,
    #[serde(rename = "Altitude (m)")]
    pub altitude: f64,
    #[serde(rename = "Position X (m)")]
    pub position_x: f64,
    #[serde(rename = "Position Y (m)")]
    pub position_y: f64,
    #[serde(rename = "Position Z (m)")]
    pub position_z: f64,
    #[serde(rename = "Velocity X (m/s)")]
    pub velocity_x: f64,
    #[serde(rename = "Velocity Y (m/s)")]
    pub velocity_y: f64,
    #[serde(rename = "Velocity Z (m/s)")]
    pub velocity_z: f64,
    #[serde(rename = "Climb Rate (m/s)")]
    pub climb_rate: f64,
    #[serde(rename = "Ground Speed (m/s)")]
    pub ground_speed: f64,
    #[serde(rename = "Throttle")]
    pub throttle: f64,
    #[serde(rename = "Fuel")]
    pub fuel: f64,
    #[serde(rename = "Mass (kg)")]
    pub mass: f64,
    #[serde(rename = "Parachute")]
    pub parachute: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Specific Energy (J/kg)")]
    pub specific_energy: f64,
}

impl TelemetryRecord {
    pub fn capture<A: Atmosphere, K: AttitudeKinematics>(
        state: &SimulationState,
        dynamics: &LanderDynamics<A, K>,
        status: FlightStatus,
    ) -> Self {
        let constants = dynamics.constants();
        TelemetryRecord {
            time: state.simulation_time,
            altitude: constants.planet.altitude(&state.position),
            position_x: state.position.x,
            position_y: state.position.y,
            position_z: state.position.z,
            velocity_x: state.velocity.x,
            velocity_y: state.velocity.y,
            velocity_z: state.velocity.z,
            climb_rate: state.radial_velocity(),
            ground_speed: state.ground_speed(),
            throttle: dynamics.effective_throttle(state),
            fuel: state.fuel,
            mass: constants.lander.mass(state.fuel),
            parachute: state.parachute_status.to_string(),
            status: status.to_string(),
            specific_energy: calculate_energy(state, &constants.planet),
        }
    }
}

/// Destination for sampled telemetry.
pub trait TelemetrySink {
    fn record(&mut self, record: &TelemetryRecord) -> Result<(), SimulationError>;
}

impl TelemetrySink for Vec<TelemetryRecord> {
    fn record(&mut self, record: &TelemetryRecord) -> Result<(), SimulationError> {
        self.push(record.clone());
        Ok(())
    }
}

/// CSV telemetry with a header row.
pub struct TelemetryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl TelemetryWriter<File> {
    /// Creates the file, and any missing parent directories.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> TelemetryWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(inner),
        }
    }

    pub fn flush(&mut self) -> Result<(), SimulationError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W, SimulationError> {
        self.writer
            .into_inner()
            .map_err(|err| SimulationError::IoError(err.into_error()))
    }
}

impl<W: Write> TelemetrySink for TelemetryWriter<W> {
    fn record(&mut self, record: &TelemetryRecord) -> Result<(), SimulationError> {
        self.writer.serialize(record)?;
        Ok(())
    }
}
