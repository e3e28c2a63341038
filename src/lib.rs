pub mod config;
pub mod constants;
pub mod error;
pub mod fsm;
pub mod gnc;
pub mod integrators;
pub mod models;
pub mod physics;
pub mod scenarios;
pub mod simulation;
pub mod telemetry;

pub use config::Constants;
pub use error::SimulationError;
pub use models::SimulationState;
pub use scenarios::{initialize_scenario, initialize_scenario_with};
pub use simulation::{tick, FlightReport, FlightRunner, RunConfig, Simulator};
