pub mod engine;
pub mod runner;

pub use engine::{tick, Simulator};
pub use runner::{FlightReport, FlightRunner, RunConfig};
