pub mod flight_states;
pub mod state_machine;

pub use flight_states::FlightStatus;
pub use state_machine::{safe_to_deploy_parachute, FlightMonitor};
