pub mod lander;
pub mod state;

pub use lander::LanderProperties;
pub use state::{ParachuteStatus, SimulationState};
