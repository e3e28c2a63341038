pub mod autopilot;

pub use autopilot::Autopilot;
