pub mod attitude;
pub mod drag;
pub mod dynamics;
pub mod energy;
pub mod environment;
pub mod gravity;
pub mod orbital;

pub use attitude::{AttitudeKinematics, EulerAttitude};
pub use dynamics::{EquationsOfMotion, ForceBreakdown, LanderDynamics};
pub use environment::{Atmosphere, ExponentialAtmosphere, Vacuum};
