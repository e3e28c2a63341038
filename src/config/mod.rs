pub mod lander;
pub mod planet;

pub use lander::LanderSpec;
pub use planet::Planet;

use serde::{Deserialize, Serialize};

/// Immutable physical and vehicle constants shared by every tick of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constants {
    pub planet: Planet,
    pub lander: LanderSpec,
}

impl Constants {
    pub const fn new(planet: Planet, lander: LanderSpec) -> Self {
        Self { planet, lander }
    }

    /// Engine thrust at full throttle: 1.5 times the fully fuelled weight at the surface.
    pub fn max_thrust(&self) -> f64 {
        1.5 * self.lander.wet_mass() * self.planet.surface_gravity()
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self::new(Planet::MARS, LanderSpec::MARS_LANDER)
    }
}
