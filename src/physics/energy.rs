use crate::config::Planet;
use crate::models::SimulationState;
use nalgebra as na;

/// Specific orbital energy (J/kg): kinetic plus gravitational potential per unit mass.
pub fn calculate_energy(state: &SimulationState, planet: &Planet) -> f64 {
    let r = state.position.magnitude();
    let v = state.velocity.magnitude();

    let kinetic = 0.5 * v * v;
    let potential = -planet.mu() / r;

    kinetic + potential
}

/// Specific angular momentum r × v (m²/s).
pub fn calculate_angular_momentum(state: &SimulationState) -> na::Vector3<f64> {
    state.position.cross(&state.velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::R_MARS;
    use crate::integrators::IntegrationPolicy;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    fn state(position: na::Vector3<f64>, velocity: na::Vector3<f64>) -> SimulationState {
        SimulationState::new(position, velocity, na::Vector3::zeros(), 0.1, IntegrationPolicy::Euler)
    }

    #[test_case(
        state(na::Vector3::new(R_MARS, 0.0, 0.0), na::Vector3::zeros()),
        -12_652_291.79;
        "at rest on the surface"
    )]
    #[test_case(
        state(na::Vector3::new(1.2 * R_MARS, 0.0, 0.0), na::Vector3::new(0.0, -3247.087385863725, 0.0)),
        -5_271_788.25;
        "circular orbit at 1.2 radii"
    )]
    fn test_energy(state: SimulationState, expected_energy: f64) {
        assert_abs_diff_eq!(calculate_energy(&state, &Planet::MARS), expected_energy, epsilon = 1e-1);
    }

    #[test_case(
        state(na::Vector3::new(R_MARS, 0.0, 0.0), na::Vector3::zeros()),
        na::Vector3::new(0.0, 0.0, 0.0);
        "zero angular momentum at rest"
    )]
    #[test_case(
        state(na::Vector3::new(1.2 * R_MARS, 0.0, 0.0), na::Vector3::new(0.0, -3247.087385863725, 0.0)),
        na::Vector3::new(0.0, 0.0, -1.3193565e10);
        "retrograde equatorial orbit"
    )]
    fn test_angular_momentum(state: SimulationState, expected_momentum: na::Vector3<f64>) {
        let result = calculate_angular_momentum(&state);
        assert_abs_diff_eq!(result, expected_momentum, epsilon = 1e3);
    }
}
