use crate::models::{LanderProperties, ParachuteStatus};
use nalgebra as na;

/// Quadratic drag on the lander body, plus the parachute when it is deployed.
///
/// Both terms act along `-velocity.normalize()`; at zero velocity there is nothing to
/// oppose and the force is zero.
pub fn drag_force<T: LanderProperties>(
    lander: &T,
    density: f64,
    velocity: &na::Vector3<f64>,
    parachute_status: ParachuteStatus,
) -> na::Vector3<f64> {
    let v_squared: f64 = velocity.magnitude_squared();
    if v_squared == 0.0 {
        return na::Vector3::zeros();
    }

    let mut force_magnitude: f64 =
        0.5 * density * lander.drag_coefficient() * lander.reference_area() * v_squared;
    if parachute_status == ParachuteStatus::Deployed {
        force_magnitude += chute_drag(lander, density, velocity);
    }

    -velocity.normalize() * force_magnitude
}

/// Magnitude of the drag an open parachute would produce at this density and velocity.
pub fn chute_drag<T: LanderProperties>(lander: &T, density: f64, velocity: &na::Vector3<f64>) -> f64 {
    0.5 * density
        * lander.chute_drag_coefficient()
        * lander.chute_reference_area()
        * velocity.magnitude_squared()
}
