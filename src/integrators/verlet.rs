use nalgebra as na;

/// Seeding step: `p + v dt + ½ a dt²`, `v + a dt`.
pub fn bootstrap(
    position: &na::Vector3<f64>,
    velocity: &na::Vector3<f64>,
    acceleration: &na::Vector3<f64>,
    dt: f64,
) -> (na::Vector3<f64>, na::Vector3<f64>) {
    let new_position = position + velocity * dt + 0.5 * acceleration * dt * dt;
    let new_velocity = velocity + acceleration * dt;
    (new_position, new_velocity)
}

/// Position Verlet with a central-difference velocity.
///
/// The returned velocity is centred on `position`, i.e. one step behind the returned
/// position, but second-order accurate.
pub fn steady(
    position: &na::Vector3<f64>,
    previous_position: &na::Vector3<f64>,
    acceleration: &na::Vector3<f64>,
    dt: f64,
) -> (na::Vector3<f64>, na::Vector3<f64>) {
    let new_position = 2.0 * position - previous_position + acceleration * dt * dt;
    let new_velocity = (new_position - previous_position) / (2.0 * dt);
    (new_position, new_velocity)
}
