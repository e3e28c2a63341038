use nalgebra as na;

/// Semi-implicit Euler: the updated velocity moves the position.
pub fn step(
    position: &na::Vector3<f64>,
    velocity: &na::Vector3<f64>,
    acceleration: &na::Vector3<f64>,
    dt: f64,
) -> (na::Vector3<f64>, na::Vector3<f64>) {
    let new_velocity = velocity + acceleration * dt;
    let new_position = position + new_velocity * dt;
    (new_position, new_velocity)
}
