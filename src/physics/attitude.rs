use nalgebra as na;

const SMALL_NUM: f64 = 1e-10;
/// Below this |cos(pitch)| the xyz decomposition is treated as gimbal-locked.
const GIMBAL_LOCK_COS: f64 = 1e-6;

/// Orientation-dependent parts of the lander that the translational model consumes.
pub trait AttitudeKinematics {
    /// Engine thrust in the planet frame for a throttle in [0, 1].
    fn thrust_in_world_frame(&self, throttle: f64, orientation: &na::Vector3<f64>) -> na::Vector3<f64>;

    /// Orientation that points the lander's base at the planet centre.
    fn stabilize(&self, position: &na::Vector3<f64>, orientation: &na::Vector3<f64>) -> na::Vector3<f64>;
}

/// Single engine along body +z; orientation given as xyz Euler angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAttitude {
    pub max_thrust: f64, // N
}

impl EulerAttitude {
    pub fn new(max_thrust: f64) -> Self {
        Self { max_thrust }
    }
}

impl AttitudeKinematics for EulerAttitude {
    fn thrust_in_world_frame(&self, throttle: f64, orientation: &na::Vector3<f64>) -> na::Vector3<f64> {
        xyz_euler_to_rotation(orientation) * na::Vector3::new(0.0, 0.0, throttle * self.max_thrust)
    }

    fn stabilize(&self, position: &na::Vector3<f64>, _orientation: &na::Vector3<f64>) -> na::Vector3<f64> {
        let up = position.normalize();

        // Any axis perpendicular to up will do for the body y axis
        let mut left = na::Vector3::new(-up.y, up.x, 0.0);
        if left.magnitude() < SMALL_NUM {
            left = na::Vector3::new(-up.z, 0.0, up.x);
        }
        let left = left.normalize();
        let out = left.cross(&up);

        let body_to_world = na::Matrix3::from_columns(&[out, left, up]);
        rotation_to_xyz_euler(&body_to_world)
    }
}

/// `Rz(γ) · Ry(β) · Rx(α)` for orientation `(α, β, γ)` in degrees.
pub fn xyz_euler_to_rotation(orientation: &na::Vector3<f64>) -> na::Rotation3<f64> {
    na::Rotation3::from_euler_angles(
        orientation.x.to_radians(),
        orientation.y.to_radians(),
        orientation.z.to_radians(),
    )
}

/// Inverse of [`xyz_euler_to_rotation`]. In gimbal lock the z angle is set to zero.
pub fn rotation_to_xyz_euler(m: &na::Matrix3<f64>) -> na::Vector3<f64> {
    let beta = (-m[(2, 0)]).clamp(-1.0, 1.0).asin();
    let (alpha, gamma) = if beta.cos().abs() > GIMBAL_LOCK_COS {
        (m[(2, 1)].atan2(m[(2, 2)]), m[(1, 0)].atan2(m[(0, 0)]))
    } else {
        let s = beta.sin().signum();
        ((s * m[(0, 1)]).atan2(s * m[(0, 2)]), 0.0)
    };
    na::Vector3::new(alpha.to_degrees(), beta.to_degrees(), gamma.to_degrees())
}
