use crate::error::SimError;
use crate::physics::attitude::matrix_to_xyz_euler;
use nalgebra as na;

const SMALL_NUM: f64 = 1e-7;

/// Orientation that points the thrust axis radially outward, so the base faces the planet
/// centre and the engine brakes the descent.
pub fn stabilized_orientation(position: &na::Vector3<f64>) -> Result<na::Vector3<f64>, SimError> {
    let up = position.try_normalize(0.0).ok_or(SimError::ZeroPosition)?;

    // Any direction perpendicular to up will do for the lander's y axis
    let mut left = na::Vector3::new(-up.y, up.x, 0.0);
    if left.magnitude() < SMALL_NUM {
        left = na::Vector3::new(-up.z, 0.0, up.x);
    }
    let left = left.normalize();
    let out = left.cross(&up);

    let lander_to_world = na::Matrix3::from_columns(&[out, left, up]);
    Ok(matrix_to_xyz_euler(&lander_to_world))
}
