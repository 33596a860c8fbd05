use nalgebra as na;

/// Rotation taking lander-frame vectors into the planet frame.
/// `orientation` holds xyz Euler angles in degrees, applied as Rx * Ry * Rz.
pub fn lander_to_world(orientation: &na::Vector3<f64>) -> na::Rotation3<f64> {
    let rx = na::Rotation3::from_axis_angle(&na::Vector3::x_axis(), orientation.x.to_radians());
    let ry = na::Rotation3::from_axis_angle(&na::Vector3::y_axis(), orientation.y.to_radians());
    let rz = na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), orientation.z.to_radians());
    rx * ry * rz
}

/// Direction of engine thrust in the planet frame (the lander's +z axis).
pub fn thrust_axis(orientation: &na::Vector3<f64>) -> na::Vector3<f64> {
    lander_to_world(orientation) * na::Vector3::z()
}

/// Recovers xyz Euler angles (degrees) from a rotation matrix built as Rx * Ry * Rz.
pub fn matrix_to_xyz_euler(m: &na::Matrix3<f64>) -> na::Vector3<f64> {
    let sin_y = m[(0, 2)].clamp(-1.0, 1.0);
    let y = sin_y.asin();

    let (x, z) = if sin_y.abs() < 1.0 - 1e-12 {
        let x = (-m[(1, 2)]).atan2(m[(2, 2)]);
        let z = (-m[(0, 1)]).atan2(m[(0, 0)]);
        (x, z)
    } else {
        // Gimbal lock: roll about x is indistinguishable from z, fold it into z
        (0.0, m[(1, 0)].atan2(m[(1, 1)]))
    };

    na::Vector3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
}
