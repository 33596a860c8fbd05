use super::attitude::thrust_axis;
use nalgebra as na;

/// Engine force in the planet frame. Throttle outside [0, 1] is clamped.
pub fn thrust_force(
    throttle: f64,
    max_thrust: f64,
    orientation: &na::Vector3<f64>,
) -> na::Vector3<f64> {
    thrust_axis(orientation) * (max_thrust * throttle.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn throttle_scales_along_thrust_axis() {
        let orientation = na::Vector3::new(0.0, 90.0, 0.0);
        let f = thrust_force(0.25, 1000.0, &orientation);
        assert_abs_diff_eq!(f, na::Vector3::new(250.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn throttle_is_clamped() {
        let orientation = na::Vector3::zeros();
        assert_abs_diff_eq!(
            thrust_force(1.7, 1000.0, &orientation),
            na::Vector3::new(0.0, 0.0, 1000.0),
            epsilon = 1e-9
        );
        assert_eq!(thrust_force(-0.3, 1000.0, &orientation), na::Vector3::zeros());
    }
}
