use crate::error::SimError;
use nalgebra as na;

/// Acceleration towards the planet centre for a point at `position`.
pub fn gravity_acceleration(
    mu: f64,
    position: &na::Vector3<f64>,
) -> Result<na::Vector3<f64>, SimError> {
    let r: f64 = position.magnitude();
    if r == 0.0 {
        return Err(SimError::ZeroPosition);
    }
    Ok(-mu * position / (r * r * r))
}

/// Newtonian gravitational force, `-mu * m * r / |r|³`.
pub fn gravitational_force(
    mu: f64,
    mass: f64,
    position: &na::Vector3<f64>,
) -> Result<na::Vector3<f64>, SimError> {
    Ok(gravity_acceleration(mu, position)? * mass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{G, M_MARS, R_MARS};
    use approx::assert_abs_diff_eq;
    use nalgebra as na;
    use test_case::test_case;

    #[test_case(
        na::Vector3::new(R_MARS, 0.0, 0.0), // Mars surface
        na::Vector3::new(-3.737, 0.0, 0.0); // Expected acceleration
        "gravity at the surface"
    )]
    #[test_case(
        na::Vector3::new(0.0, -(R_MARS + 10_000.0), 0.0), // 10 km altitude
        na::Vector3::new(0.0, 3.715, 0.0);
        "gravity at 10 km altitude"
    )]
    #[test_case(
        na::Vector3::new(0.0, 0.0, 1.2 * R_MARS),
        na::Vector3::new(0.0, 0.0, -2.595);
        "gravity at 1.2 planet radii"
    )]
    fn test_gravity_acceleration(position: na::Vector3<f64>, expected: na::Vector3<f64>) {
        let result = gravity_acceleration(G * M_MARS, &position).unwrap();
        assert_abs_diff_eq!(result, expected, epsilon = 1e-3);
    }

    #[test]
    fn force_scales_with_mass() {
        let position = na::Vector3::new(R_MARS, 0.0, 0.0);
        let light = gravitational_force(G * M_MARS, 100.0, &position).unwrap();
        let heavy = gravitational_force(G * M_MARS, 200.0, &position).unwrap();
        assert_abs_diff_eq!(heavy, light * 2.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_position_is_rejected() {
        let result = gravitational_force(G * M_MARS, 100.0, &na::Vector3::zeros());
        assert!(matches!(result, Err(SimError::ZeroPosition)));
    }
}
