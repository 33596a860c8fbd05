use crate::constants::PI;
use nalgebra as na;

pub struct OrbitalMechanics;

impl OrbitalMechanics {
    pub fn compute_orbital_period(mu: f64, a: f64) -> f64 {
        2.0 * PI * (a.powi(3) / mu).sqrt()
    }

    pub fn compute_circular_velocity(mu: f64, r: f64) -> f64 {
        (mu / r).sqrt()
    }

    pub fn compute_escape_velocity(mu: f64, r: f64) -> f64 {
        (2.0 * mu / r).sqrt()
    }

    /// Apoapsis and periapsis radii of the osculating orbit.
    pub fn compute_apsides(mu: f64, r: &na::Vector3<f64>, v: &na::Vector3<f64>) -> (f64, f64) {
        let r_mag = r.magnitude();
        let v_mag = v.magnitude();
        let specific_energy = (v_mag * v_mag / 2.0) - mu / r_mag;
        let h = r.cross(v);
        let h_mag2 = h.dot(&h);

        let a = -mu / (2.0 * specific_energy);
        let e = (1.0 + (2.0 * specific_energy * h_mag2) / (mu * mu)).max(0.0).sqrt();

        (a * (1.0 + e), a * (1.0 - e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{G, M_MARS, R_MARS};
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(1.2 * R_MARS, 3247.087; "scenario orbit radius")]
    #[test_case(R_MARS, 3557.0; "surface")]
    fn compute_circular_velocity(r: f64, expected: f64) {
        let result = OrbitalMechanics::compute_circular_velocity(G * M_MARS, r);
        assert_abs_diff_eq!(result, expected, epsilon = 1.0);
    }

    #[test]
    fn escape_is_root_two_times_circular() {
        let mu = G * M_MARS;
        let ratio = OrbitalMechanics::compute_escape_velocity(mu, R_MARS)
            / OrbitalMechanics::compute_circular_velocity(mu, R_MARS);
        assert_abs_diff_eq!(ratio, 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn circular_orbit_apsides_coincide() {
        let mu = G * M_MARS;
        let r = 1.2 * R_MARS;
        let v = OrbitalMechanics::compute_circular_velocity(mu, r);
        let (ra, rp) = OrbitalMechanics::compute_apsides(
            mu,
            &na::Vector3::new(r, 0.0, 0.0),
            &na::Vector3::new(0.0, -v, 0.0),
        );
        assert_abs_diff_eq!(ra, r, epsilon = 1.0);
        assert_abs_diff_eq!(rp, r, epsilon = 1.0);
    }

    #[test]
    fn period_matches_circumference_over_speed() {
        let mu = G * M_MARS;
        let r = 1.2 * R_MARS;
        let v = OrbitalMechanics::compute_circular_velocity(mu, r);
        assert_abs_diff_eq!(
            OrbitalMechanics::compute_orbital_period(mu, r),
            2.0 * PI * r / v,
            epsilon = 1e-6
        );
    }
}
