use crate::config::AutopilotGains;

/// Target radial velocity that shrinks linearly with altitude, reaching the baseline at touchdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentProfile {
    baseline_rate: f64,
    altitude_gain: f64,
}

impl DescentProfile {
    pub fn new(baseline_rate: f64, altitude_gain: f64) -> Self {
        Self {
            baseline_rate,
            altitude_gain,
        }
    }

    pub fn from_gains(gains: &AutopilotGains) -> Self {
        Self::new(gains.baseline_rate, gains.kh)
    }

    /// Desired descent rate at `altitude`, negative (descending).
    pub fn target_rate(&self, altitude: f64) -> f64 {
        -(self.baseline_rate + self.altitude_gain * altitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(0.0, -0.5; "touchdown")]
    #[test_case(1_000.0, -23.5; "one kilometre")]
    #[test_case(10_000.0, -230.5; "ten kilometres")]
    fn default_profile(altitude: f64, expected: f64) {
        let profile = DescentProfile::from_gains(&AutopilotGains::default());
        assert_abs_diff_eq!(profile.target_rate(altitude), expected, epsilon = 1e-9);
    }
}
