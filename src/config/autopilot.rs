use serde::{Deserialize, Serialize};

/// Empirically tuned autopilot constants. None of these are derived; override them per scenario
/// rather than editing the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotGains {
    /// Target descent rate grows by this much per meter of altitude (1/s).
    pub kh: f64,
    pub kp: f64,
    pub kd: f64,
    pub ki: f64,
    /// Target descent rate at zero altitude (m/s).
    pub baseline_rate: f64,
    /// Integral accumulation only runs while |e| is below this bound.
    pub error_saturation_bound: f64,
    /// Parachute is only deployed at or below this altitude (m).
    pub deployment_ceiling: f64,
}

impl Default for AutopilotGains {
    fn default() -> Self {
        Self {
            kh: 23.0e-3,
            kp: 2.3e-1,
            kd: 0.5e-1,
            ki: 0.01e-3,
            baseline_rate: 0.5,
            error_saturation_bound: 600.0,
            deployment_ceiling: 10_000.0,
        }
    }
}
