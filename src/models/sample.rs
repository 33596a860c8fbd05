use serde::Serialize;

/// One row of the autopilot trajectory log.
///
/// The three controller columns are gain-weighted contributions to the raw output
/// (`Kp·e`, `Ki·∫e dt`, `Kd·de/dt`), so they sum to the value fed to the throttle saturation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    #[serde(rename = "Time (s)")]
    pub time: f64,
    #[serde(rename = "Altitude (m)")]
    pub altitude: f64,
    #[serde(rename = "Descent Rate (m/s)")]
    pub descent_rate: f64,
    #[serde(rename = "Throttle")]
    pub throttle: f64,
    #[serde(rename = "Proportional")]
    pub proportional: f64,
    #[serde(rename = "Integral")]
    pub integral: f64,
    #[serde(rename = "Derivative")]
    pub derivative: f64,
}
