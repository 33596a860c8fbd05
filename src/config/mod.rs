pub mod autopilot;
pub mod lander;
pub mod scenario;

pub use autopilot::AutopilotGains;
pub use lander::VehicleParameters;
pub use scenario::{Scenario, ScenarioConfig};
