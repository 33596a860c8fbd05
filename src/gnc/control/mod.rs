pub mod attitude_controller;
pub mod autopilot;

pub use attitude_controller::stabilized_orientation;
pub use autopilot::{saturate_throttle, Autopilot, AutopilotOutput, ControlTerms, ControllerState};
