use super::{AutopilotGains, VehicleParameters};
use crate::constants::{EXOSPHERE, LANDER_SIZE, R_MARS};
use crate::error::SimError;
use crate::integrators::IntegrationScheme;
use crate::models::{LanderState, ParachuteStatus};
use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Named initial conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    CircularOrbit,
    DescentFrom10km,
    EllipticalPlaneChange,
    EscapeLaunch,
    AtmosphereClipping,
    DescentFromExosphere,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::CircularOrbit,
        Scenario::DescentFrom10km,
        Scenario::EllipticalPlaneChange,
        Scenario::EscapeLaunch,
        Scenario::AtmosphereClipping,
        Scenario::DescentFromExosphere,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::CircularOrbit => "circular-orbit",
            Scenario::DescentFrom10km => "descent-10km",
            Scenario::EllipticalPlaneChange => "elliptical-orbit",
            Scenario::EscapeLaunch => "escape-launch",
            Scenario::AtmosphereClipping => "atmosphere-clipping",
            Scenario::DescentFromExosphere => "exosphere-descent",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::CircularOrbit => "circular orbit",
            Scenario::DescentFrom10km => "descent from 10km",
            Scenario::EllipticalPlaneChange => "elliptical orbit, thrust changes orbital plane",
            Scenario::EscapeLaunch => "polar launch at escape velocity (but drag prevents escape)",
            Scenario::AtmosphereClipping => {
                "elliptical orbit that clips the atmosphere and decays"
            }
            Scenario::DescentFromExosphere => "descent from 200km",
        }
    }

    pub fn config(&self) -> ScenarioConfig {
        let base = ScenarioConfig {
            description: self.description().to_string(),
            ..ScenarioConfig::blank()
        };

        match self {
            Scenario::CircularOrbit => ScenarioConfig {
                position: [1.2 * R_MARS, 0.0, 0.0],
                velocity: [0.0, -3247.087385863725, 0.0],
                orientation: [0.0, 90.0, 0.0],
                duration: 10_000.0,
                ..base
            },
            Scenario::DescentFrom10km => ScenarioConfig {
                position: [0.0, -(R_MARS + 10_000.0), 0.0],
                orientation: [0.0, 0.0, 90.0],
                duration: 1_000.0,
                stabilized_attitude: true,
                ..base
            },
            Scenario::EllipticalPlaneChange => ScenarioConfig {
                position: [0.0, 0.0, 1.2 * R_MARS],
                velocity: [3500.0, 0.0, 0.0],
                orientation: [0.0, 0.0, 90.0],
                duration: 20_000.0,
                ..base
            },
            Scenario::EscapeLaunch => ScenarioConfig {
                position: [0.0, 0.0, R_MARS + LANDER_SIZE / 2.0],
                velocity: [0.0, 0.0, 5027.0],
                duration: 20_000.0,
                ..base
            },
            Scenario::AtmosphereClipping => ScenarioConfig {
                position: [0.0, 0.0, R_MARS + 100_000.0],
                velocity: [4000.0, 0.0, 0.0],
                orientation: [0.0, 90.0, 0.0],
                duration: 50_000.0,
                ..base
            },
            Scenario::DescentFromExosphere => ScenarioConfig {
                position: [0.0, -(R_MARS + EXOSPHERE), 0.0],
                orientation: [0.0, 0.0, 90.0],
                duration: 5_000.0,
                stabilized_attitude: true,
                ..base
            },
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Scenario {
    type Err = SimError;

    /// Accepts a menu index or a scenario name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index)
                .ok_or_else(|| SimError::Config(format!("no scenario with index {}", index)));
        }
        Self::ALL
            .iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| SimError::Config(format!("unknown scenario '{}'", s)))
    }
}

/// Everything needed to start a run: initial state, scheme, mode flags and constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub description: String,
    pub position: [f64; 3],    // m
    pub velocity: [f64; 3],    // m/s
    pub orientation: [f64; 3], // xyz Euler angles, degrees
    pub time_step: f64,        // s
    pub duration: f64,         // s
    pub scheme: IntegrationScheme,
    pub autopilot_enabled: bool,
    pub stabilized_attitude: bool,
    pub parachute_status: ParachuteStatus,
    pub fuel_fraction: f64,
    pub throttle: f64,
    pub gains: AutopilotGains,
    pub vehicle: VehicleParameters,
}

impl ScenarioConfig {
    fn blank() -> Self {
        Self {
            description: String::new(),
            position: [0.0; 3],
            velocity: [0.0; 3],
            orientation: [0.0; 3],
            time_step: 0.1,
            duration: 1_000.0,
            scheme: IntegrationScheme::Verlet,
            autopilot_enabled: false,
            stabilized_attitude: false,
            parachute_status: ParachuteStatus::NotDeployed,
            fuel_fraction: 1.0,
            throttle: 0.0,
            gains: AutopilotGains::default(),
            vehicle: VehicleParameters::default(),
        }
    }

    pub fn from_ron_str(content: &str) -> Result<Self, SimError> {
        let config: ScenarioConfig = ron::de::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Only guards what would break the numerics; physical plausibility is not checked.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.time_step > 0.0) {
            return Err(SimError::InvalidTimeStep(self.time_step));
        }
        if !(self.duration > 0.0) {
            return Err(SimError::Config("duration must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.fuel_fraction) {
            return Err(SimError::Config("fuel_fraction must be in [0, 1]".into()));
        }
        if !(0.0..=1.0).contains(&self.throttle) {
            return Err(SimError::Config("throttle must be in [0, 1]".into()));
        }
        if self.position == [0.0; 3] {
            return Err(SimError::ZeroPosition);
        }
        if !(self.vehicle.max_thrust > 0.0) {
            return Err(SimError::Config("max_thrust must be > 0".into()));
        }
        Ok(())
    }

    pub fn initial_state(&self) -> LanderState {
        let mut state = LanderState::new(
            na::Vector3::from(self.position),
            na::Vector3::from(self.velocity),
            na::Vector3::from(self.orientation),
            self.time_step,
        );
        state.fuel_fraction = self.fuel_fraction;
        state.throttle = self.throttle;
        state.parachute_status = self.parachute_status;
        state
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Scenario::DescentFrom10km.config()
    }
}

impl From<Scenario> for ScenarioConfig {
    fn from(scenario: Scenario) -> Self {
        scenario.config()
    }
}
