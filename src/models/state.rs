use crate::config::VehicleParameters;
use crate::error::SimError;
use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParachuteStatus {
    #[default]
    NotDeployed,
    Deployed,
    Lost,
}

impl fmt::Display for ParachuteStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParachuteStatus::NotDeployed => write!(f, "Not Deployed"),
            ParachuteStatus::Deployed => write!(f, "Deployed"),
            ParachuteStatus::Lost => write!(f, "Lost"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanderState {
    // Planet-centred Cartesian frame
    pub position: na::Vector3<f64>, // m
    pub velocity: na::Vector3<f64>, // m/s

    // xyz Euler angles of the lander frame (degrees)
    pub orientation: na::Vector3<f64>,

    pub fuel_fraction: f64, // [0, 1]
    pub throttle: f64,      // [0, 1]
    pub parachute_status: ParachuteStatus,

    pub simulation_time: f64, // s
    pub time_step: f64,       // s
}

impl LanderState {
    pub fn new(
        position: na::Vector3<f64>,
        velocity: na::Vector3<f64>,
        orientation: na::Vector3<f64>,
        time_step: f64,
    ) -> Self {
        LanderState {
            position,
            velocity,
            orientation,
            fuel_fraction: 1.0,
            throttle: 0.0,
            parachute_status: ParachuteStatus::NotDeployed,
            simulation_time: 0.0,
            time_step,
        }
    }

    /// Unit vector pointing away from the planet centre.
    pub fn radial_unit(&self) -> Result<na::Vector3<f64>, SimError> {
        self.position
            .try_normalize(0.0)
            .ok_or(SimError::ZeroPosition)
    }

    pub fn altitude(&self, params: &VehicleParameters) -> f64 {
        params.altitude(self.position.magnitude())
    }

    /// Signed radial velocity, negative while descending.
    pub fn descent_rate(&self) -> Result<f64, SimError> {
        Ok(self.velocity.dot(&self.radial_unit()?))
    }

    /// Speed across the surface, ignoring planetary rotation.
    pub fn ground_speed(&self) -> Result<f64, SimError> {
        let radial = self.radial_unit()?;
        Ok((self.velocity - self.velocity.dot(&radial) * radial).magnitude())
    }

    pub fn mass(&self, params: &VehicleParameters) -> f64 {
        params.mass(self.fuel_fraction)
    }
}
