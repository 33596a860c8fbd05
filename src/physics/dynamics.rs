use super::drag::{drag_coefficient_for, drag_force};
use super::gravity::gravitational_force;
use super::thrust::thrust_force;
use crate::config::VehicleParameters;
use crate::error::SimError;
use crate::models::LanderState;
use nalgebra as na;

pub trait EquationsOfMotion {
    /// Acceleration of the body at the given position and velocity.
    fn acceleration(
        &self,
        position: &na::Vector3<f64>,
        velocity: &na::Vector3<f64>,
    ) -> Result<na::Vector3<f64>, SimError>;
}

/// The three forces acting on the lander, kept apart for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub gravity: na::Vector3<f64>,
    pub drag: na::Vector3<f64>,
    pub thrust: na::Vector3<f64>,
}

impl ForceBreakdown {
    pub fn total(&self) -> na::Vector3<f64> {
        self.gravity + self.drag + self.thrust
    }
}

/// Throttle the engine can actually deliver; an empty tank produces nothing.
pub fn effective_throttle(state: &LanderState) -> f64 {
    if state.fuel_fraction <= 0.0 {
        0.0
    } else {
        state.throttle.clamp(0.0, 1.0)
    }
}

pub fn forces(
    state: &LanderState,
    params: &VehicleParameters,
    position: &na::Vector3<f64>,
    velocity: &na::Vector3<f64>,
) -> Result<ForceBreakdown, SimError> {
    let mass = state.mass(params);
    let cd = drag_coefficient_for(params, state.parachute_status);

    Ok(ForceBreakdown {
        gravity: gravitational_force(params.gravitational_parameter, mass, position)?,
        drag: drag_force(params, position, velocity, params.reference_area(), cd),
        thrust: thrust_force(effective_throttle(state), params.max_thrust, &state.orientation),
    })
}

/// Sum of gravity, drag and thrust on the lander in its current state.
pub fn net_force(state: &LanderState, params: &VehicleParameters) -> Result<na::Vector3<f64>, SimError> {
    Ok(forces(state, params, &state.position, &state.velocity)?.total())
}

/// Lander equations of motion with throttle, attitude, fuel and parachute frozen over a step.
pub struct LanderDynamics<'a> {
    state: &'a LanderState,
    params: &'a VehicleParameters,
}

impl<'a> LanderDynamics<'a> {
    pub fn new(state: &'a LanderState, params: &'a VehicleParameters) -> Self {
        Self { state, params }
    }
}

impl EquationsOfMotion for LanderDynamics<'_> {
    fn acceleration(
        &self,
        position: &na::Vector3<f64>,
        velocity: &na::Vector3<f64>,
    ) -> Result<na::Vector3<f64>, SimError> {
        let f = forces(self.state, self.params, position, velocity)?.total();
        Ok(f / self.state.mass(self.params))
    }
}
