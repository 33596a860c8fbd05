use crate::config::VehicleParameters;
use crate::models::LanderState;
use nalgebra as na;

/// Kinetic plus gravitational potential energy per unit mass.
pub fn specific_energy(mu: f64, position: &na::Vector3<f64>, velocity: &na::Vector3<f64>) -> f64 {
    let r = position.magnitude();
    let v = velocity.magnitude();
    0.5 * v * v - mu / r
}

pub fn calculate_energy(state: &LanderState, params: &VehicleParameters) -> f64 {
    state.mass(params)
        * specific_energy(params.gravitational_parameter, &state.position, &state.velocity)
}

pub fn calculate_angular_momentum(
    state: &LanderState,
    params: &VehicleParameters,
) -> na::Vector3<f64> {
    state.position.cross(&(state.velocity * state.mass(params)))
}
