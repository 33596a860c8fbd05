use super::environment::Environment;
use crate::config::VehicleParameters;
use crate::models::ParachuteStatus;
use nalgebra as na;

/// Quadratic drag opposing the velocity, `-0.5 * rho * A * Cd * |v| * v`.
pub fn drag_force(
    params: &VehicleParameters,
    position: &na::Vector3<f64>,
    velocity: &na::Vector3<f64>,
    area: f64,
    drag_coefficient: f64,
) -> na::Vector3<f64> {
    let rho: f64 = Environment::new(params, position).density;
    -0.5 * rho * area * drag_coefficient * velocity.magnitude() * velocity
}

/// Lander coefficient, plus the chute's while it is deployed.
pub fn drag_coefficient_for(params: &VehicleParameters, status: ParachuteStatus) -> f64 {
    match status {
        ParachuteStatus::Deployed => params.drag_coef_lander + params.drag_coef_chute,
        ParachuteStatus::NotDeployed | ParachuteStatus::Lost => params.drag_coef_lander,
    }
}
