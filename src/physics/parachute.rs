use super::environment::Environment;
use crate::config::VehicleParameters;
use crate::models::LanderState;

/// Decides whether the parachute can be opened, or stay open, in the current state.
pub trait DeploymentSafety {
    fn can_deploy_parachute(&self, state: &LanderState, params: &VehicleParameters) -> bool;
}

/// Structural limits of the chute: peak drag load and airspeed inside the atmosphere.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParachuteLimits;

impl ParachuteLimits {
    /// Drag on the fully inflated canopy, which spans five squares of twice the lander size.
    pub fn chute_drag(state: &LanderState, params: &VehicleParameters) -> f64 {
        let rho = Environment::new(params, &state.position).density;
        let canopy_area = 5.0 * (2.0 * params.lander_size).powi(2);
        0.5 * params.drag_coef_chute * rho * canopy_area * state.velocity.magnitude_squared()
    }
}

impl DeploymentSafety for ParachuteLimits {
    fn can_deploy_parachute(&self, state: &LanderState, params: &VehicleParameters) -> bool {
        let too_much_drag = Self::chute_drag(state, params) > params.max_parachute_drag;
        let too_fast = state.velocity.magnitude() > params.max_parachute_speed
            && state.altitude(params) < params.exosphere;
        !(too_much_drag || too_fast)
    }
}
