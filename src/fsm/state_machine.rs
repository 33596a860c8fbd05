use super::flight_states::FlightStatus;
use crate::config::VehicleParameters;
use crate::error::SimError;
use crate::models::{LanderState, ParachuteStatus};
use crate::physics::parachute::DeploymentSafety;

/// Tracks touchdown and parachute loss. Landed and Crashed are terminal.
pub struct LanderFSM {
    current_state: FlightStatus,
    parachute_status: ParachuteStatus,
    last_state_change: f64,
}

impl LanderFSM {
    pub fn new(initial_parachute: ParachuteStatus) -> Self {
        Self {
            current_state: FlightStatus::InFlight,
            parachute_status: initial_parachute,
            last_state_change: 0.0,
        }
    }

    pub fn get_current_state(&self) -> FlightStatus {
        self.current_state
    }

    pub fn get_last_state_change(&self) -> f64 {
        self.last_state_change
    }

    fn transition_to(&mut self, new_state: FlightStatus, time: f64) {
        if self.current_state != new_state {
            println!(
                "State transition at t={:.2}s: {} -> {}",
                time, self.current_state, new_state
            );
            self.current_state = new_state;
            self.last_state_change = time;
        }
    }

    fn observe_parachute(&mut self, status: ParachuteStatus, time: f64) {
        if self.parachute_status != status {
            println!(
                "Parachute at t={:.2}s: {} -> {}",
                time, self.parachute_status, status
            );
            self.parachute_status = status;
        }
    }

    /// Runs after each tick. May mark a deployed parachute as lost and may end the flight.
    pub fn evaluate_transition(
        &mut self,
        state: &mut LanderState,
        params: &VehicleParameters,
        safety: &dyn DeploymentSafety,
    ) -> Result<FlightStatus, SimError> {
        let time = state.simulation_time;
        self.observe_parachute(state.parachute_status, time);

        if self.current_state.is_terminal() {
            return Ok(self.current_state);
        }

        if state.parachute_status == ParachuteStatus::Deployed
            && !safety.can_deploy_parachute(state, params)
        {
            state.parachute_status = ParachuteStatus::Lost;
            self.observe_parachute(ParachuteStatus::Lost, time);
        }

        if state.altitude(params) < 0.5 * params.lander_size {
            let descent_rate = state.descent_rate()?;
            let ground_speed = state.ground_speed()?;
            let soft = -descent_rate <= params.max_impact_descent_rate
                && ground_speed <= params.max_impact_ground_speed;
            let outcome = if soft {
                FlightStatus::Landed
            } else {
                FlightStatus::Crashed
            };
            self.transition_to(outcome, time);
        }

        Ok(self.current_state)
    }
}
