use super::attitude_controller::stabilized_orientation;
use crate::config::{AutopilotGains, VehicleParameters};
use crate::error::SimError;
use crate::gnc::guidance::DescentProfile;
use crate::models::{LanderState, ParachuteStatus, TrajectorySample};
use crate::physics::gravity::gravitational_force;
use crate::physics::parachute::DeploymentSafety;
use nalgebra as na;

/// Memory carried by the PID loop between ticks. Owned by the simulation run, passed in and
/// returned by each evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerState {
    pub integral_accumulated_error: f64,
    pub previous_error: f64,
    /// Set when the last evaluation cleared the accumulator because the error was too large.
    pub previous_was_reset: bool,
}

/// Individual contributions to the raw control output.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlTerms {
    pub proportional: f64,
    pub integral: f64,
    pub derivative: f64,
}

impl ControlTerms {
    pub fn output(&self) -> f64 {
        self.proportional + self.integral + self.derivative
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutopilotOutput {
    pub throttle: f64,
    pub deploy_parachute: bool,
    pub orientation: na::Vector3<f64>,
    pub controller: ControllerState,

    pub altitude: f64,
    pub descent_rate: f64,
    pub error: f64,
    pub hover_throttle: f64,
    pub terms: ControlTerms,
}

impl AutopilotOutput {
    pub fn sample(&self, time: f64) -> TrajectorySample {
        TrajectorySample {
            time,
            altitude: self.altitude,
            descent_rate: self.descent_rate,
            throttle: self.throttle,
            proportional: self.terms.proportional,
            integral: self.terms.integral,
            derivative: self.terms.derivative,
        }
    }

    /// Writes throttle, attitude and any parachute deployment back onto the lander.
    pub fn apply(&self, state: &mut LanderState) {
        state.throttle = self.throttle;
        state.orientation = self.orientation;
        if self.deploy_parachute && state.parachute_status == ParachuteStatus::NotDeployed {
            state.parachute_status = ParachuteStatus::Deployed;
        }
    }
}

/// Gravity-biased saturation of the raw controller output.
///
/// `p <= -hover` cuts the engine, `-hover < p < 1 - hover` adds `p` to the hover throttle,
/// anything larger is full thrust.
pub fn saturate_throttle(p: f64, hover_throttle: f64) -> f64 {
    if p <= -hover_throttle {
        0.0
    } else if p < 1.0 - hover_throttle {
        hover_throttle + p
    } else {
        1.0
    }
}

/// Descent-rate PID autopilot with parachute deployment and attitude hold.
#[derive(Debug, Clone)]
pub struct Autopilot {
    gains: AutopilotGains,
    profile: DescentProfile,
}

impl Autopilot {
    pub fn new(gains: AutopilotGains) -> Self {
        let profile = DescentProfile::from_gains(&gains);
        Self { gains, profile }
    }

    pub fn gains(&self) -> &AutopilotGains {
        &self.gains
    }

    /// Throttle fraction whose thrust exactly cancels local weight.
    pub fn hover_throttle(state: &LanderState, params: &VehicleParameters) -> Result<f64, SimError> {
        let weight = gravitational_force(
            params.gravitational_parameter,
            state.mass(params),
            &state.position,
        )?
        .magnitude();
        Ok(weight / params.max_thrust)
    }

    /// One control evaluation. Does not touch `state`; the caller applies the output.
    pub fn evaluate(
        &self,
        state: &LanderState,
        params: &VehicleParameters,
        controller: &ControllerState,
        safety: &dyn DeploymentSafety,
    ) -> Result<AutopilotOutput, SimError> {
        let dt = state.time_step;
        if !(dt > 0.0) {
            return Err(SimError::InvalidTimeStep(dt));
        }

        // Fresh memory on the first tick, so the derivative does not spike
        let mut next = if state.simulation_time <= 0.5 * dt {
            ControllerState::default()
        } else {
            *controller
        };

        let altitude = state.altitude(params);
        let descent_rate = state.descent_rate()?;
        let error = self.profile.target_rate(altitude) - descent_rate;

        let derivative = (error - next.previous_error) / dt;

        let bound = self.gains.error_saturation_bound;
        if error * error < bound * bound {
            next.integral_accumulated_error += 0.5 * (error + next.previous_error) * dt;
            next.previous_was_reset = false;
        } else {
            next.integral_accumulated_error = 0.0;
            next.previous_was_reset = true;
        }

        let terms = ControlTerms {
            proportional: self.gains.kp * error,
            integral: self.gains.ki * next.integral_accumulated_error,
            derivative: self.gains.kd * derivative,
        };

        let hover_throttle = Self::hover_throttle(state, params)?;
        let throttle = saturate_throttle(terms.output(), hover_throttle);

        next.previous_error = error;

        let deploy_parachute = state.parachute_status == ParachuteStatus::NotDeployed
            && altitude <= self.gains.deployment_ceiling
            && safety.can_deploy_parachute(state, params);

        Ok(AutopilotOutput {
            throttle,
            deploy_parachute,
            orientation: stabilized_orientation(&state.position)?,
            controller: next,
            altitude,
            descent_rate,
            error,
            hover_throttle,
            terms,
        })
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(AutopilotGains::default())
    }
}
