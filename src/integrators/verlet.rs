use crate::config::VehicleParameters;
use crate::error::SimError;
use crate::models::LanderState;
use crate::physics::dynamics::{EquationsOfMotion, LanderDynamics};
use nalgebra as na;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntegrationScheme {
    /// Explicit first order, from the pre-step state only.
    Euler,
    /// Two-step position Verlet with velocity recovered from positions.
    #[default]
    Verlet,
}

/// Fixed-step integrator. Under Verlet it remembers the previous position, so one instance
/// belongs to exactly one run.
#[derive(Debug, Clone)]
pub struct Integrator {
    scheme: IntegrationScheme,
    previous_position: Option<na::Vector3<f64>>,
}

impl Integrator {
    pub fn new(scheme: IntegrationScheme) -> Self {
        Integrator {
            scheme,
            previous_position: None,
        }
    }

    pub fn scheme(&self) -> IntegrationScheme {
        self.scheme
    }

    /// True once a previous position is available for the two-step update.
    pub fn is_steady(&self) -> bool {
        self.previous_position.is_some()
    }

    /// Changing scheme discards the position history; the next Verlet step bootstraps again.
    pub fn set_scheme(&mut self, scheme: IntegrationScheme) {
        if scheme != self.scheme {
            self.scheme = scheme;
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.previous_position = None;
    }

    /// Advances one step given the acceleration at the current state.
    pub fn step(
        &mut self,
        position: &na::Vector3<f64>,
        velocity: &na::Vector3<f64>,
        acceleration: &na::Vector3<f64>,
        dt: f64,
    ) -> (na::Vector3<f64>, na::Vector3<f64>) {
        match self.scheme {
            IntegrationScheme::Euler => (position + dt * velocity, velocity + dt * acceleration),
            IntegrationScheme::Verlet => {
                let (new_position, new_velocity) = match self.previous_position {
                    // Bootstrap with a single Euler step
                    None => (position + dt * velocity, velocity + dt * acceleration),
                    Some(previous) => {
                        let new_position = 2.0 * position - previous + dt * dt * acceleration;
                        (new_position, (new_position - position) / dt)
                    }
                };
                self.previous_position = Some(*position);
                (new_position, new_velocity)
            }
        }
    }

    pub fn integrate<E: EquationsOfMotion>(
        &mut self,
        eom: &E,
        position: &na::Vector3<f64>,
        velocity: &na::Vector3<f64>,
        dt: f64,
    ) -> Result<(na::Vector3<f64>, na::Vector3<f64>), SimError> {
        if !(dt > 0.0) {
            return Err(SimError::InvalidTimeStep(dt));
        }
        let acceleration = eom.acceleration(position, velocity)?;
        Ok(self.step(position, velocity, &acceleration, dt))
    }

    /// Moves the lander one time step under its current net force. Time is not advanced.
    pub fn advance(
        &mut self,
        state: &mut LanderState,
        params: &VehicleParameters,
    ) -> Result<(), SimError> {
        if state.simulation_time <= 0.0 {
            self.reset();
        }
        let eom = LanderDynamics::new(state, params);
        let (position, velocity) =
            self.integrate(&eom, &state.position, &state.velocity, state.time_step)?;
        state.position = position;
        state.velocity = velocity;
        Ok(())
    }
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new(IntegrationScheme::default())
    }
}
