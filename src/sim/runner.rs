use crate::config::{ScenarioConfig, VehicleParameters};
use crate::error::SimError;
use crate::fsm::{FlightStatus, LanderFSM};
use crate::gnc::control::{stabilized_orientation, Autopilot, ControllerState};
use crate::integrators::{IntegrationScheme, Integrator};
use crate::models::{LanderState, ParachuteStatus};
use crate::output::SampleSink;
use crate::physics::dynamics::effective_throttle;
use crate::physics::parachute::{DeploymentSafety, ParachuteLimits};

/// Final snapshot of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub outcome: FlightStatus,
    pub time: f64,
    pub altitude: f64,
    pub descent_rate: f64,
    pub ground_speed: f64,
    pub fuel_fraction: f64,
    pub parachute_status: ParachuteStatus,
    pub ticks: usize,
}

/// One lander run. Owns the lander state, the integrator memory and the controller memory;
/// nothing is shared between runs.
pub struct Simulation {
    params: VehicleParameters,
    state: LanderState,
    integrator: Integrator,
    autopilot: Autopilot,
    controller: ControllerState,
    fsm: LanderFSM,
    safety: Box<dyn DeploymentSafety>,
    autopilot_enabled: bool,
    stabilized_attitude: bool,
    duration: f64,
    ticks: usize,
}

impl Simulation {
    pub fn new(config: &ScenarioConfig) -> Result<Self, SimError> {
        config.validate()?;
        let state = config.initial_state();
        Ok(Self {
            params: config.vehicle.clone(),
            fsm: LanderFSM::new(state.parachute_status),
            state,
            integrator: Integrator::new(config.scheme),
            autopilot: Autopilot::new(config.gains.clone()),
            controller: ControllerState::default(),
            safety: Box::new(ParachuteLimits),
            autopilot_enabled: config.autopilot_enabled,
            stabilized_attitude: config.stabilized_attitude,
            duration: config.duration,
            ticks: 0,
        })
    }

    /// Replaces the default parachute limits.
    pub fn with_safety(mut self, safety: Box<dyn DeploymentSafety>) -> Self {
        self.safety = safety;
        self
    }

    pub fn state(&self) -> &LanderState {
        &self.state
    }

    pub fn params(&self) -> &VehicleParameters {
        &self.params
    }

    pub fn controller(&self) -> &ControllerState {
        &self.controller
    }

    pub fn status(&self) -> FlightStatus {
        self.fsm.get_current_state()
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Switching scheme mid-run drops the Verlet history, so the next step bootstraps again.
    pub fn set_scheme(&mut self, scheme: IntegrationScheme) {
        self.integrator.set_scheme(scheme);
    }

    /// Advances one time step. Forces and integration first, then the autopilot sets
    /// throttle, attitude and parachute for the next step.
    pub fn tick(&mut self, sink: &mut dyn SampleSink) -> Result<FlightStatus, SimError> {
        if self.fsm.get_current_state().is_terminal() {
            return Ok(self.fsm.get_current_state());
        }

        // Fuel is charged for the throttle that produced this step's thrust
        let applied_throttle = effective_throttle(&self.state);
        self.integrator.advance(&mut self.state, &self.params)?;

        if self.autopilot_enabled {
            let output = self.autopilot.evaluate(
                &self.state,
                &self.params,
                &self.controller,
                self.safety.as_ref(),
            )?;
            output.apply(&mut self.state);
            self.controller = output.controller;
            sink.record(&output.sample(self.state.simulation_time));
        }

        if self.stabilized_attitude {
            self.state.orientation = stabilized_orientation(&self.state.position)?;
        }

        self.consume_fuel(applied_throttle);
        self.state.simulation_time += self.state.time_step;
        self.ticks += 1;

        self.fsm
            .evaluate_transition(&mut self.state, &self.params, self.safety.as_ref())
    }

    fn consume_fuel(&mut self, throttle: f64) {
        let burned =
            self.state.time_step * self.params.fuel_rate * throttle / self.params.fuel_capacity;
        self.state.fuel_fraction = (self.state.fuel_fraction - burned).max(0.0);
    }

    /// Ticks until touchdown or until the configured duration has elapsed.
    pub fn run(&mut self, sink: &mut dyn SampleSink) -> Result<RunSummary, SimError> {
        let mut status = self.fsm.get_current_state();
        // Half a step of slack so accumulated rounding in the clock does not add a tick
        let end = self.duration - 0.5 * self.state.time_step;
        while !status.is_terminal() && self.state.simulation_time < end {
            status = self.tick(sink)?;
        }
        self.summary()
    }

    pub fn summary(&self) -> Result<RunSummary, SimError> {
        Ok(RunSummary {
            outcome: self.fsm.get_current_state(),
            time: self.state.simulation_time,
            altitude: self.state.altitude(&self.params),
            descent_rate: self.state.descent_rate()?,
            ground_speed: self.state.ground_speed()?,
            fuel_fraction: self.state.fuel_fraction,
            parachute_status: self.state.parachute_status,
            ticks: self.ticks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Scenario;
    use crate::models::TrajectorySample;
    use crate::output::NullSink;
    use approx::assert_abs_diff_eq;

    struct NeverSafe;
    impl DeploymentSafety for NeverSafe {
        fn can_deploy_parachute(&self, _: &LanderState, _: &VehicleParameters) -> bool {
            false
        }
    }

    #[test]
    fn autopilot_logs_one_sample_per_tick() {
        let mut config = Scenario::DescentFrom10km.config();
        config.autopilot_enabled = true;
        config.duration = 5.0;

        let mut sim = Simulation::new(&config).unwrap();
        let mut samples: Vec<TrajectorySample> = Vec::new();
        let summary = sim.run(&mut samples).unwrap();

        assert_eq!(summary.ticks, 50);
        assert_eq!(samples.len(), 50);
        assert!(samples.windows(2).all(|w| w[0].time < w[1].time));
        assert_abs_diff_eq!(samples[0].time, 0.0);
    }

    #[test]
    fn nothing_is_logged_without_autopilot() {
        let mut config = Scenario::DescentFrom10km.config();
        config.duration = 2.0;
        let mut sim = Simulation::new(&config).unwrap();
        let mut samples: Vec<TrajectorySample> = Vec::new();
        sim.run(&mut samples).unwrap();
        assert!(samples.is_empty());
        assert_eq!(sim.ticks(), 20);
    }

    #[test]
    fn fuel_burns_in_proportion_to_throttle() {
        let mut config = Scenario::CircularOrbit.config();
        config.throttle = 0.5;
        config.duration = 1.0;
        let mut sim = Simulation::new(&config).unwrap();
        sim.run(&mut NullSink).unwrap();

        let params = sim.params();
        let expected = 1.0 - 10.0 * 0.1 * params.fuel_rate * 0.5 / params.fuel_capacity;
        assert_abs_diff_eq!(sim.state().fuel_fraction, expected, epsilon = 1e-12);
    }

    #[test]
    fn unpowered_tick_burns_nothing_even_if_autopilot_opens_throttle() {
        let mut config = Scenario::DescentFrom10km.config();
        config.position = [0.0, -(config.vehicle.planet_radius + 1_000.0), 0.0];
        config.velocity = [0.0, 100.0, 0.0];
        config.autopilot_enabled = true;
        let mut sim = Simulation::new(&config).unwrap();

        sim.tick(&mut NullSink).unwrap();
        assert_eq!(sim.state().fuel_fraction, 1.0);
        let commanded = sim.state().throttle;
        assert!(commanded > 0.0);

        sim.tick(&mut NullSink).unwrap();
        let params = sim.params();
        let expected = 1.0 - 0.1 * params.fuel_rate * commanded / params.fuel_capacity;
        assert_abs_diff_eq!(sim.state().fuel_fraction, expected, epsilon = 1e-12);
    }

    #[test]
    fn last_powered_tick_is_charged_after_cutoff() {
        let mut config = Scenario::DescentFrom10km.config();
        config.throttle = 1.0;
        config.autopilot_enabled = true;
        let mut sim = Simulation::new(&config).unwrap();

        // At rest 10 km up the autopilot cuts the engine straight away
        sim.tick(&mut NullSink).unwrap();
        assert_eq!(sim.state().throttle, 0.0);
        let params = sim.params();
        let after_burn = 1.0 - 0.1 * params.fuel_rate / params.fuel_capacity;
        assert_abs_diff_eq!(sim.state().fuel_fraction, after_burn, epsilon = 1e-12);

        sim.tick(&mut NullSink).unwrap();
        assert_abs_diff_eq!(sim.state().fuel_fraction, after_burn, epsilon = 1e-12);
    }

    #[test]
    fn fuel_never_goes_negative() {
        let mut config = Scenario::CircularOrbit.config();
        config.throttle = 1.0;
        config.fuel_fraction = 0.001;
        config.duration = 10.0;
        let mut sim = Simulation::new(&config).unwrap();
        sim.run(&mut NullSink).unwrap();
        assert_eq!(sim.state().fuel_fraction, 0.0);
    }

    #[test]
    fn unpowered_drop_from_10km_crashes() {
        let config = Scenario::DescentFrom10km.config();
        let mut sim = Simulation::new(&config).unwrap();
        let summary = sim.run(&mut NullSink).unwrap();
        assert_eq!(summary.outcome, FlightStatus::Crashed);
        assert!(summary.altitude < 0.5 * sim.params().lander_size);
    }

    #[test]
    fn parachute_stays_closed_when_never_safe() {
        let mut config = Scenario::DescentFrom10km.config();
        config.autopilot_enabled = true;
        config.duration = 20.0;
        let mut sim = Simulation::new(&config)
            .unwrap()
            .with_safety(Box::new(NeverSafe));
        sim.run(&mut NullSink).unwrap();
        assert_eq!(sim.state().parachute_status, ParachuteStatus::NotDeployed);
    }

    #[test]
    fn switching_scheme_rebootstraps() {
        let config = Scenario::CircularOrbit.config();
        let mut sim = Simulation::new(&config).unwrap();
        sim.tick(&mut NullSink).unwrap();
        sim.tick(&mut NullSink).unwrap();
        assert!(sim.integrator.is_steady());

        sim.set_scheme(IntegrationScheme::Euler);
        assert!(!sim.integrator.is_steady());
        sim.set_scheme(IntegrationScheme::Verlet);
        sim.tick(&mut NullSink).unwrap();
        assert!(sim.integrator.is_steady());
    }

    #[test]
    fn terminal_status_stops_the_clock() {
        let mut config = Scenario::DescentFrom10km.config();
        config.position = [0.0, -(config.vehicle.planet_radius + 0.1), 0.0];
        config.velocity = [0.0, 20.0, 0.0];
        let mut sim = Simulation::new(&config).unwrap();
        let summary = sim.run(&mut NullSink).unwrap();
        assert_eq!(summary.outcome, FlightStatus::Crashed);
        assert_eq!(summary.ticks, 1);

        sim.tick(&mut NullSink).unwrap();
        assert_eq!(sim.ticks(), 1);
    }
}
