use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Physical constants of the vehicle and the planet it descends to.
/// Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleParameters {
    pub unloaded_mass: f64,    // kg
    pub fuel_capacity: f64,    // litres
    pub fuel_density: f64,     // kg/l
    pub fuel_rate: f64,        // l/s at full throttle
    pub max_thrust: f64,       // N
    pub lander_size: f64,      // meters
    pub drag_coef_lander: f64,
    pub drag_coef_chute: f64,

    pub gravitational_parameter: f64, // G * M (m³/s²)
    pub planet_radius: f64,           // meters
    pub exosphere: f64,               // meters above the surface
    pub scale_height: f64,            // meters
    pub surface_density: f64,         // kg/m³

    pub max_parachute_drag: f64,      // N
    pub max_parachute_speed: f64,     // m/s
    pub max_impact_ground_speed: f64, // m/s
    pub max_impact_descent_rate: f64, // m/s
}

impl VehicleParameters {
    /// Mars lander defaults. Max thrust is 1.5x the fully fuelled surface weight.
    pub fn mars_lander() -> Self {
        let mu = G * M_MARS;
        let wet_mass = UNLOADED_LANDER_MASS + FUEL_CAPACITY * FUEL_DENSITY;
        Self {
            unloaded_mass: UNLOADED_LANDER_MASS,
            fuel_capacity: FUEL_CAPACITY,
            fuel_density: FUEL_DENSITY,
            fuel_rate: FUEL_RATE_AT_MAX_THRUST,
            max_thrust: 1.5 * wet_mass * mu / (R_MARS * R_MARS),
            lander_size: LANDER_SIZE,
            drag_coef_lander: DRAG_COEF_LANDER,
            drag_coef_chute: DRAG_COEF_CHUTE,
            gravitational_parameter: mu,
            planet_radius: R_MARS,
            exosphere: EXOSPHERE,
            scale_height: SCALE_HEIGHT,
            surface_density: SURFACE_DENSITY,
            max_parachute_drag: MAX_PARACHUTE_DRAG,
            max_parachute_speed: MAX_PARACHUTE_SPEED,
            max_impact_ground_speed: MAX_IMPACT_GROUND_SPEED,
            max_impact_descent_rate: MAX_IMPACT_DESCENT_RATE,
        }
    }

    /// Total mass with the given fraction of the tank remaining.
    pub fn mass(&self, fuel_fraction: f64) -> f64 {
        self.unloaded_mass + fuel_fraction * self.fuel_capacity * self.fuel_density
    }

    /// Frontal area presented to the flow.
    pub fn reference_area(&self) -> f64 {
        PI * self.lander_size.powi(2)
    }

    pub fn altitude(&self, radius: f64) -> f64 {
        radius - self.planet_radius
    }
}

impl Default for VehicleParameters {
    fn default() -> Self {
        Self::mars_lander()
    }
}
