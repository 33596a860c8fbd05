use crate::config::VehicleParameters;
use nalgebra as na;

/// Local atmospheric conditions at a point.
pub struct Environment {
    pub altitude: f64,
    pub density: f64,
}

impl Environment {
    pub fn new(params: &VehicleParameters, position: &na::Vector3<f64>) -> Self {
        let altitude = params.altitude(position.magnitude());
        Environment {
            altitude,
            density: atmospheric_density(params, altitude),
        }
    }
}

/// Exponential atmosphere, zero below the surface and above the exosphere.
pub fn atmospheric_density(params: &VehicleParameters, altitude: f64) -> f64 {
    if altitude > params.exosphere || altitude < 0.0 {
        0.0
    } else {
        params.surface_density * (-altitude / params.scale_height).exp()
    }
}
