pub mod verlet;

pub use verlet::{IntegrationScheme, Integrator};
