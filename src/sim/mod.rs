pub mod runner;

pub use runner::{RunSummary, Simulation};
