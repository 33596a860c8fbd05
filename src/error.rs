use std::io;

/// Failures that stop a simulation run or prevent it from starting.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("position vector is zero, gravity direction is undefined")]
    ZeroPosition,
    #[error("time step must be positive, got {0}")]
    InvalidTimeStep(f64),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("RON parsing error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}
