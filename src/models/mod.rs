pub mod sample;
pub mod state;

pub use sample::TrajectorySample;
pub use state::{LanderState, ParachuteStatus};
