pub mod trajectory_log;

pub use trajectory_log::{NullSink, SampleSink, TrajectoryLog};
