pub mod control;
pub mod guidance;
