pub mod config;
pub mod constants;
pub mod error;
pub mod fsm;
pub mod gnc;
pub mod integrators;
pub mod models;
pub mod output;
pub mod physics;
pub mod sim;
