//! Simulation surface: loading, diagnostics, and the run loop.

pub mod dump;
pub mod loader;
pub mod simulator;

pub use loader::{LoadError, load_program};
pub use simulator::Simulator;
