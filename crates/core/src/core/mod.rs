//! CPU core: machine state and the five-stage pipeline.

pub mod machine;
pub mod pipeline;

pub use machine::Machine;
