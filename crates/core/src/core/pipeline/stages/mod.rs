//! Pipeline Stage Implementations.
//!
//! One module per stage: Fetch, Decode, Execute, Memory, Writeback. Each
//! stage is a pure-ish function from the current-cycle state into the
//! next-cycle state; see [`crate::core::pipeline::advance`] for the
//! evaluation-order contract that ties them together.

pub mod decode;
pub mod execute;
pub mod fetch;
pub mod memory;
pub mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::mem_stage;
pub use writeback::wb_stage;
