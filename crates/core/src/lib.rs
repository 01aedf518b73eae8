//! LC-2K five-stage pipeline simulator library.
//!
//! This crate implements a cycle-accurate functional simulator for a
//! small pipelined processor, built to exercise the three classic hazard
//! mechanisms:
//! 1. **Load-use stalls:** One bubble between a load and its consumer.
//! 2. **Operand forwarding:** Bypassing the register file from three
//!    in-flight result generations, nearest producer winning.
//! 3. **Branch squashing:** Taken branches resolve in the memory stage
//!    and discard the three wrong-path instructions behind them.
//!
//! The machine is a single value advanced by a synchronous transition
//! function once per cycle; the per-cycle diagnostic dump it emits is a
//! fixed external format consumed by existing checkers.

/// CPU core (machine state, pipeline latches, hazards, stages, driver).
pub mod core;
/// Instruction set (opcodes, field codec, disassembler).
pub mod isa;
/// Simulation (machine-code loader, state dump, run loop).
pub mod sim;

/// Architectural machine state; construct with [`Machine::new`] or via
/// [`sim::loader`].
pub use crate::core::Machine;
/// Top-level run loop; drives [`core::pipeline::advance`] to the halt
/// condition while emitting the diagnostic dump.
pub use crate::sim::simulator::Simulator;
