//! Instruction Fetch (IF) Stage.
//!
//! Reads instruction memory at the program counter and advances the
//! counter. Decode (on a stall) or Memory (on a taken branch) may
//! overwrite both the latch and the counter later in the same cycle
//! evaluation.

use crate::core::Machine;

/// Executes the fetch stage: fills IF/ID from instruction memory and
/// increments the next-cycle program counter.
pub fn fetch_stage(state: &Machine, next: &mut Machine) {
    next.if_id.inst = state.instr_mem[state.pc as usize];
    next.if_id.pc_plus1 = state.pc + 1;
    next.pc = state.pc + 1;
}
