//! Per-Cycle Pipeline Advance.
//!
//! This module owns the synchronous state-transition that moves the
//! machine one clock cycle forward. It provides:
//! 1. **Latches:** The five inter-stage value types.
//! 2. **Hazards:** Load-use stall detection and the forwarding network.
//! 3. **Stages:** The five stage functions.
//! 4. **Driver:** [`advance`], which orders the stages and commits the
//!    next-cycle snapshot.

pub mod hazards;
pub mod latches;
pub mod stages;

use crate::core::Machine;

/// Computes the machine state after one clock cycle.
///
/// The next state begins as a verbatim copy of the current one, so latch
/// scratch fields that no stage assigns this cycle keep their previous
/// values (they are don't-care and dumped as such). Every stage reads
/// only the current-cycle snapshot; the evaluation order Fetch → Decode →
/// Execute → Memory → Writeback exists so the two legitimate next-state
/// overrides land last on their targets: decode's stall freezes the
/// fetch side, and memory's taken-branch squash replaces the younger
/// latches and the program counter after fetch and decode wrote them.
pub fn advance(state: &Machine) -> Machine {
    let mut next = state.clone();
    next.cycles += 1;

    stages::fetch_stage(state, &mut next);
    stages::decode_stage(state, &mut next);
    stages::execute_stage(state, &mut next);
    stages::mem_stage(state, &mut next);
    stages::wb_stage(state, &mut next);

    next
}
