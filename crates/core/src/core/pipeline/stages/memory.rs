//! Memory Access (MEM) Stage.
//!
//! Performs loads and stores against data memory at the address computed
//! in execute, and resolves branches: a `beq` whose comparison latched
//! true redirects the program counter and squashes the three younger
//! pipeline generations.

use crate::core::Machine;
use crate::isa::{self, NOOP_WORD, opcodes as op};

/// Executes the memory stage.
///
/// Runs after fetch and decode in the cycle evaluation so that a taken
/// branch's squash overrides the fetch-side writes for this cycle: the
/// wrong-path instructions in IF/ID, ID/EX and EX/MEM become bubbles and
/// never reach execute or commit.
pub fn mem_stage(state: &Machine, next: &mut Machine) {
    let inst = state.ex_mem.inst;

    next.mem_wb.inst = inst;

    match isa::opcode(inst) {
        op::LW => {
            next.mem_wb.write_data = state.data_mem[state.ex_mem.alu as usize];
        }
        op::SW => {
            next.data_mem[state.ex_mem.alu as usize] = state.ex_mem.store_data;
        }
        op::BEQ => {
            if state.ex_mem.eq {
                tracing::trace!(target = state.ex_mem.branch_target, "branch taken, squashing");
                next.if_id.inst = NOOP_WORD;
                next.id_ex.inst = NOOP_WORD;
                next.ex_mem.inst = NOOP_WORD;
                next.pc = state.ex_mem.branch_target;
            }
        }
        op::NOOP | op::HALT => next.mem_wb.write_data = 0,
        _ => next.mem_wb.write_data = state.ex_mem.alu,
    }
}
