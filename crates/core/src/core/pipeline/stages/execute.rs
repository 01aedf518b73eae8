//! Execute (EX) Stage.
//!
//! Resolves operand values through the forwarding network, runs the ALU,
//! and latches the branch comparison and candidate target for the memory
//! stage. All inputs come from the current-cycle ID/EX latch; forwarding
//! reads the current-cycle downstream latches, never the values this
//! cycle is in the middle of producing.

use crate::core::Machine;
use crate::core::pipeline::hazards;
use crate::isa::{self, opcodes as op};

/// Executes the execute stage.
///
/// The branch target is latched for every instruction (pc_plus1 +
/// offset); it is don't-care for anything but `beq`. Opcodes with no ALU
/// semantics (`jalr`, `halt`, raw data) leave the result field carrying
/// its previous-cycle value, which the dump likewise marks don't-care.
/// A `noop` forces the result to zero to keep the dump well-defined.
pub fn execute_stage(state: &Machine, next: &mut Machine) {
    let inst = state.id_ex.inst;

    next.ex_mem.inst = inst;
    next.ex_mem.branch_target = state.id_ex.pc_plus1.wrapping_add(state.id_ex.offset);

    let (a, b) = hazards::resolve_operands(state);

    match isa::opcode(inst) {
        op::ADD => next.ex_mem.alu = a.wrapping_add(b),
        op::NOR => next.ex_mem.alu = !(a | b),
        op::LW | op::SW => next.ex_mem.alu = a.wrapping_add(state.id_ex.offset),
        op::BEQ => {
            next.ex_mem.alu = a.wrapping_sub(b);
            next.ex_mem.eq = a == b;
        }
        _ => {}
    }

    if isa::opcode(inst) == op::NOOP {
        next.ex_mem.alu = 0;
    } else {
        next.ex_mem.store_data = b;
    }
}
