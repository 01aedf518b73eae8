//! Instruction Decode (ID) Stage.
//!
//! Moves the fetched instruction into ID/EX, reading its register
//! operands and sign-extending its immediate. When the load-use hazard
//! detector demands a stall, a bubble enters ID/EX instead and the fetch
//! side is frozen for one cycle.

use crate::core::Machine;
use crate::core::pipeline::hazards;
use crate::isa::{self, NOOP_WORD};

/// Executes the decode stage.
///
/// On a stall the program counter is held, IF/ID keeps its current
/// contents (the same instruction is re-decoded next cycle), and the
/// ID/EX instruction slot is forced to `noop`. The operand scratch
/// fields are left untouched in that case; they belong to the bubble and
/// are don't-care downstream.
pub fn decode_stage(state: &Machine, next: &mut Machine) {
    let incoming = state.if_id.inst;

    next.id_ex.inst = incoming;
    next.id_ex.pc_plus1 = state.if_id.pc_plus1;

    if hazards::needs_load_use_stall(incoming, state.id_ex.inst) {
        tracing::trace!(pc = state.pc, "load-use stall, inserting bubble");
        next.pc = state.pc;
        next.if_id = state.if_id.clone();
        next.id_ex.inst = NOOP_WORD;
    } else {
        next.id_ex.read_a = state.regs[isa::reg_a(incoming) as usize];
        next.id_ex.read_b = state.regs[isa::reg_b(incoming) as usize];
        next.id_ex.offset = isa::sign_extend(isa::dest_or_imm(incoming));
    }
}
