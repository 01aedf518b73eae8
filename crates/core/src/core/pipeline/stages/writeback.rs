//! Write-Back (WB) Stage.
//!
//! Commits results into the register file and retires the instruction
//! into the WB/END latch, where the forwarding network can still see it
//! for one more cycle.

use crate::core::Machine;
use crate::isa::{self, opcodes as op};

/// Executes the write-back stage.
///
/// `add` and `nor` write the register named by their destination field;
/// `lw` writes regB. Everything else commits nothing. The write lands in
/// the next-cycle register file, so it becomes visible to decode-time
/// reads starting the following cycle.
pub fn wb_stage(state: &Machine, next: &mut Machine) {
    let inst = state.mem_wb.inst;

    next.wb_end.inst = inst;
    next.wb_end.write_data = state.mem_wb.write_data;

    match isa::opcode(inst) {
        op::ADD | op::NOR => {
            next.regs[isa::dest_or_imm(inst) as usize] = state.mem_wb.write_data;
        }
        op::LW => {
            next.regs[isa::reg_b(inst) as usize] = state.mem_wb.write_data;
        }
        _ => {}
    }
}
