//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for maintaining pipeline consistency
//! when data dependencies exist between instructions. It provides:
//! 1. **Hazard Detection:** Identifies the load-use hazard that requires a
//!    one-cycle stall.
//! 2. **Operand Forwarding:** Resolves Read-After-Write hazards by
//!    bypassing the register file with values still in flight.

use crate::core::Machine;
use crate::isa::{self, opcodes as op};

/// Checks whether decode must stall for a load-use data hazard.
///
/// `incoming` is the instruction about to leave decode; `resident` is the
/// instruction already sitting in the ID/EX latch from the previous cycle.
/// A stall is required exactly when the resident instruction is a load and
/// either register field of the incoming instruction names the load's
/// destination (regB). One bubble resolves the hazard: a cycle later the
/// loaded value is reachable through the forwarding network.
///
/// Only the single resident generation is inspected; producers further
/// downstream are always coverable by forwarding, so no deeper scan is
/// needed for this ISA.
///
/// The incoming word's register fields are compared regardless of its
/// opcode, so an instruction that does not actually read registers (for
/// example a `noop` with zeroed fields behind `lw` into register 0) still
/// stalls for one architecturally harmless bubble.
pub fn needs_load_use_stall(incoming: i32, resident: i32) -> bool {
    isa::opcode(resident) == op::LW
        && (isa::reg_b(incoming) == isa::reg_b(resident)
            || isa::reg_a(incoming) == isa::reg_b(resident))
}

/// Returns the register an in-flight instruction will write, if any.
///
/// Loads write regB; `add`/`nor` write the low field. Stores, branches,
/// `halt`, `noop`, and raw data produce nothing and never forward.
fn write_destination(inst: i32) -> Option<i32> {
    match isa::opcode(inst) {
        op::ADD | op::NOR => Some(isa::dest_or_imm(inst)),
        op::LW => Some(isa::reg_b(inst)),
        _ => None,
    }
}

/// Resolves the execute-stage operand values for the instruction in ID/EX.
///
/// Starts from the decode-time register-file reads and overrides each
/// operand with any in-flight producer of the same register. Producers are
/// scanned as an ordered list from oldest to most recent (WB/END, then
/// MEM/WB, then EX/MEM) and every match overrides unconditionally, so the
/// nearest producer wins when several target the same register.
pub fn resolve_operands(state: &Machine) -> (i32, i32) {
    let consumer = state.id_ex.inst;
    let src_a = isa::reg_a(consumer);
    let src_b = isa::reg_b(consumer);

    let mut a = state.id_ex.read_a;
    let mut b = state.id_ex.read_b;

    // Oldest generation first; later entries overwrite earlier matches.
    let producers = [
        (state.wb_end.inst, state.wb_end.write_data),
        (state.mem_wb.inst, state.mem_wb.write_data),
        (state.ex_mem.inst, state.ex_mem.alu),
    ];

    for (inst, value) in producers {
        if let Some(dest) = write_destination(inst) {
            if src_a == dest {
                tracing::trace!(dest, value, operand = "A", "forwarding override");
                a = value;
            }
            if src_b == dest {
                tracing::trace!(dest, value, operand = "B", "forwarding override");
                b = value;
            }
        }
    }

    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::NOOP_WORD;

    fn pack(op: i32, a: i32, b: i32, field: i32) -> i32 {
        (op << 22) | (a << 19) | (b << 16) | (field & 0xFFFF)
    }

    // ── load-use stall predicate ──────────────────────────────────────

    #[test]
    fn stall_when_load_dest_matches_reg_a() {
        let resident = pack(op::LW, 0, 3, 8);
        let incoming = pack(op::ADD, 3, 1, 2);
        assert!(needs_load_use_stall(incoming, resident));
    }

    #[test]
    fn stall_when_load_dest_matches_reg_b() {
        let resident = pack(op::LW, 0, 3, 8);
        let incoming = pack(op::ADD, 1, 3, 2);
        assert!(needs_load_use_stall(incoming, resident));
    }

    #[test]
    fn no_stall_without_register_overlap() {
        let resident = pack(op::LW, 0, 3, 8);
        let incoming = pack(op::ADD, 1, 2, 4);
        assert!(!needs_load_use_stall(incoming, resident));
    }

    #[test]
    fn no_stall_when_resident_is_not_a_load() {
        let resident = pack(op::ADD, 0, 0, 3);
        let incoming = pack(op::ADD, 3, 3, 4);
        assert!(!needs_load_use_stall(incoming, resident));
    }

    #[test]
    fn noop_behind_load_of_register_zero_stalls() {
        // The check has no opcode gate on the incoming word; a noop's
        // zeroed fields collide with a load into register 0.
        let resident = pack(op::LW, 1, 0, 8);
        assert!(needs_load_use_stall(NOOP_WORD, resident));
    }

    // ── forwarding destinations ───────────────────────────────────────

    #[test]
    fn arithmetic_forwards_from_dest_field_and_load_from_reg_b() {
        assert_eq!(write_destination(pack(op::ADD, 1, 2, 3)), Some(3));
        assert_eq!(write_destination(pack(op::NOR, 1, 2, 5)), Some(5));
        assert_eq!(write_destination(pack(op::LW, 0, 6, 9)), Some(6));
    }

    #[test]
    fn non_writers_never_forward() {
        assert_eq!(write_destination(pack(op::SW, 1, 2, 3)), None);
        assert_eq!(write_destination(pack(op::BEQ, 1, 2, 3)), None);
        assert_eq!(write_destination(pack(op::JALR, 1, 2, 0)), None);
        assert_eq!(write_destination(pack(op::HALT, 0, 0, 0)), None);
        assert_eq!(write_destination(NOOP_WORD), None);
        assert_eq!(write_destination(-7), None);
    }

    // ── operand resolution and precedence ─────────────────────────────

    /// Machine with an `add 1 2 3` in ID/EX and empty downstream latches.
    fn consumer_machine() -> Machine {
        let mut m = Machine::new(&[]);
        m.id_ex.inst = pack(op::ADD, 1, 2, 3);
        m.id_ex.read_a = 100;
        m.id_ex.read_b = 200;
        m
    }

    #[test]
    fn no_producers_keeps_register_file_reads() {
        let m = consumer_machine();
        assert_eq!(resolve_operands(&m), (100, 200));
    }

    #[test]
    fn each_generation_can_forward() {
        let mut m = consumer_machine();
        m.wb_end.inst = pack(op::ADD, 0, 0, 1);
        m.wb_end.write_data = 11;
        m.mem_wb.inst = pack(op::LW, 0, 2, 9);
        m.mem_wb.write_data = 22;
        assert_eq!(resolve_operands(&m), (11, 22));
    }

    #[test]
    fn nearest_producer_wins() {
        // Three producers all target register 1; EX/MEM is the most
        // recently executed and must take precedence.
        let mut m = consumer_machine();
        m.wb_end.inst = pack(op::ADD, 0, 0, 1);
        m.wb_end.write_data = 11;
        m.mem_wb.inst = pack(op::NOR, 0, 0, 1);
        m.mem_wb.write_data = 22;
        m.ex_mem.inst = pack(op::ADD, 0, 0, 1);
        m.ex_mem.alu = 33;
        assert_eq!(resolve_operands(&m), (33, 200));
    }

    #[test]
    fn stale_mem_wb_loses_to_fresh_wb_end_ordering() {
        // MEM/WB is younger than WB/END, so its value overrides.
        let mut m = consumer_machine();
        m.wb_end.inst = pack(op::ADD, 0, 0, 2);
        m.wb_end.write_data = 44;
        m.mem_wb.inst = pack(op::ADD, 0, 0, 2);
        m.mem_wb.write_data = 55;
        assert_eq!(resolve_operands(&m), (100, 55));
    }

    #[test]
    fn store_in_flight_does_not_forward() {
        let mut m = consumer_machine();
        m.ex_mem.inst = pack(op::SW, 0, 1, 4);
        m.ex_mem.alu = 99;
        assert_eq!(resolve_operands(&m), (100, 200));
    }
}
