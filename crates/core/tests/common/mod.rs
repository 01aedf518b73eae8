//! Shared test infrastructure: instruction builders, a run-to-halt
//! harness, and a non-pipelined reference interpreter used for
//! equivalence checks.
#![allow(dead_code)]

use std::io;

use lc2k_core::core::machine::NUM_REGS;
use lc2k_core::isa::{self, opcodes as op};
use lc2k_core::{Machine, Simulator};

/// Packs an instruction word from opcode and fields.
pub fn pack(opcode: i32, a: i32, b: i32, field: i32) -> i32 {
    (opcode << 22) | (a << 19) | (b << 16) | (field & 0xFFFF)
}

/// `add regA regB destReg`
pub fn add(a: i32, b: i32, dest: i32) -> i32 {
    pack(op::ADD, a, b, dest)
}

/// `nor regA regB destReg`
pub fn nor(a: i32, b: i32, dest: i32) -> i32 {
    pack(op::NOR, a, b, dest)
}

/// `lw baseReg destReg offset`
pub fn lw(base: i32, dest: i32, offset: i32) -> i32 {
    pack(op::LW, base, dest, offset)
}

/// `sw baseReg srcReg offset`
pub fn sw(base: i32, src: i32, offset: i32) -> i32 {
    pack(op::SW, base, src, offset)
}

/// `beq regA regB offset`
pub fn beq(a: i32, b: i32, offset: i32) -> i32 {
    pack(op::BEQ, a, b, offset)
}

/// `halt`
pub fn halt() -> i32 {
    pack(op::HALT, 0, 0, 0)
}

/// `noop`
pub fn noop() -> i32 {
    isa::NOOP_WORD
}

/// Runs a program on the pipeline to the halt condition, discarding the
/// diagnostic dump, and returns the final machine state.
pub fn run_to_halt(program: &[i32]) -> Machine {
    let mut sim = Simulator::new(Machine::new(program));
    let cycles = sim
        .run(&mut io::sink())
        .unwrap_or_else(|e| panic!("sink write failed: {e}"));
    assert_eq!(cycles, sim.machine.cycles, "reported cycles must match state");
    sim.machine
}

/// Executes a program sequentially, one instruction at a time, with no
/// pipeline. Returns the final registers and data memory (program-image
/// length). The pipelined machine must converge to the same values for
/// any terminating program.
pub fn interpret(program: &[i32]) -> ([i32; NUM_REGS], Vec<i32>) {
    let mut regs = [0i32; NUM_REGS];
    let mut data: Vec<i32> = program.to_vec();
    let mut pc = 0i32;

    loop {
        let word = program[pc as usize];
        match isa::opcode(word) {
            op::ADD => {
                regs[isa::dest_or_imm(word) as usize] = regs[isa::reg_a(word) as usize]
                    .wrapping_add(regs[isa::reg_b(word) as usize]);
            }
            op::NOR => {
                regs[isa::dest_or_imm(word) as usize] =
                    !(regs[isa::reg_a(word) as usize] | regs[isa::reg_b(word) as usize]);
            }
            op::LW => {
                let addr = regs[isa::reg_a(word) as usize]
                    .wrapping_add(isa::sign_extend(isa::dest_or_imm(word)));
                regs[isa::reg_b(word) as usize] = data[addr as usize];
            }
            op::SW => {
                let addr = regs[isa::reg_a(word) as usize]
                    .wrapping_add(isa::sign_extend(isa::dest_or_imm(word)));
                data[addr as usize] = regs[isa::reg_b(word) as usize];
            }
            op::BEQ => {
                if regs[isa::reg_a(word) as usize] == regs[isa::reg_b(word) as usize] {
                    pc = pc + 1 + isa::sign_extend(isa::dest_or_imm(word));
                    continue;
                }
            }
            op::HALT => break,
            _ => {}
        }
        pc += 1;
    }

    (regs, data)
}
