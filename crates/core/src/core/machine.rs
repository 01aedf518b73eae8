//! Architectural machine state.
//!
//! The whole machine is one plain value: program counter, the two
//! fixed-capacity memories, the register file, the five pipeline latches,
//! and the cycle counter. A cycle computes a complete next-state value
//! from the current one and replaces it wholesale; nothing mutates the
//! current state mid-cycle (see [`crate::core::pipeline::advance`]).

use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb, WbEnd};

/// Capacity of instruction memory and data memory, in words.
pub const MEM_WORDS: usize = 65536;

/// Number of integer registers.
pub const NUM_REGS: usize = 8;

/// Complete machine state for one cycle boundary.
///
/// Instruction memory is populated once at load time and never written
/// again. Data memory is seeded as a copy of the same program image and
/// diverges once stores execute. Both are indexed without defensive
/// checks, matching the modeled hardware; a program that computes an
/// address outside `0..MEM_WORDS` panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Machine {
    /// Program counter: word index into instruction memory.
    pub pc: i32,
    /// Instruction memory image, fixed after load.
    pub instr_mem: Vec<i32>,
    /// Data memory, seeded from the program image, mutated by `sw`.
    pub data_mem: Vec<i32>,
    /// Integer register file; no register has hardwired behavior.
    pub regs: [i32; NUM_REGS],
    /// Number of words loaded from the machine-code file. Bounds the
    /// data-memory portion of the diagnostic dump.
    pub num_memory: usize,
    /// Fetch → Decode latch.
    pub if_id: IfId,
    /// Decode → Execute latch.
    pub id_ex: IdEx,
    /// Execute → Memory latch.
    pub ex_mem: ExMem,
    /// Memory → Writeback latch.
    pub mem_wb: MemWb,
    /// Retired-instruction latch.
    pub wb_end: WbEnd,
    /// Cycles completed so far.
    pub cycles: u32,
}

impl Machine {
    /// Builds the reset-state machine for a program image.
    ///
    /// Registers and pc start at zero, every latch holds a `noop`, and
    /// both memories hold the program words followed by zero fill.
    ///
    /// # Panics
    ///
    /// Panics if the program is longer than [`MEM_WORDS`]; the loader
    /// rejects such files before constructing a machine.
    pub fn new(program: &[i32]) -> Self {
        assert!(program.len() <= MEM_WORDS, "program exceeds memory capacity");

        let mut instr_mem = vec![0; MEM_WORDS];
        instr_mem[..program.len()].copy_from_slice(program);
        let data_mem = instr_mem.clone();

        Self {
            pc: 0,
            instr_mem,
            data_mem,
            regs: [0; NUM_REGS],
            num_memory: program.len(),
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            wb_end: WbEnd::default(),
            cycles: 0,
        }
    }
}
