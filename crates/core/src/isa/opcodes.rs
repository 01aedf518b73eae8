//! LC-2K Opcodes.
//!
//! Defines the major opcodes (bits 24-22 of the instruction word).
//! Opcode values outside `ADD..=NOOP` are legal to load but inert at
//! runtime; the disassembler renders them as raw `.fill` data.

/// Register-register addition (R-type).
pub const ADD: i32 = 0;

/// Register-register bitwise NOR (R-type).
pub const NOR: i32 = 1;

/// Load word from data memory (I-type).
pub const LW: i32 = 2;

/// Store word to data memory (I-type).
pub const SW: i32 = 3;

/// Branch if the two source registers are equal (I-type).
pub const BEQ: i32 = 4;

/// Jump and link register (J-type). Present in the encoding space only;
/// no stage dispatches on it, so it executes as a no-op.
pub const JALR: i32 = 5;

/// Stop the machine once this instruction drains to the MEM/WB latch.
pub const HALT: i32 = 6;

/// The architectural no-op, also used as the bubble value for stalls
/// and squashes.
pub const NOOP: i32 = 7;
