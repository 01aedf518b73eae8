//! Instruction Set Definitions and Codec.
//!
//! This module defines the LC-2K instruction word layout and the pure
//! functions that pick it apart. It provides:
//! 1. **Opcodes:** Constants for the eight-slot opcode space.
//! 2. **Field extraction:** Opcode, source registers, and the combined
//!    destination/immediate field.
//! 3. **Sign extension:** 16-bit immediates widened to 32-bit words.
//! 4. **Disassembly:** Mnemonic rendering for diagnostics.
//!
//! An instruction word is a signed 32-bit value: opcode in bits 24-22,
//! regA in bits 21-19, regB in bits 18-16, and either the destination
//! register or a 16-bit immediate in bits 15-0. Decoding never fails;
//! any 32-bit pattern is a legal word.

pub mod disasm;
pub mod opcodes;

/// The architectural no-op word (`noop` opcode, all fields zero).
///
/// Pipeline latches are seeded with this value, and it is the bubble
/// inserted on stalls and squashes.
pub const NOOP_WORD: i32 = opcodes::NOOP << 22;

/// Extracts the opcode from an instruction word.
///
/// The shift is arithmetic, so raw-data words with the sign bit set
/// produce opcodes outside `0..=7`; those match no stage dispatch.
#[inline]
pub fn opcode(word: i32) -> i32 {
    word >> 22
}

/// Extracts the first source register field (regA).
#[inline]
pub fn reg_a(word: i32) -> i32 {
    (word >> 19) & 0x7
}

/// Extracts the second source register field (regB).
#[inline]
pub fn reg_b(word: i32) -> i32 {
    (word >> 16) & 0x7
}

/// Extracts the low 16-bit field: the destination register for `add`/`nor`
/// and the raw (unextended) immediate for `lw`/`sw`/`beq`.
#[inline]
pub fn dest_or_imm(word: i32) -> i32 {
    word & 0xFFFF
}

/// Sign-extends a 16-bit field to a full machine word.
#[inline]
pub fn sign_extend(value: i32) -> i32 {
    (value << 16) >> 16
}
