//! Instruction Disassembler for the LC-2K ISA.
//!
//! Converts a 32-bit instruction word into the human-readable rendering
//! used by the state dump and the instruction-memory echo. The output
//! grammar is part of the external diagnostic contract:
//!
//! - R-type/I-type: `add 1 2 3`, `beq 0 1 -4` (immediate sign-extended)
//! - `jalr 1 2` (two operands, no immediate)
//! - `halt`, `noop` (bare mnemonic)
//! - anything with an out-of-range opcode: `.fill <word>`

use crate::isa::{self, opcodes as op};

/// Mnemonics indexed by opcode.
const MNEMONICS: [&str; 8] = ["add", "nor", "lw", "sw", "beq", "jalr", "halt", "noop"];

/// Disassembles an instruction word into its diagnostic rendering.
///
/// Never fails: words whose opcode falls outside the encoding space are
/// rendered as raw `.fill` data.
pub fn disassemble(word: i32) -> String {
    let opcode = isa::opcode(word);
    match opcode {
        op::ADD | op::NOR | op::LW | op::SW | op::BEQ => format!(
            "{} {} {} {}",
            MNEMONICS[opcode as usize],
            isa::reg_a(word),
            isa::reg_b(word),
            isa::sign_extend(isa::dest_or_imm(word))
        ),
        op::JALR => format!(
            "{} {} {}",
            MNEMONICS[opcode as usize],
            isa::reg_a(word),
            isa::reg_b(word)
        ),
        op::HALT | op::NOOP => MNEMONICS[opcode as usize].to_string(),
        _ => format!(".fill {word}"),
    }
}
