//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the value types carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback. Each latch holds the
//! instruction word plus the scratch fields the downstream stages need.
//!
//! Every latch slot always holds exactly one instruction; an empty slot is
//! represented by the `noop` word, never by an absent value. `Default`
//! therefore seeds the instruction field with [`NOOP_WORD`] and zeroes the
//! scratch fields, which is exactly the reset state of the machine.

use crate::isa::NOOP_WORD;

/// IF/ID latch (Fetch to Decode stage).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfId {
    /// 32-bit instruction word fetched from instruction memory.
    pub inst: i32,
    /// Address of the next sequential instruction (fetch pc + 1).
    pub pc_plus1: i32,
}

/// ID/EX latch (Decode to Execute stage).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdEx {
    /// 32-bit instruction word.
    pub inst: i32,
    /// Carried-forward next-sequential-instruction address.
    pub pc_plus1: i32,
    /// Register-file read of regA at decode time.
    pub read_a: i32,
    /// Register-file read of regB at decode time.
    pub read_b: i32,
    /// Sign-extended immediate.
    pub offset: i32,
}

/// EX/MEM latch (Execute to Memory stage).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExMem {
    /// 32-bit instruction word.
    pub inst: i32,
    /// Candidate branch target (pc_plus1 + offset), latched for every
    /// instruction but meaningful only for `beq`.
    pub branch_target: i32,
    /// Branch comparison outcome latched at execute time.
    pub eq: bool,
    /// ALU result: sum, NOR, effective address, or branch difference.
    pub alu: i32,
    /// Forwarded regB value, kept for the store data path.
    pub store_data: i32,
}

/// MEM/WB latch (Memory to Writeback stage).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemWb {
    /// 32-bit instruction word.
    pub inst: i32,
    /// Value destined for the register file (loaded word or ALU result).
    pub write_data: i32,
}

/// WB/END latch: the retired instruction and the value it committed.
///
/// Kept one generation past writeback so the forwarding network can still
/// source from an instruction whose register write landed this cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WbEnd {
    /// 32-bit instruction word.
    pub inst: i32,
    /// Committed write-back value.
    pub write_data: i32,
}

impl Default for IfId {
    fn default() -> Self {
        Self {
            inst: NOOP_WORD,
            pc_plus1: 0,
        }
    }
}

impl Default for IdEx {
    fn default() -> Self {
        Self {
            inst: NOOP_WORD,
            pc_plus1: 0,
            read_a: 0,
            read_b: 0,
            offset: 0,
        }
    }
}

impl Default for ExMem {
    fn default() -> Self {
        Self {
            inst: NOOP_WORD,
            branch_target: 0,
            eq: false,
            alu: 0,
            store_data: 0,
        }
    }
}

impl Default for MemWb {
    fn default() -> Self {
        Self {
            inst: NOOP_WORD,
            write_data: 0,
        }
    }
}

impl Default for WbEnd {
    fn default() -> Self {
        Self {
            inst: NOOP_WORD,
            write_data: 0,
        }
    }
}
