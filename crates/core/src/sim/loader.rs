//! Machine-Code Loader.
//!
//! Reads the textual machine-code format (one decimal instruction word per
//! line), echoes the loaded instruction memory in the fixed diagnostic
//! layout, and builds the reset-state machine. All load failures are
//! fatal and reported with the offending address; no partial simulation
//! is ever attempted.

use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use crate::core::Machine;
use crate::core::machine::MEM_WORDS;
use crate::isa::disasm;

/// Fatal errors raised while loading a machine-code file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be opened or read.
    #[error("can't open file {path}: {source}")]
    Open {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line did not parse as a decimal instruction word.
    #[error("error in reading address {address}")]
    BadWord {
        /// Word index (line number, zero-based) of the malformed line.
        address: usize,
    },

    /// The program has more words than the machine has memory.
    #[error("program of {words} words exceeds memory capacity of {MEM_WORDS}")]
    TooLarge {
        /// Number of words in the file.
        words: usize,
    },

    /// Writing the instruction-memory echo failed.
    #[error("failed to write load diagnostics")]
    Echo(#[from] io::Error),
}

/// Parses one machine-code line into an instruction word.
///
/// The first whitespace-delimited token must be a decimal (optionally
/// signed) 32-bit integer; anything after it is ignored.
fn parse_word(line: &str) -> Option<i32> {
    line.split_whitespace().next()?.parse().ok()
}

/// Loads a machine-code file and constructs the reset-state machine.
///
/// Echoes each loaded word to `out` in the fixed diagnostic layout
/// (index, hex pattern, decimal value, mnemonic). End of file determines
/// the program size; both memories are seeded with the same image.
pub fn load_program<W: Write>(path: &Path, out: &mut W) -> Result<Machine, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let mut words = Vec::new();
    writeln!(out, "instruction memory:")?;
    for (address, line) in text.lines().enumerate() {
        let word = parse_word(line).ok_or(LoadError::BadWord { address })?;
        if words.len() == MEM_WORDS {
            return Err(LoadError::TooLarge {
                words: text.lines().count(),
            });
        }
        writeln!(
            out,
            "\tinstrMem[ {} ]\t= 0x{:08x}\t= {}\t= {}",
            address,
            word as u32,
            word,
            disasm::disassemble(word)
        )?;
        words.push(word);
    }

    Ok(Machine::new(&words))
}
