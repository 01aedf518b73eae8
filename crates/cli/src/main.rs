//! LC-2K pipeline simulator CLI.
//!
//! Loads a machine-code file, runs the five-stage pipeline to the halt
//! condition, and streams the per-cycle diagnostic dump to stdout. All
//! failures (bad usage, unreadable file, malformed word) exit non-zero
//! before any simulation output is produced.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use lc2k_core::Simulator;
use lc2k_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "psim",
    version,
    about = "LC-2K cycle-accurate five-stage pipeline simulator",
    long_about = "Simulates an LC-2K machine-code program on a five-stage pipeline \
                  (fetch, decode, execute, memory, writeback) with load-use stalling, \
                  operand forwarding, and branch squashing, dumping the full machine \
                  state before every cycle.\n\nExample:\n  psim program.mc"
)]
struct Cli {
    /// Machine-code file: one decimal instruction word per line.
    file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let machine = match loader::load_program(&cli.file, &mut out) {
        Ok(machine) => machine,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let mut sim = Simulator::new(machine);
    if let Err(e) = sim.run(&mut out) {
        eprintln!("error: {e}");
        process::exit(1);
    }
    let _ = out.flush();
}
