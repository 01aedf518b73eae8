//! Simulator: owns the machine state and drives it to the halt condition.

use std::io::{self, Write};

use crate::core::Machine;
use crate::core::pipeline;
use crate::isa::{self, opcodes as op};
use crate::sim::dump;

/// Top-level simulator: one machine value advanced cycle by cycle.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// Current-cycle machine state.
    pub machine: Machine,
}

impl Simulator {
    /// Creates a simulator around a loaded machine.
    pub fn new(machine: Machine) -> Self {
        Self { machine }
    }

    /// Whether the terminal condition holds: the instruction resident in
    /// the MEM/WB latch at this cycle boundary is `halt`.
    pub fn halted(&self) -> bool {
        isa::opcode(self.machine.mem_wb.inst) == op::HALT
    }

    /// Advances the machine by one clock cycle.
    pub fn tick(&mut self) {
        self.machine = pipeline::advance(&self.machine);
    }

    /// Runs to the halt condition, emitting the diagnostic dump before
    /// every cycle and once more after halting.
    ///
    /// Returns the total cycle count. A program that never drains a
    /// `halt` into MEM/WB never returns.
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<u32> {
        while !self.halted() {
            dump::write_state(out, &self.machine)?;
            self.tick();
        }
        writeln!(out, "Machine halted")?;
        writeln!(out, "Total of {} cycles executed", self.machine.cycles)?;
        writeln!(out, "Final state of machine:")?;
        dump::write_state(out, &self.machine)?;
        Ok(self.machine.cycles)
    }
}
