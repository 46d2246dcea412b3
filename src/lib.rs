pub mod cpu;
pub mod error;
pub mod fuel;
pub mod input;
pub mod memory;
pub mod program;
pub mod search;
pub mod wires;

use cpu::{Cpu, OpCode};
use log::debug;
use memory::{Cell, Memory, MemoryError};
use program::Program;

pub use error::ExecError;
pub use search::{search, SearchError};

/// Address the final result is read from on halt.
const RESULT_ADDRESS: Cell = 0;

/// Addresses the two search parameters are injected at.
const NOUN_ADDRESS: Cell = 1;
const VERB_ADDRESS: Cell = 2;

/// Stride of a binary instruction: opcode, two operand addresses, one
/// destination address.
const INSTRUCTION_STRIDE: Cell = 4;

#[derive(Default)]
pub struct Machine {
    pub(crate) cpu: Cpu,
    memory: Memory,
}

impl Machine {
    pub fn load_program(&mut self, program: &Program) {
        // Reset the registers, then copy the image into a fresh memory so
        // the caller's program is never touched by a run.
        self.cpu = Cpu::new();
        self.memory = Memory::from_image(&program.data);
    }

    /// Writes a cell before execution starts. Used to restore the machine
    /// to an initial condition, e.g. injecting the day-2 noun and verb.
    pub fn patch(&mut self, address: Cell, value: Cell) -> Result<(), MemoryError> {
        self.memory.write_to(address, value)
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    fn debug_state(&self) {
        let pc = self.cpu.pc.max(0) as usize;
        let window = self
            .memory
            .image()
            .iter()
            .skip(pc)
            .take(INSTRUCTION_STRIDE as usize)
            .fold(String::new(), |acc, cell| acc + &format!("{} ", cell));
        debug!(
            "State: PC: {}, halt: {} | {}",
            self.cpu.pc, self.cpu.halt, window
        );
    }

    /// Executes the instruction under the program counter. Returns the
    /// final result once the halt opcode is reached, `None` while the
    /// machine keeps running.
    fn step(&mut self) -> Result<Option<Cell>, ExecError> {
        let pc = self.cpu.pc;
        let mem = ExecError::memory(pc);

        let raw = self.memory.value_at(pc).map_err(mem)?;
        let opcode =
            OpCode::try_from(raw).map_err(|opcode| ExecError::UnknownOpcode { opcode, pc })?;

        if let OpCode::Halt = opcode {
            self.cpu.halt = true;
            return self.memory.value_at(RESULT_ADDRESS).map(Some).map_err(mem);
        }

        let lhs = self.memory.value_at_ptr(pc + 1).map_err(mem)?;
        let rhs = self.memory.value_at_ptr(pc + 2).map_err(mem)?;
        let result = match opcode {
            OpCode::Add => lhs.checked_add(rhs),
            OpCode::Mul => lhs.checked_mul(rhs),
            OpCode::Halt => unreachable!(),
        }
        .ok_or(ExecError::Overflow { opcode, pc })?;

        // The destination is the address literal itself, not followed
        // through a pointer.
        let destination = self.memory.value_at(pc + 3).map_err(mem)?;
        self.memory.write_to(destination, result).map_err(mem)?;

        self.cpu.pc += INSTRUCTION_STRIDE;
        Ok(None)
    }

    /// Runs the loaded program until halt or fault and returns the value
    /// at address 0.
    pub fn run(&mut self) -> Result<Cell, ExecError> {
        loop {
            let outcome = self.step()?;
            self.debug_state();
            if let Some(result) = outcome {
                debug!("{}", self.cpu);
                return Ok(result);
            }
        }
    }
}

/// One complete execution: clones the image into a fresh machine, injects
/// the two parameters at addresses 1 and 2, and runs to completion.
pub fn execute(program: &Program, noun: Cell, verb: Cell) -> Result<Cell, ExecError> {
    let mut machine = Machine::default();
    machine.load_program(program);
    machine
        .patch(NOUN_ADDRESS, noun)
        .and_then(|_| machine.patch(VERB_ADDRESS, verb))
        .map_err(ExecError::memory(0))?;
    machine.run()
}
