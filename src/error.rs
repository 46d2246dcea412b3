use thiserror::Error;

use crate::cpu::OpCode;
use crate::memory::{Cell, MemoryError};

/// Execution faults. Every variant carries the program counter at the time
/// of failure so a malformed image can be debugged from the message alone.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecError {
    #[error("{source} (PC={pc})")]
    Memory { pc: Cell, source: MemoryError },
    #[error("unknown opcode {opcode} (PC={pc})")]
    UnknownOpcode { opcode: Cell, pc: Cell },
    #[error("{opcode:?} overflowed (PC={pc})")]
    Overflow { opcode: OpCode, pc: Cell },
}

impl ExecError {
    pub(crate) fn memory(pc: Cell) -> impl Fn(MemoryError) -> ExecError + Copy {
        move |source| ExecError::Memory { pc, source }
    }
}
