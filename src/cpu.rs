use std::fmt::Display;

use crate::memory::Cell;

/// Register file of the machine: one program counter and the running flag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cpu {
    pub pc: Cell,   // The program counter register
    pub halt: bool, // Flag keeping the current running state
}

impl Display for Cpu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cpu [ pc: {}, halt: {} ]", self.pc, self.halt)
    }
}

impl Cpu {
    pub fn new() -> Self {
        Cpu { pc: 0, halt: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    Add = 1,   // mem[mem[PC+3]] = mem[mem[PC+1]] + mem[mem[PC+2]], PC += 4
    Mul = 2,   // mem[mem[PC+3]] = mem[mem[PC+1]] * mem[mem[PC+2]], PC += 4
    Halt = 99, // HALT = true, report mem[0]
}

impl TryFrom<Cell> for OpCode {
    type Error = Cell;

    fn try_from(v: Cell) -> Result<Self, Cell> {
        match v {
            1 => Ok(Self::Add),
            2 => Ok(Self::Mul),
            99 => Ok(Self::Halt),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_opcodes() {
        assert_eq!(OpCode::try_from(1), Ok(OpCode::Add));
        assert_eq!(OpCode::try_from(2), Ok(OpCode::Mul));
        assert_eq!(OpCode::try_from(99), Ok(OpCode::Halt));
    }

    #[test]
    fn hands_back_unknown_opcodes() {
        assert_eq!(OpCode::try_from(3), Err(3));
        assert_eq!(OpCode::try_from(0), Err(0));
        assert_eq!(OpCode::try_from(-1), Err(-1));
    }
}
