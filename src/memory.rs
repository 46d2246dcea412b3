use thiserror::Error;

/// A single memory cell. Programs and data share one address space of
/// signed 64-bit integers.
pub type Cell = i64;

/// How a failed access was attempted, so diagnostics can tell a direct
/// lookup apart from the second hop of a pointer read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Read,
    Pointer,
    Write,
}

impl std::fmt::Display for AccessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessKind::Read => write!(f, "read memory"),
            AccessKind::Pointer => write!(f, "read memory through pointer"),
            AccessKind::Write => write!(f, "write memory"),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    #[error("attempted to {kind} out of bounds at {address}, memory size: {size}")]
    OutOfBounds {
        address: Cell,
        size: usize,
        kind: AccessKind,
    },
}

/// Fixed-length cell store. Length is set at construction and never
/// changes; every access is validated against it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<Cell>,
}

impl Memory {
    pub fn from_image(image: &[Cell]) -> Self {
        Self {
            cells: image.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The raw cells, for tracing and final-state inspection.
    pub fn image(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, address: Cell, kind: AccessKind) -> Result<usize, MemoryError> {
        match usize::try_from(address) {
            Ok(index) if index < self.cells.len() => Ok(index),
            _ => Err(MemoryError::OutOfBounds {
                address,
                size: self.cells.len(),
                kind,
            }),
        }
    }

    /// Value stored at `address`.
    pub fn value_at(&self, address: Cell) -> Result<Cell, MemoryError> {
        Ok(self.cells[self.index(address, AccessKind::Read)?])
    }

    /// Treats the value stored at `address` as a second address and returns
    /// the value stored there. The error names whichever hop went out of
    /// bounds.
    pub fn value_at_ptr(&self, address: Cell) -> Result<Cell, MemoryError> {
        let target = self.cells[self.index(address, AccessKind::Read)?];
        Ok(self.cells[self.index(target, AccessKind::Pointer)?])
    }

    /// Stores `value` at `address`. The only mutating operation.
    pub fn write_to(&mut self, address: Cell, value: Cell) -> Result<(), MemoryError> {
        let index = self.index(address, AccessKind::Write)?;
        self.cells[index] = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_and_writes_in_bounds() {
        let mut mem = Memory::from_image(&[10, 20, 30]);
        assert_eq!(mem.value_at(0), Ok(10));
        assert_eq!(mem.value_at(2), Ok(30));
        mem.write_to(1, -7).unwrap();
        assert_eq!(mem.value_at(1), Ok(-7));
    }

    #[test]
    fn rejects_reads_past_the_end() {
        let mem = Memory::from_image(&[1, 2, 3]);
        assert_eq!(
            mem.value_at(3),
            Err(MemoryError::OutOfBounds {
                address: 3,
                size: 3,
                kind: AccessKind::Read,
            })
        );
    }

    #[test]
    fn rejects_negative_addresses() {
        let mut mem = Memory::from_image(&[1, 2, 3]);
        assert!(mem.value_at(-1).is_err());
        assert!(mem.write_to(-1, 0).is_err());
        assert_eq!(mem.image(), &[1, 2, 3]);
    }

    #[test]
    fn rejects_writes_past_the_end() {
        let mut mem = Memory::from_image(&[1, 2, 3]);
        assert_eq!(
            mem.write_to(5, 9),
            Err(MemoryError::OutOfBounds {
                address: 5,
                size: 3,
                kind: AccessKind::Write,
            })
        );
        assert_eq!(mem.image(), &[1, 2, 3]);
    }

    #[test]
    fn pointer_read_follows_one_level() {
        let mem = Memory::from_image(&[2, 0, 40]);
        assert_eq!(mem.value_at_ptr(0), Ok(40));
    }

    #[test]
    fn pointer_read_reports_the_failing_hop() {
        let mem = Memory::from_image(&[9, 1]);

        // Outer address invalid: reported as a direct read.
        assert_eq!(
            mem.value_at_ptr(5),
            Err(MemoryError::OutOfBounds {
                address: 5,
                size: 2,
                kind: AccessKind::Read,
            })
        );

        // Outer lookup fine, the cell it names is not: reported as the
        // pointer hop, carrying the pointed-to address.
        assert_eq!(
            mem.value_at_ptr(0),
            Err(MemoryError::OutOfBounds {
                address: 9,
                size: 2,
                kind: AccessKind::Pointer,
            })
        );
    }

    #[test]
    fn empty_memory_rejects_everything() {
        let mem = Memory::from_image(&[]);
        assert!(mem.is_empty());
        assert!(mem.value_at(0).is_err());
    }
}
