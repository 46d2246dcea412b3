use log::{debug, info};
use thiserror::Error;

use crate::error::ExecError;
use crate::memory::Cell;
use crate::program::Program;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A trial faulted. The image itself is broken, so guessing further
    /// pairs is pointless and the whole search stops here.
    #[error("program failed with initial conditions noun={noun}, verb={verb}: {source}")]
    BrokenProgram {
        noun: Cell,
        verb: Cell,
        source: ExecError,
    },
    /// Every pair in the declared bounds was tried without hitting the
    /// target. A normal outcome, not a crash.
    #[error("no pair in 0..={noun_bound} x 0..={verb_bound} produces {target}")]
    Exhausted {
        target: Cell,
        noun_bound: Cell,
        verb_bound: Cell,
    },
}

/// Scans the parameter space for the first `(noun, verb)` pair whose run
/// halts with `target` in cell 0. The noun varies slowest; the first match
/// in that order wins. Every trial runs against a fresh copy of the image.
pub fn search(
    program: &Program,
    target: Cell,
    noun_bound: Cell,
    verb_bound: Cell,
) -> Result<(Cell, Cell), SearchError> {
    for noun in 0..=noun_bound {
        debug!("trying noun {} against target {}", noun, target);
        for verb in 0..=verb_bound {
            let result = crate::execute(program, noun, verb).map_err(|source| {
                SearchError::BrokenProgram { noun, verb, source }
            })?;
            if result == target {
                info!("target {} reached with noun={}, verb={}", target, noun, verb);
                return Ok((noun, verb));
            }
        }
    }

    Err(SearchError::Exhausted {
        target,
        noun_bound,
        verb_bound,
    })
}
