//! Crossword filling as a constraint satisfaction problem. Each maximal run of fillable cells is a
//! variable whose domain is the set of words that could go there; crossing runs are tied together
//! by binary constraints on their shared cell. A fill is found by enforcing node consistency,
//! propagating arc consistency with AC-3, and then running a backtracking search over the pruned
//! domains.

use instant::{Duration, Instant};
use log::debug;
use thiserror::Error;

pub mod arc_consistency;
pub mod assignment;
pub mod backtracking_search;
pub mod domains;
pub mod grid;
pub mod puzzle;
pub mod render;
pub mod word_list;

pub use crate::assignment::{consistent, Assignment};
pub use crate::grid::Grid;
pub use crate::puzzle::{Direction, Puzzle, Variable};
pub use crate::render::{letter_grid, render_grid};
pub use crate::word_list::{Word, WordList};

use crate::arc_consistency::{
    ac3, enforce_node_consistency, ArcConsistencyFailure, ArcConsistencySuccess,
};
use crate::backtracking_search::backtrack;
use crate::domains::Domains;

/// The expected maximum length for a single variable (and so for a single useful word).
pub const MAX_SLOT_LENGTH: usize = 21;

/// An identifier for a given variable, based on its index in the puzzle's `variables` list.
pub type VarId = usize;

/// An identifier for a given word, based on its index in the puzzle's word list.
pub type WordId = usize;

/// Zero-indexed (row, column) coords for a cell in the grid, where row 0 is the top row.
pub type GridCoord = (usize, usize);

/// Problems with the structure or word list input. These are reported before any solving starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("the grid structure has no rows")]
    EmptyGrid,

    #[error("row {row} has {found} cells, but the first row has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected character {found:?} at row {row}, column {col} (expected '_' or '#')")]
    UnknownCell { row: usize, col: usize, found: char },

    #[error("word {word:?} on line {line} contains whitespace")]
    InvalidWord { line: usize, word: String },
}

/// A struct tracking statistics about the filling process.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    /// How many partial assignments the search expanded.
    pub states: u64,
    /// How many times a variable ran out of candidates and the search stepped back.
    pub backtracks: u64,
    /// How many `revise` calls during the initial AC-3 pass actually removed words.
    pub revisions: u64,
    pub duration: Duration,
}

/// A struct representing the results of a successful fill.
#[derive(Debug)]
pub struct FillSuccess {
    pub statistics: Statistics,
    pub assignment: Assignment,
}

/// Why a puzzle couldn't be filled. Neither case is an error: both mean the grid has no solution
/// with the given word list.
#[derive(Debug)]
pub enum FillFailure {
    /// Constraint propagation emptied this variable's domain, so the search never ran and
    /// `statistics.states` is zero.
    ArcConsistency {
        variable: VarId,
        statistics: Statistics,
    },
    /// The search tried every candidate without finding a complete assignment.
    Exhausted { statistics: Statistics },
}

/// Search for a complete, consistent assignment for the given puzzle.
pub fn find_fill(puzzle: &Puzzle) -> Result<FillSuccess, FillFailure> {
    let start = Instant::now();
    let mut statistics = Statistics::default();

    // The domain store lives only as long as this call.
    let mut domains = Domains::new(puzzle);

    let removed = enforce_node_consistency(puzzle, &mut domains);
    debug!(
        "node consistency removed {} candidates across {} variables",
        removed,
        puzzle.variable_count()
    );

    match ac3(puzzle, &mut domains, None) {
        Ok(ArcConsistencySuccess { revisions }) => {
            statistics.revisions = revisions;
        }
        Err(ArcConsistencyFailure { variable }) => {
            debug!(
                "arc consistency emptied the domain of {}",
                puzzle.variable(variable)
            );
            statistics.duration = start.elapsed();
            return Err(FillFailure::ArcConsistency {
                variable,
                statistics,
            });
        }
    }

    let result = backtrack(puzzle, &domains, Assignment::new(), &mut statistics);
    statistics.duration = start.elapsed();
    debug!("{:?}", statistics);

    match result {
        Some(assignment) => Ok(FillSuccess {
            statistics,
            assignment,
        }),
        None => Err(FillFailure::Exhausted { statistics }),
    }
}

/// Fill the puzzle, returning `None` if no assignment satisfies every constraint.
pub fn solve(puzzle: &Puzzle) -> Option<Assignment> {
    find_fill(puzzle).ok().map(|success| success.assignment)
}
