use bit_set::BitSet;
use log::debug;
use smallvec::{smallvec, SmallVec};
use std::collections::HashMap;
use std::fmt;

use crate::grid::Grid;
use crate::word_list::WordList;
use crate::{GridCoord, VarId, MAX_SLOT_LENGTH};

/// Direction that a variable is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A word slot in the grid. Two variables are equal when they start in the same cell, face the
/// same way and have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub start_cell: GridCoord,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    /// The coords of the cell holding the letter at `cell_idx`.
    pub fn cell(&self, cell_idx: usize) -> GridCoord {
        let (row, col) = self.start_cell;
        match self.direction {
            Direction::Across => (row, col + cell_idx),
            Direction::Down => (row + cell_idx, col),
        }
    }

    /// Generate the coords for each cell of this variable.
    pub fn cell_coords(&self) -> SmallVec<[GridCoord; MAX_SLOT_LENGTH]> {
        (0..self.length).map(|cell_idx| self.cell(cell_idx)).collect()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.start_cell.0, self.start_cell.1, self.direction, self.length
        )
    }
}

/// The immutable model of a puzzle: its grid, its word list, the variables found in the grid, and
/// the overlaps between crossing variables.
pub struct Puzzle {
    grid: Grid,
    words: WordList,
    variables: Vec<Variable>,

    /// For each ordered pair of crossing variables `(a, b)`, the index of the shared cell within
    /// `a` and within `b`. Pairs that don't cross have no entry.
    overlaps: HashMap<(VarId, VarId), (usize, usize)>,

    neighbors: Vec<BitSet>,
}

impl fmt::Debug for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Puzzle")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("variables", &self.variables)
            .field("words", &self.words)
            .finish()
    }
}

/// Find every maximal run of at least two fillable cells in one direction.
fn find_variables(grid: &Grid, direction: Direction) -> Vec<Variable> {
    let (line_count, line_length) = match direction {
        Direction::Across => (grid.height(), grid.width()),
        Direction::Down => (grid.width(), grid.height()),
    };
    let coord = |line: usize, offset: usize| match direction {
        Direction::Across => (line, offset),
        Direction::Down => (offset, line),
    };

    let mut result = vec![];

    for line in 0..line_count {
        let mut run_start: Option<usize> = None;

        // One step past the end so a run touching the edge gets closed.
        for offset in 0..=line_length {
            let fillable = offset < line_length && grid.is_fillable(coord(line, offset));

            match (fillable, run_start) {
                (true, None) => run_start = Some(offset),
                (false, Some(start)) => {
                    if offset - start > 1 {
                        result.push(Variable {
                            start_cell: coord(line, start),
                            direction,
                            length: offset - start,
                        });
                    }
                    run_start = None;
                }
                _ => {}
            }
        }
    }

    result
}

impl Puzzle {
    /// Build the puzzle model: across variables first, then down variables, each in reading order.
    pub fn new(grid: Grid, words: WordList) -> Puzzle {
        let mut variables = find_variables(&grid, Direction::Across);
        variables.extend(find_variables(&grid, Direction::Down));

        // Build a map from cell location to (variable, cell index) entries, which we can then use
        // to calculate overlaps.
        let mut entries_by_loc: HashMap<GridCoord, SmallVec<[(VarId, usize); 2]>> =
            HashMap::new();

        for (var_id, variable) in variables.iter().enumerate() {
            for (cell_idx, loc) in variable.cell_coords().into_iter().enumerate() {
                entries_by_loc
                    .entry(loc)
                    .or_insert_with(|| smallvec![])
                    .push((var_id, cell_idx));
            }
        }

        let mut overlaps = HashMap::new();
        let mut neighbors: Vec<BitSet> = variables
            .iter()
            .map(|_| BitSet::with_capacity(variables.len()))
            .collect();

        for (loc, entries) in &entries_by_loc {
            match entries.as_slice() {
                [_] => {}
                &[(a, a_cell), (b, b_cell)] => {
                    overlaps.insert((a, b), (a_cell, b_cell));
                    overlaps.insert((b, a), (b_cell, a_cell));
                    neighbors[a].insert(b);
                    neighbors[b].insert(a);
                }
                _ => panic!("More than two variables crossing in cell {:?}?", loc),
            }
        }

        debug!(
            "found {} variables and {} overlaps in a {}x{} grid",
            variables.len(),
            overlaps.len() / 2,
            grid.width(),
            grid.height()
        );

        Puzzle {
            grid,
            words,
            variables,
            overlaps,
            neighbors,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, var_id: VarId) -> &Variable {
        &self.variables[var_id]
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Look up the id of a variable by value.
    pub fn variable_id(&self, variable: &Variable) -> Option<VarId> {
        self.variables.iter().position(|candidate| candidate == variable)
    }

    /// The set of variables sharing a cell with `var_id`.
    pub fn neighbors(&self, var_id: VarId) -> &BitSet {
        &self.neighbors[var_id]
    }

    pub fn degree(&self, var_id: VarId) -> usize {
        self.neighbors[var_id].len()
    }

    /// If `a` and `b` cross, the index of the shared cell within `a` and within `b`.
    pub fn overlap(&self, a: VarId, b: VarId) -> Option<(usize, usize)> {
        self.overlaps.get(&(a, b)).copied()
    }

    /// Every ordered pair of crossing variables, sorted.
    pub fn arcs(&self) -> Vec<(VarId, VarId)> {
        let mut arcs: Vec<(VarId, VarId)> = self.overlaps.keys().copied().collect();
        arcs.sort_unstable();
        arcs
    }

    /// Drop the recorded overlap between two neighbors while leaving them neighbors.
    #[cfg(test)]
    pub(crate) fn without_overlap(mut self, a: VarId, b: VarId) -> Puzzle {
        self.overlaps.remove(&(a, b));
        self.overlaps.remove(&(b, a));
        self
    }
}
