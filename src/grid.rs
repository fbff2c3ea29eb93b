use std::fmt;
use std::str::FromStr;

use crate::{GridCoord, InputError};

/// Character marking a cell that takes a letter.
pub const FILLABLE_CELL: char = '_';

/// Character marking a blocked cell.
pub const BLOCKED_CELL: char = '#';

/// The shape of a crossword: a rectangle of cells, each either fillable or blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Parse a structure from a string template, with `_` representing fillable cells and `#`
    /// representing blocks. Surrounding whitespace on each line is ignored, as are blank lines.
    pub fn parse(template: &str) -> Result<Grid, InputError> {
        let rows: Vec<&str> = template
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let width = match rows.first() {
            Some(first_row) => first_row.chars().count(),
            None => return Err(InputError::EmptyGrid),
        };

        let mut cells = Vec::with_capacity(width * rows.len());

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(InputError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            for (col, cell) in line.chars().enumerate() {
                match cell {
                    FILLABLE_CELL => cells.push(true),
                    BLOCKED_CELL => cells.push(false),
                    found => return Err(InputError::UnknownCell { row, col, found }),
                }
            }
        }

        Ok(Grid {
            width,
            height: rows.len(),
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Can a letter go in this cell? Coords outside the grid count as blocked.
    pub fn is_fillable(&self, (row, col): GridCoord) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }
}

impl FromStr for Grid {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = if self.is_fillable((row, col)) {
                    FILLABLE_CELL
                } else {
                    BLOCKED_CELL
                };
                write!(f, "{}", cell)?;
            }
            if row != self.height - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
