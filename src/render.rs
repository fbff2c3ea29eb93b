use crate::assignment::Assignment;
use crate::puzzle::Puzzle;

/// Printed in place of blocked cells.
pub const BLOCK_GLYPH: char = '█';

/// Project an assignment onto the grid: `letters[row][col]` holds the letter written in that
/// cell, if any.
pub fn letter_grid(puzzle: &Puzzle, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let grid = puzzle.grid();
    let mut letters = vec![vec![None; grid.width()]; grid.height()];

    for (variable, word) in assignment.words(puzzle) {
        for (cell_idx, letter) in word.chars().enumerate() {
            let (row, col) = variable.cell(cell_idx);
            let cell = &mut letters[row][col];

            match *cell {
                Some(existing) if existing != letter => panic!(
                    "Conflicting letters {:?} and {:?} at ({}, {})",
                    existing, letter, row, col
                ),
                _ => *cell = Some(letter),
            }
        }
    }

    letters
}

/// Turn the given assignment into a rendered string, one line per grid row.
pub fn render_grid(puzzle: &Puzzle, assignment: &Assignment) -> String {
    let grid = puzzle.grid();
    let letters = letter_grid(puzzle, assignment);

    letters
        .iter()
        .enumerate()
        .map(|(row, row_letters)| {
            row_letters
                .iter()
                .enumerate()
                .map(|(col, letter)| {
                    if grid.is_fillable((row, col)) {
                        letter.unwrap_or(' ')
                    } else {
                        BLOCK_GLYPH
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
