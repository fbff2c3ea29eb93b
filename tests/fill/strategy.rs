use {
    crossfill::{assignment::consistent_extension, Assignment, Grid, Puzzle, WordList},
    proptest::{collection::vec, prelude::Strategy},
};

const MAX_SIDE: usize = 3;
const MAX_WORDS: usize = 8;

/// Small rectangular grids, mostly fillable.
pub(crate) fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1..=MAX_SIDE, 1..=MAX_SIDE).prop_flat_map(|(height, width)| {
        vec(proptest::bool::weighted(0.75), height * width).prop_map(move |cells| {
            let template = cells
                .chunks(width)
                .map(|row| {
                    row.iter()
                        .map(|&fillable| if fillable { '_' } else { '#' })
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n");

            Grid::parse(&template).expect("generated templates are rectangular")
        })
    })
}

/// Short words over a tiny alphabet, so that crossings conflict often.
pub(crate) fn word_list_strategy() -> impl Strategy<Value = WordList> {
    vec("[ABC]{2,3}", 0..MAX_WORDS).prop_map(|words: Vec<String>| WordList::new(words))
}

pub(crate) fn puzzle_strategy() -> impl Strategy<Value = Puzzle> {
    (grid_strategy(), word_list_strategy()).prop_map(|(grid, words)| Puzzle::new(grid, words))
}

/// Every complete, consistent assignment, found by trying every word in every variable.
pub(crate) fn all_solutions(puzzle: &Puzzle) -> Vec<Assignment> {
    fn extend(puzzle: &Puzzle, var_id: usize, assignment: &Assignment, out: &mut Vec<Assignment>) {
        if var_id == puzzle.variable_count() {
            out.push(assignment.clone());
            return;
        }

        for (word_id, _) in puzzle.words().iter() {
            if consistent_extension(puzzle, assignment, var_id, word_id) {
                extend(puzzle, var_id + 1, &assignment.with(var_id, word_id), out);
            }
        }
    }

    let mut out = vec![];
    extend(puzzle, 0, &Assignment::new(), &mut out);
    out
}
