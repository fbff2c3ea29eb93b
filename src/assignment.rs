use std::collections::BTreeMap;

use crate::puzzle::{Puzzle, Variable};
use crate::{VarId, WordId};

/// A mapping from some subset of the puzzle's variables to the word chosen for each.
///
/// The search never edits an assignment in place: extending one produces a new copy, so each
/// branch of the search owns its own snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    choices: BTreeMap<VarId, WordId>,
}

impl Assignment {
    pub fn new() -> Assignment {
        Assignment::default()
    }

    pub fn get(&self, var_id: VarId) -> Option<WordId> {
        self.choices.get(&var_id).copied()
    }

    pub fn contains(&self, var_id: VarId) -> bool {
        self.choices.contains_key(&var_id)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VarId, WordId)> + '_ {
        self.choices.iter().map(|(&var_id, &word_id)| (var_id, word_id))
    }

    /// Return a copy of this assignment with `var_id` bound to `word_id`. Binding a variable twice
    /// is a bug in the caller.
    pub fn with(&self, var_id: VarId, word_id: WordId) -> Assignment {
        if self.contains(var_id) {
            panic!("Variable {} is already assigned", var_id);
        }

        let mut extended = self.clone();
        extended.choices.insert(var_id, word_id);
        extended
    }

    /// The chosen words, paired with their variables.
    pub fn words<'a>(
        &'a self,
        puzzle: &'a Puzzle,
    ) -> impl Iterator<Item = (&'a Variable, &'a str)> + 'a {
        self.iter().map(move |(var_id, word_id)| {
            (
                puzzle.variable(var_id),
                puzzle.words().get(word_id).string.as_str(),
            )
        })
    }

    /// Does every variable in the puzzle have a word of the right length?
    pub fn is_complete(&self, puzzle: &Puzzle) -> bool {
        puzzle
            .variables()
            .iter()
            .enumerate()
            .all(|(var_id, variable)| match self.get(var_id) {
                Some(word_id) => puzzle.words().get(word_id).len() == variable.length,
                None => false,
            })
    }
}

impl FromIterator<(VarId, WordId)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (VarId, WordId)>>(iter: I) -> Self {
        Assignment {
            choices: iter.into_iter().collect(),
        }
    }
}

/// Do the two assigned words agree on their shared cell? Variables that don't cross always agree.
fn crossing_agrees(
    puzzle: &Puzzle,
    var_id: VarId,
    word_id: WordId,
    other_var_id: VarId,
    other_word_id: WordId,
) -> bool {
    let Some((cell_idx, other_cell_idx)) = puzzle.overlap(var_id, other_var_id) else {
        return true;
    };

    letters_agree(puzzle, word_id, cell_idx, other_word_id, other_cell_idx)
}

/// Does `word_id`'s letter at `cell_idx` match `other_word_id`'s letter at `other_cell_idx`?
fn letters_agree(
    puzzle: &Puzzle,
    word_id: WordId,
    cell_idx: usize,
    other_word_id: WordId,
    other_cell_idx: usize,
) -> bool {
    let letter = puzzle.words().get(word_id).letters.get(cell_idx);
    let other_letter = puzzle.words().get(other_word_id).letters.get(other_cell_idx);

    letter.is_some() && letter == other_letter
}

/// Check a (possibly partial) assignment from scratch: no word is used twice, every word fits its
/// variable's length, and every pair of crossing variables agrees on the shared letter.
pub fn consistent(puzzle: &Puzzle, assignment: &Assignment) -> bool {
    let choices: Vec<(VarId, WordId)> = assignment.iter().collect();

    for (idx, &(var_id, word_id)) in choices.iter().enumerate() {
        if puzzle.words().get(word_id).len() != puzzle.variable(var_id).length {
            return false;
        }

        for &(other_var_id, other_word_id) in &choices[idx + 1..] {
            if word_id == other_word_id {
                return false;
            }

            if !crossing_agrees(puzzle, var_id, word_id, other_var_id, other_word_id) {
                return false;
            }
        }
    }

    true
}

/// Would binding `var_id` to `word_id` keep an already-consistent assignment consistent? This
/// only checks the new choice against the existing ones, and gives the same answer as running
/// `consistent` on the extended assignment.
pub fn consistent_extension(
    puzzle: &Puzzle,
    assignment: &Assignment,
    var_id: VarId,
    word_id: WordId,
) -> bool {
    if puzzle.words().get(word_id).len() != puzzle.variable(var_id).length {
        return false;
    }

    if assignment.iter().any(|(_, other_word_id)| other_word_id == word_id) {
        return false;
    }

    puzzle.neighbors(var_id).iter().all(|neighbor| {
        let Some(neighbor_word_id) = assignment.get(neighbor) else {
            return true;
        };

        let (cell_idx, neighbor_cell_idx) = puzzle
            .overlap(var_id, neighbor)
            .expect("Neighboring variables must overlap");

        letters_agree(puzzle, word_id, cell_idx, neighbor_word_id, neighbor_cell_idx)
    })
}
