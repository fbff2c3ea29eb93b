//! Depth-first search over partial assignments. Variables are chosen by minimum remaining values,
//! breaking ties by degree, and each variable's words are tried least-constraining first.
//!
//! The domains passed in are read-only here: nothing is pruned during the search, so there's
//! nothing to restore when a branch fails. Each recursive call works on its own extended copy of
//! the assignment instead.

use log::trace;
use std::cmp::Reverse;
use std::collections::HashMap;

use crate::assignment::{consistent_extension, Assignment};
use crate::domains::Domains;
use crate::puzzle::Puzzle;
use crate::{Statistics, VarId, WordId};

/// Choose the unassigned variable with the fewest remaining words, preferring the one with the
/// most neighbors on a tie. Returns `None` once every variable is assigned.
pub fn select_unassigned_variable(
    puzzle: &Puzzle,
    domains: &Domains,
    assignment: &Assignment,
) -> Option<VarId> {
    (0..puzzle.variable_count())
        .filter(|&var_id| !assignment.contains(var_id))
        .min_by_key(|&var_id| (domains.len(var_id), Reverse(puzzle.degree(var_id))))
}

/// Return the words in `var_id`'s domain, ordered by how many words each would rule out of the
/// domains of unassigned neighbors. The first word rules out the fewest.
pub fn order_domain_values(
    puzzle: &Puzzle,
    domains: &Domains,
    var_id: VarId,
    assignment: &Assignment,
) -> Vec<WordId> {
    let words = puzzle.words();

    // For each unassigned neighbor: which of our cells it crosses, how many words it has left, and
    // how many of those put each letter in the shared cell.
    let crossings: Vec<(usize, usize, HashMap<char, usize>)> = puzzle
        .neighbors(var_id)
        .iter()
        .filter(|&neighbor| !assignment.contains(neighbor))
        .map(|neighbor| {
            let (cell_idx, neighbor_cell_idx) = puzzle
                .overlap(var_id, neighbor)
                .expect("Neighboring variables must overlap");

            let mut letter_counts: HashMap<char, usize> = HashMap::new();
            for word_id in domains.iter(neighbor) {
                if let Some(&letter) = words.get(word_id).letters.get(neighbor_cell_idx) {
                    *letter_counts.entry(letter).or_insert(0) += 1;
                }
            }

            (cell_idx, domains.len(neighbor), letter_counts)
        })
        .collect();

    let mut values: Vec<WordId> = domains.iter(var_id).collect();

    values.sort_by_cached_key(|&word_id| {
        let word = words.get(word_id);

        crossings
            .iter()
            .map(|(cell_idx, option_count, letter_counts)| {
                let compatible = word
                    .letters
                    .get(*cell_idx)
                    .and_then(|letter| letter_counts.get(letter))
                    .copied()
                    .unwrap_or(0);
                option_count - compatible
            })
            .sum::<usize>()
    });

    values
}

/// Extend `assignment` until every variable has a word, returning the first complete assignment
/// found, or `None` if this branch can't be completed.
pub fn backtrack(
    puzzle: &Puzzle,
    domains: &Domains,
    assignment: Assignment,
    statistics: &mut Statistics,
) -> Option<Assignment> {
    let Some(var_id) = select_unassigned_variable(puzzle, domains, &assignment) else {
        return Some(assignment);
    };

    statistics.states += 1;
    trace!(
        "depth {}: filling {} from {} options",
        assignment.len(),
        puzzle.variable(var_id),
        domains.len(var_id)
    );

    for word_id in order_domain_values(puzzle, domains, var_id, &assignment) {
        if !consistent_extension(puzzle, &assignment, var_id, word_id) {
            continue;
        }

        let extended = assignment.with(var_id, word_id);
        if let Some(result) = backtrack(puzzle, domains, extended, statistics) {
            return Some(result);
        }
    }

    statistics.backtracks += 1;
    trace!("exhausted {}, backtracking", puzzle.variable(var_id));

    None
}
