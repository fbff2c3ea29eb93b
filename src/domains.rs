use bit_set::BitSet;

use crate::puzzle::Puzzle;
use crate::{VarId, WordId};

/// The candidate words still allowed for each variable, stored as a set of `WordId`s per variable.
///
/// Domains only ever shrink. A search step that might need to be rolled back has to work on a
/// clone rather than the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains {
    domains: Vec<BitSet>,
}

impl Domains {
    /// Start every variable off with the puzzle's full word list.
    pub fn new(puzzle: &Puzzle) -> Domains {
        let word_count = puzzle.words().len();
        let all_words: BitSet = (0..word_count).collect();

        Domains {
            domains: vec![all_words; puzzle.variable_count()],
        }
    }

    pub fn get(&self, var_id: VarId) -> &BitSet {
        &self.domains[var_id]
    }

    pub fn iter(&self, var_id: VarId) -> impl Iterator<Item = WordId> + '_ {
        self.domains[var_id].iter()
    }

    pub fn contains(&self, var_id: VarId, word_id: WordId) -> bool {
        self.domains[var_id].contains(word_id)
    }

    pub fn len(&self, var_id: VarId) -> usize {
        self.domains[var_id].len()
    }

    pub fn is_empty(&self, var_id: VarId) -> bool {
        self.domains[var_id].is_empty()
    }

    /// Remove every candidate for which `keep` returns false, returning how many were removed.
    pub fn prune<F>(&mut self, var_id: VarId, mut keep: F) -> usize
    where
        F: FnMut(WordId) -> bool,
    {
        let domain = &mut self.domains[var_id];
        let doomed: Vec<WordId> = domain.iter().filter(|&word_id| !keep(word_id)).collect();

        for &word_id in &doomed {
            domain.remove(word_id);
        }

        doomed.len()
    }
}
