//! Node consistency and the AC-3 algorithm for establishing arc consistency. A set of domains is
//! arc-consistent when, for every pair of crossing variables `(x, y)`, every word left for `x`
//! has at least one word left for `y` with the same letter in the shared cell.

use log::{debug, trace};
use std::collections::{HashSet, VecDeque};

use crate::domains::Domains;
use crate::puzzle::Puzzle;
use crate::VarId;

/// Remove every word whose length doesn't match its variable's length. Returns the number of
/// candidates removed across all variables.
pub fn enforce_node_consistency(puzzle: &Puzzle, domains: &mut Domains) -> usize {
    let words = puzzle.words();

    puzzle
        .variables()
        .iter()
        .enumerate()
        .map(|(var_id, variable)| {
            domains.prune(var_id, |word_id| words.get(word_id).len() == variable.length)
        })
        .sum()
}

/// Make `x` arc-consistent with `y` by removing every word from `x`'s domain that has no
/// compatible word in `y`'s domain. Returns true if anything was removed. Variables that don't
/// cross never constrain each other, so revising them is a no-op.
pub fn revise(puzzle: &Puzzle, domains: &mut Domains, x: VarId, y: VarId) -> bool {
    let Some((x_cell, y_cell)) = puzzle.overlap(x, y) else {
        return false;
    };
    let words = puzzle.words();

    // Every letter that `y` could still put in the shared cell.
    let available: HashSet<char> = domains
        .iter(y)
        .filter_map(|word_id| words.get(word_id).letters.get(y_cell).copied())
        .collect();

    let removed = domains.prune(x, |word_id| {
        words
            .get(word_id)
            .letters
            .get(x_cell)
            .map_or(false, |letter| available.contains(letter))
    });

    removed > 0
}

/// Result from a successful call to `ac3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcConsistencySuccess {
    /// How many `revise` calls removed at least one word.
    pub revisions: u64,
}

/// Result from a failed call to `ac3`: this variable has no words left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcConsistencyFailure {
    pub variable: VarId,
}

pub type ArcConsistencyResult = Result<ArcConsistencySuccess, ArcConsistencyFailure>;

/// Worklist of arcs waiting to be revised. An arc that's already waiting isn't queued twice.
#[derive(Debug)]
struct ArcQueue {
    queue: VecDeque<(VarId, VarId)>,
    queued: HashSet<(VarId, VarId)>,
}

impl ArcQueue {
    fn with_initial_queue<Items>(items: Items) -> ArcQueue
    where
        Items: IntoIterator<Item = (VarId, VarId)>,
    {
        let mut queue = ArcQueue {
            queue: VecDeque::new(),
            queued: HashSet::new(),
        };
        for arc in items {
            queue.enqueue(arc);
        }
        queue
    }

    fn pop_front(&mut self) -> Option<(VarId, VarId)> {
        let arc = self.queue.pop_front()?;
        self.queued.remove(&arc);
        Some(arc)
    }

    fn enqueue(&mut self, arc: (VarId, VarId)) {
        if self.queued.insert(arc) {
            self.queue.push_back(arc);
        }
    }
}

/// Shrink `domains` until every arc is consistent. If `arcs` is `None`, start from every
/// overlapping pair in both directions; otherwise start from just the given arcs.
///
/// Fails as soon as any variable's domain is empty, including one that was already empty on the
/// way in. On success no domain is empty and running this again removes nothing.
pub fn ac3(
    puzzle: &Puzzle,
    domains: &mut Domains,
    arcs: Option<&[(VarId, VarId)]>,
) -> ArcConsistencyResult {
    if let Some(variable) = (0..puzzle.variable_count()).find(|&var_id| domains.is_empty(var_id)) {
        return Err(ArcConsistencyFailure { variable });
    }

    let mut queue = match arcs {
        Some(arcs) => ArcQueue::with_initial_queue(arcs.iter().copied()),
        None => ArcQueue::with_initial_queue(puzzle.arcs()),
    };
    let mut revisions = 0;

    while let Some((x, y)) = queue.pop_front() {
        if !revise(puzzle, domains, x, y) {
            continue;
        }
        revisions += 1;

        if domains.is_empty(x) {
            trace!("revising {} against {} emptied it", x, y);
            return Err(ArcConsistencyFailure { variable: x });
        }

        // Shrinking `x` may leave words in its other neighbors without support.
        for z in puzzle.neighbors(x).iter().filter(|&z| z != y) {
            queue.enqueue((z, x));
        }
    }

    debug!("arc consistency reached after {} revisions", revisions);

    Ok(ArcConsistencySuccess { revisions })
}
