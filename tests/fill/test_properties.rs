use crossfill::{
    arc_consistency::{ac3, enforce_node_consistency},
    consistent,
    domains::Domains,
    solve,
};

use super::strategy::{all_solutions, puzzle_strategy};

use proptest::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #[test]
    fn node_consistency_leaves_only_matching_lengths(puzzle in puzzle_strategy()) {
        let mut domains = Domains::new(&puzzle);
        enforce_node_consistency(&puzzle, &mut domains);

        for (var_id, variable) in puzzle.variables().iter().enumerate() {
            for word_id in domains.iter(var_id) {
                prop_assert_eq!(puzzle.words().get(word_id).len(), variable.length);
            }
        }
    }

    #[test]
    fn ac3_reaches_a_fixpoint(puzzle in puzzle_strategy()) {
        let mut domains = Domains::new(&puzzle);
        enforce_node_consistency(&puzzle, &mut domains);

        if ac3(&puzzle, &mut domains, None).is_ok() {
            let settled = domains.clone();
            let rerun = ac3(&puzzle, &mut domains, None);

            prop_assert!(rerun.is_ok());
            prop_assert_eq!(rerun.unwrap().revisions, 0);
            prop_assert_eq!(settled, domains);
        }
    }

    #[test]
    fn ac3_never_prunes_part_of_a_solution(puzzle in puzzle_strategy()) {
        let solutions = all_solutions(&puzzle);
        let mut domains = Domains::new(&puzzle);
        enforce_node_consistency(&puzzle, &mut domains);

        match ac3(&puzzle, &mut domains, None) {
            Ok(_) => {
                for solution in &solutions {
                    for (var_id, word_id) in solution.iter() {
                        prop_assert!(domains.contains(var_id, word_id));
                    }
                }
            }
            Err(_) => prop_assert!(solutions.is_empty()),
        }
    }

    #[test]
    fn solve_is_sound_and_complete(puzzle in puzzle_strategy()) {
        let solutions = all_solutions(&puzzle);

        match solve(&puzzle) {
            Some(assignment) => {
                prop_assert!(assignment.is_complete(&puzzle));
                prop_assert!(consistent(&puzzle, &assignment));
                prop_assert!(solutions.contains(&assignment));
            }
            None => prop_assert!(solutions.is_empty()),
        }
    }
}
