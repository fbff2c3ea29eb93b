use crossfill::{
    consistent, find_fill, letter_grid, render_grid, solve, Direction, FillFailure, Grid,
    InputError, Puzzle, Variable, WordList,
};

fn load_puzzle(template: &str, words: &str) -> Puzzle {
    Puzzle::new(
        Grid::parse(template).expect("valid structure"),
        WordList::parse(words).expect("valid word list"),
    )
}

/// ___#
/// #_##
/// #___
#[test]
fn test_two_acrosses_sharing_a_down() {
    let puzzle = load_puzzle(
        "
        ___#
        #_##
        #___
        ",
        "cat\ncar\ncab\narc\n",
    );

    let assignment = solve(&puzzle).expect("Failed to find a fill");

    assert!(assignment.is_complete(&puzzle));
    assert!(consistent(&puzzle, &assignment));

    // Every crossing agrees letter for letter at its recorded overlap.
    for (a, a_word) in assignment.iter() {
        for (b, b_word) in assignment.iter() {
            if let Some((i, j)) = puzzle.overlap(a, b) {
                assert_eq!(
                    puzzle.words().get(a_word).letters[i],
                    puzzle.words().get(b_word).letters[j]
                );
            }
        }
    }

    // "ARC" is the only word that fits the down.
    let down = puzzle
        .variable_id(&Variable {
            start_cell: (0, 1),
            direction: Direction::Down,
            length: 3,
        })
        .unwrap();
    assert_eq!(assignment.get(down), puzzle.words().find("arc"));

    println!("{}", render_grid(&puzzle, &assignment));
}

#[test]
fn test_conflicting_crossing_fails_before_search() {
    let puzzle = load_puzzle(
        "
        ___
        _##
        ",
        "abc\nxy\n",
    );

    match find_fill(&puzzle) {
        Err(FillFailure::ArcConsistency { .. }) => {}
        other => panic!("expected arc consistency failure, got {:?}", other),
    }
    assert!(solve(&puzzle).is_none());
}

#[test]
fn test_isolated_variable_gets_the_only_word() {
    let puzzle = load_puzzle("___", "dog\n");

    let assignment = solve(&puzzle).expect("Failed to find a fill");

    assert_eq!(assignment.len(), 1);
    let (variable, word) = assignment.words(&puzzle).next().unwrap();
    assert_eq!(
        variable,
        &Variable {
            start_cell: (0, 0),
            direction: Direction::Across,
            length: 3
        }
    );
    assert_eq!(word, "DOG");
}

#[test]
fn test_solving_twice_gives_valid_fills() {
    let puzzle = load_puzzle(
        "
        ___#
        #_##
        #___
        ",
        "cat\ncar\ncab\narc\n",
    );

    for _ in 0..2 {
        let assignment = solve(&puzzle).expect("Failed to find a fill");
        assert!(assignment.is_complete(&puzzle));
        assert!(consistent(&puzzle, &assignment));
    }
}

/// ____
/// _##_
/// _##_
/// ____
#[test]
fn test_find_fill_for_ring() {
    let puzzle = load_puzzle(
        "
        ____
        _##_
        _##_
        ____
        ",
        "
        fade
        dime
        fist
        eats
        slow
        toys
        ",
    );

    let result = find_fill(&puzzle).expect("Failed to find a fill");

    println!("{:?}", result.statistics);
    let letters = letter_grid(&puzzle, &result.assignment);
    assert_eq!(letters[0][0], Some('F'));
    assert_eq!(letters[3][3], Some('S'));
    assert_eq!(letters[1][1], None);

    // The grid is symmetric, so the transposed fill is just as good.
    let rendered = render_grid(&puzzle, &result.assignment);
    assert!(
        ["FADE\nI██A\nS██T\nTOYS", "FIST\nA██O\nD██Y\nEATS"].contains(&rendered.as_str()),
        "unexpected fill:\n{}",
        rendered
    );
}

#[test]
fn test_input_errors_are_reported() {
    assert_eq!(
        Grid::parse("___\n__#_"),
        Err(InputError::RaggedRow {
            row: 1,
            expected: 3,
            found: 4
        })
    );
    assert!(matches!(
        WordList::parse("ok\ntwo words\n"),
        Err(InputError::InvalidWord { line: 2, .. })
    ));
}
