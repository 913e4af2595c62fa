use bounce_core::board::Board;
use bounce_core::direction::Direction;
use bounce_core::turns::{count_turns, turn_sequences};

/// A position forty moves into a game with long bounce chains available.
const MIDGAME: &str = "NW S E S SE NE E N W N NW SW W NW SW SE S SE N NE \
                       SE E SE S W NE W SW SW NW N E SW S NW N SE E NE S";

const REFERENCE_COUNTS: &[(u32, u64)] = &[
    (1, 5),
    (2, 19),
    (3, 69),
    (4, 248),
    (5, 883),
    (6, 2_867),
    (7, 8_889),
    (8, 26_947),
];

fn midgame() -> Board {
    let mut board = Board::new(9, 11);
    for token in MIDGAME.split_whitespace() {
        let dir: Direction = token.parse().unwrap();
        board.try_make_move(dir).unwrap();
    }
    board
}

#[test]
fn test_count_turns_midgame() {
    let board = midgame();
    for &(plies, expected) in REFERENCE_COUNTS {
        assert_eq!(count_turns(&board, plies), expected, "plies {plies}");
    }
}

#[test]
fn test_sequences_agree_with_count() {
    let board = midgame();
    for plies in 1..=5 {
        let sequences = turn_sequences(&board, plies);
        assert_eq!(sequences.len() as u64, count_turns(&board, plies));
        assert!(sequences.iter().all(|s| !s.is_empty() && s.len() <= plies as usize));
    }
}

#[test]
fn test_every_sequence_is_playable() {
    let board = midgame();
    let mover = board.active_player();

    for sequence in turn_sequences(&board, 6) {
        let mut next = board.duplicate();
        for (i, &dir) in sequence.iter().enumerate() {
            assert_eq!(next.active_player(), mover);
            let outcome = next.try_make_move(dir).unwrap();
            if i + 1 < sequence.len() {
                assert!(!outcome.is_terminal());
            }
        }
    }
}
