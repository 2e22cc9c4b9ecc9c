//! Property tests over random legal games.

use proptest::prelude::*;
use tictactoe_engine::core::{initial_state, Board, Cell, Player};
use tictactoe_engine::rules::{actions, player, result, terminal, utility, winner};

/// Play a game choosing the `i`-th legal action (mod count) at each ply,
/// stopping at a terminal board. Returns every board visited.
fn play_out(choices: &[usize]) -> Vec<Board> {
    let mut boards = vec![initial_state()];
    for &choice in choices {
        let board = *boards.last().unwrap();
        if terminal(&board) {
            break;
        }
        let acts = actions(&board);
        let next = result(&board, acts[choice % acts.len()]).unwrap();
        boards.push(next);
    }
    boards
}

proptest! {
    #[test]
    fn prop_player_alternates(choices in prop::collection::vec(0usize..9, 0..9)) {
        let boards = play_out(&choices);
        for pair in boards.windows(2) {
            prop_assert_eq!(player(&pair[1]), player(&pair[0]).opponent());
        }
    }

    #[test]
    fn prop_action_count(choices in prop::collection::vec(0usize..9, 0..9)) {
        for board in play_out(&choices) {
            prop_assert_eq!(actions(&board).len(), 9 - board.filled());
        }
    }

    #[test]
    fn prop_mark_counts_balanced(choices in prop::collection::vec(0usize..9, 0..9)) {
        for board in play_out(&choices) {
            let x = board.count(Cell::X);
            let o = board.count(Cell::O);
            prop_assert!(x == o || x == o + 1);
        }
    }

    #[test]
    fn prop_result_does_not_alias(choices in prop::collection::vec(0usize..9, 1..9)) {
        let boards = play_out(&choices);
        let board = *boards.last().unwrap();
        let snapshot = board;
        for action in actions(&board) {
            let next = result(&board, action).unwrap();
            prop_assert_eq!(next.filled(), board.filled() + 1);
            prop_assert_eq!(next.get(action), player(&board).to_cell());
        }
        prop_assert_eq!(board, snapshot);
    }

    #[test]
    fn prop_utility_agrees_with_winner(choices in prop::collection::vec(0usize..9, 0..9)) {
        for board in play_out(&choices) {
            let expected = match winner(&board) {
                Some(Player::X) => 1,
                Some(Player::O) => -1,
                None => 0,
            };
            prop_assert_eq!(utility(&board), expected);
        }
    }

    #[test]
    fn prop_text_round_trip(choices in prop::collection::vec(0usize..9, 0..9)) {
        for board in play_out(&choices) {
            let parsed: Board = board.to_string().parse().unwrap();
            prop_assert_eq!(parsed, board);
        }
    }
}
