use proptest::prelude::*;
use proptest::sample::Index;
use reversi::{Board, Cell, Game, Piece, BOARD_SIZE};

fn any_piece() -> impl Strategy<Value = Piece> {
    prop_oneof![Just(Piece::First), Just(Piece::Second)]
}

/// Play up to `choices.len()` legal moves, picking each from the current
/// legal set.
fn play(choices: &[Index]) -> Game {
    let mut game = Game::new();
    for choice in choices {
        if game.is_over() {
            break;
        }
        let pos = *choice.get(game.next_moves());
        game.put_piece(pos.row, pos.column, game.next_piece()).unwrap();
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A cell is a legal move exactly when placing there flips something.
    #[test]
    fn legal_iff_capture(choices in prop::collection::vec(any::<Index>(), 0..60)) {
        let game = play(&choices);
        let board = game.board();
        for piece in [Piece::First, Piece::Second] {
            let moves = board.get_next_moves(piece);
            for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    let flips = board.flips(row, col, piece);
                    let legal = moves.iter().any(|p| p.row == row && p.column == col);
                    prop_assert_eq!(legal, !flips.is_empty(), "({}, {}) for {:?}", row, col, piece);
                    if board.cell(row, col) != Some(Cell::Empty) {
                        prop_assert!(flips.is_empty());
                    }
                }
            }
        }
    }

    /// Rejected placements do not touch the board or the game.
    #[test]
    fn rejected_moves_are_atomic(
        choices in prop::collection::vec(any::<Index>(), 0..60),
        row in 0..BOARD_SIZE + 2,
        col in 0..BOARD_SIZE + 2,
        piece in any_piece(),
    ) {
        let game = play(&choices);

        let mut board = *game.board();
        if board.put_piece(row, col, piece).is_err() {
            prop_assert_eq!(&board, game.board());
        }

        let mut attempt = game.clone();
        if attempt.put_piece(row, col, piece).is_err() {
            prop_assert_eq!(&attempt, &game);
        }
    }

    /// Every move adds one disc plus its flips to the mover and takes the
    /// flips from the opponent; turns alternate unless the opponent must pass.
    #[test]
    fn moves_conserve_discs_and_alternate(choices in prop::collection::vec(any::<Index>(), 1..70)) {
        let mut game = Game::new();
        for choice in &choices {
            if game.is_over() {
                break;
            }
            let piece = game.next_piece();
            let pos = *choice.get(game.next_moves());
            let before: Board = *game.board();
            let flips = before.flips(pos.row, pos.column, piece).len();

            game.put_piece(pos.row, pos.column, piece).unwrap();
            let after = game.board();

            prop_assert!(flips > 0);
            prop_assert_eq!(after.count(piece), before.count(piece) + 1 + flips);
            prop_assert_eq!(after.count(piece.opponent()), before.count(piece.opponent()) - flips);
            prop_assert_eq!(after.empty_count() + 1, before.empty_count());

            // cells never return to empty
            let (was, now) = (before.cells(), after.cells());
            for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    if was[row][col] != Cell::Empty {
                        prop_assert_ne!(now[row][col], Cell::Empty);
                    }
                }
            }

            if game.is_over() {
                prop_assert!(game.next_moves().is_empty());
                prop_assert!(after.get_next_moves(Piece::First).is_empty());
                prop_assert!(after.get_next_moves(Piece::Second).is_empty());
            } else if game.next_piece() == piece {
                prop_assert!(after.get_next_moves(piece.opponent()).is_empty());
                prop_assert!(!game.next_moves().is_empty());
            } else {
                prop_assert_eq!(game.next_piece(), piece.opponent());
            }
        }
    }

    /// The cached move list always matches a fresh scan, and reads are stable.
    #[test]
    fn cached_moves_match_board(choices in prop::collection::vec(any::<Index>(), 0..60)) {
        let game = play(&choices);
        if !game.is_over() {
            let fresh = game.board().get_next_moves(game.next_piece());
            prop_assert_eq!(game.next_moves(), fresh.as_slice());
        }
        prop_assert_eq!(game.state(), game.state());
        prop_assert_eq!(game.next_moves(), game.next_moves());
        prop_assert_eq!(game.next_piece(), game.next_piece());
        prop_assert_eq!(game.winner(), game.winner());
        prop_assert_eq!(game.board(), game.board());
    }
}
