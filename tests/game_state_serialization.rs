use proptest::prelude::*;
use proptest::sample::Index;
use reversi::{replay, Game, GamePayload, GameState, Piece, Winner};

proptest! {
    #[test]
    fn game_state_roundtrip(choices in prop::collection::vec(any::<Index>(), 0..60)) {
        let mut game = Game::new();
        for choice in &choices {
            if game.is_over() {
                break;
            }
            let pos = *choice.get(game.next_moves());
            game.put_piece(pos.row, pos.column, game.next_piece()).unwrap();
        }
        let bytes = bincode::serialize(&game.state()).unwrap();
        let decoded: GameState = bincode::deserialize(&bytes).unwrap();
        let restored = Game::from_state(decoded);
        prop_assert_eq!(game.state(), restored.state());
    }
}

#[test]
fn payload_json_shape() {
    let game = replay("f5d6c5f4e7f6g5e6e3").unwrap();
    let v = serde_json::to_value(GamePayload::from(&game)).unwrap();

    let board = v["board"].as_array().unwrap();
    assert_eq!(board.len(), 8);
    assert!(board.iter().all(|row| row.as_array().unwrap().len() == 8));
    assert_eq!(v["winner"], "FirstWins");
    assert_eq!(v["nextMoves"], serde_json::json!([]));
    assert!(v.get("next_piece").is_none());
}

#[test]
fn payload_json_roundtrip() {
    let payload = GamePayload::from(&Game::new());
    let text = serde_json::to_string(&payload).unwrap();
    let back: GamePayload = serde_json::from_str(&text).unwrap();
    assert_eq!(back, payload);
    assert_eq!(back.next_piece, Piece::First);
    assert_eq!(back.winner, Winner::None);
    assert_eq!(back.next_moves.len(), 4);
}
