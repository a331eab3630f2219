//! Tests for the branching history model.

use strictly_tictactoe::invariants::{GameInvariants, InvariantSet};
use strictly_tictactoe::{Board, GameState, GameView, Player, Position, Square, Status};

use Position::*;

#[test]
fn test_turns_alternate_with_each_accepted_move() {
    let moves = [Center, TopLeft, TopRight, BottomLeft, MiddleLeft, MiddleRight];
    let mut state = GameState::new();
    for (k, pos) in moves.iter().enumerate() {
        state = state.select_cell(*pos);
        assert_eq!(state.step(), k + 1);
        let expected = if k % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(state.current().board().get(*pos), Square::Occupied(expected));
    }
    assert_eq!(state.history().len(), moves.len() + 1);
}

#[test]
fn test_selecting_occupied_cell_is_a_no_op() {
    let state = GameState::new().select_cell(Center);
    let again = state.clone().select_cell(Center);
    assert_eq!(again, state);
    assert_eq!(again.history().len(), 2);
}

#[test]
fn test_moves_after_a_win_are_ignored() {
    let won = GameState::replay(&[TopLeft, Center, TopCenter, MiddleRight, TopRight]);
    assert!(won.win().is_some());
    for pos in [BottomLeft, BottomCenter, BottomRight, MiddleLeft] {
        assert_eq!(won.clone().select_cell(pos), won);
    }
}

#[test]
fn test_rewind_then_move_discards_old_future() {
    let state = GameState::replay(&[TopLeft, Center, TopRight, BottomLeft]);
    assert_eq!(state.history().len(), 5);
    assert_eq!(state.step(), 4);

    let branched = state.clone().jump_to(2).select_cell(BottomRight);
    assert_eq!(branched.history().len(), 4);
    assert_eq!(branched.step(), 3);
    assert_eq!(&branched.history()[..3], &state.history()[..3]);
    assert_eq!(
        branched.current().board().get(BottomRight),
        Square::Occupied(Player::X)
    );
    assert!(branched.current().board().is_empty(TopRight));
    assert!(GameInvariants::check_all(&branched).is_ok());
}

#[test]
fn test_rejected_move_after_rewind_keeps_future() {
    let state = GameState::replay(&[TopLeft, Center, TopRight]).jump_to(1);
    let same = state.clone().select_cell(TopLeft);
    assert_eq!(same.history().len(), 4);
    assert_eq!(same, state);
}

#[test]
fn test_jump_derives_turn_from_step() {
    let state = GameState::replay(&[TopLeft, Center, TopRight]);
    assert_eq!(state.clone().jump_to(0).next_player(), Player::X);
    assert_eq!(state.clone().jump_to(1).next_player(), Player::O);
    assert_eq!(state.clone().jump_to(2).next_player(), Player::X);
    assert_eq!(state.jump_to(3).next_player(), Player::O);
}

#[test]
fn test_toggle_reverse_twice_restores_order() {
    let state = GameState::replay(&[TopLeft, Center, TopRight]).jump_to(1);
    let original = GameView::from_state(&state).moves;

    let once = state.clone().toggle_reverse();
    assert_eq!(once.history(), state.history());
    assert_eq!(once.step(), state.step());
    let reversed = GameView::from_state(&once).moves;
    assert_eq!(reversed.first(), original.last());

    let twice = once.toggle_reverse();
    assert_eq!(twice, state);
    assert_eq!(GameView::from_state(&twice).moves, original);
}

#[test]
fn test_top_row_win_scenario() {
    let state = GameState::replay(&[TopLeft, Center, TopCenter, MiddleRight, TopRight]);
    let view = GameView::from_state(&state);
    assert_eq!(
        view.win.map(|w| (w.winner, w.line)),
        Some((Player::X, [TopLeft, TopCenter, TopRight]))
    );
    assert_eq!(view.status, Status::Winner(Player::X));
    assert_eq!(view.status.to_string(), "Winner: X");
}

#[test]
fn test_draw_scenario() {
    // X O X / X O O / O X X
    let state = GameState::replay(&[
        TopLeft, TopCenter, TopRight, Center, MiddleLeft, MiddleRight, BottomCenter, BottomLeft,
        BottomRight,
    ]);
    assert_eq!(*state.current().board(), "XOX/XOO/OXX".parse::<Board>().unwrap());
    let view = GameView::from_state(&state);
    assert_eq!(view.win, None);
    assert_eq!(view.status, Status::Draw);
    assert_eq!(view.status.to_string(), "Draw");
}

#[test]
fn test_state_survives_json_round_trip() {
    let state = GameState::replay(&[Center, TopLeft]).toggle_reverse().jump_to(1);
    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
}
