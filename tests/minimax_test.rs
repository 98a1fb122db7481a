//! Tests for the minimax engine and optimal play.

use tictactoe_minimax::{
    Action, AiPlayer, GameStatus, Level, Player, Position, State, Ui, View, minimax_value,
};

/// Ui that swallows every notification.
struct NullUi;

impl Ui for NullUi {
    fn insert_at(&mut self, _pos: Position, _mark: Player) {}
    fn switch_view_to(&mut self, _view: View) {}
}

fn replay(indices: &[usize]) -> State {
    let mut state = State::new();
    for &idx in indices {
        let pos = Position::from_index(idx).expect("valid index");
        state = Action::new(pos).apply_to(&state).expect("empty cell");
    }
    state
}

#[test]
fn test_empty_board_is_a_forced_draw() {
    // The full game tree from the start position values to zero.
    let mut start = State::new();
    assert_eq!(minimax_value(&mut start), 0);
}

#[test]
fn test_master_vs_master_always_draws() {
    let mut x_ai = AiPlayer::with_seed(Level::Master, 1);
    x_ai.plays(Player::X);
    let mut o_ai = AiPlayer::with_seed(Level::Master, 2);
    o_ai.plays(Player::O);

    let mut ui = NullUi;
    let mut state = State::new();

    while !state.is_terminal() {
        let mover = match state.turn() {
            Player::X => &mut x_ai,
            Player::O => &mut o_ai,
        };
        state = mover.notify(&state, &mut ui).expect("legal move available");
    }

    assert_eq!(state.status(), GameStatus::Draw);
}

#[test]
fn test_master_x_takes_a_single_move_row_win() {
    // X X . / O O . / . . . with X to move.
    let base = replay(&[0, 3, 1, 4]);
    let mut ai = AiPlayer::with_seed(Level::Master, 1);
    ai.plays(Player::X);

    let mut next = ai.notify(&base, &mut NullUi).expect("move");
    assert!(next.is_terminal());
    assert_eq!(next.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_master_x_takes_a_single_move_diagonal_win() {
    // X on 0 and 4, O scattered, X to move: 8 completes the diagonal.
    let base = replay(&[0, 1, 4, 2]);
    let mut ai = AiPlayer::with_seed(Level::Master, 1);
    ai.plays(Player::X);

    let mut next = ai.notify(&base, &mut NullUi).expect("move");
    assert!(next.is_terminal());
    assert_eq!(next.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_master_o_takes_a_single_move_column_win() {
    // O on 1 and 4, X scattered without a threat, O to move: 7 wins.
    let base = replay(&[0, 1, 8, 4, 2]);
    let mut ai = AiPlayer::with_seed(Level::Master, 1);
    ai.plays(Player::O);

    let mut next = ai.notify(&base, &mut NullUi).expect("move");
    assert!(next.is_terminal());
    assert_eq!(next.status(), GameStatus::Won(Player::O));
}

#[test]
fn test_master_blocks_an_immediate_threat() {
    // X threatens the top row at 2; O has no win of its own, so optimal play
    // must block.
    let base = replay(&[0, 4, 1]);
    let mut ai = AiPlayer::with_seed(Level::Master, 1);
    ai.plays(Player::O);

    let next = ai.notify(&base, &mut NullUi).expect("move");
    assert!(!next.board().is_empty(Position::TopRight));
}
