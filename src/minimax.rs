//! Minimax evaluation over the full game tree.
//!
//! The board has at most nine cells, so full-depth search without pruning or
//! memoization stays tractable; re-exploring the subtree on every call is a
//! deliberate simplicity choice.

use super::action::Action;
use super::state::State;
use super::types::{GameStatus, Player};

/// Scores a terminal state from X's point of view.
///
/// A faster X win scores higher; an X loss scores less negatively the more
/// moves O needed to force it. Draws and undecided states score zero.
pub fn score(state: &State) -> i32 {
    match state.status() {
        GameStatus::Won(Player::X) => 10 - i32::from(state.o_moves()),
        GameStatus::Won(Player::O) => -10 + i32::from(state.o_moves()),
        GameStatus::Draw | GameStatus::InProgress => 0,
    }
}

/// Computes the game-theoretic value of a state.
///
/// X maximizes, O minimizes. Takes `&mut State` because terminal evaluation
/// stores the derived status on the state; nothing else is modified.
pub fn minimax_value(state: &mut State) -> i32 {
    if state.is_terminal() {
        return score(state);
    }

    let mover = state.turn();
    // Seed outside the attainable [-10, 10] score range.
    let mut value = match mover {
        Player::X => -1000,
        Player::O => 1000,
    };

    for pos in state.empty_cells() {
        let Ok(mut next) = Action::new(pos).apply_to(state) else {
            // Enumeration only yields empty cells.
            continue;
        };
        let child = minimax_value(&mut next);
        value = match mover {
            Player::X => value.max(child),
            Player::O => value.min(child),
        };
    }

    value
}
