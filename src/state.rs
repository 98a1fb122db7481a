//! Board position snapshots.
//!
//! A `State` is a value object: it is created as the canonical empty-board
//! start, or cloned from a parent and mutated exactly once by move
//! application. Nothing mutates a state after the step that derived it.

use super::position::Position;
use super::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};

/// Snapshot of a board position: who moves, what the board holds, and
/// whether the game has been decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// The board.
    board: Board,
    /// Player whose turn it is.
    turn: Player,
    /// Number of moves O has made from game start.
    ///
    /// Incremented during hypothetical search as well, which is what lets
    /// the terminal score prefer faster wins over slower ones.
    o_moves: u8,
    /// Status as of the last terminal evaluation.
    status: GameStatus,
}

impl State {
    /// Creates the canonical start state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            o_moves: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the number of moves O has made.
    pub fn o_moves(&self) -> u8 {
        self.o_moves
    }

    /// Returns the status as of the last terminal evaluation.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Enumerates the empty cells in ascending board-scan order.
    ///
    /// The order is load-bearing: downstream strategies stable-sort scored
    /// actions, so enumeration order is the tie-break among equal scores.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.board.is_empty(*pos))
            .collect()
    }

    /// Checks whether this state ends the game, updating `status` to match.
    ///
    /// A completed line wins for its owner; a full board with no winner is a
    /// draw; anything else leaves the game in progress.
    pub fn is_terminal(&mut self) -> bool {
        if let Some(winner) = self.board.winner() {
            self.status = GameStatus::Won(winner);
            true
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            true
        } else {
            self.status = GameStatus::InProgress;
            false
        }
    }

    /// Flips the turn between X and O. Board and status are untouched.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Places a mark for the current player (unchecked - use
    /// `Action::apply_to` for validation).
    pub(crate) fn place(&mut self, pos: Position) {
        self.board.set(pos, Square::Occupied(self.turn));
        if self.turn == Player::O {
            self.o_moves += 1;
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    #[test]
    fn test_start_state() {
        let state = State::new();
        assert_eq!(state.turn(), Player::X);
        assert_eq!(state.o_moves(), 0);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_empty_cells_on_start_is_all_nine() {
        let state = State::new();
        assert_eq!(state.empty_cells(), Position::ALL.to_vec());
    }

    #[test]
    fn test_empty_cells_on_full_board_is_empty() {
        // X O X / X O O / O X X - a drawn board
        let order = [0, 1, 3, 4, 7, 5, 8, 6, 2];
        let mut state = State::new();
        for idx in order {
            let pos = Position::from_index(idx).unwrap();
            state = Action::new(pos).apply_to(&state).unwrap();
        }
        assert!(state.empty_cells().is_empty());
        assert!(state.is_terminal());
        assert_eq!(state.status(), GameStatus::Draw);
    }

    #[test]
    fn test_is_terminal_detects_win_and_sets_status() {
        // X takes the top row; O scatters
        let order = [0, 3, 1, 4, 2];
        let mut state = State::new();
        for idx in order {
            let pos = Position::from_index(idx).unwrap();
            state = Action::new(pos).apply_to(&state).unwrap();
        }
        assert!(state.is_terminal());
        assert_eq!(state.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_is_terminal_false_mid_game() {
        let mut state = Action::new(Position::Center)
            .apply_to(&State::new())
            .unwrap();
        assert!(!state.is_terminal());
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_clone_is_independent_of_parent() {
        let original = State::new();
        let mut copy = original.clone();
        copy.place(Position::Center);
        copy.advance_turn();

        assert!(original.board().is_empty(Position::Center));
        assert_eq!(original.turn(), Player::X);
        assert_eq!(original.o_moves(), 0);
        assert_eq!(original.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_advance_turn_flips_only_the_turn() {
        let mut state = State::new();
        state.advance_turn();
        assert_eq!(state.turn(), Player::O);
        assert_eq!(state.board(), &Board::new());
        state.advance_turn();
        assert_eq!(state.turn(), Player::X);
    }
}
