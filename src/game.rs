//! Game controller: turn progression and terminal detection.
//!
//! The controller owns the single authoritative [`State`]. Everyone else
//! reads it and derives successors; only [`Game::advance_to`] replaces it.

use super::action::{Action, MoveError};
use super::ai::{AiError, AiPlayer};
use super::position::Position;
use super::state::State;
use super::types::{GameStatus, Player};
use super::ui::{Ui, View};
use tracing::{debug, info, instrument};

/// Lifecycle phase of a match. One-way: Beginning → Running → Ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Match created, not yet started.
    Beginning,
    /// Match in progress.
    Running,
    /// Match over; the state's status says how.
    Ended,
}

/// Errors from the controller's public surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// A move came in while the match was not running.
    #[display("Game is not running")]
    NotRunning,
    /// A move came in on the wrong turn.
    #[display("It is {:?}'s turn", _0)]
    OutOfTurn(#[error(not(source))] Player),
    /// The move could not be applied.
    #[from]
    Move(#[error(source)] MoveError),
    /// The AI failed to pick a move.
    #[from]
    Ai(#[error(source)] AiError),
}

/// A match between the human (X) and an AI player (O).
///
/// Both collaborators are injected at construction; there are no ambient
/// globals. The AI turn runs synchronously inside [`Game::advance_to`]'s
/// call stack.
#[derive(Debug)]
pub struct Game<U: Ui> {
    current_state: State,
    phase: Phase,
    ai: AiPlayer,
    ui: U,
}

impl<U: Ui> Game<U> {
    /// Creates a match, binding the AI player to it as O.
    pub fn new(mut ai: AiPlayer, ui: U) -> Self {
        ai.plays(Player::O);
        Self {
            current_state: State::new(),
            phase: Phase::Beginning,
            ai,
            ui,
        }
    }

    /// Returns the authoritative current state.
    pub fn current_state(&self) -> &State {
        &self.current_state
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the injected front end.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Starts the match from [`Phase::Beginning`].
    ///
    /// Evaluates the initial state and hands the first turn to the human.
    /// Calling it again later is a no-op.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Beginning {
            debug!(phase = ?self.phase, "start ignored");
            return Ok(());
        }

        self.phase = Phase::Running;
        let initial = self.current_state.clone();
        self.advance_to(initial)
    }

    /// Plays the human move at the given position.
    ///
    /// This is the sole external trigger into the otherwise-closed AI loop:
    /// it applies the human's action, reports the placement, and advances,
    /// which runs the AI's reply (and any terminal handling) to completion
    /// before returning.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> Result<(), GameError> {
        if self.phase != Phase::Running {
            return Err(GameError::NotRunning);
        }
        let turn = self.current_state.turn();
        if turn != Player::X {
            return Err(GameError::OutOfTurn(turn));
        }

        let next = Action::new(pos).apply_to(&self.current_state)?;
        self.ui.insert_at(pos, Player::X);
        self.advance_to(next)
    }

    /// Advances the match to a new state.
    ///
    /// Terminal states end the match and report the outcome. Otherwise the
    /// human is signalled on X's turn, and on O's turn the AI is notified
    /// and the match advances again with its reply, within this call stack.
    #[instrument(skip(self, state))]
    pub fn advance_to(&mut self, mut state: State) -> Result<(), GameError> {
        if state.is_terminal() {
            let view = match state.status() {
                GameStatus::Won(Player::X) => View::Won,
                GameStatus::Won(Player::O) => View::Lost,
                _ => View::Draw,
            };
            info!(status = ?state.status(), "game over");
            self.current_state = state;
            self.phase = Phase::Ended;
            self.ui.switch_view_to(view);
            return Ok(());
        }

        self.current_state = state;
        match self.current_state.turn() {
            Player::X => self.ui.switch_view_to(View::Human),
            Player::O => {
                self.ui.switch_view_to(View::Robot);
                let next = self.ai.notify(&self.current_state, &mut self.ui)?;
                self.advance_to(next)?;
            }
        }
        Ok(())
    }
}
