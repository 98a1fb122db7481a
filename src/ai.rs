//! AI players at three strength levels.
//!
//! A player is constructed with a fixed level and a random-number source,
//! bound to a game once via [`AiPlayer::plays`], and then asked for moves
//! through [`AiPlayer::notify`] whenever its turn comes up.

use super::action::{Action, MoveError};
use super::minimax::minimax_value;
use super::state::State;
use super::types::Player;
use super::ui::Ui;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// AI strength level, fixed for the lifetime of a match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Picks a uniformly random empty cell; never searches.
    Blind,
    /// Mixes optimal and second-best minimax decisions.
    Novice,
    /// Always takes the optimal minimax decision.
    Master,
}

/// Errors from the decision path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AiError {
    /// The player was asked to move before being bound to a game.
    #[display("AI player has not been bound to a game")]
    UnboundPlayer,
    /// No empty cell remains; the state is already terminal.
    #[display("No moves available")]
    NoMovesAvailable,
    /// The chosen action could not be applied.
    #[from]
    Move(#[error(source)] MoveError),
}

/// An AI player with a fixed strength level and its own randomness source.
#[derive(Debug)]
pub struct AiPlayer {
    level: Level,
    rng: SmallRng,
    mark: Option<Player>,
}

impl AiPlayer {
    /// Creates a player with an entropy-seeded randomness source.
    pub fn new(level: Level) -> Self {
        Self {
            level,
            rng: SmallRng::from_entropy(),
            mark: None,
        }
    }

    /// Creates a player with a fixed seed, for reproducible play.
    pub fn with_seed(level: Level, seed: u64) -> Self {
        Self {
            level,
            rng: SmallRng::seed_from_u64(seed),
            mark: None,
        }
    }

    /// Returns the player's strength level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Binds the player to a game as the given mark.
    ///
    /// Called once when the player joins a game; [`AiPlayer::notify`] fails
    /// until the binding exists.
    #[instrument(skip(self))]
    pub fn plays(&mut self, mark: Player) {
        self.mark = Some(mark);
    }

    /// Notifies the player that its turn has come up.
    ///
    /// Picks a move according to the configured level, applies it to the
    /// given state, reports the placement through the `ui`, and returns the
    /// successor state for the controller to advance to.
    #[instrument(skip(self, state, ui), fields(level = %self.level))]
    pub fn notify<U: Ui>(&mut self, state: &State, ui: &mut U) -> Result<State, AiError> {
        if self.mark.is_none() {
            return Err(AiError::UnboundPlayer);
        }

        match self.level {
            Level::Blind => self.take_blind_move(state, ui),
            Level::Novice => self.take_novice_move(state, ui),
            Level::Master => self.take_master_move(state, ui),
        }
    }

    /// Chooses a uniformly random empty cell.
    fn take_blind_move<U: Ui>(&mut self, state: &State, ui: &mut U) -> Result<State, AiError> {
        let available = state.empty_cells();
        if available.is_empty() {
            return Err(AiError::NoMovesAvailable);
        }

        let chosen = available[self.rng.gen_range(0..available.len())];
        debug!(position = %chosen, "blind move");
        self.commit(Action::new(chosen), state, ui)
    }

    /// Takes the optimal action 40% of the time and the first suboptimal
    /// action otherwise, falling back to the only action when just one
    /// remains.
    fn take_novice_move<U: Ui>(&mut self, state: &State, ui: &mut U) -> Result<State, AiError> {
        let actions = self.scored_actions(state)?;

        let chosen = if self.rng.gen_range(0.0..1.0) < 0.4 || actions.len() < 2 {
            actions[0]
        } else {
            actions[1]
        };
        debug!(action = %chosen, "novice move");
        self.commit(chosen, state, ui)
    }

    /// Always takes the best-scored action.
    fn take_master_move<U: Ui>(&mut self, state: &State, ui: &mut U) -> Result<State, AiError> {
        let actions = self.scored_actions(state)?;
        let chosen = actions[0];
        debug!(action = %chosen, "master move");
        self.commit(chosen, state, ui)
    }

    /// Enumerates the legal actions, scores each with the minimax engine,
    /// and sorts them best-for-mover first.
    ///
    /// The sort is stable, so equally-scored actions stay in `empty_cells`
    /// enumeration order.
    fn scored_actions(&self, state: &State) -> Result<Vec<Action>, AiError> {
        let available = state.empty_cells();
        if available.is_empty() {
            return Err(AiError::NoMovesAvailable);
        }

        let mut actions = Vec::with_capacity(available.len());
        for pos in available {
            let mut next = Action::new(pos).apply_to(state)?;
            actions.push(Action::scored(pos, minimax_value(&mut next)));
        }

        match state.turn() {
            Player::X => Action::sort_descending(&mut actions),
            Player::O => Action::sort_ascending(&mut actions),
        }
        Ok(actions)
    }

    /// Applies the chosen action and reports the placement.
    fn commit<U: Ui>(&self, action: Action, state: &State, ui: &mut U) -> Result<State, AiError> {
        let next = action.apply_to(state)?;
        ui.insert_at(action.position(), state.turn());
        Ok(next)
    }
}
