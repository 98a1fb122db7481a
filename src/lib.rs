//! Tic-tac-toe with a minimax AI opponent.
//!
//! The library models a board position as an immutable-by-convention
//! [`State`], scores candidate moves with a full-depth minimax search, and
//! drives a match through a [`Game`] controller that reports placements and
//! view changes to an injected [`Ui`] front end.
//!
//! # Architecture
//!
//! - **State/Action**: value-object board snapshots and scored candidate moves
//! - **Minimax**: exhaustive recursive evaluation, no pruning by design
//! - **AI**: blind, novice, and master decision policies over scored actions
//! - **Game**: turn state machine dispatching between the human and the AI
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{AiPlayer, Game, Level, Player, Position, Ui, View};
//!
//! struct Silent;
//! impl Ui for Silent {
//!     fn insert_at(&mut self, _pos: Position, _mark: Player) {}
//!     fn switch_view_to(&mut self, _view: View) {}
//! }
//!
//! # fn main() -> Result<(), tictactoe_minimax::GameError> {
//! let mut game = Game::new(AiPlayer::with_seed(Level::Master, 42), Silent);
//! game.start()?;
//! game.play(Position::Center)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod ai;
mod game;
mod minimax;
mod position;
mod state;
mod types;
mod ui;

// Crate-level exports - data model
pub use position::Position;
pub use state::State;
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - actions and engine
pub use action::{Action, MoveError};
pub use minimax::{minimax_value, score};

// Crate-level exports - AI players
pub use ai::{AiError, AiPlayer, Level};

// Crate-level exports - controller and front-end boundary
pub use game::{Game, GameError, Phase};
pub use ui::{Ui, View};
