//! Boundary contract with the front end.
//!
//! The core never renders anything; it pushes fire-and-forget notifications
//! through this trait and consumes no return values.

use super::position::Position;
use super::types::Player;

/// Named views the front end can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// It is the human's turn.
    Human,
    /// The AI is picking a move.
    Robot,
    /// The human (X) won.
    Won,
    /// The human (X) lost.
    Lost,
    /// The game is a draw.
    Draw,
}

/// Front-end sink for game notifications.
pub trait Ui {
    /// A mark was placed at a board cell.
    fn insert_at(&mut self, pos: Position, mark: Player);

    /// The front end should present the named view.
    fn switch_view_to(&mut self, view: View);
}
