//! Session error types.

use solved_tictactoe::{GameResult, Player, Position};

/// Error that can occur when validating or applying a move in a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The cell number is outside 1-9.
    #[display("Position {} is off the board (must be 1-9)", _0)]
    InvalidPosition(u8),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over: {}", _0)]
    GameOver(GameResult),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for SessionError {}
