//! First-class move type.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use serde::{Deserialize, Serialize};
use solved_tictactoe::{Player, Position};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Creates a move from a cell number (1-9).
    pub fn at_cell(player: Player, cell: u8) -> Option<Self> {
        Position::from_cell(cell).map(|position| Self { player, position })
    }

    /// Returns the cell number (1-9) of this move.
    pub fn cell(&self) -> u8 {
        self.position.cell()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}
