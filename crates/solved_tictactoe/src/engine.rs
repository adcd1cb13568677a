//! The four-operation facade over board and search.

use super::board::{BoardState, GameResult};
use super::player::Player;
use super::search;
use tracing::{debug, instrument};

/// Tic-tac-toe engine owning exactly one board.
///
/// Exposes `reset`, `apply_move`, `result` and `choose_move`. Turn order is
/// not enforced here beyond occupancy; that belongs to the calling session.
/// `choose_move` borrows the engine mutably while it searches, so no other
/// operation can observe the board mid-search.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    board: BoardState,
}

impl Engine {
    /// Creates an engine with an empty board.
    pub fn new() -> Self {
        Self {
            board: BoardState::new(),
        }
    }

    /// Creates an engine starting from an existing board.
    pub fn from_board(board: BoardState) -> Self {
        Self { board }
    }

    /// Clears the board for a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting board");
        self.board.reset();
    }

    /// Places `player`'s mark on `position` (1-9).
    ///
    /// Returns false, leaving the board untouched, for an off-board or
    /// occupied position.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, position: u8, player: Player) -> bool {
        let applied = self.board.apply_move(position, player);
        if !applied {
            debug!("Move rejected");
        }
        applied
    }

    /// Evaluates the board.
    pub fn result(&self) -> GameResult {
        self.board.result()
    }

    /// Computes the optimal cell for `player`.
    ///
    /// Returns `None` when the game is already over.
    pub fn choose_move(&mut self, player: Player) -> Option<u8> {
        search::choose_move(&mut self.board, player)
    }

    /// Returns the board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }
}
