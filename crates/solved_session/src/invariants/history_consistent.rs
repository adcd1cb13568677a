//! History consistency invariant: the history rebuilds the board.

use crate::GameSession;
use solved_tictactoe::{BoardState, Invariant};

/// Invariant: replaying the move history onto an empty board reproduces
/// the session's board, and no move follows a finished game.
pub struct HistoryConsistent;

impl Invariant<GameSession> for HistoryConsistent {
    fn holds(session: &GameSession) -> bool {
        let mut board = BoardState::new();

        for mov in session.history() {
            if board.result().is_terminal() {
                return false;
            }
            if !board.apply_move(mov.cell(), mov.player) {
                return false;
            }
        }

        board == *session.board()
    }

    fn description() -> &'static str {
        "Move history reproduces the board"
    }
}
