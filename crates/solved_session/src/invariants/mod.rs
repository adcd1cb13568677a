//! Session-level invariants, built on the core `Invariant` trait.

mod alternating_turn;
mod history_consistent;

pub use alternating_turn::AlternatingTurn;
pub use history_consistent::HistoryConsistent;

/// All session invariants as a composable set.
pub type SessionInvariants = (AlternatingTurn, HistoryConsistent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameSession, Move, SessionConfig};
    use solved_tictactoe::{InvariantSet, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let session = GameSession::new(&SessionConfig::default());
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let moves = [
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopRight),
        ];
        let session = GameSession::replay(&moves).expect("legal moves");
        assert!(SessionInvariants::check_all(&session).is_ok());
    }
}
