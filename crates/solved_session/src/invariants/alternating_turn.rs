//! Alternating turn invariant: players alternate X, O, X, O, ...

use crate::GameSession;
use solved_tictactoe::{Invariant, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... pattern and the side to move must
/// follow from its length.
pub struct AlternatingTurn;

impl Invariant<GameSession> for AlternatingTurn {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let alternates = history.iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            mov.player == expected
        });

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        alternates && session.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
