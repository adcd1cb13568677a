//! The two sides of the game.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// Carries an arithmetic sign (+1 for X, -1 for O) so the search can compare
/// scores from either side with a single multiplication.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns +1 for X and -1 for O.
    pub const fn sign(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// Parses a mark from `"X"` or `"O"` (case-insensitive).
    pub fn from_mark(mark: &str) -> Option<Self> {
        match mark.trim() {
            "X" | "x" => Some(Player::X),
            "O" | "o" => Some(Player::O),
            _ => None,
        }
    }
}

/// A raw player tag other than +1 or -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid player tag {} (expected 1 or -1)", tag)]
pub struct InvalidPlayerTag {
    /// The rejected tag.
    pub tag: i8,
}

impl TryFrom<i8> for Player {
    type Error = InvalidPlayerTag;

    fn try_from(tag: i8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Player::X),
            -1 => Ok(Player::O),
            tag => Err(InvalidPlayerTag { tag }),
        }
    }
}
