//! Named cells of the tic-tac-toe board.

use super::board::BoardState;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board, numbered 1-9 in row-major order.
///
/// The core operations take raw cell numbers; this enum gives those
/// numbers readable names for history and log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending cell order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to its cell number (1-9).
    pub const fn cell(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the occupancy bit for this position.
    pub const fn bit(self) -> u16 {
        1 << (self as u8)
    }

    /// Creates position from a cell number (1-9).
    pub fn from_cell(cell: u8) -> Option<Self> {
        match cell {
            1..=9 => Some(Self::ALL[usize::from(cell - 1)]),
            _ => None,
        }
    }

    /// Parse from label or cell number (1-9).
    ///
    /// Labels match case-insensitively, and hyphens may be replaced by
    /// spaces (`"top left"`).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(cell) = s.parse::<u8>() {
            return Self::from_cell(cell);
        }

        let wanted = s.to_lowercase().replace(' ', "-");
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == wanted)
    }

    /// Filters positions by board state - returns only empty cells.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &BoardState) -> Vec<Position> {
        board.empty_cells().filter_map(Self::from_cell).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
