//! Bit-packed board state for tic-tac-toe.
//!
//! Cells are numbered 1-9 in row-major order and cell `p` maps to bit
//! `1 << (p - 1)`:
//!
//! ```text
//! 001-002-004
//! 008-016-032
//! 064-128-256
//! ```

use super::invariants::{BoardInvariants, InvariantSet};
use super::player::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: u8 = 9;

/// Mask with every cell bit set.
pub const FULL_MASK: u16 = 0x1FF;

/// The 8 winning lines as bitmasks: rows, columns, diagonals.
pub const WINNING_LINES: [u16; 8] = [
    0x007, // row 1
    0x038, // row 2
    0x1C0, // row 3
    0x049, // col 1
    0x092, // col 2
    0x124, // col 3
    0x111, // diagonal 1-5-9
    0x054, // diagonal 3-5-7
];

/// Returns the occupancy bit for a cell, or `None` outside 1-9.
pub const fn cell_bit(position: u8) -> Option<u16> {
    if position >= 1 && position <= CELL_COUNT {
        Some(1 << (position - 1))
    } else {
        None
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// Terminal status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameResult {
    /// Cells remain and nobody has a line.
    #[display("Game in progress")]
    Ongoing,
    /// X holds a winning line.
    #[display("Player X wins")]
    XWins,
    /// O holds a winning line.
    #[display("Player O wins")]
    OWins,
    /// Board full with no winning line.
    #[display("Draw")]
    Draw,
}

impl GameResult {
    /// Returns true for any result other than `Ongoing`.
    pub fn is_terminal(self) -> bool {
        self != GameResult::Ongoing
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::XWins => Some(Player::X),
            GameResult::OWins => Some(Player::O),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }
}

/// Occupancy of the 3x3 board as two disjoint 9-bit masks.
///
/// `x_mask & o_mask == 0` holds for every state reachable through the
/// public API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    x_mask: u16,
    o_mask: u16,
}

impl BoardState {
    /// Creates a new empty board.
    pub const fn new() -> Self {
        Self {
            x_mask: 0,
            o_mask: 0,
        }
    }

    /// Builds a board from raw masks without validation.
    #[cfg(test)]
    pub(crate) const fn from_masks(x_mask: u16, o_mask: u16) -> Self {
        Self { x_mask, o_mask }
    }

    /// Clears both masks for a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.x_mask = 0;
        self.o_mask = 0;
    }

    /// Places `player`'s mark on `position` (1-9).
    ///
    /// Returns false without touching the board when the position is off
    /// the board or already occupied by either player. This sits on the
    /// search hot path, so it does not open a span.
    pub fn apply_move(&mut self, position: u8, player: Player) -> bool {
        let Some(bit) = cell_bit(position) else {
            return false;
        };
        if self.occupied() & bit != 0 {
            return false;
        }

        match player {
            Player::X => self.x_mask |= bit,
            Player::O => self.o_mask |= bit,
        }

        debug_assert!(
            BoardInvariants::check_all(self).is_ok(),
            "board invariants violated after move at {position}"
        );
        true
    }

    /// Like [`apply_move`](Self::apply_move) but takes a raw player tag
    /// (+1 for X, -1 for O). Any other tag is rejected.
    pub fn apply_tagged(&mut self, position: u8, tag: i8) -> bool {
        match Player::try_from(tag) {
            Ok(player) => self.apply_move(position, player),
            Err(_) => false,
        }
    }

    /// Clears `position` from both masks.
    ///
    /// Used to undo trial moves; clearing an empty cell or an off-board
    /// position is a no-op.
    pub fn unset_cell(&mut self, position: u8) {
        if let Some(bit) = cell_bit(position) {
            self.x_mask &= !bit;
            self.o_mask &= !bit;
        }
    }

    /// Returns true if `player` holds any winning line.
    pub fn is_win(&self, player: Player) -> bool {
        let mask = self.mask(player);
        WINNING_LINES.iter().any(|line| mask & line == *line)
    }

    /// Returns true if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied() & FULL_MASK == FULL_MASK
    }

    /// Evaluates the board.
    ///
    /// X's line is checked before O's so the answer stays deterministic even
    /// for a hand-built board holding lines for both.
    pub fn result(&self) -> GameResult {
        if self.is_win(Player::X) {
            GameResult::XWins
        } else if self.is_win(Player::O) {
            GameResult::OWins
        } else if self.is_full() {
            GameResult::Draw
        } else {
            GameResult::Ongoing
        }
    }

    /// Returns the occupancy mask of `player`.
    pub const fn mask(&self, player: Player) -> u16 {
        match player {
            Player::X => self.x_mask,
            Player::O => self.o_mask,
        }
    }

    /// Cells occupied by X.
    pub const fn x_mask(&self) -> u16 {
        self.x_mask
    }

    /// Cells occupied by O.
    pub const fn o_mask(&self) -> u16 {
        self.o_mask
    }

    /// Cells occupied by either player.
    pub const fn occupied(&self) -> u16 {
        self.x_mask | self.o_mask
    }

    /// Gets the square at `position` (1-9).
    pub fn get(&self, position: u8) -> Option<Square> {
        let bit = cell_bit(position)?;
        Some(if self.x_mask & bit != 0 {
            Square::Occupied(Player::X)
        } else if self.o_mask & bit != 0 {
            Square::Occupied(Player::O)
        } else {
            Square::Empty
        })
    }

    /// Checks if a cell is empty. Off-board positions are never empty.
    pub fn is_empty(&self, position: u8) -> bool {
        matches!(self.get(position), Some(Square::Empty))
    }

    /// Iterates empty cells in ascending order.
    ///
    /// The iterator owns a snapshot of the occupancy, so the board may be
    /// mutated while it is consumed.
    pub fn empty_cells(&self) -> EmptyCells {
        EmptyCells {
            remaining: !self.occupied() & FULL_MASK,
        }
    }

    /// Number of occupied cells.
    pub fn move_count(&self) -> u32 {
        self.occupied().count_ones()
    }
}

/// Ascending iterator over the empty cells of a board snapshot.
#[derive(Debug, Clone)]
pub struct EmptyCells {
    remaining: u16,
}

impl Iterator for EmptyCells {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.remaining.trailing_zeros();
        // clear lowest set bit
        self.remaining &= self.remaining - 1;
        Some(index as u8 + 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for EmptyCells {}

impl std::fmt::Display for BoardState {
    /// Renders the grid with empty cells shown by their number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3u8 {
            for col in 0..3u8 {
                let cell = row * 3 + col + 1;
                match self.get(cell) {
                    Some(Square::Occupied(player)) => write!(f, "{player}")?,
                    _ => write!(f, "{cell}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseBoardError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", found)]
    WrongCellCount {
        /// Number of cells found.
        found: usize,
    },

    /// A character that is neither a mark, an empty marker, nor a separator.
    #[display("Unexpected symbol {:?} at cell {}", symbol, cell)]
    UnexpectedSymbol {
        /// The offending character.
        symbol: char,
        /// The cell it would have filled (1-based).
        cell: usize,
    },
}

impl std::error::Error for ParseBoardError {}

impl FromStr for BoardState {
    type Err = ParseBoardError;

    /// Parses a compact board such as `"X.O/.X./..O"`.
    ///
    /// `X`/`O` mark occupied cells, `.` `_` or the cell's own digit mark
    /// empty ones. Whitespace, `|`, `/`, `-` and `+` are separators, so the
    /// `Display` output parses back to the same board.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = BoardState::new();
        let mut cell = 0usize;

        for symbol in s.chars() {
            if symbol.is_whitespace() || matches!(symbol, '|' | '/' | '-' | '+') {
                continue;
            }
            cell += 1;
            if cell > usize::from(CELL_COUNT) {
                continue;
            }

            let player = match symbol {
                'X' | 'x' => Some(Player::X),
                'O' | 'o' => Some(Player::O),
                '.' | '_' => None,
                digit if digit.to_digit(10) == Some(cell as u32) => None,
                symbol => return Err(ParseBoardError::UnexpectedSymbol { symbol, cell }),
            };
            if let Some(player) = player {
                board.apply_move(cell as u8, player);
            }
        }

        if cell != usize::from(CELL_COUNT) {
            return Err(ParseBoardError::WrongCellCount { found: cell });
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_bit_bounds() {
        assert_eq!(cell_bit(0), None);
        assert_eq!(cell_bit(1), Some(0x001));
        assert_eq!(cell_bit(9), Some(0x100));
        assert_eq!(cell_bit(10), None);
    }

    #[test]
    fn test_winning_lines_have_three_cells() {
        for line in WINNING_LINES {
            assert_eq!(line.count_ones(), 3);
            assert_eq!(line & !FULL_MASK, 0);
        }
    }

    #[test]
    fn test_empty_cells_ascending() {
        let mut board = BoardState::new();
        board.apply_move(2, Player::X);
        board.apply_move(5, Player::O);
        board.apply_move(9, Player::X);

        let cells: Vec<u8> = board.empty_cells().collect();
        assert_eq!(cells, vec![1, 3, 4, 6, 7, 8]);
        assert_eq!(board.empty_cells().len(), 6);
    }

    #[test]
    fn test_empty_cells_is_a_snapshot() {
        let mut board = BoardState::new();
        let mut seen = Vec::new();
        for cell in board.empty_cells() {
            board.apply_move(cell, Player::X);
            seen.push(cell);
        }
        assert_eq!(seen, (1..=9).collect::<Vec<u8>>());
        assert!(board.is_full());
    }

    #[test]
    fn test_unset_cell_clears_either_mask() {
        let mut board = BoardState::new();
        board.apply_move(1, Player::X);
        board.apply_move(2, Player::O);

        board.unset_cell(1);
        board.unset_cell(2);
        board.unset_cell(3);
        board.unset_cell(0);
        board.unset_cell(42);

        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn test_display_shows_numbers_for_empty_cells() {
        let mut board = BoardState::new();
        board.apply_move(1, Player::X);
        board.apply_move(5, Player::O);
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_display_parses_back() {
        let board: BoardState = "XO. .X. ..O".parse().unwrap();
        let reparsed: BoardState = board.to_string().parse().unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO.".parse::<BoardState>(),
            Err(ParseBoardError::WrongCellCount { found: 3 })
        );
        assert_eq!(
            "XO.......X".parse::<BoardState>(),
            Err(ParseBoardError::WrongCellCount { found: 10 })
        );
        assert_eq!(
            "XOZ......".parse::<BoardState>(),
            Err(ParseBoardError::UnexpectedSymbol {
                symbol: 'Z',
                cell: 3
            })
        );
        assert_eq!(
            "X5.......".parse::<BoardState>(),
            Err(ParseBoardError::UnexpectedSymbol {
                symbol: '5',
                cell: 2
            })
        );
    }
}
