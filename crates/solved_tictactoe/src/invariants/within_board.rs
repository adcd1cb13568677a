//! Within-board invariant: only the nine cell bits are ever set.

use super::Invariant;
use crate::{BoardState, FULL_MASK};

/// Invariant: neither mask has bits above cell 9.
pub struct WithinBoard;

impl Invariant<BoardState> for WithinBoard {
    fn holds(board: &BoardState) -> bool {
        board.occupied() & !FULL_MASK == 0
    }

    fn description() -> &'static str {
        "Only cells 1-9 are occupied"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardInvariants, InvariantSet, Player};

    #[test]
    fn test_full_board_holds() {
        let mut board = BoardState::new();
        for cell in 1..=9 {
            let player = if cell % 2 == 0 { Player::O } else { Player::X };
            assert!(board.apply_move(cell, player));
        }
        assert!(WithinBoard::holds(&board));
    }

    #[test]
    fn test_stray_bit_violates() {
        let board = BoardState::from_masks(1 << 9, 0);
        assert!(!WithinBoard::holds(&board));
    }

    #[test]
    fn test_set_reports_every_violation() {
        let board = BoardState::from_masks(0x201, 0x001);
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
