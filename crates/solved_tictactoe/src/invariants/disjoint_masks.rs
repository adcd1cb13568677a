//! Disjoint masks invariant: no cell belongs to both players.

use super::Invariant;
use crate::BoardState;

/// Invariant: `x_mask & o_mask == 0`.
pub struct DisjointMasks;

impl Invariant<BoardState> for DisjointMasks {
    fn holds(board: &BoardState) -> bool {
        board.x_mask() & board.o_mask() == 0
    }

    fn description() -> &'static str {
        "No cell is claimed by both players"
    }
}
