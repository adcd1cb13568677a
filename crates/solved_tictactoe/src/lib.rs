//! Solved tic-tac-toe - bit-packed board state and perfect play.
//!
//! # Architecture
//!
//! - **Board**: two 9-bit occupancy masks, move validation, terminal detection
//! - **Search**: full-depth negamax over the board using make/unmake
//! - **Engine**: the four-operation facade consumed by session layers
//! - **Invariants**: first-class board properties checked in debug builds
//!
//! # Example
//!
//! ```
//! use solved_tictactoe::{Engine, GameResult, Player};
//!
//! let mut engine = Engine::new();
//! assert!(engine.apply_move(5, Player::X));
//! let reply = engine.choose_move(Player::O).expect("game is ongoing");
//! assert!(engine.apply_move(reply, Player::O));
//! assert_eq!(engine.result(), GameResult::Ongoing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod invariants;
mod player;
mod position;
pub mod search;

pub use board::{
    BoardState, CELL_COUNT, EmptyCells, FULL_MASK, GameResult, ParseBoardError, Square,
    WINNING_LINES, cell_bit,
};
pub use engine::Engine;
pub use invariants::{
    BoardInvariants, DisjointMasks, Invariant, InvariantSet, InvariantViolation, WithinBoard,
};
pub use player::{InvalidPlayerTag, Player};
pub use position::Position;
pub use search::{Score, SearchOutcome, choose_move};
