//! Session layer for solved tic-tac-toe.
//!
//! The core engine knows nothing about turns, history or scores. This crate
//! wraps one engine per game session and adds everything a front end needs
//! on top of it.
//!
//! # Architecture
//!
//! - **Session**: turn order, move history, human-vs-engine and engine-vs-engine play
//! - **Scoreboard**: win/draw counters with change notifications
//! - **Config**: TOML session settings
//! - **Invariants**: session-level properties checked in debug builds
//!
//! # Example
//!
//! ```
//! use solved_session::{GameSession, SessionConfig};
//! use solved_tictactoe::GameResult;
//!
//! let mut session = GameSession::new(&SessionConfig::default());
//! let turn = session.play_human(5)?;
//! assert!(turn.reply.is_some());
//! assert_eq!(turn.result, GameResult::Ongoing);
//! # Ok::<(), solved_session::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod error;
mod invariants;
mod scoreboard;
mod session;

pub use action::Move;
pub use config::{ConfigError, SessionConfig};
pub use error::SessionError;
pub use invariants::{AlternatingTurn, HistoryConsistent, SessionInvariants};
pub use scoreboard::{ScoreListener, ScoreSnapshot, Scoreboard, Tally};
pub use session::{GameSession, Turn};
