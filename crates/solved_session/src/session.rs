//! Game session management.
//!
//! A session owns exactly one engine and layers turn order, history and
//! scorekeeping on top of it. The engine itself only checks occupancy.

use crate::action::Move;
use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::invariants::SessionInvariants;
use crate::scoreboard::Scoreboard;
use rand::Rng;
use serde::{Deserialize, Serialize};
use solved_tictactoe::{BoardState, Engine, GameResult, InvariantSet, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Outcome of a human move plus the engine's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The human's move.
    pub human: Move,
    /// The engine's reply, absent if the human's move ended the game.
    pub reply: Option<Move>,
    /// Board result after both moves.
    pub result: GameResult,
}

/// A game session: one board, two sides, a history and a scoreboard.
#[derive(Debug)]
pub struct GameSession {
    engine: Engine,
    to_move: Player,
    history: Vec<Move>,
    human: Player,
    scoreboard: Scoreboard,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl GameSession {
    /// Creates a new game session.
    #[instrument(skip(config), fields(human = %config.human()))]
    pub fn new(config: &SessionConfig) -> Self {
        info!("Creating new game session");
        Self {
            engine: Engine::new(),
            to_move: Player::X,
            history: Vec::new(),
            human: *config.human(),
            scoreboard: Scoreboard::new(),
        }
    }

    /// Rebuilds a session by playing `moves` from an empty board.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, SessionError> {
        let mut session = Self::default();
        for mov in moves {
            session.play(*mov)?;
        }
        Ok(session)
    }

    /// Starts a new game. X moves first; the scoreboard is kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        debug!("Starting new game");
        self.engine.reset();
        self.history.clear();
        self.to_move = Player::X;
    }

    /// Applies a move, enforcing game-over and turn order.
    ///
    /// A move that ends the game is recorded on the scoreboard.
    #[instrument(skip(self, mov), fields(mov = %mov))]
    pub fn play(&mut self, mov: Move) -> Result<GameResult, SessionError> {
        let result = self.engine.result();
        if result.is_terminal() {
            warn!(%result, "Move after game over");
            return Err(SessionError::GameOver(result));
        }
        if mov.player != self.to_move {
            warn!(expected = %self.to_move, "Move out of turn");
            return Err(SessionError::WrongPlayer(mov.player));
        }
        if !self.engine.apply_move(mov.cell(), mov.player) {
            warn!("Square occupied");
            return Err(SessionError::SquareOccupied(mov.position));
        }

        self.history.push(mov);
        self.to_move = mov.player.opponent();

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "session invariants violated after {mov}"
        );

        let result = self.engine.result();
        if result.is_terminal() {
            info!(%result, moves = self.history.len(), "Game finished");
            self.scoreboard.record(result);
        }
        Ok(result)
    }

    /// Places `player`'s mark on a cell number (1-9).
    pub fn play_cell(&mut self, cell: u8, player: Player) -> Result<GameResult, SessionError> {
        let mov = Move::at_cell(player, cell).ok_or(SessionError::InvalidPosition(cell))?;
        self.play(mov)
    }

    /// Plays the human's mark on `cell`, then lets the engine answer if the
    /// game is still going.
    ///
    /// When the human plays O, call [`computer_move`](Self::computer_move)
    /// once after `new_game` so the engine opens.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, cell: u8) -> Result<Turn, SessionError> {
        let human = Move::at_cell(self.human, cell).ok_or(SessionError::InvalidPosition(cell))?;
        let result = self.play(human)?;

        let reply = if result.is_terminal() {
            None
        } else {
            Some(self.computer_move()?)
        };

        Ok(Turn {
            human,
            reply,
            result: self.engine.result(),
        })
    }

    /// Lets the engine play the optimal move for the side to move.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn computer_move(&mut self) -> Result<Move, SessionError> {
        let player = self.to_move;
        let cell = self
            .engine
            .choose_move(player)
            .ok_or(SessionError::GameOver(self.engine.result()))?;
        let mov = Move::at_cell(player, cell).ok_or(SessionError::InvalidPosition(cell))?;

        debug!(%mov, "Engine chose move");
        self.play(mov)?;
        Ok(mov)
    }

    /// Plays a full engine-vs-engine game.
    ///
    /// Starts a new game, opens X on a random cell, then lets the search
    /// play both sides until the game ends. The result is recorded.
    #[instrument(skip(self, rng))]
    pub fn play_computer_vs_computer<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<GameResult, SessionError> {
        self.new_game();

        let opening = rng.gen_range(1..=9);
        let mut result = self.play_cell(opening, Player::X)?;
        while !result.is_terminal() {
            self.computer_move()?;
            result = self.engine.result();
        }

        info!(opening, %result, "Self-play game finished");
        Ok(result)
    }

    /// Returns the board.
    pub fn board(&self) -> &BoardState {
        self.engine.board()
    }

    /// Evaluates the board.
    pub fn result(&self) -> GameResult {
        self.engine.result()
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.engine.board())
    }

    /// Returns the scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the scoreboard mutably, for subscribing or resetting.
    pub fn scoreboard_mut(&mut self) -> &mut Scoreboard {
        &mut self.scoreboard
    }
}
