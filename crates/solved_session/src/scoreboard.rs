//! Win/draw counters with change notifications.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use solved_tictactoe::GameResult;
use tracing::{debug, instrument};

/// One of the three counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Tally {
    /// Games won by X.
    #[display("x")]
    XWins,
    /// Games won by O.
    #[display("o")]
    OWins,
    /// Drawn games.
    #[display("d")]
    Draws,
}

impl Tally {
    /// Maps a terminal result to its counter; `Ongoing` has none.
    pub fn for_result(result: GameResult) -> Option<Tally> {
        match result {
            GameResult::XWins => Some(Tally::XWins),
            GameResult::OWins => Some(Tally::OWins),
            GameResult::Draw => Some(Tally::Draws),
            GameResult::Ongoing => None,
        }
    }
}

/// Receives a notification whenever a counter changes.
pub trait ScoreListener {
    /// Called with the counter that changed and its new value.
    fn score_changed(&mut self, tally: Tally, value: u32);
}

impl<F> ScoreListener for F
where
    F: FnMut(Tally, u32),
{
    fn score_changed(&mut self, tally: Tally, value: u32) {
        self(tally, value)
    }
}

/// Plain counter values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

/// Counters for finished games.
#[derive(Default)]
pub struct Scoreboard {
    scores: ScoreSnapshot,
    listeners: Vec<Box<dyn ScoreListener>>,
}

impl std::fmt::Debug for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scoreboard")
            .field("scores", &self.scores)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Scoreboard {
    /// Creates a scoreboard with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for counter changes.
    pub fn subscribe(&mut self, listener: impl ScoreListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Increments the counter for `result`.
    ///
    /// Returns the counter that changed, or `None` for `Ongoing`.
    #[instrument(skip(self))]
    pub fn record(&mut self, result: GameResult) -> Option<Tally> {
        let tally = Tally::for_result(result)?;
        self.set(tally, self.get(tally) + 1);
        Some(tally)
    }

    /// Zeroes every counter, notifying draws, O wins, then X wins.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        for tally in [Tally::Draws, Tally::OWins, Tally::XWins] {
            self.set(tally, 0);
        }
    }

    /// Returns the value of one counter.
    pub fn get(&self, tally: Tally) -> u32 {
        match tally {
            Tally::XWins => self.scores.x_wins,
            Tally::OWins => self.scores.o_wins,
            Tally::Draws => self.scores.draws,
        }
    }

    /// Number of finished games recorded.
    pub fn total(&self) -> u32 {
        self.scores.x_wins + self.scores.o_wins + self.scores.draws
    }

    /// Returns the current counters.
    pub fn snapshot(&self) -> ScoreSnapshot {
        self.scores
    }

    fn set(&mut self, tally: Tally, value: u32) {
        match tally {
            Tally::XWins => self.scores.x_wins = value,
            Tally::OWins => self.scores.o_wins = value,
            Tally::Draws => self.scores.draws = value,
        }
        debug!(%tally, value, "Score changed");
        for listener in &mut self.listeners {
            listener.score_changed(tally, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(board: &mut Scoreboard) -> Rc<RefCell<Vec<(Tally, u32)>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        board.subscribe(move |tally: Tally, value: u32| sink.borrow_mut().push((tally, value)));
        events
    }

    #[test]
    fn test_record_increments_matching_counter() {
        let mut board = Scoreboard::new();
        assert_eq!(board.record(GameResult::XWins), Some(Tally::XWins));
        assert_eq!(board.record(GameResult::Draw), Some(Tally::Draws));
        assert_eq!(board.record(GameResult::Draw), Some(Tally::Draws));
        assert_eq!(
            board.snapshot(),
            ScoreSnapshot {
                x_wins: 1,
                o_wins: 0,
                draws: 2
            }
        );
        assert_eq!(board.total(), 3);
    }

    #[test]
    fn test_ongoing_is_not_recorded() {
        let mut board = Scoreboard::new();
        let events = recording(&mut board);
        assert_eq!(board.record(GameResult::Ongoing), None);
        assert_eq!(board.total(), 0);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_listeners_see_every_change() {
        let mut board = Scoreboard::new();
        let events = recording(&mut board);

        board.record(GameResult::OWins);
        board.record(GameResult::OWins);
        board.reset();

        assert_eq!(
            *events.borrow(),
            vec![
                (Tally::OWins, 1),
                (Tally::OWins, 2),
                (Tally::Draws, 0),
                (Tally::OWins, 0),
                (Tally::XWins, 0),
            ]
        );
        assert_eq!(board.snapshot(), ScoreSnapshot::default());
    }

    #[test]
    fn test_tally_codes() {
        assert_eq!(Tally::XWins.to_string(), "x");
        assert_eq!(Tally::OWins.to_string(), "o");
        assert_eq!(Tally::Draws.to_string(), "d");
    }
}
