//! Exhaustive negamax search.
//!
//! Every position is scored from X's fixed perspective with three ordered
//! sentinels (O wins < draw < X wins). The side to move multiplies a score by
//! its sign before comparing, so "better for me" is always "numerically
//! larger" for both players.
//!
//! The search walks the full game tree on the caller's board with a
//! make/unmake discipline: every trial move is undone before the next
//! candidate is tried, leaving the board exactly as it was found.
//! The tree holds fewer than a million nodes, so there is no pruning and no
//! transposition table.

use super::board::{BoardState, GameResult};
use super::player::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Value of a position from X's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Score(i32);

impl Score {
    /// O has a winning line.
    pub const O_WINS: Score = Score(512);
    /// Board full, no line.
    pub const DRAW: Score = Score(1024);
    /// X has a winning line.
    pub const X_WINS: Score = Score(2048);

    /// Returns the fixed-perspective score of a terminal result.
    pub fn terminal(result: GameResult) -> Option<Score> {
        match result {
            GameResult::XWins => Some(Score::X_WINS),
            GameResult::OWins => Some(Score::O_WINS),
            GameResult::Draw => Some(Score::DRAW),
            GameResult::Ongoing => None,
        }
    }

    /// The score as seen by `player`: larger is better for them.
    pub const fn for_player(self, player: Player) -> i32 {
        self.0 * player.sign()
    }

    /// The raw sentinel value.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Maps the score back to the result it predicts under perfect play.
    pub fn predicted_result(self) -> GameResult {
        if self == Score::X_WINS {
            GameResult::XWins
        } else if self == Score::O_WINS {
            GameResult::OWins
        } else {
            GameResult::Draw
        }
    }
}

/// Result of searching one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Fixed-perspective value of the position under perfect play.
    pub score: Score,
    /// Best cell for the side to move; `None` on a terminal position.
    pub cell: Option<u8>,
}

/// Scores `board` with `player` to move and picks that player's best cell.
///
/// Candidates are tried in ascending cell order. The first candidate is
/// always retained and later ones replace it only when strictly better, so
/// ties go to the lowest-numbered cell. The board is restored before
/// returning.
pub fn negamax(board: &mut BoardState, player: Player) -> SearchOutcome {
    if let Some(score) = Score::terminal(board.result()) {
        return SearchOutcome { score, cell: None };
    }

    let mut best: Option<SearchOutcome> = None;
    for cell in board.empty_cells() {
        let applied = board.apply_move(cell, player);
        debug_assert!(applied, "empty cell {cell} rejected a move");
        let reply = negamax(board, player.opponent());
        board.unset_cell(cell);

        let improves = best.is_none_or(|current| {
            reply.score.for_player(player) > current.score.for_player(player)
        });
        if improves {
            best = Some(SearchOutcome {
                score: reply.score,
                cell: Some(cell),
            });
        }
    }

    // a non-terminal board always has an empty cell
    best.unwrap_or(SearchOutcome {
        score: Score::DRAW,
        cell: None,
    })
}

/// Returns the optimal cell (1-9) for `player`, or `None` if the game is
/// already over.
///
/// Takes the board mutably for the duration of the search; it is unchanged
/// when this returns.
#[instrument(skip(board), fields(x_mask = board.x_mask(), o_mask = board.o_mask()))]
pub fn choose_move(board: &mut BoardState, player: Player) -> Option<u8> {
    let outcome = negamax(board, player);
    debug!(
        cell = ?outcome.cell,
        score = outcome.score.value(),
        "Search finished"
    );
    outcome.cell
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(xs: &[u8], os: &[u8]) -> BoardState {
        let mut board = BoardState::new();
        for &cell in xs {
            assert!(board.apply_move(cell, Player::X));
        }
        for &cell in os {
            assert!(board.apply_move(cell, Player::O));
        }
        board
    }

    #[test]
    fn test_sentinel_ordering() {
        assert!(Score::O_WINS < Score::DRAW);
        assert!(Score::DRAW < Score::X_WINS);
        assert!(Score::O_WINS.for_player(Player::O) > Score::DRAW.for_player(Player::O));
        assert!(Score::DRAW.for_player(Player::O) > Score::X_WINS.for_player(Player::O));
    }

    #[test]
    fn test_terminal_board_has_no_cell() {
        let mut board = board(&[1, 2, 3], &[4, 5]);
        let outcome = negamax(&mut board, Player::O);
        assert_eq!(outcome.score, Score::X_WINS);
        assert_eq!(outcome.cell, None);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut board = BoardState::new();
        let outcome = negamax(&mut board, Player::X);
        assert_eq!(outcome.score, Score::DRAW);
        assert_eq!(outcome.score.predicted_result(), GameResult::Draw);
        assert_eq!(outcome.cell, Some(1));
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = board(&[5], &[1]);
        let before = board;
        negamax(&mut board, Player::X);
        assert_eq!(board, before);
    }

    #[test]
    fn test_equal_wins_go_to_lowest_cell() {
        // O wins at 6 immediately, but 3 also forces a win (fork on 6 and 7)
        let mut board = board(&[1, 2], &[4, 5]);
        let outcome = negamax(&mut board, Player::O);
        assert_eq!(outcome.score, Score::O_WINS);
        assert_eq!(outcome.cell, Some(3));
    }

    #[test]
    fn test_lost_position_still_returns_empty_cell() {
        // X forks on 3 and 7; every reply loses
        let mut board = board(&[1, 2, 4], &[5, 9]);
        let outcome = negamax(&mut board, Player::O);
        assert_eq!(outcome.score, Score::X_WINS);
        assert_eq!(outcome.cell, Some(3));
        assert!(board.is_empty(3));
    }
}
