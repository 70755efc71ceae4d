//! Move selection for computer seats.

use super::board::{verdict, Board};
use super::types::{Outcome, Side};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::{debug, instrument};

/// Picks moves for a computer-controlled seat.
pub trait Strategy<B: Board>: Send {
    /// Returns a legal move for `side`, or `None` when there is none.
    fn choose(&mut self, board: &B, side: Side) -> Option<B::Move>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Seeded generator, or OS entropy when `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// Same as [`RandomStrategy::new`] but gives each seat its own stream.
    pub fn for_seat(seed: Option<u64>, side: Side) -> Self {
        Self::new(seed.map(|s| s.wrapping_add(side.index() as u64 + 1)))
    }
}

impl<B: Board> Strategy<B> for RandomStrategy {
    #[instrument(skip(self, board))]
    fn choose(&mut self, board: &B, side: Side) -> Option<B::Move> {
        let moves = board.legal_moves(side);
        let choice = moves.choose(&mut self.rng).cloned();
        debug!(options = moves.len(), choice = ?choice, "Random move");
        choice
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// First legal move in the board's own ordering (row-major for grid games).
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFreeStrategy;

impl<B: Board> Strategy<B> for FirstFreeStrategy {
    fn choose(&mut self, board: &B, side: Side) -> Option<B::Move> {
        board.legal_moves(side).into_iter().next()
    }

    fn name(&self) -> &'static str {
        "first-free"
    }
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// A win found after `d` plies scores `10 - d`, a loss `d - 10`; draws and
/// unresolved positions at the depth limit score zero. Among equal scores
/// the earliest move in `legal_moves` order is kept.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxStrategy {
    max_depth: usize,
}

const WIN_SCORE: i32 = 10;

impl MinimaxStrategy {
    /// Creates a searcher looking at most `max_depth` plies ahead (at least one).
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }

    /// Search horizon in plies.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn terminal_score(outcome: Outcome, me: Side, depth: usize) -> i32 {
        let depth = depth as i32;
        match outcome {
            Outcome::Winner(side) if side == me => WIN_SCORE - depth,
            Outcome::Winner(_) => depth - WIN_SCORE,
            Outcome::Draw => 0,
        }
    }

    /// Scores the position where `to_move` is about to play at `depth`.
    fn search<B: Board>(
        &self,
        board: &B,
        to_move: Side,
        me: Side,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if depth >= self.max_depth {
            return 0;
        }
        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            return 0;
        }
        let maximizing = to_move == me;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let mut child = board.clone();
            if child.update(to_move, &mv).is_err() {
                continue;
            }
            let score = match verdict(&child, to_move) {
                Some(outcome) => Self::terminal_score(outcome, me, depth),
                None => self.search(&child, to_move.opponent(), me, depth + 1, alpha, beta),
            };
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        if best == i32::MIN || best == i32::MAX {
            0
        } else {
            best
        }
    }
}

impl<B: Board> Strategy<B> for MinimaxStrategy {
    #[instrument(skip(self, board), fields(max_depth = self.max_depth))]
    fn choose(&mut self, board: &B, side: Side) -> Option<B::Move> {
        let mut best: Option<(i32, B::Move)> = None;
        for mv in board.legal_moves(side) {
            let mut child = board.clone();
            if child.update(side, &mv).is_err() {
                continue;
            }
            let score = match verdict(&child, side) {
                Some(outcome) => Self::terminal_score(outcome, side, 0),
                None => self.search(&child, side.opponent(), side, 1, i32::MIN, i32::MAX),
            };
            if best.as_ref().is_none_or(|(top, _)| score > *top) {
                best = Some((score, mv));
            }
        }
        debug!(score = ?best.as_ref().map(|(s, _)| *s), "Minimax move");
        best.map(|(_, mv)| mv)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}
