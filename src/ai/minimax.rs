use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::Grid;

use super::agent::Agent;
use super::evaluator::{Heuristic, WindowHeuristic};

/// Plies searched below each root candidate.
pub const DEFAULT_DEPTH: usize = 3;

/// The two agents a search is run for. The mover is the maximizing side.
#[derive(Clone, Copy)]
struct Sides<'a> {
    mover: &'a Agent,
    opponent: &'a Agent,
}

/// Depth-limited minimax with alpha-beta pruning.
pub struct SearchEngine {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    nodes: u64,
}

impl SearchEngine {
    pub fn new(depth: usize) -> Self {
        SearchEngine::with_heuristic(depth, Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        SearchEngine {
            depth,
            heuristic,
            nodes: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of positions visited by the last [`SearchEngine::choose_move`].
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Pick a column for `mover`. Candidates are tried in a random order so
    /// that equally scored columns are chosen uniformly rather than always
    /// the leftmost one. Returns `None` only when no column is playable.
    pub fn choose_move<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        mover: &Agent,
        opponent: &Agent,
        rng: &mut R,
    ) -> Option<usize> {
        self.nodes = 0;
        let sides = Sides { mover, opponent };

        let mut candidates: Vec<usize> = grid.valid_moves().collect();
        candidates.shuffle(rng);

        let mut best: Option<(usize, i32)> = None;
        for col in candidates {
            let mut child = grid.clone();
            child.apply_move(col, mover.side());
            let score = self.minimax(&child, self.depth, false, i32::MIN, i32::MAX, sides);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((col, score));
            }
        }

        if let Some((col, score)) = best {
            log::debug!(
                "{} chose column {col} (score {score}, depth {}, {} nodes)",
                mover.side().name(),
                self.depth,
                self.nodes
            );
        }
        best.map(|(col, _)| col)
    }

    fn minimax(
        &mut self,
        grid: &Grid,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        sides: Sides<'_>,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0
            || grid.has_won(sides.mover.side())
            || grid.has_won(sides.opponent.side())
            || grid.is_full()
        {
            return self.heuristic.evaluate(grid, sides.mover, sides.opponent);
        }

        if maximizing {
            let mut best = i32::MIN;
            for col in 0..grid.cols() {
                if !grid.is_valid_move(col) {
                    continue;
                }
                let mut child = grid.clone();
                child.apply_move(col, sides.mover.side());
                let score = self.minimax(&child, depth - 1, false, alpha, beta, sides);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for col in 0..grid.cols() {
                if !grid.is_valid_move(col) {
                    continue;
                }
                let mut child = grid.clone();
                child.apply_move(col, sides.opponent.side());
                let score = self.minimax(&child, depth - 1, true, alpha, beta, sides);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::new(DEFAULT_DEPTH)
    }
}
