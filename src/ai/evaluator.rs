use crate::game::{Grid, Side};

use super::agent::Agent;
use super::strategy::WindowContext;

/// Score contribution of a completed run for either side.
pub const WIN_SCORE: i32 = 100;

/// Trait for evaluating a grid from one agent's point of view.
pub trait Heuristic {
    /// Positive scores favour `perspective`.
    fn evaluate(&self, grid: &Grid, perspective: &Agent, opponent: &Agent) -> i32;
}

/// Default heuristic: win/loss term plus a sum over every window, with the
/// perspective agent's enabled strategies layered on each window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    /// The `±WIN_SCORE` term. Both sides are checked independently since
    /// search can reach positions no legal game produces.
    pub fn outcome_score(grid: &Grid, own: Side, opponent: Side) -> i32 {
        let mut score = 0;
        if grid.has_won(own) {
            score += WIN_SCORE;
        }
        if grid.has_won(opponent) {
            score -= WIN_SCORE;
        }
        score
    }

    /// Base contribution of a single window of length `connect`.
    pub fn score_window(own: usize, opp: usize, empty: usize, connect: usize) -> i32 {
        let mut score = if own == connect {
            100
        } else if own + 1 == connect && empty == 1 {
            5
        } else if own + 2 == connect && empty == 2 {
            2
        } else {
            0
        };

        if opp + 1 == connect && empty == 1 {
            score -= 4;
        }

        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, grid: &Grid, perspective: &Agent, opponent: &Agent) -> i32 {
        let own = perspective.side();
        let opp = opponent.side();
        let strategies = perspective.enabled_strategies();
        let center = grid.center_col();

        let mut score = Self::outcome_score(grid, own, opp);

        for window in grid.windows() {
            let ctx = WindowContext::new(window, own.to_mark(), opp.to_mark(), center);
            score += Self::score_window(
                ctx.own_count,
                ctx.opponent_count,
                ctx.empty_count,
                grid.connect(),
            );
            if !strategies.is_empty() {
                score += strategies.score(&ctx);
            }
        }

        score
    }
}
