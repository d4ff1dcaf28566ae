//! Optional window-scoring strategies layered on top of the base heuristic.
//!
//! Each [`Strategy`] maps to one scoring function in [`STRATEGY_TABLE`]. An
//! automated agent in customized mode carries a [`StrategySet`]; the
//! evaluator adds the score of every enabled entry to each window.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{Mark, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    CenterControl,
    EdgeTrap,
    Adjacency,
    TrapBlock,
    DoubleOpenTrap,
    ForkDetection,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::CenterControl,
        Strategy::EdgeTrap,
        Strategy::Adjacency,
        Strategy::TrapBlock,
        Strategy::DoubleOpenTrap,
        Strategy::ForkDetection,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::CenterControl => "center_control",
            Strategy::EdgeTrap => "edge_trap",
            Strategy::Adjacency => "adjacency",
            Strategy::TrapBlock => "trap_block",
            Strategy::DoubleOpenTrap => "double_open_trap",
            Strategy::ForkDetection => "fork_detection",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A window together with the per-mark counts every scorer needs.
#[derive(Debug, Clone, Copy)]
pub struct WindowContext<'a> {
    pub window: Window<'a>,
    pub own: Mark,
    pub opponent: Mark,
    pub own_count: usize,
    pub opponent_count: usize,
    pub empty_count: usize,
    /// Center column index of the grid.
    pub center: usize,
}

impl<'a> WindowContext<'a> {
    pub fn new(window: Window<'a>, own: Mark, opponent: Mark, center: usize) -> Self {
        let mut own_count = 0;
        let mut opponent_count = 0;
        let mut empty_count = 0;
        for mark in window.iter() {
            match mark {
                m if m == own => own_count += 1,
                m if m == opponent => opponent_count += 1,
                _ => empty_count += 1,
            }
        }
        WindowContext {
            window,
            own,
            opponent,
            own_count,
            opponent_count,
            empty_count,
            center,
        }
    }

    fn len(&self) -> usize {
        self.window.len()
    }

    fn is(&self, i: usize, mark: Mark) -> bool {
        self.window.get(i) == mark
    }
}

pub type WindowScorer = fn(&WindowContext<'_>) -> i32;

/// Strategy identifier to scoring function.
pub const STRATEGY_TABLE: [(Strategy, WindowScorer); 6] = [
    (Strategy::CenterControl, center_control),
    (Strategy::EdgeTrap, edge_trap),
    (Strategy::Adjacency, adjacency),
    (Strategy::TrapBlock, trap_block),
    (Strategy::DoubleOpenTrap, double_open_trap),
    (Strategy::ForkDetection, fork_detection),
];

/// Distance from the center column index to each owned position in the window.
fn center_control(ctx: &WindowContext<'_>) -> i32 {
    (0..ctx.len())
        .filter(|&i| ctx.is(i, ctx.own))
        .map(|i| ctx.center.abs_diff(i) as i32)
        .sum()
}

// With a single owned cell both ends can only match when the window has
// length one, so for connect >= 2 this never fires.
fn edge_trap(ctx: &WindowContext<'_>) -> i32 {
    let last = ctx.len().saturating_sub(1);
    if ctx.own_count == 1
        && ctx.empty_count == last
        && ctx.is(0, ctx.own)
        && ctx.is(last, ctx.own)
    {
        10
    } else {
        0
    }
}

/// Every position counts its own-mark neighbours, whatever the position itself holds.
fn adjacency(ctx: &WindowContext<'_>) -> i32 {
    let len = ctx.len();
    let own = ctx.own;
    let mut score = 0;
    for i in 0..len {
        if i > 0 && ctx.is(i - 1, own) {
            score += 1;
        }
        if i + 1 < len && ctx.is(i + 1, own) {
            score += 1;
        }
        if i + 2 < len && ctx.is(i + 2, own) {
            score += 1;
        }
        if i >= 2 && ctx.is(i - 2, own) {
            score += 1;
        }
        if i % 2 == 0 && ctx.is((i + 2) % len, own) {
            score += 1;
        }
    }
    score
}

/// Count of the two overlapping `X _ X _` sub-patterns held by `mark`: outer
/// cells `s` and `s + 2`, with `s + 1` and the wrapped `s + 3` empty.
fn gap_patterns(ctx: &WindowContext<'_>, mark: Mark) -> i32 {
    let len = ctx.len();
    if len < 4 {
        return 0;
    }
    (0..2)
        .filter(|&s| {
            ctx.is(s, mark)
                && ctx.is(s + 2, mark)
                && ctx.is(s + 1, Mark::Empty)
                && ctx.is((s + 3) % len, Mark::Empty)
        })
        .count() as i32
}

fn trap_block(ctx: &WindowContext<'_>) -> i32 {
    -8 * gap_patterns(ctx, ctx.opponent)
}

fn double_open_trap(ctx: &WindowContext<'_>) -> i32 {
    10 * gap_patterns(ctx, ctx.own)
}

// Same condition for every window orientation.
fn fork_detection(ctx: &WindowContext<'_>) -> i32 {
    match (ctx.own_count, ctx.opponent_count, ctx.empty_count) {
        (2, 1, 1) | (1, 2, 1) => 10,
        _ => 0,
    }
}

/// Set of enabled strategies, serialized as a list of names.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Strategy>", into = "Vec<Strategy>")]
pub struct StrategySet(u8);

impl StrategySet {
    pub fn empty() -> Self {
        StrategySet(0)
    }

    pub fn all() -> Self {
        Strategy::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, strategy: Strategy) {
        self.0 |= strategy.bit();
    }

    pub fn remove(&mut self, strategy: Strategy) {
        self.0 &= !strategy.bit();
    }

    pub fn contains(&self, strategy: Strategy) -> bool {
        self.0 & strategy.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Strategy> + '_ {
        Strategy::ALL.into_iter().filter(|&s| self.contains(s))
    }

    /// Sum of every enabled strategy's contribution for one window.
    pub fn score(&self, ctx: &WindowContext<'_>) -> i32 {
        STRATEGY_TABLE
            .iter()
            .filter(|(strategy, _)| self.contains(*strategy))
            .map(|(_, scorer)| scorer(ctx))
            .sum()
    }
}

impl FromIterator<Strategy> for StrategySet {
    fn from_iter<I: IntoIterator<Item = Strategy>>(iter: I) -> Self {
        let mut set = StrategySet::empty();
        for strategy in iter {
            set.insert(strategy);
        }
        set
    }
}

impl From<Vec<Strategy>> for StrategySet {
    fn from(strategies: Vec<Strategy>) -> Self {
        strategies.into_iter().collect()
    }
}

impl From<StrategySet> for Vec<Strategy> {
    fn from(set: StrategySet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Debug for StrategySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Grid};

    /// Score the bottom-row horizontal window starting at column 0 for Red.
    fn score_bottom(pattern: &str, scorer: WindowScorer) -> i32 {
        let rows = [".......", ".......", ".......", ".......", ".......", pattern];
        let grid = Grid::from_rows(&rows, 4);
        let window = grid
            .windows()
            .find(|w| w.direction() == Direction::Horizontal && w.origin() == (5, 0))
            .unwrap();
        let ctx = WindowContext::new(window, Mark::Red, Mark::Yellow, grid.center_col());
        scorer(&ctx)
    }

    #[test]
    fn test_every_strategy_has_one_table_entry() {
        for strategy in Strategy::ALL {
            let entries = STRATEGY_TABLE.iter().filter(|(s, _)| *s == strategy).count();
            assert_eq!(entries, 1, "{strategy} should appear exactly once");
        }
    }

    #[test]
    fn test_center_control() {
        // center is 3; owned positions 0 and 2 contribute 3 + 1
        assert_eq!(score_bottom("R.RY...", center_control), 4);
        assert_eq!(score_bottom("...R...", center_control), 0);
        assert_eq!(score_bottom("YYYY...", center_control), 0);
    }

    #[test]
    fn test_edge_trap_never_fires_for_four_cell_windows() {
        assert_eq!(score_bottom("R......", edge_trap), 0);
        assert_eq!(score_bottom("...R...", edge_trap), 0);
        assert_eq!(score_bottom("R..R...", edge_trap), 0);
    }

    #[test]
    fn test_adjacency() {
        assert_eq!(score_bottom(".......", adjacency), 0);
        // owned at 0 and 1:
        // i=0: right +1, even-wrap (2) no -> 1
        // i=1: left +1 -> 1
        // i=2: behind two (0) +1, even-wrap (0) +1, left (1) +1 -> 3
        // i=3: behind two (1) +1 -> 1
        assert_eq!(score_bottom("RR.....", adjacency), 6);
    }

    #[test]
    fn test_adjacency_counts_even_wrap() {
        // owned at 2 only:
        // i=0: two ahead +1, even-wrap (2) +1 -> 2
        // i=1: right +1 -> 1
        // i=2: even-wrap (0) no -> 0
        // i=3: left +1 -> 1
        assert_eq!(score_bottom("..R....", adjacency), 4);
    }

    #[test]
    fn test_trap_block() {
        assert_eq!(score_bottom("Y.Y....", trap_block), -8);
        assert_eq!(score_bottom(".Y.Y...", trap_block), -8);
        assert_eq!(score_bottom("YY.Y...", trap_block), 0);
        assert_eq!(score_bottom("R.R....", trap_block), 0);
    }

    #[test]
    fn test_double_open_trap() {
        assert_eq!(score_bottom("R.R....", double_open_trap), 10);
        assert_eq!(score_bottom(".R.R...", double_open_trap), 10);
        assert_eq!(score_bottom("R.RR...", double_open_trap), 0);
    }

    #[test]
    fn test_fork_detection() {
        assert_eq!(score_bottom("RRY....", fork_detection), 10);
        assert_eq!(score_bottom("RYY....", fork_detection), 10);
        assert_eq!(score_bottom("RRR....", fork_detection), 0);
        assert_eq!(score_bottom("RR.....", fork_detection), 0);
    }

    #[test]
    fn test_set_operations() {
        let mut set = StrategySet::empty();
        assert!(set.is_empty());
        set.insert(Strategy::Adjacency);
        set.insert(Strategy::ForkDetection);
        set.insert(Strategy::Adjacency);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Strategy::ForkDetection));
        set.remove(Strategy::ForkDetection);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Strategy::Adjacency]);
        assert_eq!(StrategySet::all().len(), 6);
    }

    #[test]
    fn test_set_score_sums_enabled_entries() {
        let rows = [".......", ".......", ".......", ".......", ".......", "R.R...."];
        let grid = Grid::from_rows(&rows, 4);
        let window = grid
            .windows()
            .find(|w| w.direction() == Direction::Horizontal && w.origin() == (5, 0))
            .unwrap();
        let ctx = WindowContext::new(window, Mark::Red, Mark::Yellow, grid.center_col());

        let set: StrategySet = [Strategy::DoubleOpenTrap, Strategy::CenterControl]
            .into_iter()
            .collect();
        assert_eq!(set.score(&ctx), double_open_trap(&ctx) + center_control(&ctx));
        assert_eq!(StrategySet::empty().score(&ctx), 0);
    }

    #[test]
    fn test_set_serializes_as_names() {
        #[derive(Serialize, Deserialize)]
        struct Holder {
            strategies: StrategySet,
        }
        let holder: Holder =
            toml::from_str(r#"strategies = ["trap_block", "center_control"]"#).unwrap();
        assert!(holder.strategies.contains(Strategy::TrapBlock));
        assert!(holder.strategies.contains(Strategy::CenterControl));
        assert_eq!(holder.strategies.len(), 2);

        let out = toml::to_string(&holder).unwrap();
        assert!(out.contains("center_control"));
    }
}
