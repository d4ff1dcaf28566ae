//! Automated play: agents, the window heuristic with its optional
//! strategies, and the minimax search.

mod agent;
mod evaluator;
mod minimax;
mod strategy;

pub use agent::{Agent, Controller, Evaluation};
pub use evaluator::{Heuristic, WindowHeuristic, WIN_SCORE};
pub use minimax::{SearchEngine, DEFAULT_DEPTH};
pub use strategy::{Strategy, StrategySet, WindowContext, WindowScorer, STRATEGY_TABLE};
