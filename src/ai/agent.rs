use crate::config::AgentConfig;
use crate::game::Side;

use super::strategy::StrategySet;

/// How an automated agent scores positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Base window heuristic only.
    Base,
    /// Base heuristic plus the enabled strategies.
    Customized(StrategySet),
}

/// Who picks the moves for an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Columns come from outside the engine.
    Human,
    Automated(Evaluation),
}

/// One side of a match and how its moves are chosen. Fixed for the
/// duration of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    side: Side,
    controller: Controller,
}

impl Agent {
    pub fn new(side: Side, controller: Controller) -> Self {
        Agent { side, controller }
    }

    pub fn human(side: Side) -> Self {
        Agent::new(side, Controller::Human)
    }

    /// Automated agent using the base heuristic only.
    pub fn automated(side: Side) -> Self {
        Agent::new(side, Controller::Automated(Evaluation::Base))
    }

    /// Automated agent with customized evaluation.
    pub fn customized(side: Side, strategies: StrategySet) -> Self {
        Agent::new(side, Controller::Automated(Evaluation::Customized(strategies)))
    }

    /// Build an agent for `side` from its configuration entry.
    pub fn from_config(side: Side, config: &AgentConfig) -> Self {
        match (config.automated, config.customized) {
            (false, _) => Agent::human(side),
            (true, false) => Agent::automated(side),
            (true, true) => Agent::customized(side, config.strategies),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    pub fn is_automated(&self) -> bool {
        matches!(self.controller, Controller::Automated(_))
    }

    pub fn is_customized(&self) -> bool {
        matches!(
            self.controller,
            Controller::Automated(Evaluation::Customized(_))
        )
    }

    /// Strategies the evaluator applies for this agent. Always empty for
    /// human agents and for automated agents outside customized mode.
    pub fn enabled_strategies(&self) -> StrategySet {
        match self.controller {
            Controller::Automated(Evaluation::Customized(set)) => set,
            _ => StrategySet::empty(),
        }
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self.controller {
            Controller::Human => "Human",
            Controller::Automated(Evaluation::Base) => "Computer",
            Controller::Automated(Evaluation::Customized(_)) => "Computer (custom)",
        }
    }
}
