use rand::Rng;

use crate::ai::{Agent, SearchEngine};
use crate::config::{AgentConfig, BoardConfig};
use crate::error::MoveError;

use super::{Grid, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MatchOutcome {
    Winner(Side),
    Draw,
}

/// Observable state of a match after each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Finished(MatchOutcome),
}

/// A single match: the authoritative grid, both agents and whose turn it is.
#[derive(Debug, Clone)]
pub struct Match {
    grid: Grid,
    /// In configuration order: player one, then player two.
    agents: [Agent; 2],
    to_move: usize,
    outcome: Option<MatchOutcome>,
    history: Vec<usize>,
}

impl Match {
    /// Start a match with randomized side assignment and first mover.
    pub fn new<R: Rng + ?Sized>(
        board: &BoardConfig,
        players: [&AgentConfig; 2],
        rng: &mut R,
    ) -> Self {
        let (one, two) = if rng.random_bool(0.5) {
            (Side::Red, Side::Yellow)
        } else {
            (Side::Yellow, Side::Red)
        };
        let agents = [
            Agent::from_config(one, players[0]),
            Agent::from_config(two, players[1]),
        ];
        let first = rng.random_range(0..2);
        let grid = Grid::new(board.rows, board.cols, board.connect);

        log::info!(
            "new match {}x{} connect {}: player one {} ({}), player two {} ({}), {} moves first",
            board.rows,
            board.cols,
            board.connect,
            one.name(),
            agents[0].label(),
            two.name(),
            agents[1].label(),
            agents[first].side().name(),
        );

        Match::with_agents(grid, agents, first)
    }

    /// Start a match with fixed agents. `first` indexes `agents`.
    pub fn with_agents(grid: Grid, agents: [Agent; 2], first: usize) -> Self {
        debug_assert_ne!(agents[0].side(), agents[1].side());
        Match {
            grid,
            agents,
            to_move: first % 2,
            outcome: None,
            history: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agents(&self) -> &[Agent; 2] {
        &self.agents
    }

    pub fn agent_for(&self, side: Side) -> &Agent {
        if self.agents[0].side() == side {
            &self.agents[0]
        } else {
            &self.agents[1]
        }
    }

    /// Agent whose turn it is.
    pub fn current_agent(&self) -> &Agent {
        &self.agents[self.to_move]
    }

    /// Agent waiting for the current agent to move.
    pub fn waiting_agent(&self) -> &Agent {
        &self.agents[1 - self.to_move]
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn status(&self) -> MatchStatus {
        match self.outcome {
            Some(outcome) => MatchStatus::Finished(outcome),
            None => MatchStatus::InProgress,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Play `col` for the current agent.
    pub fn play(&mut self, col: usize) -> Result<MatchStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if col >= self.grid.cols() {
            return Err(MoveError::InvalidColumn(col));
        }
        if !self.grid.is_valid_move(col) {
            return Err(MoveError::ColumnFull(col));
        }

        let side = self.current_agent().side();
        self.grid.apply_move(col, side);
        self.history.push(col);

        if self.grid.has_won(side) {
            self.outcome = Some(MatchOutcome::Winner(side));
        } else if self.grid.is_full() {
            self.outcome = Some(MatchOutcome::Draw);
        } else {
            self.to_move = 1 - self.to_move;
        }

        if let Some(outcome) = self.outcome {
            log::info!("match over after {} moves: {:?}\n{}", self.history.len(), outcome, self.grid);
        }
        Ok(self.status())
    }

    /// Column the engine picks for the current agent, if it is automated and
    /// the match is still running.
    pub fn automated_move<R: Rng + ?Sized>(
        &self,
        engine: &mut SearchEngine,
        rng: &mut R,
    ) -> Option<usize> {
        if self.is_over() || !self.current_agent().is_automated() {
            return None;
        }
        engine.choose_move(&self.grid, self.current_agent(), self.waiting_agent(), rng)
    }
}
