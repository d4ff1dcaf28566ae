use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{backend::Backend, Terminal};

use crate::ai::SearchEngine;
use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{Match, MatchOutcome, MatchStatus};
use crate::scoreboard::{OutcomeSink, Scoreboard};

/// Pause between frames while an automated agent is to move, so that
/// computer-vs-computer matches stay watchable.
const AUTOMATED_TURN_DELAY: Duration = Duration::from_millis(400);
const INPUT_POLL: Duration = Duration::from_millis(100);

pub struct App {
    config: AppConfig,
    game: Match,
    engine: SearchEngine,
    rng: StdRng,
    scoreboard: Scoreboard,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, scoreboard: Scoreboard, mut rng: StdRng) -> Self {
        let game = Match::new(&config.board, config.players(), &mut rng);
        let engine = SearchEngine::new(config.search.depth);
        let selected_column = game.grid().center_col();
        App {
            config,
            game,
            engine,
            rng,
            scoreboard,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            if self.automated_turn() {
                self.handle_events(AUTOMATED_TURN_DELAY)?;
                if !self.should_quit {
                    self.play_automated();
                }
            } else {
                self.handle_events(INPUT_POLL)?;
            }
        }
        Ok(())
    }

    fn automated_turn(&self) -> bool {
        !self.game.is_over() && self.game.current_agent().is_automated()
    }

    /// Handle keyboard events
    fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game.grid().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.game = Match::new(&self.config.board, self.config.players(), &mut self.rng);
        self.selected_column = self.game.grid().center_col();
        self.message = Some("New match started!".to_string());
    }

    /// Drop the human player's piece in the selected column
    fn drop_piece(&mut self) {
        if self.game.is_over() {
            self.message = Some("Match over! Press 'r' to start another.".to_string());
            return;
        }
        if self.game.current_agent().is_automated() {
            self.message = Some("Wait for the computer to move.".to_string());
            return;
        }
        self.message = None;
        self.play(self.selected_column);
    }

    fn play_automated(&mut self) {
        if let Some(col) = self.game.automated_move(&mut self.engine, &mut self.rng) {
            self.play(col);
        }
    }

    fn play(&mut self, col: usize) {
        match self.game.play(col) {
            Ok(MatchStatus::InProgress) => {}
            Ok(MatchStatus::Finished(outcome)) => self.finish(outcome),
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Match is over!".to_string());
            }
        }
    }

    fn finish(&mut self, outcome: MatchOutcome) {
        self.scoreboard.record_outcome(outcome);
        let mut message = match outcome {
            MatchOutcome::Winner(side) => {
                format!("{} ({}) wins!", side.name(), self.game.agent_for(side).label())
            }
            MatchOutcome::Draw => "It's a draw!".to_string(),
        };
        if let Err(e) = self.scoreboard.save(&self.config.scoreboard.path) {
            log::error!("failed to save scoreboard: {e}");
            message.push_str(" (scoreboard not saved)");
        }
        self.message = Some(message);
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            &self.scoreboard,
            self.selected_column,
            &self.message,
        );
    }
}
