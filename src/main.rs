use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use connect_four_minimax::config::{AgentConfig, AppConfig};
use connect_four_minimax::scoreboard::Scoreboard;
use connect_four_minimax::ui::App;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four against a minimax engine.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Let two computer players play each other
    #[arg(long)]
    watch: bool,

    /// Seed for side assignment, turn order and tie-breaks
    #[arg(long)]
    seed: Option<u64>,

    /// Override scoreboard file
    #[arg(long)]
    scoreboard: Option<PathBuf>,

    /// Write log output to this file (level from RUST_LOG)
    #[arg(long, default_value = "connect-four.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(path) = cli.scoreboard {
        config.scoreboard.path = path;
    }
    if cli.watch {
        for player in [&mut config.player_one, &mut config.player_two] {
            if !player.automated {
                *player = AgentConfig::computer();
            }
        }
    }
    config.validate().context("validating configuration")?;

    let scoreboard = Scoreboard::load_or_default(&config.scoreboard.path).with_context(|| {
        format!("loading scoreboard from {}", config.scoreboard.path.display())
    })?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut app = App::new(config, scoreboard, rng);
    run(&mut app).context("running terminal UI")?;

    let totals = app.scoreboard();
    println!(
        "Red: {}  Yellow: {}  Draws: {}",
        totals.red_wins, totals.yellow_wins, totals.draws
    );
    Ok(())
}

/// Log to a file only when RUST_LOG is set; the terminal belongs to the UI.
fn init_logging(cli: &Cli) -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create(&cli.log_file)
        .with_context(|| format!("creating log file {}", cli.log_file.display()))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
