//! Terminal UI for playing matches: board view, move selection, and the
//! running scoreboard.

mod app;
mod game_view;

pub use app::App;
