//! Grid model, line scanning and the match turn loop.

mod grid;
mod scan;
mod side;
mod state;

pub use grid::{Grid, Mark, DEFAULT_COLS, DEFAULT_CONNECT, DEFAULT_ROWS};
pub use scan::{Direction, Window};
pub use side::Side;
pub use state::{Match, MatchOutcome, MatchStatus};
