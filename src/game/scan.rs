//! Line scanning over a [`Grid`]: run detection for wins and fixed-length
//! window extraction for the position evaluator.

use super::grid::{Grid, Mark};
use super::side::Side;

/// The four line orientations on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right (`\`).
    Diagonal,
    /// Bottom-left to top-right (`/`).
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Row and column step between consecutive cells of a window.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (-1, 1),
        }
    }
}

/// Probe directions for run detection: right, down, down-right, down-left.
const RUN_PROBES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A `connect`-long slice of the grid along one direction.
///
/// Windows borrow the grid and read cells on demand; nothing is copied.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    grid: &'a Grid,
    row: usize,
    col: usize,
    direction: Direction,
}

impl<'a> Window<'a> {
    pub fn len(&self) -> usize {
        self.grid.connect()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Grid coordinates of the first cell.
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Mark at position `i` within the window.
    pub fn get(&self, i: usize) -> Mark {
        let (dr, dc) = self.direction.step();
        let row = self.row as isize + dr * i as isize;
        let col = self.col as isize + dc * i as isize;
        self.grid.get(row as usize, col as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = Mark> + 'a {
        let window = *self;
        (0..window.len()).map(move |i| window.get(i))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.iter().filter(|&m| m == mark).count()
    }
}

/// Number of window start positions along an axis of length `len`.
fn span(len: usize, connect: usize) -> usize {
    (len + 1).saturating_sub(connect)
}

impl Grid {
    /// True iff `side` owns `connect` consecutive cells in any direction.
    pub fn has_run(&self, side: Side, connect: usize) -> bool {
        if connect == 0 {
            return false;
        }
        let mark = side.to_mark();
        let reach = connect as isize - 1;

        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if self.get(row, col) != mark {
                    continue;
                }
                let (r, c) = (row as isize, col as isize);
                for (dr, dc) in RUN_PROBES {
                    if self.get_signed(r + dr * reach, c + dc * reach).is_none() {
                        continue;
                    }
                    let owned = (1..=reach)
                        .all(|i| self.get((r + dr * i) as usize, (c + dc * i) as usize) == mark);
                    if owned {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Shorthand for [`Grid::has_run`] with the grid's own run length.
    pub fn has_won(&self, side: Side) -> bool {
        self.has_run(side, self.connect())
    }

    /// Every `connect`-long window: horizontal, vertical, `\` then `/`.
    ///
    /// The sequence is lazy and recomputed on each call.
    pub fn windows(&self) -> impl Iterator<Item = Window<'_>> + '_ {
        let k = self.connect();
        Direction::ALL.into_iter().flat_map(move |direction| {
            let (rows, cols) = match direction {
                Direction::Horizontal => (0..self.rows(), 0..span(self.cols(), k)),
                Direction::Vertical => (0..span(self.rows(), k), 0..self.cols()),
                Direction::Diagonal => (0..span(self.rows(), k), 0..span(self.cols(), k)),
                // `/` windows start at their bottom-left cell
                Direction::AntiDiagonal => {
                    let n = span(self.rows(), k);
                    let offset = k.saturating_sub(1);
                    (offset..offset + n, 0..span(self.cols(), k))
                }
            };
            rows.flat_map(move |row| {
                cols.clone().map(move |col| Window {
                    grid: self,
                    row,
                    col,
                    direction,
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_grid(rng: &mut StdRng, rows: usize, cols: usize, connect: usize) -> Grid {
        let lines: Vec<String> = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| match rng.random_range(0..3) {
                        0 => '.',
                        1 => 'R',
                        _ => 'Y',
                    })
                    .collect()
            })
            .collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        Grid::from_rows(&refs, connect)
    }

    fn count_by_direction(grid: &Grid, direction: Direction) -> usize {
        grid.windows().filter(|w| w.direction() == direction).count()
    }

    #[test]
    fn test_horizontal_run() {
        let grid = Grid::from_rows(
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
                "...RRRR",
            ],
            4,
        );
        assert!(grid.has_run(Side::Red, 4));
        assert!(!grid.has_run(Side::Yellow, 4));
    }

    #[test]
    fn test_vertical_run() {
        let grid = Grid::from_rows(
            &[
                ".......",
                ".......",
                "Y......",
                "Y......",
                "Y......",
                "Y......",
            ],
            4,
        );
        assert!(grid.has_won(Side::Yellow));
    }

    #[test]
    fn test_diagonal_runs() {
        let down_right = Grid::from_rows(
            &[
                ".......",
                ".......",
                "...R...",
                "....R..",
                ".....R.",
                "......R",
            ],
            4,
        );
        assert!(down_right.has_run(Side::Red, 4));

        let down_left = Grid::from_rows(
            &[
                ".......",
                ".......",
                "...Y...",
                "..Y....",
                ".Y.....",
                "Y......",
            ],
            4,
        );
        assert!(down_left.has_run(Side::Yellow, 4));
    }

    #[test]
    fn test_three_is_not_a_run() {
        let grid = Grid::from_rows(
            &[
                ".......",
                ".......",
                ".......",
                "R......",
                "R......",
                "RRR.R..",
            ],
            4,
        );
        assert!(!grid.has_run(Side::Red, 4));
        assert!(grid.has_run(Side::Red, 3));
    }

    #[test]
    fn test_probe_stays_in_bounds_at_edges() {
        // Pieces against every edge must not make the probe read off-grid.
        let grid = Grid::from_rows(
            &[
                "RRR...R",
                "......R",
                "......R",
                "R......",
                "R......",
                "RRR.RRR",
            ],
            4,
        );
        assert!(!grid.has_run(Side::Red, 4));
    }

    #[test]
    fn test_empty_connect_never_matches() {
        let grid = Grid::default();
        assert!(!grid.has_run(Side::Red, 0));
    }

    #[test]
    fn test_has_run_symmetric_under_rotation() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let grid = random_grid(&mut rng, 6, 7, 4);
            let rotated = grid.rotated();
            for side in Side::BOTH {
                for connect in 2..=5 {
                    assert_eq!(
                        grid.has_run(side, connect),
                        rotated.has_run(side, connect),
                        "rotation changed run detection for {side:?}, connect {connect}:\n{grid}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_window_counts_standard_grid() {
        let grid = Grid::default();
        assert_eq!(count_by_direction(&grid, Direction::Horizontal), 24);
        assert_eq!(count_by_direction(&grid, Direction::Vertical), 21);
        assert_eq!(count_by_direction(&grid, Direction::Diagonal), 12);
        assert_eq!(count_by_direction(&grid, Direction::AntiDiagonal), 12);
        assert_eq!(grid.windows().count(), 69);
    }

    #[test]
    fn test_window_counts_generalize_to_connect() {
        let grid = Grid::new(5, 8, 3);
        assert_eq!(count_by_direction(&grid, Direction::Horizontal), 5 * 6);
        assert_eq!(count_by_direction(&grid, Direction::Vertical), 8 * 3);
        assert_eq!(count_by_direction(&grid, Direction::Diagonal), 3 * 6);
        assert_eq!(count_by_direction(&grid, Direction::AntiDiagonal), 3 * 6);
        assert!(grid.windows().all(|w| w.len() == 3));
    }

    #[test]
    fn test_no_windows_when_connect_exceeds_grid() {
        let grid = Grid::new(3, 3, 4);
        assert_eq!(grid.windows().count(), 0);
    }

    #[test]
    fn test_windows_are_restartable() {
        let mut grid = Grid::default();
        let before = grid.windows().filter(|w| w.count(Mark::Red) > 0).count();
        assert_eq!(before, 0);
        grid.apply_move(3, Side::Red);
        let after = grid.windows().filter(|w| w.count(Mark::Red) > 0).count();
        // bottom cell of column 3: 4 horizontal, 1 vertical, 1 per diagonal
        assert_eq!(after, 7);
        assert_eq!(grid.windows().count(), 69);
    }

    #[test]
    fn test_window_cell_order() {
        let grid = Grid::from_rows(
            &[
                ".......",
                ".......",
                "...Y...",
                "..R....",
                ".Y.....",
                "R......",
            ],
            4,
        );
        let anti = grid
            .windows()
            .find(|w| w.direction() == Direction::AntiDiagonal && w.origin() == (5, 0))
            .unwrap();
        let marks: Vec<Mark> = anti.iter().collect();
        assert_eq!(marks, vec![Mark::Red, Mark::Yellow, Mark::Red, Mark::Yellow]);
        assert_eq!(anti.count(Mark::Red), 2);
        assert_eq!(anti.get(3), Mark::Yellow);
    }

    #[test]
    fn test_every_window_stays_on_grid() {
        let grid = Grid::new(6, 7, 4);
        for window in grid.windows() {
            let (dr, dc) = window.direction().step();
            let (row, col) = window.origin();
            let last_row = row as isize + dr * (window.len() as isize - 1);
            let last_col = col as isize + dc * (window.len() as isize - 1);
            assert!(grid.get_signed(last_row, last_col).is_some());
        }
    }
}
