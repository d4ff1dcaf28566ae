use std::fmt;

use super::side::Side;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_CONNECT: usize = 4;

/// Content of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Mark {
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// The side holding this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Mark::Empty => None,
            Mark::Red => Some(Side::Red),
            Mark::Yellow => Some(Side::Yellow),
        }
    }

    fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Red => 'R',
            Mark::Yellow => 'Y',
        }
    }
}

/// Fixed-size playing grid stored row-major, row 0 at the top.
///
/// Cloning is a flat copy of the cell vector, which is what the search
/// relies on to give every explored branch its own independent grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Mark>,
    rows: usize,
    cols: usize,
    connect: usize,
}

impl Grid {
    /// Create an empty grid. `connect` is the run length that wins.
    pub fn new(rows: usize, cols: usize, connect: usize) -> Self {
        Grid {
            cells: vec![Mark::Empty; rows * cols],
            rows,
            cols,
            connect,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn connect(&self) -> usize {
        self.connect
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `rows - 1` is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.cells[row * self.cols + col]
    }

    /// Like [`Grid::get`] but tolerates out-of-range coordinates.
    pub fn get_signed(&self, row: isize, col: isize) -> Option<Mark> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.get(row, col))
    }

    /// True iff `col` is on the grid and its top cell is still empty.
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < self.cols && self.cells[col].is_empty()
    }

    /// Columns that currently accept a piece, left to right.
    pub fn valid_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cols).filter(move |&col| self.is_valid_move(col))
    }

    /// Drop a piece for `side` into `col`, returning the row where it landed.
    ///
    /// Placement is permissive: an out-of-range or full column leaves the
    /// grid untouched and yields `None`. Callers guard with
    /// [`Grid::is_valid_move`].
    pub fn apply_move(&mut self, col: usize, side: Side) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        for row in (0..self.rows).rev() {
            let idx = row * self.cols + col;
            if self.cells[idx].is_empty() {
                self.cells[idx] = side.to_mark();
                return Some(row);
            }
        }
        None
    }

    /// True iff every cell of the top row is occupied. Gravity fill means the
    /// rows below must already be full.
    pub fn is_full(&self) -> bool {
        self.cells[..self.cols].iter().all(|m| !m.is_empty())
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// Index of the center column, used by the center-control strategy.
    pub fn center_col(&self) -> usize {
        self.cols / 2
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str], connect: usize) -> Self {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut grid = Grid::new(rows.len(), cols, connect);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                grid.cells[row * cols + col] = match ch {
                    'R' => Mark::Red,
                    'Y' => Mark::Yellow,
                    _ => Mark::Empty,
                };
            }
        }
        grid
    }

    #[cfg(test)]
    pub(crate) fn rotated(&self) -> Self {
        let mut rotated = self.clone();
        rotated.cells.reverse();
        rotated
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_CONNECT)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.cols)
                .map(|col| self.get(row, col).symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::default();
        for row in 0..DEFAULT_ROWS {
            for col in 0..DEFAULT_COLS {
                assert_eq!(grid.get(row, col), Mark::Empty);
            }
        }
        assert_eq!(grid.filled(), 0);
        assert_eq!(grid.connect(), 4);
    }

    #[test]
    fn test_apply_move_stacks_from_bottom() {
        let mut grid = Grid::default();

        assert_eq!(grid.apply_move(3, Side::Red), Some(5));
        assert_eq!(grid.get(5, 3), Mark::Red);

        assert_eq!(grid.apply_move(3, Side::Yellow), Some(4));
        assert_eq!(grid.get(4, 3), Mark::Yellow);
    }

    #[test]
    fn test_column_becomes_invalid_when_full() {
        let mut grid = Grid::default();
        for _ in 0..DEFAULT_ROWS {
            assert!(grid.is_valid_move(0));
            grid.apply_move(0, Side::Red);
        }
        assert!(!grid.is_valid_move(0));
        assert!(grid.is_valid_move(1));
    }

    #[test]
    fn test_apply_move_on_full_column_is_noop() {
        let mut grid = Grid::default();
        for _ in 0..DEFAULT_ROWS {
            grid.apply_move(2, Side::Yellow);
        }
        let before = grid.clone();
        assert_eq!(grid.apply_move(2, Side::Red), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_out_of_range_column() {
        let mut grid = Grid::default();
        assert!(!grid.is_valid_move(7));
        assert!(!grid.is_valid_move(usize::MAX));
        assert_eq!(grid.apply_move(7, Side::Red), None);
        assert_eq!(grid.filled(), 0);
    }

    #[test]
    fn test_full_grid() {
        let mut grid = Grid::default();
        for col in 0..DEFAULT_COLS {
            assert!(!grid.is_full());
            for _ in 0..DEFAULT_ROWS {
                grid.apply_move(col, Side::Red);
            }
        }
        assert!(grid.is_full());
        assert_eq!(grid.valid_moves().count(), 0);
        assert_eq!(grid.filled(), DEFAULT_ROWS * DEFAULT_COLS);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut grid = Grid::default();
        grid.apply_move(0, Side::Red);
        let mut branch = grid.clone();
        branch.apply_move(0, Side::Yellow);
        assert_eq!(grid.get(4, 0), Mark::Empty);
        assert_eq!(branch.get(4, 0), Mark::Yellow);
    }

    #[test]
    fn test_custom_dimensions() {
        let mut grid = Grid::new(4, 5, 3);
        assert_eq!(grid.center_col(), 2);
        assert_eq!(grid.apply_move(4, Side::Red), Some(3));
        assert_eq!(grid.valid_moves().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(2, 3, 2);
        grid.apply_move(0, Side::Red);
        grid.apply_move(2, Side::Yellow);
        assert_eq!(grid.to_string(), "...\nR.Y\n");
    }

    #[test]
    fn test_get_signed_bounds() {
        let grid = Grid::default();
        assert_eq!(grid.get_signed(-1, 0), None);
        assert_eq!(grid.get_signed(0, 7), None);
        assert_eq!(grid.get_signed(5, 6), Some(Mark::Empty));
    }
}
