//! Attempt grid storage
//!
//! Rows are reference counted. Cloning a grid shares every row, and writing
//! a cell copies only the row being written when it is shared, so snapshots
//! taken by a front end never observe later edits.

use std::sync::Arc;

/// A grid cell: `None` when empty, otherwise a lowercase ASCII letter
pub type Cell = Option<u8>;

/// Fixed-size matrix of guessed letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Arc<Vec<Cell>>>,
    width: usize,
}

impl Grid {
    /// An empty grid of `height` rows by `width` cells
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        let empty = Arc::new(vec![None; width]);
        Self {
            rows: vec![empty; height],
            width,
        }
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Cell contents, `None` for empty or out-of-range cells
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.rows.get(row).and_then(|cells| cells.get(col).copied().flatten())
    }

    /// All cells of a row, empty slice when out of range
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        self.rows.get(row).map_or(&[][..], |cells| cells.as_slice())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(|cells| cells.as_slice())
    }

    /// Letters of a row if every cell is filled
    #[must_use]
    pub fn row_letters(&self, row: usize) -> Option<Vec<u8>> {
        let cells = self.rows.get(row)?;
        cells.iter().copied().collect()
    }

    /// The row as text, with `_` for empty cells
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.row(row)
            .iter()
            .map(|cell| cell.map_or('_', char::from))
            .collect()
    }

    #[must_use]
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row(row).iter().all(Option::is_none)
    }

    /// Write a cell, copying the row first if a snapshot still shares it
    ///
    /// Out-of-range writes are ignored.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Cell) {
        if col >= self.width {
            return;
        }
        if let Some(cells) = self.rows.get_mut(row) {
            Arc::make_mut(cells)[col] = value;
        }
    }

    /// Whether two grids share storage for a row
    #[must_use]
    pub fn shares_row_with(&self, other: &Self, row: usize) -> bool {
        match (self.rows.get(row), other.rows.get(row)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(6, 5);
        assert_eq!(grid.height(), 6);
        assert_eq!(grid.width(), 5);
        assert!(grid.rows().all(|row| row.len() == 5 && row.iter().all(Option::is_none)));
    }

    #[test]
    fn set_writes_only_one_row() {
        let mut grid = Grid::new(3, 2);
        grid.set(1, 0, Some(b'a'));
        assert_eq!(grid.cell(1, 0), Some(b'a'));
        assert!(grid.is_row_empty(0));
        assert!(grid.is_row_empty(2));
        assert_eq!(grid.row_text(1), "a_");
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut grid = Grid::new(2, 2);
        grid.set(5, 0, Some(b'a'));
        grid.set(0, 5, Some(b'a'));
        assert_eq!(grid, Grid::new(2, 2));
        assert_eq!(grid.cell(9, 9), None);
        assert!(grid.row(9).is_empty());
    }

    #[test]
    fn row_letters_requires_full_row() {
        let mut grid = Grid::new(1, 2);
        grid.set(0, 0, Some(b'h'));
        assert_eq!(grid.row_letters(0), None);
        grid.set(0, 1, Some(b'i'));
        assert_eq!(grid.row_letters(0), Some(b"hi".to_vec()));
    }

    #[test]
    fn snapshot_is_copy_on_write() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, Some(b'x'));
        let snapshot = grid.clone();

        grid.set(1, 0, Some(b'y'));

        assert_eq!(snapshot.cell(1, 0), None);
        assert_eq!(grid.cell(1, 0), Some(b'y'));
        assert!(grid.shares_row_with(&snapshot, 0));
        assert!(!grid.shares_row_with(&snapshot, 1));
    }
}
