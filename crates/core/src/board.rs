//! Board module - manages the game grid
//!
//! The board is a `rows x columns` grid where each cell holds a color; cells holding
//! the board's empty color are free. Uses a flat array for better cache locality.
//! Coordinates: `(row, col)` where row 0 is the top and col 0 is the left edge.
//! Negative rows lie above the board and are never stored.

use std::collections::HashMap;

use crate::block::Block;
use crate::types::{Color, Vector};

/// Positions mapped to the color drawn there
pub type CellMap = HashMap<Vector, Color>;

/// The game board - flat row-major storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: usize,
    columns: usize,
    empty: Color,
    /// Flat array of cells, row-major order (row * columns + col)
    cells: Vec<Color>,
}

impl Board {
    /// Create a new board with every cell set to `empty`
    pub fn new(rows: usize, columns: usize, empty: Color) -> Self {
        Self {
            rows,
            columns,
            empty,
            cells: vec![empty; rows * columns],
        }
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, cell: Vector) -> Option<usize> {
        if cell.row < 0 || cell.col < 0 {
            return None;
        }
        let (row, col) = (cell.row as usize, cell.col as usize);
        if row >= self.rows || col >= self.columns {
            return None;
        }
        Some(row * self.columns + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Color of an empty cell
    pub fn empty_color(&self) -> Color {
        self.empty
    }

    /// Get cell color, `None` if out of bounds
    pub fn get(&self, cell: Vector) -> Option<Color> {
        self.index(cell).map(|idx| self.cells[idx])
    }

    /// Set cell color.
    /// Returns false if out of bounds
    pub fn set(&mut self, cell: Vector, color: Color) -> bool {
        match self.index(cell) {
            Some(idx) => {
                self.cells[idx] = color;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the grid
    pub fn in_bounds(&self, cell: Vector) -> bool {
        self.index(cell).is_some()
    }

    /// Check if position is occupied (within bounds and not empty)
    pub fn is_occupied(&self, cell: Vector) -> bool {
        matches!(self.get(cell), Some(color) if color != self.empty)
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        let start = row * self.columns;
        self.cells[start..start + self.columns]
            .iter()
            .all(|&c| c != self.empty)
    }

    /// Write the block's color into every cell it covers.
    ///
    /// The caller guarantees the block is in bounds; stray points are skipped.
    pub fn freeze(&mut self, block: &Block) {
        for &point in block.points() {
            self.set(point, block.color());
        }
    }

    /// Remove every full row, shifting the rows above it down.
    ///
    /// Single bottom-to-top pass with a write cursor, so adjacent full rows
    /// are all removed. Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.columns;
        let mut write_row = self.rows;
        let mut cleared = 0;

        for read_row in (0..self.rows).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        // Fresh empty rows at the top.
        let empty = self.empty;
        self.cells[..write_row * width].fill(empty);

        cleared
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != self.empty).count()
    }

    /// One row as a slice of colors
    pub fn row(&self, row: usize) -> Option<&[Color]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&self.cells[start..start + self.columns])
    }

    /// Every cell of the grid keyed by position
    pub fn cells(&self) -> CellMap {
        let mut out = CellMap::with_capacity(self.cells.len());
        for row in 0..self.rows {
            for col in 0..self.columns {
                out.insert(
                    Vector::new(row as i32, col as i32),
                    self.cells[row * self.columns + col],
                );
            }
        }
        out
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        let empty = self.empty;
        self.cells.fill(empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BlockKind, BLACK, RED};

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(16, 10, BLACK);
        assert_eq!(board.index(Vector::new(0, 0)), Some(0));
        assert_eq!(board.index(Vector::new(0, 9)), Some(9));
        assert_eq!(board.index(Vector::new(1, 0)), Some(10));
        assert_eq!(board.index(Vector::new(15, 9)), Some(159));
        assert_eq!(board.index(Vector::new(-1, 0)), None);
        assert_eq!(board.index(Vector::new(0, 10)), None);
        assert_eq!(board.index(Vector::new(16, 0)), None);
    }

    #[test]
    fn test_negative_rows_never_occupied() {
        let mut board = Board::new(4, 4, BLACK);
        assert!(!board.set(Vector::new(-1, 0), RED));
        assert!(!board.is_occupied(Vector::new(-1, 0)));
    }

    #[test]
    fn test_clear_adjacent_full_rows() {
        let mut board = Board::new(4, 3, BLACK);
        for row in 2..4 {
            for col in 0..3 {
                board.set(Vector::new(row, col), RED);
            }
        }
        board.set(Vector::new(1, 1), RED);

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.filled_count(), 1);
        assert!(board.is_occupied(Vector::new(3, 1)));
    }

    #[test]
    fn test_freeze_skips_out_of_bounds() {
        let mut board = Board::new(4, 4, BLACK);
        // S block anchored at the origin has two cells in row -1.
        let block = Block::of_kind(BlockKind::S);
        board.freeze(&block);
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_cells_covers_grid() {
        let board = Board::new(3, 5, BLACK);
        let cells = board.cells();
        assert_eq!(cells.len(), 15);
        assert!(cells.values().all(|&c| c == BLACK));
    }
}
