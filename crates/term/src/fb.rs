//! Framebuffer and style types for terminal rendering.

use crate::types::{Color, BLACK, WHITE};

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl CellStyle {
    /// Solid cell of one color
    pub const fn solid(color: Color) -> Self {
        Self {
            fg: color,
            bg: color,
            bold: false,
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: WHITE,
            bg: BLACK,
            bold: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Axis-aligned block of terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Row-major grid of styled characters.
///
/// Writes outside the grid are clipped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One terminal row
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Blank every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` left to right from `(x, y)`, cut off at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (cx, ch) in (x..self.width).zip(s.chars()) {
            self.put_char(cx, y, ch, style);
        }
    }

    /// Fill `area` (clipped to the grid) with one cell.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        let right = area.x.saturating_add(area.width).min(self.width);
        let bottom = area.y.saturating_add(area.height).min(self.height);
        for y in area.y..bottom {
            for x in area.x..right {
                self.set(x, y, cell);
            }
        }
    }
}
