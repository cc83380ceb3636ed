//! Canvas: maps board cells and status text into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::CellMap;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rect};
use crate::types::{BLACK, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, WHITE};

/// Size of one board cell in terminal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

impl CellSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT)
    }
}

/// Glyph used for board cells
const CELL_GLYPH: char = '█';

/// A board-sized drawing area measured in cells.
#[derive(Debug, Clone)]
pub struct Canvas {
    rows: usize,
    columns: usize,
    cell: CellSize,
    fb: FrameBuffer,
}

impl Canvas {
    pub fn new(rows: usize, columns: usize, cell: CellSize) -> Self {
        let width = (columns as u16).saturating_mul(cell.width);
        let height = (rows as u16).saturating_mul(cell.height);
        Self {
            rows,
            columns,
            cell,
            fb: FrameBuffer::new(width, height),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    /// Draw each cell as a `cell.width x cell.height` rectangle.
    ///
    /// Cells outside the board (e.g. a block still above the top) are skipped.
    pub fn draw_cells(&mut self, cells: &CellMap) {
        for (pos, &color) in cells {
            if pos.row < 0 || pos.col < 0 {
                continue;
            }
            let (row, col) = (pos.row as usize, pos.col as usize);
            if row >= self.rows || col >= self.columns {
                continue;
            }
            let area = Rect {
                x: (col as u16).saturating_mul(self.cell.width),
                y: (row as u16).saturating_mul(self.cell.height),
                width: self.cell.width,
                height: self.cell.height,
            };
            let cell = Cell {
                ch: CELL_GLYPH,
                style: CellStyle::solid(color),
            };
            self.fb.fill(area, cell);
        }
    }

    /// Overlay text, one centered line per input line.
    pub fn show_message(&mut self, text: &str) {
        let style = CellStyle {
            fg: WHITE,
            bg: BLACK,
            bold: true,
        };
        let lines: Vec<&str> = text.lines().collect();
        let top = (self.fb.height() / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            let w = line.chars().count() as u16;
            let x = self.fb.width().saturating_sub(w) / 2;
            self.fb.put_str(x, top.saturating_add(i as u16), line, style);
        }
    }

    /// Blank the drawing area for the next frame
    pub fn clear(&mut self) {
        self.fb.clear();
    }
}
