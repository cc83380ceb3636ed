//! TerminalSurface: hosts the game in a real terminal.

use anyhow::Result;

use crate::canvas::{Canvas, CellSize};
use crate::core::{CellMap, Surface};
use crate::renderer::TerminalRenderer;

/// Canvas plus renderer; presenting a frame flushes the canvas and blanks it.
pub struct TerminalSurface {
    canvas: Canvas,
    renderer: TerminalRenderer,
}

impl TerminalSurface {
    pub fn new(rows: usize, columns: usize, cell: CellSize) -> Self {
        Self {
            canvas: Canvas::new(rows, columns, cell),
            renderer: TerminalRenderer::new(),
        }
    }

    /// Switch the terminal to raw mode and the alternate screen
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Force a full redraw on the next frame (e.g. after a resize)
    pub fn invalidate(&mut self) {
        self.renderer.invalidate();
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

impl Surface for TerminalSurface {
    type Error = anyhow::Error;

    fn draw_cells(&mut self, cells: &CellMap) {
        self.canvas.draw_cells(cells);
    }

    fn show_message(&mut self, text: &str) {
        self.canvas.show_message(text);
    }

    fn present_frame(&mut self) -> Result<()> {
        // After the swap the canvas holds the previous frame.
        self.renderer.draw_swap(self.canvas.frame_mut())?;
        self.canvas.clear();
        Ok(())
    }
}
