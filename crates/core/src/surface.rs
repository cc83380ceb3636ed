//! Presentation contract consumed by the game.
//!
//! The core never talks to a terminal or window directly. Anything that can draw
//! colored cells, overlay a status message and flush a frame can host the game.

use crate::board::CellMap;

/// A drawing target for one frame at a time.
pub trait Surface {
    type Error;

    /// Draw each cell at its grid position.
    ///
    /// Later calls draw over earlier ones within the same frame.
    fn draw_cells(&mut self, cells: &CellMap);

    /// Overlay (possibly multi-line) text centered on the surface.
    fn show_message(&mut self, text: &str);

    /// Flush the frame to the display and start a blank one.
    fn present_frame(&mut self) -> Result<(), Self::Error>;
}

/// Discards everything (headless runs and doc examples).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    type Error = std::convert::Infallible;

    fn draw_cells(&mut self, _cells: &CellMap) {}

    fn show_message(&mut self, _text: &str) {}

    fn present_frame(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    type Error = S::Error;

    fn draw_cells(&mut self, cells: &CellMap) {
        (**self).draw_cells(cells)
    }

    fn show_message(&mut self, text: &str) {
        (**self).show_message(text)
    }

    fn present_frame(&mut self) -> Result<(), Self::Error> {
        (**self).present_frame()
    }
}
