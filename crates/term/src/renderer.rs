//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after [`TerminalRenderer::invalidate`]) is a full
//! redraw; later frames only rewrite runs of cells that changed.

use std::io::{self, Stdout, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Color;

/// Horizontal run of changed cells on one terminal row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

/// Writes frames to `W` (stdout unless built with [`TerminalRenderer::with_writer`]).
pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Raw mode, alternate screen, hidden cursor
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Force the next draw to be a full redraw (terminal resized or cleared).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then hand back the previously drawn frame in its place.
    ///
    /// The caller keeps passing the same buffer; the renderer keeps the other one
    /// for diffing, so no frame is ever cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Emits style changes only when a cell's style differs from the last one written.
#[derive(Default)]
struct StyleTracker {
    current: Option<CellStyle>,
}

impl StyleTracker {
    fn print_cells(&mut self, fb: &FrameBuffer, run: Run, out: &mut Vec<u8>) -> Result<()> {
        for x in run.x..run.x.saturating_add(run.len) {
            let cell = fb.get(x, run.y).unwrap_or_default();
            if self.current != Some(cell.style) {
                queue_style(out, cell.style)?;
                self.current = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }
}

/// Encode a full-frame redraw into `out` without touching the terminal.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut styles = StyleTracker::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        let row = Run {
            x: 0,
            y,
            len: fb.width(),
        };
        styles.print_cells(fb, row, out)?;
    }

    reset_style(out)
}

/// Encode only the cells that differ between `prev` and `next`.
///
/// Both frames must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut styles = StyleTracker::default();
    for run in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        styles.print_cells(next, run, out)?;
    }
    reset_style(out)
}

/// Runs of differing cells, row by row, left to right
pub fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = Run> + 'a {
    let width = next.width();
    (0..next.height()).flat_map(move |y| {
        let differs = move |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        std::iter::from_fn(move || {
            while x < width && !differs(x) {
                x += 1;
            }
            if x >= width {
                return None;
            }
            let start = x;
            while x < width && differs(x) {
                x += 1;
            }
            Some(Run {
                x: start,
                y,
                len: x - start,
            })
        })
    })
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(term_color(style.fg)))?;
    out.queue(SetBackgroundColor(term_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn reset_style(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
