//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! Board cells are drawn into a framebuffer ([`Canvas`]) which is then flushed
//! to the terminal with diffing ([`TerminalRenderer`]). [`TerminalSurface`] ties
//! the two together behind the core's `Surface` trait.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod canvas;
pub mod fb;
pub mod renderer;
pub mod surface;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use canvas::{Canvas, CellSize};
pub use fb::{Cell, CellStyle, FrameBuffer, Rect};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
pub use surface::TerminalSurface;
