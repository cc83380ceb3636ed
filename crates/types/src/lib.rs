//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs. Row 0 is the top of the board and rows grow
//! downwards; column 0 is the left edge. Rows above the board are negative, which
//! is where freshly spawned blocks start.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 16 | Board height in cells |
//! | `DEFAULT_COLUMNS` | 10 | Board width in cells |
//! | `DROP_INTERVAL_MS` | 750 | Automatic drop-tick interval |
//! | `FRAMES_PER_SECOND` | 30 | Frame clock rate |
//! | `DEFAULT_CELL_WIDTH` | 2 | Terminal columns per board cell |
//! | `DEFAULT_CELL_HEIGHT` | 1 | Terminal rows per board cell |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{BlockKind, Vector, DOWN, RIGHT};
//!
//! let p = Vector::new(-2, 5);
//! assert_eq!(p + DOWN + RIGHT, Vector::new(-1, 6));
//!
//! // Quarter turns around a pivot cycle back after four steps.
//! let center = Vector::new(1, 1);
//! let q = p
//!     .rotated_clockwise(center)
//!     .rotated_clockwise(center)
//!     .rotated_clockwise(center)
//!     .rotated_clockwise(center);
//! assert_eq!(p, q);
//!
//! assert_eq!(BlockKind::from_str("o"), Some(BlockKind::O));
//! ```

use std::fmt;
use std::ops::{Add, Sub};

/// Board height in cells (16 rows)
pub const DEFAULT_ROWS: usize = 16;

/// Board width in cells (10 columns)
pub const DEFAULT_COLUMNS: usize = 10;

/// Interval between automatic drop-ticks in milliseconds
pub const DROP_INTERVAL_MS: u64 = 750;

/// Frame clock rate
pub const FRAMES_PER_SECOND: u32 = 30;

/// Terminal columns used to draw one board cell.
///
/// 2x1 helps compensate for typical terminal glyph aspect ratio.
pub const DEFAULT_CELL_WIDTH: u16 = 2;

/// Terminal rows used to draw one board cell.
pub const DEFAULT_CELL_HEIGHT: u16 = 1;

/// Number of cells in every block
pub const BLOCK_CELLS: usize = 4;

/// Status text shown while paused
pub const PAUSED_MESSAGE: &str = "Paused";

/// Status text shown after the stack reaches the top
pub const GAME_OVER_MESSAGE: &str = "Game Over!\nPress space to continue";

/// Status text on the last frame before the game exits
pub const QUIT_MESSAGE: &str = "Exiting...";

/// Integer grid position or offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Vector {
    pub row: i32,
    pub col: i32,
}

impl Vector {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Translate by `offset`.
    pub fn moved(self, offset: Vector) -> Self {
        self + offset
    }

    /// Rotate a quarter turn clockwise around `center`.
    ///
    /// Computes `center + R * (self - center)` with `R = [[0, 1], [-1, 0]]`,
    /// so a relative `(row, col)` becomes `(col, -row)`.
    pub fn rotated_clockwise(self, center: Vector) -> Self {
        let rel = self - center;
        center + Vector::new(rel.col, -rel.row)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One row down
pub const DOWN: Vector = Vector::new(1, 0);

/// One column right
pub const RIGHT: Vector = Vector::new(0, 1);

/// One column left
pub const LEFT: Vector = Vector::new(0, -1);

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const PURPLE: Color = Color::new(218, 112, 214);
pub const YELLOW: Color = Color::new(255, 255, 0);

/// Color of an empty board cell
pub const EMPTY: Color = BLACK;

/// The block variants
///
/// - **T**: purple, T-shaped
/// - **S**: red, S-shaped
/// - **I**: green, straight bar
/// - **O**: yellow, 2x2 square (does not rotate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    T,
    S,
    I,
    O,
}

impl BlockKind {
    /// Every variant, in registration order
    pub const ALL: [BlockKind; 4] = [BlockKind::T, BlockKind::S, BlockKind::I, BlockKind::O];

    /// Parse block kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::BlockKind;
    ///
    /// assert_eq!(BlockKind::from_str("t"), Some(BlockKind::T));
    /// assert_eq!(BlockKind::from_str("I"), Some(BlockKind::I));
    /// assert_eq!(BlockKind::from_str("z"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" => Some(BlockKind::T),
            "s" => Some(BlockKind::S),
            "i" => Some(BlockKind::I),
            "o" => Some(BlockKind::O),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::T => "t",
            BlockKind::S => "s",
            BlockKind::I => "i",
            BlockKind::O => "o",
        }
    }
}

/// Player commands delivered as key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move block one cell left
    MoveLeft,
    /// Move block one cell right
    MoveRight,
    /// Move block one cell down
    MoveDown,
    /// Rotate block (no-op for blocks that do not rotate)
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start a new game after game over
    Restart,
    /// Leave the game
    Quit,
}

impl Command {
    /// Parse a command name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "movedown" => Some(Command::MoveDown),
            "rotate" => Some(Command::Rotate),
            "pause" => Some(Command::Pause),
            "restart" => Some(Command::Restart),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::Rotate => "rotate",
            Command::Pause => "pause",
            Command::Restart => "restart",
            Command::Quit => "quit",
        }
    }
}

/// Everything the event source can deliver to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The display was closed (or the process was interrupted)
    Quit,
    /// A mapped key press
    Key(Command),
    /// Periodic automatic drop
    DropTick,
}
