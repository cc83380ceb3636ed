//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state transitions.
//! It has **no dependencies** on terminals, windows, or clocks:
//!
//! - **Deterministic**: inject a seeded RNG (or a [`ScriptedFactory`]) to reproduce a game
//! - **Testable**: rendering goes through the [`Surface`] trait, so tests can record frames
//! - **Portable**: any surface that can draw colored cells can host the game
//!
//! # Module Structure
//!
//! - [`block`]: block layouts and rotation policies
//! - [`factory`]: random and scripted block factories
//! - [`board`]: grid of colors with collision queries and row clearing
//! - [`session`]: board plus live block; moves, rotation, landing
//! - [`game_state`]: Playing / Paused / GameOver state machine
//! - [`surface`]: presentation contract
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Game, Mode, ScriptedFactory, SessionConfig};
//! use blockfall_types::{BlockKind, Command, GameEvent};
//!
//! let mut game = Game::new(SessionConfig::default(), ScriptedFactory::repeat(BlockKind::T));
//! let mut frames = blockfall_core::surface::NullSurface;
//!
//! assert!(game.tick(&mut frames, &[GameEvent::Key(Command::Pause)]).unwrap());
//! assert_eq!(game.mode(), Mode::Paused);
//! ```
//!
//! # Frame order
//!
//! While playing, each frame: land/freeze the block if it cannot fall, draw the board
//! and block, clear full rows, present, then apply that frame's events in order.

pub mod block;
pub mod board;
pub mod factory;
pub mod game_state;
pub mod session;
pub mod surface;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use block::{Block, RotationPolicy};
pub use board::{Board, CellMap};
pub use factory::{BlockFactory, ClassicFactory, ScriptedFactory};
pub use game_state::{Flow, Game, Mode};
pub use session::{Landing, Session, SessionConfig};
pub use surface::Surface;
