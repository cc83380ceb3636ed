//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameEvent`]s, paces the loop
//! with a frame clock and injects drop-ticks from a repeating timer.

pub mod map;
pub mod poller;
pub mod timer;

pub use blockfall_types as types;

pub use map::{handle_event, handle_key_event};
pub use poller::{EventBatch, EventPoller, EVENT_BATCH_CAPACITY};
pub use timer::{FrameClock, RepeatingTimer};
