//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `blockfall::{core, input, term, types}` so the
//! binary, integration tests and benches share one import path.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod cli;
