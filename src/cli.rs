//! Command-line configuration and logging setup for the terminal runner.

use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::Level;
use tracing_subscriber::prelude::*;

use crate::core::{ClassicFactory, SessionConfig};
use crate::term::CellSize;
use crate::types::{
    BlockKind, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_COLUMNS, DEFAULT_ROWS,
    DROP_INTERVAL_MS, FRAMES_PER_SECOND,
};

/// Fewest rows a board may have
const MIN_ROWS: usize = 4;

/// Falling-block puzzle game in the terminal.
///
/// Arrows (or WASD / HJKL) move and rotate, P pauses, Space restarts after
/// game over, Esc or Q quits.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Terminal columns per board cell
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH)]
    pub cell_width: u16,

    /// Terminal rows per board cell
    #[arg(long, default_value_t = DEFAULT_CELL_HEIGHT)]
    pub cell_height: u16,

    /// Milliseconds between automatic drops
    #[arg(long, default_value_t = DROP_INTERVAL_MS)]
    pub drop_ms: u64,

    /// Frames per second
    #[arg(long, default_value_t = FRAMES_PER_SECOND)]
    pub fps: u32,

    /// Seed for the block sequence; the same seed replays the same blocks
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Only spawn T, S and I blocks (no squares)
    #[arg(long)]
    pub three_blocks: bool,

    /// Write logs to this file (the terminal itself is taken over by the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = WARN, -vv = INFO, -vvv = DEBUG, -vvvv = TRACE)")]
    pub verbose: u8,
}

impl Args {
    /// Reject configurations the game cannot run with.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.rows >= MIN_ROWS,
            "board needs at least {MIN_ROWS} rows (got {})",
            self.rows
        );
        let config = self.session_config();
        if let Some(kind) = BlockKind::ALL
            .into_iter()
            .find(|&kind| !config.fits_at_spawn(kind))
        {
            bail!(
                "{} columns is too narrow: {} blocks would spawn outside the board",
                self.columns,
                kind.as_str()
            );
        }
        ensure!(
            self.rows <= u16::MAX as usize && self.columns <= u16::MAX as usize,
            "board is too large for a terminal"
        );
        ensure!(
            self.cell_width >= 1 && self.cell_height >= 1,
            "cell size must be at least 1x1"
        );
        ensure!(self.fps >= 1, "fps must be at least 1");
        ensure!(
            self.drop_ms >= 1 && self.drop_ms <= u32::MAX as u64,
            "drop interval must be between 1 and {} ms",
            u32::MAX
        );
        Ok(())
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.rows, self.columns)
    }

    pub fn cell_size(&self) -> CellSize {
        CellSize::new(self.cell_width, self.cell_height)
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_ms.min(u32::MAX as u64) as u32
    }

    pub fn block_kinds(&self) -> &'static [BlockKind] {
        if self.three_blocks {
            &[BlockKind::T, BlockKind::S, BlockKind::I]
        } else {
            &BlockKind::ALL
        }
    }

    /// The seed that will be used (random when none was given)
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().next_u64())
    }

    /// Block factory seeded with `seed`
    pub fn factory(&self, seed: u64) -> ClassicFactory<StdRng> {
        ClassicFactory::with_kinds(StdRng::seed_from_u64(seed), self.block_kinds())
    }

    /// Level from the `-v` count (default ERROR)
    pub fn log_level(&self) -> Level {
        let verbosity = self.verbose.saturating_add(1).clamp(1, 5);
        Level::from_str(&verbosity.to_string()).unwrap_or(Level::ERROR)
    }
}

/// Install a file-backed subscriber when `--log-file` is set.
///
/// Returns whether logging was enabled.
pub fn init_logging(args: &Args) -> Result<bool> {
    let Some(path) = &args.log_file else {
        return Ok(false);
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            args.log_level(),
        ))
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(true)
}
