//! Session module - one game's board and falling block
//!
//! The session owns the board and the single live block. Every move or rotation is
//! tried on a candidate block first and only committed when it does not collide;
//! rejected commands leave the session untouched.

use tracing::debug;

use crate::block::Block;
use crate::board::{Board, CellMap};
use crate::factory::BlockFactory;
use crate::surface::Surface;
use crate::types::{BlockKind, Color, Vector, DEFAULT_COLUMNS, DEFAULT_ROWS, DOWN, EMPTY};

/// Board shape for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub rows: usize,
    pub columns: usize,
    pub empty_color: Color,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            empty_color: EMPTY,
        }
    }
}

impl SessionConfig {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Where new blocks are anchored: two rows above the board, centered
    pub fn spawn_point(&self) -> Vector {
        Vector::new(-2, (self.columns / 2) as i32)
    }

    /// Whether a freshly spawned `kind` lies between the walls and above the floor
    pub fn fits_at_spawn(&self, kind: BlockKind) -> bool {
        let block = Block::of_kind(kind).moved(self.spawn_point());
        block.points().iter().all(|p| {
            p.col >= 0 && (p.col as usize) < self.columns && p.row < self.rows as i32
        })
    }
}

/// Outcome of checking whether the live block has landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// The block can still fall
    Falling,
    /// The block was frozen onto the board and a new one spawned
    Frozen,
    /// Game over: the landed block still reaches above the board, or its
    /// replacement overlaps the stack on spawn
    ToppedOut,
}

/// Board, live block and the factory that feeds it
#[derive(Debug, Clone)]
pub struct Session<F> {
    config: SessionConfig,
    board: Board,
    block: Block,
    factory: F,
    /// Blocks spawned since the last reset
    spawned: u32,
}

impl<F: BlockFactory> Session<F> {
    /// Fresh board with one spawned block
    pub fn new(config: SessionConfig, mut factory: F) -> Self {
        let board = Board::new(config.rows, config.columns, config.empty_color);
        let block = factory.create().moved(config.spawn_point());
        debug!(kind = block.kind().as_str(), "spawned first block");
        Self {
            config,
            board,
            block,
            factory,
            spawned: 1,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access (for setting up positions)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    pub fn spawn_point(&self) -> Vector {
        self.config.spawn_point()
    }

    /// Check if the block leaves the board sideways or downwards, or overlaps the stack.
    ///
    /// Rows above the board are unconstrained.
    pub fn is_colliding(&self, block: &Block) -> bool {
        let columns = self.config.columns as i32;
        block.points().iter().any(|&p| {
            if p.row < 0 {
                p.col < 0 || p.col >= columns
            } else {
                !self.board.in_bounds(p) || self.board.is_occupied(p)
            }
        })
    }

    /// Move the live block if the destination is free
    pub fn attempt_move(&mut self, offset: Vector) -> bool {
        let candidate = self.block.moved(offset);
        self.replace_if_free(candidate)
    }

    /// Rotate the live block if the result is free
    pub fn attempt_rotate(&mut self) -> bool {
        let candidate = self.block.rotated();
        self.replace_if_free(candidate)
    }

    fn replace_if_free(&mut self, candidate: Block) -> bool {
        if self.is_colliding(&candidate) {
            return false;
        }
        self.block = candidate;
        true
    }

    /// Freeze the live block if it cannot fall any further.
    ///
    /// A landed block that still sticks out above the board, or a replacement
    /// that overlaps the stack as soon as it spawns, ends the game. On top-out
    /// the board and live block are left as they were for display.
    pub fn settle(&mut self) -> Landing {
        if !self.is_colliding(&self.block.moved(DOWN)) {
            return Landing::Falling;
        }

        if self.block.top_row() < 0 {
            debug!(kind = self.block.kind().as_str(), "block landed above the board");
            return Landing::ToppedOut;
        }

        self.board.freeze(&self.block);
        debug!(
            kind = self.block.kind().as_str(),
            center = %self.block.center(),
            "froze block"
        );

        let next = self.factory.create().moved(self.spawn_point());
        if self.is_colliding(&next) {
            debug!(kind = next.kind().as_str(), "spawn blocked");
            return Landing::ToppedOut;
        }
        self.block = next;
        self.spawned += 1;
        Landing::Frozen
    }

    /// Remove full rows; returns how many were cleared
    pub fn clear_full_rows(&mut self) -> usize {
        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            debug!(cleared, "cleared rows");
        }
        cleared
    }

    /// Cells of the live block
    pub fn block_cells(&self) -> CellMap {
        let color = self.block.color();
        self.block.points().iter().map(|&p| (p, color)).collect()
    }

    /// Draw the board, then the live block over it
    pub fn render<S: Surface>(&self, surface: &mut S) {
        surface.draw_cells(&self.board.cells());
        surface.draw_cells(&self.block_cells());
    }

    /// Start over with an empty board and a fresh block
    pub fn reset(&mut self) {
        self.board.clear();
        self.block = self.factory.create().moved(self.spawn_point());
        self.spawned = 1;
    }
}
