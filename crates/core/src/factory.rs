//! Block factory module - chooses the next block to spawn
//!
//! [`ClassicFactory`] picks uniformly from its registered kinds using an injected
//! generator, so games can be made reproducible with a seeded RNG.
//! [`ScriptedFactory`] replays a fixed sequence for tests.

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::block::Block;
use crate::types::BlockKind;

/// Produces a fresh block, anchored at the origin, for every spawn
pub trait BlockFactory {
    fn create(&mut self) -> Block;
}

/// Uniformly random choice among the registered kinds
#[derive(Debug, Clone)]
pub struct ClassicFactory<R: Rng = ThreadRng> {
    rng: R,
    kinds: Vec<BlockKind>,
}

impl ClassicFactory<ThreadRng> {
    /// Factory over all kinds backed by the thread-local generator
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> ClassicFactory<R> {
    /// Factory over all four kinds
    pub fn new(rng: R) -> Self {
        Self::with_kinds(rng, &BlockKind::ALL)
    }

    /// Factory over a subset of kinds.
    ///
    /// An empty set falls back to all kinds.
    pub fn with_kinds(rng: R, kinds: &[BlockKind]) -> Self {
        let kinds = if kinds.is_empty() {
            BlockKind::ALL.to_vec()
        } else {
            kinds.to_vec()
        };
        Self { rng, kinds }
    }

    pub fn kinds(&self) -> &[BlockKind] {
        &self.kinds
    }
}

impl<R: Rng> BlockFactory for ClassicFactory<R> {
    fn create(&mut self) -> Block {
        let kind = self.kinds[self.rng.random_range(0..self.kinds.len())];
        Block::of_kind(kind)
    }
}

/// Cycles through a fixed list of kinds
#[derive(Debug, Clone)]
pub struct ScriptedFactory {
    kinds: Vec<BlockKind>,
    next: usize,
}

impl ScriptedFactory {
    /// An empty script behaves like `[BlockKind::T]`
    pub fn new(kinds: &[BlockKind]) -> Self {
        let kinds = if kinds.is_empty() {
            vec![BlockKind::T]
        } else {
            kinds.to_vec()
        };
        Self { kinds, next: 0 }
    }

    /// Always produce the same kind
    pub fn repeat(kind: BlockKind) -> Self {
        Self::new(&[kind])
    }
}

impl BlockFactory for ScriptedFactory {
    fn create(&mut self) -> Block {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        Block::of_kind(kind)
    }
}

impl<F: BlockFactory + ?Sized> BlockFactory for Box<F> {
    fn create(&mut self) -> Block {
        (**self).create()
    }
}
