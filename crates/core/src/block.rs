//! Block module - block shapes and rotation policies
//!
//! A block is a value: moving or rotating it produces a new block and the old
//! one is simply dropped. Points are absolute positions in the board's frame.

use crate::types::{BlockKind, Color, Vector, GREEN, PURPLE, RED, YELLOW};

/// The four cells of a block
pub type BlockPoints = [Vector; 4];

/// How a block turns when the player asks it to rotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationPolicy {
    /// Quarter turn clockwise around the block center
    Clockwise,
    /// Rotation leaves the block unchanged
    Fixed,
}

impl RotationPolicy {
    /// Apply the policy to a single point
    pub fn apply(self, point: Vector, center: Vector) -> Vector {
        match self {
            RotationPolicy::Clockwise => point.rotated_clockwise(center),
            RotationPolicy::Fixed => point,
        }
    }
}

/// A falling (or about to be frozen) block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    kind: BlockKind,
    points: BlockPoints,
    center: Vector,
    color: Color,
    rotation: RotationPolicy,
}

impl Block {
    pub fn new(
        kind: BlockKind,
        points: BlockPoints,
        center: Vector,
        color: Color,
        rotation: RotationPolicy,
    ) -> Self {
        Self {
            kind,
            points,
            center,
            color,
            rotation,
        }
    }

    /// Canonical layout for a kind, anchored at the origin
    pub fn of_kind(kind: BlockKind) -> Self {
        let v = Vector::new;
        match kind {
            BlockKind::T => Self::new(
                kind,
                [v(0, 0), v(0, 1), v(0, 2), v(1, 1)],
                v(1, 1),
                PURPLE,
                RotationPolicy::Clockwise,
            ),
            BlockKind::S => Self::new(
                kind,
                [v(0, 0), v(0, 1), v(-1, 1), v(-1, 2)],
                v(0, 1),
                RED,
                RotationPolicy::Clockwise,
            ),
            BlockKind::I => Self::new(
                kind,
                [v(0, 0), v(1, 0), v(2, 0), v(3, 0)],
                v(1, 0),
                GREEN,
                RotationPolicy::Clockwise,
            ),
            BlockKind::O => Self::new(
                kind,
                [v(0, 0), v(0, 1), v(1, 0), v(1, 1)],
                v(0, 0),
                YELLOW,
                RotationPolicy::Fixed,
            ),
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn points(&self) -> &BlockPoints {
        &self.points
    }

    pub fn center(&self) -> Vector {
        self.center
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn rotation(&self) -> RotationPolicy {
        self.rotation
    }

    /// Block after one rotation step; center and color are unchanged
    pub fn rotated(&self) -> Self {
        let center = self.center;
        let policy = self.rotation;
        Self {
            points: self.points.map(|p| policy.apply(p, center)),
            ..*self
        }
    }

    /// Block translated by `offset`
    pub fn moved(&self, offset: Vector) -> Self {
        Self {
            points: self.points.map(|p| p + offset),
            center: self.center + offset,
            ..*self
        }
    }

    /// Topmost row occupied by the block
    pub fn top_row(&self) -> i32 {
        self.points.iter().map(|p| p.row).min().unwrap_or(self.center.row)
    }
}
