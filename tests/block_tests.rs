//! Block tests - layouts, translation and rotation policies

use std::collections::HashSet;

use blockfall::core::{Block, RotationPolicy};
use blockfall::types::{BlockKind, Vector, GREEN, PURPLE, RED, YELLOW};

fn point_set(block: &Block) -> HashSet<Vector> {
    block.points().iter().copied().collect()
}

#[test]
fn test_canonical_layouts() {
    let v = Vector::new;

    let t = Block::of_kind(BlockKind::T);
    assert_eq!(t.points(), &[v(0, 0), v(0, 1), v(0, 2), v(1, 1)]);
    assert_eq!(t.center(), v(1, 1));
    assert_eq!(t.color(), PURPLE);

    let s = Block::of_kind(BlockKind::S);
    assert_eq!(s.points(), &[v(0, 0), v(0, 1), v(-1, 1), v(-1, 2)]);
    assert_eq!(s.center(), v(0, 1));
    assert_eq!(s.color(), RED);

    let i = Block::of_kind(BlockKind::I);
    assert_eq!(i.points(), &[v(0, 0), v(1, 0), v(2, 0), v(3, 0)]);
    assert_eq!(i.center(), v(1, 0));
    assert_eq!(i.color(), GREEN);

    let o = Block::of_kind(BlockKind::O);
    assert_eq!(o.color(), YELLOW);
    assert_eq!(o.rotation(), RotationPolicy::Fixed);
}

#[test]
fn test_every_block_has_four_distinct_cells() {
    for kind in BlockKind::ALL {
        let block = Block::of_kind(kind);
        assert_eq!(point_set(&block).len(), 4, "{:?}", kind);
    }
}

#[test]
fn test_moved_translates_everything() {
    let offsets = [
        Vector::new(0, 0),
        Vector::new(1, 0),
        Vector::new(-2, 5),
        Vector::new(7, -3),
    ];
    for kind in BlockKind::ALL {
        let block = Block::of_kind(kind);
        for offset in offsets {
            let moved = block.moved(offset);
            assert_eq!(moved.center(), block.center().moved(offset));
            for (before, after) in block.points().iter().zip(moved.points()) {
                assert_eq!(*after - *before, offset);
            }
            assert_eq!(moved.kind(), kind);
        }
    }
}

#[test]
fn test_rotation_has_order_four() {
    for kind in [BlockKind::T, BlockKind::S, BlockKind::I] {
        let block = Block::of_kind(kind).moved(Vector::new(6, 4));
        assert_eq!(block.rotation(), RotationPolicy::Clockwise);

        let once = block.rotated();
        assert_ne!(point_set(&once), point_set(&block), "{:?}", kind);

        let four = once.rotated().rotated().rotated();
        assert_eq!(point_set(&four), point_set(&block), "{:?}", kind);
        assert_eq!(four.center(), block.center());
        assert_eq!(four.color(), block.color());
    }
}

#[test]
fn test_rotated_keeps_center_and_color() {
    let block = Block::of_kind(BlockKind::S).moved(Vector::new(3, 3));
    let rotated = block.rotated();
    assert_eq!(rotated.center(), block.center());
    assert_eq!(rotated.color(), block.color());
}

#[test]
fn test_i_block_turns_horizontal() {
    let rotated = Block::of_kind(BlockKind::I).rotated();
    let rows: HashSet<i32> = rotated.points().iter().map(|p| p.row).collect();
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_fixed_policy_is_identity() {
    let p = Vector::new(4, 9);
    assert_eq!(RotationPolicy::Fixed.apply(p, Vector::new(0, 0)), p);
    assert_eq!(
        RotationPolicy::Clockwise.apply(p, Vector::new(0, 0)),
        p.rotated_clockwise(Vector::new(0, 0))
    );
}
