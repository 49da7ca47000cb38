//! Axis-aligned bounding box collision
//!
//! Rectangles are stored as top-left corner + size, screen space (y down).
//! Edges are half-open, so rectangles that only touch do not overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Bottom-right corner (exclusive)
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }
}

/// True iff the two rectangles share a region of non-zero area
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    let (a_max, b_max) = (a.max(), b.max());
    a.pos.x < b_max.x && b.pos.x < a_max.x && a.pos.y < b_max.y && b.pos.y < a_max.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_partial() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_far_apart_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &Rect::new(500.0, -300.0, 10.0, 10.0)));
    }

    #[test]
    fn test_player_catches_coin_at_feet() {
        // Gopher standing on the ground, coin dropping onto its head
        let player = Rect::new(320.0, 411.0, 49.0, 49.0);
        assert!(overlaps(&player, &Rect::new(300.0, 375.0, 54.0, 54.0)));
        assert!(!overlaps(&player, &Rect::new(300.0, 350.0, 54.0, 54.0)));
    }

    fn rect() -> impl Strategy<Value = Rect> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            0.0f32..500.0,
            0.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in rect(), b in rect()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_rect_overlaps_itself(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            w in 0.5f32..500.0,
            h in 0.5f32..500.0,
        ) {
            let a = Rect::new(x, y, w, h);
            prop_assert!(overlaps(&a, &a));
        }

        #[test]
        fn prop_separated_rects_never_overlap(a in rect(), b in rect(), gap in 0.0f32..100.0, horizontal in any::<bool>()) {
            let moved = if horizontal {
                Rect::new(a.pos.x + a.size.x + gap, b.pos.y, b.size.x, b.size.y)
            } else {
                Rect::new(b.pos.x, a.pos.y + a.size.y + gap, b.size.x, b.size.y)
            };
            prop_assert!(!overlaps(&a, &moved));
            prop_assert!(!overlaps(&moved, &a));
        }
    }
}
