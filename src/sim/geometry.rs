//! Axis-aligned rectangles and the overlap test used for collisions.

/// Axis-aligned rectangle in world units. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// True when `a` and `b` overlap with positive area.
///
/// All four comparisons are strict, so rectangles that only share an edge
/// do not intersect.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(intersects(&a, &b));
        assert!(intersects(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Right edge of a == left edge of b
        assert!(!intersects(&a, &Rect::new(10.0, 0.0, 5.0, 5.0)));
        // Bottom edge of a == top edge of b
        assert!(!intersects(&a, &Rect::new(0.0, 10.0, 5.0, 5.0)));
        // Corner contact only
        assert!(!intersects(&a, &Rect::new(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_containment_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 2.0, 2.0);
        assert!(intersects(&outer, &inner));
        assert!(intersects(&inner, &outer));
    }

    #[test]
    fn test_dino_against_cactus_on_ground() {
        // Grounded dino at x=50 and a cactus sliding into it
        let dino = Rect::new(50.0, 153.0, 44.0, 47.0);
        assert!(!intersects(&dino, &Rect::new(94.0, 160.0, 25.0, 40.0)));
        assert!(intersects(&dino, &Rect::new(93.5, 160.0, 25.0, 40.0)));
        // Dino high enough that its feet clear the cactus top
        let airborne = Rect::new(50.0, 113.0, 44.0, 47.0);
        assert!(!intersects(&airborne, &Rect::new(70.0, 160.0, 25.0, 40.0)));
    }

    proptest! {
        #[test]
        fn prop_separated_on_x_never_intersect(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 0.1f32..100.0,
            h in 0.1f32..100.0,
            gap in 0.0f32..100.0,
            by in -500.0f32..500.0,
            bw in 0.1f32..100.0,
            bh in 0.1f32..100.0,
        ) {
            let a = Rect::new(x, y, w, h);
            let b = Rect::new(a.right() + gap, by, bw, bh);
            prop_assert!(!intersects(&a, &b));
            prop_assert!(!intersects(&b, &a));
        }

        #[test]
        fn prop_separated_on_y_never_intersect(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 0.1f32..100.0,
            h in 0.1f32..100.0,
            gap in 0.0f32..100.0,
            bx in -500.0f32..500.0,
            bw in 0.1f32..100.0,
            bh in 0.1f32..100.0,
        ) {
            let a = Rect::new(x, y, w, h);
            let b = Rect::new(bx, a.bottom() + gap, bw, bh);
            prop_assert!(!intersects(&a, &b));
            prop_assert!(!intersects(&b, &a));
        }

        #[test]
        fn prop_shared_interior_point_intersects(
            px in -500i32..500,
            py in -500i32..500,
            l in 1i32..50,
            r in 1i32..50,
            t in 1i32..50,
            b in 1i32..50,
            l2 in 1i32..50,
            r2 in 1i32..50,
            t2 in 1i32..50,
            b2 in 1i32..50,
        ) {
            // Both rects strictly contain (px, py), so the overlap has positive area.
            // Integer-valued inputs keep the edge arithmetic exact in f32.
            let a = Rect::new((px - l) as f32, (py - t) as f32, (l + r) as f32, (t + b) as f32);
            let c = Rect::new((px - l2) as f32, (py - t2) as f32, (l2 + r2) as f32, (t2 + b2) as f32);
            prop_assert!(intersects(&a, &c));
        }
    }
}
