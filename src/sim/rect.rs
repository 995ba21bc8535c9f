//! Axis-aligned rectangle geometry for the speaker and the camera frame
//!
//! Overlap uses the open-interval test: two rectangles overlap iff each one's
//! leading edge passes the other's trailing edge on both axes. Disjointness is
//! exactly its negation, so "contained" and "fully outside" partition the
//! space with no third state.

/// An axis-aligned rectangle in playfield coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (x + width)
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (y + height)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Non-empty overlap with another rectangle (shared edges don't count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() > other.x
            && self.x < other.right()
            && self.bottom() > other.y
            && self.y < other.bottom()
    }

    /// No overlap at all. Always `!self.overlaps(other)`.
    #[inline]
    pub fn disjoint(&self, other: &Rect) -> bool {
        !self.overlaps(other)
    }

    /// Clamp the origin so the rectangle stays fully inside `bounds_w` x `bounds_h`
    pub fn clamp_within(&mut self, bounds_w: f32, bounds_h: f32) {
        self.x = self.x.clamp(0.0, bounds_w - self.width);
        self.y = self.y.clamp(0.0, bounds_h - self.height);
    }

    /// Origin that centers the rectangle inside `bounds_w` x `bounds_h`
    pub fn centered_in(width: f32, height: f32, bounds_w: f32, bounds_h: f32) -> Self {
        Self::new(
            (bounds_w - width) / 2.0,
            (bounds_h - height) / 2.0,
            width,
            height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_partial() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_fully_inside() {
        let frame = Rect::new(250.0, 200.0, 300.0, 200.0);
        let speaker = Rect::new(250.0, 200.0, 100.0, 200.0);
        assert!(speaker.overlaps(&frame));
        assert!(!speaker.disjoint(&frame));
    }

    #[test]
    fn test_touching_edges_are_disjoint() {
        // Open-interval test: a shared edge is not an overlap
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 0.0, 100.0, 100.0);
        assert!(!a.overlaps(&b));
        assert!(a.disjoint(&b));
    }

    #[test]
    fn test_disjoint_is_exact_complement() {
        let frame = Rect::new(250.0, 200.0, 300.0, 200.0);
        for x in [-200.0, 0.0, 249.0, 250.0, 400.0, 551.0, 800.0] {
            for y in [-300.0, 0.0, 199.0, 200.0, 300.0, 401.0, 600.0] {
                let speaker = Rect::new(x, y, 100.0, 200.0);
                assert_ne!(speaker.overlaps(&frame), speaker.disjoint(&frame));
            }
        }
    }

    #[test]
    fn test_clamp_within() {
        let mut r = Rect::new(-20.0, 550.0, 300.0, 200.0);
        r.clamp_within(800.0, 600.0);
        assert_eq!(r.x, 0.0);
        assert_eq!(r.y, 400.0);

        let mut r = Rect::new(700.0, -5.0, 300.0, 200.0);
        r.clamp_within(800.0, 600.0);
        assert_eq!(r.x, 500.0);
        assert_eq!(r.y, 0.0);
    }

    #[test]
    fn test_centered_in() {
        let r = Rect::centered_in(300.0, 200.0, 800.0, 600.0);
        assert_eq!(r.x, 250.0);
        assert_eq!(r.y, 200.0);
    }
}
