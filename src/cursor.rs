//! Trailing cursor-outline smoothing.
//!
//! The dot element tracks the pointer directly on every `mousemove`; only
//! the outline lags behind, easing toward the last pointer position on its
//! own animation loop, independent of the helix scheduler.

/// Exponential easing toward a moving target.
#[derive(Debug, Clone, Copy)]
pub struct CursorTrail {
    x: f64,
    y: f64,
    ease: f64,
}

impl CursorTrail {
    /// `ease` is the fraction of the remaining gap closed per tick.
    pub fn new(ease: f64) -> Self {
        Self { x: 0.0, y: 0.0, ease }
    }

    /// Advance one tick toward the target and return the new position.
    pub fn follow(&mut self, target_x: f64, target_y: f64) -> (f64, f64) {
        self.x += (target_x - self.x) * self.ease;
        self.y += (target_y - self.y) * self.ease;
        (self.x, self.y)
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_tick_closes_a_fixed_share_of_the_gap() {
        let mut trail = CursorTrail::new(0.15);
        let (x, y) = trail.follow(100.0, 200.0);
        assert!((x - 15.0).abs() < 1e-12);
        assert!((y - 30.0).abs() < 1e-12);

        // The remaining gap contracts by 0.85 per tick.
        let (x2, _) = trail.follow(100.0, 200.0);
        assert!((x2 - (15.0 + 85.0 * 0.15)).abs() < 1e-12);
    }

    #[test]
    fn converges_onto_a_stationary_target() {
        let mut trail = CursorTrail::new(0.15);
        for _ in 0..200 {
            trail.follow(640.0, 360.0);
        }
        let (x, y) = trail.position();
        assert!((x - 640.0).abs() < 1e-3);
        assert!((y - 360.0).abs() < 1e-3);
    }

    #[test]
    fn starts_at_the_origin_like_the_page_does() {
        let trail = CursorTrail::new(0.15);
        assert_eq!(trail.position(), (0.0, 0.0));
    }
}
