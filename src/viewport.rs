//! Drawing-surface dimensions and the load-time activation gates.

use crate::config;

/// Current drawing-surface size, refreshed by the resize listener and read
/// by the renderer each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Whether the helix loop should run at all, decided once at page load.
///
/// Deliberately never re-evaluated: a window later shrunk below the
/// threshold keeps animating, and one that started below never starts even
/// if grown.
pub fn animation_enabled(initial_width: f64) -> bool {
    initial_width > config::HELIX_MIN_WIDTH
}

/// Whether the hero parallax gets wired, decided once at page load.
pub fn parallax_enabled(initial_width: f64) -> bool {
    initial_width > config::PARALLAX_MIN_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helix_gate_is_strictly_above_the_threshold() {
        assert!(animation_enabled(1200.0));
        assert!(!animation_enabled(500.0));
        assert!(!animation_enabled(768.0));
        assert!(animation_enabled(768.1));
    }

    #[test]
    fn parallax_gate_uses_its_own_threshold() {
        assert!(parallax_enabled(1200.0));
        assert!(!parallax_enabled(992.0));
        assert!(!parallax_enabled(900.0));
    }

    #[test]
    fn identical_dimensions_compare_equal() {
        // Re-applying the same window size must be a no-op for consumers.
        assert_eq!(Viewport::new(1280.0, 720.0), Viewport::new(1280.0, 720.0));
    }
}
