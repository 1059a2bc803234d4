//! The double-helix background animation.
//!
//! Geometry is a pure function of (phase, row y, surface width): each row
//! carries two strand dots placed symmetrically about a fixed centerline and
//! a rung connecting them. A sine of the row angle doubles as "depth", so
//! nearer dots render larger and more opaque for a cheap pseudo-3D effect.
//! The only state is the phase accumulator, advanced a fixed step per
//! accepted frame.

use crate::config;
use crate::schedule::FrameScheduler;
use crate::viewport::Viewport;

/// One row of helix geometry, recomputed fresh every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixRow {
    pub y: f64,
    /// Apparent proximity in [0, 1]; 0 = far, 1 = near.
    pub depth: f64,
    pub front_x: f64,
    pub back_x: f64,
    pub dot_size: f64,
    pub alpha: f64,
}

impl HelixRow {
    pub fn at(y: f64, phase: f64, width: f64) -> Self {
        let angle = y * config::ROW_ANGLE_STEP + phase;
        let depth = (angle.sin() + 1.0) / 2.0;
        let center = width * config::CENTER_FRACTION;
        let swing = angle.sin() * config::STRAND_RADIUS;
        Self {
            y,
            depth,
            front_x: center + swing,
            back_x: center - swing,
            dot_size: 2.0 + depth * 2.0,
            alpha: 0.2 + depth * 0.8,
        }
    }

    /// Horizontal centerline both strands mirror about.
    pub fn centerline(width: f64) -> f64 {
        width * config::CENTER_FRACTION
    }
}

/// Drawing capability the renderer needs from the host surface.
///
/// The wasm side wraps `CanvasRenderingContext2d`; tests substitute a
/// recording double. The accent color is the surface's concern; geometry
/// only dictates positions, sizes, and opacity.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_dot(&mut self, x: f64, y: f64, radius: f64, alpha: f64);
    fn stroke_rung(&mut self, x1: f64, x2: f64, y: f64, alpha: f64);
}

/// Owns the animation clock and turns accepted ticks into draw calls.
pub struct HelixAnimation {
    scheduler: FrameScheduler,
    phase: f64,
}

impl HelixAnimation {
    pub fn new() -> Self {
        Self {
            scheduler: FrameScheduler::new(config::HELIX_FPS),
            phase: 0.0,
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Drive one platform tick. Draws and advances the phase only when the
    /// scheduler accepts the frame; returns whether it did.
    ///
    /// Per row, back strand first (dimmer), then front strand, then the rung
    /// between them at a fifth of the row's alpha.
    pub fn frame(
        &mut self,
        timestamp_ms: f64,
        viewport: Viewport,
        surface: &mut impl Surface,
    ) -> bool {
        if !self.scheduler.tick(timestamp_ms) {
            return false;
        }

        surface.clear(viewport.width, viewport.height);
        let mut y = 0.0;
        while y < viewport.height {
            let row = HelixRow::at(y, self.phase, viewport.width);
            surface.fill_dot(row.back_x, row.y, row.dot_size, row.alpha * 0.5);
            surface.fill_dot(row.front_x, row.y, row.dot_size, row.alpha);
            surface.stroke_rung(row.front_x, row.back_x, row.y, row.alpha * 0.2);
            y += config::ROW_SPACING;
        }

        self.phase += config::PHASE_STEP;
        true
    }
}

impl Default for HelixAnimation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(f64, f64),
        Dot { x: f64, y: f64, r: f64, alpha: f64 },
        Rung { x1: f64, x2: f64, y: f64, alpha: f64 },
    }

    #[derive(Default)]
    struct Recording {
        ops: Vec<Op>,
    }

    impl Surface for Recording {
        fn clear(&mut self, width: f64, height: f64) {
            self.ops.push(Op::Clear(width, height));
        }
        fn fill_dot(&mut self, x: f64, y: f64, radius: f64, alpha: f64) {
            self.ops.push(Op::Dot {
                x,
                y,
                r: radius,
                alpha,
            });
        }
        fn stroke_rung(&mut self, x1: f64, x2: f64, y: f64, alpha: f64) {
            self.ops.push(Op::Rung { x1, x2, y, alpha });
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn depth_stays_normalized_across_rows_and_phases() {
        for row in 0..200 {
            let y = row as f64 * config::ROW_SPACING;
            for step in 0..100 {
                let phase = step as f64 * 0.37;
                let depth = HelixRow::at(y, phase, 1000.0).depth;
                assert!((0.0..=1.0).contains(&depth), "depth {depth} at y={y} phase={phase}");
            }
        }
    }

    #[test]
    fn strands_mirror_about_the_centerline() {
        let width = 1000.0;
        let center = HelixRow::centerline(width);
        assert!(approx(center, 700.0));
        for row in 0..50 {
            let y = row as f64 * config::ROW_SPACING;
            for step in 0..40 {
                let phase = step as f64 * 0.21;
                let r = HelixRow::at(y, phase, width);
                assert!(approx(r.front_x + r.back_x, 2.0 * center));
            }
        }
    }

    #[test]
    fn strands_coincide_when_the_angle_is_zero() {
        let r = HelixRow::at(0.0, 0.0, 1000.0);
        assert!(approx(r.front_x, 700.0));
        assert!(approx(r.back_x, 700.0));
        assert!(approx(r.depth, 0.5));
    }

    #[test]
    fn quarter_turn_hits_the_near_extreme() {
        let r = HelixRow::at(0.0, PI / 2.0, 1000.0);
        assert!(approx(r.depth, 1.0));
        assert!(approx(r.dot_size, 4.0));
        assert!(approx(r.alpha, 1.0));
        assert!(approx(r.front_x, 700.0 + config::STRAND_RADIUS));
        assert!(approx(r.back_x, 700.0 - config::STRAND_RADIUS));
    }

    #[test]
    fn accepted_frame_draws_rows_in_back_front_rung_order() {
        let mut anim = HelixAnimation::new();
        let mut surface = Recording::default();
        let viewport = Viewport::new(1000.0, 100.0);

        // First tick adopts; second, past the interval, renders.
        assert!(!anim.frame(0.0, viewport, &mut surface));
        assert!(surface.ops.is_empty());
        assert!(anim.frame(23.0, viewport, &mut surface));

        // Rows at y = 0, 20, 40, 60, 80: one clear, then three ops per row.
        assert_eq!(surface.ops.len(), 1 + 5 * 3);
        assert_eq!(surface.ops[0], Op::Clear(1000.0, 100.0));
        for row in 0..5 {
            let y = row as f64 * config::ROW_SPACING;
            let expected = HelixRow::at(y, 0.0, 1000.0);
            let ops = &surface.ops[1 + row * 3..1 + row * 3 + 3];
            match (&ops[0], &ops[1], &ops[2]) {
                (
                    Op::Dot { x: bx, alpha: ba, .. },
                    Op::Dot { x: fx, alpha: fa, .. },
                    Op::Rung { x1, x2, y: ry, alpha: ra },
                ) => {
                    assert!(approx(*bx, expected.back_x));
                    assert!(approx(*ba, expected.alpha * 0.5));
                    assert!(approx(*fx, expected.front_x));
                    assert!(approx(*fa, expected.alpha));
                    assert!(approx(*x1, expected.front_x));
                    assert!(approx(*x2, expected.back_x));
                    assert!(approx(*ry, y));
                    assert!(approx(*ra, expected.alpha * 0.2));
                }
                other => panic!("row {row} drew {other:?}"),
            }
        }
    }

    #[test]
    fn phase_advances_one_step_per_accepted_frame_only() {
        let mut anim = HelixAnimation::new();
        let mut surface = Recording::default();
        let viewport = Viewport::new(800.0, 600.0);

        anim.frame(0.0, viewport, &mut surface);
        assert!(approx(anim.phase(), 0.0));

        assert!(anim.frame(23.0, viewport, &mut surface));
        assert!(approx(anim.phase(), config::PHASE_STEP));

        // A tick inside the interval renders nothing and leaves the clock.
        assert!(!anim.frame(30.0, viewport, &mut surface));
        assert!(approx(anim.phase(), config::PHASE_STEP));

        assert!(anim.frame(46.0, viewport, &mut surface));
        assert!(approx(anim.phase(), 2.0 * config::PHASE_STEP));
    }

    #[test]
    fn rows_cover_the_surface_height_exclusively() {
        let mut anim = HelixAnimation::new();
        let mut surface = Recording::default();
        // Height exactly on a row boundary: the boundary row is not drawn.
        anim.frame(0.0, Viewport::new(500.0, 40.0), &mut surface);
        anim.frame(23.0, Viewport::new(500.0, 40.0), &mut surface);
        assert_eq!(surface.ops.len(), 1 + 2 * 3); // rows at y = 0 and y = 20
    }
}
