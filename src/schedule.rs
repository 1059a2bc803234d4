//! Frame pacing for the helix loop.
//!
//! `requestAnimationFrame` fires at display refresh rate; the scheduler
//! decides which of those ticks become rendered frames so the animation runs
//! at its own target rate. Keeping the decision here, fed by plain
//! timestamps, makes the acceptance rule testable without a display.

/// Accepts or rejects platform ticks against a target frame rate.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval_ms: f64,
    last_time: Option<f64>,
}

impl FrameScheduler {
    pub fn new(target_fps: f64) -> Self {
        Self {
            interval_ms: 1000.0 / target_fps,
            last_time: None,
        }
    }

    /// Feed one platform tick; returns whether it is an accepted frame.
    ///
    /// The first tick only adopts its timestamp. Afterwards a tick is
    /// accepted exactly when more than the target interval has elapsed since
    /// the last accepted frame; rejected ticks leave the state untouched.
    pub fn tick(&mut self, timestamp_ms: f64) -> bool {
        let Some(last) = self.last_time else {
            self.last_time = Some(timestamp_ms);
            return false;
        };
        if timestamp_ms - last > self.interval_ms {
            self.last_time = Some(timestamp_ms);
            true
        } else {
            false
        }
    }

    /// Minimum spacing between accepted frames, ms.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Timestamp of the last accepted frame (or of adoption), if any.
    pub fn last_time(&self) -> Option<f64> {
        self.last_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_adopts_without_rendering() {
        let mut sched = FrameScheduler::new(45.0);
        assert!(!sched.tick(1000.0));
        assert_eq!(sched.last_time(), Some(1000.0));
    }

    #[test]
    fn accepts_only_after_the_interval_has_passed() {
        let mut sched = FrameScheduler::new(45.0);
        let interval = sched.interval_ms(); // ≈ 22.22 ms
        sched.tick(0.0);

        // A display running faster than the target rejects in-between ticks.
        assert!(!sched.tick(16.0));
        assert_eq!(sched.last_time(), Some(0.0));

        assert!(sched.tick(interval + 0.01));
        assert_eq!(sched.last_time(), Some(interval + 0.01));
    }

    #[test]
    fn elapsed_equal_to_the_interval_is_not_enough() {
        let mut sched = FrameScheduler::new(45.0);
        sched.tick(0.0);
        let interval = sched.interval_ms();
        assert!(!sched.tick(interval));
        assert_eq!(sched.last_time(), Some(0.0));
    }

    #[test]
    fn sixty_hz_ticks_land_near_the_target_rate() {
        let mut sched = FrameScheduler::new(45.0);
        let mut accepted = 0;
        for n in 0..=600 {
            if sched.tick(n as f64 * (1000.0 / 60.0)) {
                accepted += 1;
            }
        }
        // 10 s of 60 Hz ticks: every interval spans two 16.7 ms ticks, so the
        // fixed-step rule settles at half the display rate.
        assert_eq!(accepted, 300);
    }

    #[test]
    fn rejected_ticks_do_not_move_the_reference_point() {
        let mut sched = FrameScheduler::new(45.0);
        sched.tick(0.0);
        assert!(!sched.tick(10.0));
        assert!(!sched.tick(20.0));
        // 22.3 ms after the *accepted* frame, not after the last rejection.
        assert!(sched.tick(22.3));
    }
}
