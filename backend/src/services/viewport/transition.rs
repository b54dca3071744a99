//! Animated return to the base domain after a reset.

use std::time::Duration;

use super::domain::DomainWindow;

/// Default length of the reset animation.
pub const DEFAULT_RESET_DURATION: Duration = Duration::from_millis(750);

/// Cubic ease-in-out on `t` in `[0, 1]`.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Interpolation between two windows over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainTransition {
    pub from: DomainWindow,
    pub to: DomainWindow,
    pub duration: Duration,
}

impl DomainTransition {
    pub fn new(from: DomainWindow, to: DomainWindow, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Window to draw `elapsed` after the transition started.
    ///
    /// Returns `to` verbatim once complete.
    pub fn sample(&self, elapsed: Duration) -> DomainWindow {
        if self.is_complete(elapsed) {
            return self.to;
        }
        let t = ease_cubic_in_out(elapsed.as_secs_f64() / self.duration.as_secs_f64());
        DomainWindow::new(
            self.from.start + (self.to.start - self.from.start) * t,
            self.from.end + (self.to.end - self.from.end) * t,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
    }

    #[test]
    fn test_sample_progresses_to_target() {
        let transition = DomainTransition::new(
            DomainWindow::new(20.0, 30.0),
            DomainWindow::new(1.0, 50.0),
            Duration::from_millis(100),
        );

        assert_eq!(transition.sample(Duration::ZERO), DomainWindow::new(20.0, 30.0));
        assert_eq!(
            transition.sample(Duration::from_millis(50)),
            DomainWindow::new(10.5, 40.0)
        );
        assert_eq!(
            transition.sample(Duration::from_millis(100)),
            DomainWindow::new(1.0, 50.0)
        );
        assert!(transition.is_complete(Duration::from_millis(250)));
    }
}
