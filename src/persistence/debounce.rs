use std::time::{Duration, Instant};

/// Restart-on-activity timer: fires once a full quiet period has passed
/// since the most recent [`restart`](Self::restart).
///
/// The timer does not run on its own; the owner polls [`fire`](Self::fire)
/// from its event loop.
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending deadline and schedule a new one from `now`
    pub fn restart(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the timer fires, if it is armed
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns true exactly once per armed deadline, when `now` has reached it
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(600);

    #[test]
    fn test_idle_timer_never_fires() {
        let mut timer = DebounceTimer::new(DELAY);
        assert!(!timer.is_pending());
        assert!(!timer.fire(Instant::now() + DELAY * 10));
    }

    #[test]
    fn test_fires_once_after_quiet_period() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(DELAY);
        timer.restart(start);

        assert!(!timer.fire(start + Duration::from_millis(599)));
        assert!(timer.fire(start + DELAY));
        assert!(!timer.fire(start + DELAY * 2));
    }

    #[test]
    fn test_restart_pushes_deadline_back() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(DELAY);
        timer.restart(start);
        timer.restart(start + Duration::from_millis(500));

        assert!(!timer.fire(start + Duration::from_millis(700)));
        assert_eq!(
            timer.remaining(start + Duration::from_millis(700)),
            Some(Duration::from_millis(400))
        );
        assert!(timer.fire(start + Duration::from_millis(1100)));
    }

    #[test]
    fn test_cancel_disarms() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(DELAY);
        timer.restart(start);
        timer.cancel();
        assert!(!timer.fire(start + DELAY));
        assert_eq!(timer.remaining(start), None);
    }
}
