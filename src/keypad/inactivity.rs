use std::time::Duration;

/// Shared user inactivity timer.
///
/// Any key edge on any channel pushes the deadline forward by `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityTimer {
    delay: Duration,
    deadline: Option<Duration>,
}

impl InactivityTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Whether the timer has been started by any activity yet
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Postpone the inactivity deadline to `now + delay`
    pub fn notify_activity(&mut self, now: Duration) {
        self.deadline = Some(now.saturating_add(self.delay));
    }

    /// True once `now` is strictly past the deadline. An unarmed timer is never inactive.
    pub fn is_long_inactive(&self, now: Duration) -> bool {
        self.deadline.is_some_and(|deadline| now > deadline)
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
}
