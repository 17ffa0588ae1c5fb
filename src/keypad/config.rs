use std::time::Duration;

/// Timing configuration of the keypad.
///
/// All delays assume the host calls [`super::AnalogKeypad::poll_once`] every
/// `poll_interval`; with `n` channels each channel is sampled every `n * poll_interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadConfig {
    /// How long a changed reading must persist before it is accepted
    pub debounce: Duration,
    /// Hold time before the long press fires
    pub long_press: Duration,
    /// Hold time before the first auto-repeat
    pub auto_repeat_delay: Duration,
    /// Interval between subsequent auto-repeats
    pub auto_repeat_interval: Duration,
    /// Idle time before inactivity is reported
    pub inactivity: Duration,
    /// Expected cadence of the host poll loop
    pub poll_interval: Duration,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(50),
            long_press: Duration::from_millis(3000),
            auto_repeat_delay: Duration::from_millis(500),
            auto_repeat_interval: Duration::from_millis(200),
            inactivity: Duration::from_millis(10_000),
            poll_interval: Duration::from_millis(20),
        }
    }
}
