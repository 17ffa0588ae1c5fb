use std::time::Duration;

use analog_keypad::{KeypadListener, VirtualKey};

/// Listener which reports every keypad event to the log.
///
/// Key presses, long presses and repeats are reported as handled, so the main loop
/// knows a consumer would have to redraw.
#[derive(Debug, Default)]
pub struct EventLog {
    handled: u64,
}

impl EventLog {
    /// Number of events reported as handled so far
    pub fn handled(&self) -> u64 {
        self.handled
    }

    fn handle(&mut self) -> bool {
        self.handled += 1;
        true
    }
}

impl KeypadListener for EventLog {
    fn on_key_down(&mut self, key: VirtualKey) -> bool {
        info!("Key {key} pressed");
        self.handle()
    }

    fn on_key_up(&mut self, key: VirtualKey) -> bool {
        info!("Key {key} released");
        false
    }

    fn on_long_press(&mut self, key: VirtualKey) -> bool {
        info!("Key {key} long press");
        self.handle()
    }

    fn on_auto_repeat(&mut self, key: VirtualKey) -> bool {
        info!("Key {key} repeat");
        self.handle()
    }

    fn on_inactivity(&mut self, now: Duration) -> bool {
        info!("No user activity ({:.1}s since start)", now.as_secs_f32());
        false
    }

    fn on_transient(&mut self, stable: VirtualKey, spurious: VirtualKey) {
        trace!("Discarded {spurious} while {stable} is held");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_count_handled_events() {
        let mut log = EventLog::default();
        assert!(log.on_key_down(VirtualKey::Up));
        assert!(log.on_auto_repeat(VirtualKey::Up));
        assert!(!log.on_key_up(VirtualKey::Up));
        assert!(!log.on_inactivity(Duration::from_secs(10)));
        assert_eq!(log.handled(), 2);
    }
}
