use std::time::Duration;

use super::VirtualKey;

/// Consumer of keypad events.
///
/// Every handler returns whether it performed a visible action (e.g. the screen needs a
/// redraw); the keypad relays that value from [`super::AnalogKeypad::poll_once`].
/// All handlers default to doing nothing.
pub trait KeypadListener {
    /// A key was pressed and survived debouncing
    fn on_key_down(&mut self, _key: VirtualKey) -> bool {
        false
    }

    /// A held key was released
    fn on_key_up(&mut self, _key: VirtualKey) -> bool {
        false
    }

    /// A key has been held past the long press delay. Fires once per press.
    fn on_long_press(&mut self, _key: VirtualKey) -> bool {
        false
    }

    /// A held key is repeating
    fn on_auto_repeat(&mut self, _key: VirtualKey) -> bool {
        false
    }

    /// No key activity on any channel for the inactivity delay.
    ///
    /// Fires periodically, once per inactivity window, for as long as the keypad stays idle.
    fn on_inactivity(&mut self, _now: Duration) -> bool {
        false
    }

    /// Diagnostic hook: the channel read `spurious` while `stable` was held and discarded it.
    fn on_transient(&mut self, _stable: VirtualKey, _spurious: VirtualKey) {}
}

impl<T> KeypadListener for Box<T>
where
    T: KeypadListener + ?Sized,
{
    fn on_key_down(&mut self, key: VirtualKey) -> bool {
        (**self).on_key_down(key)
    }

    fn on_key_up(&mut self, key: VirtualKey) -> bool {
        (**self).on_key_up(key)
    }

    fn on_long_press(&mut self, key: VirtualKey) -> bool {
        (**self).on_long_press(key)
    }

    fn on_auto_repeat(&mut self, key: VirtualKey) -> bool {
        (**self).on_auto_repeat(key)
    }

    fn on_inactivity(&mut self, now: Duration) -> bool {
        (**self).on_inactivity(now)
    }

    fn on_transient(&mut self, stable: VirtualKey, spurious: VirtualKey) {
        (**self).on_transient(stable, spurious)
    }
}

impl<T> KeypadListener for &mut T
where
    T: KeypadListener + ?Sized,
{
    fn on_key_down(&mut self, key: VirtualKey) -> bool {
        (**self).on_key_down(key)
    }

    fn on_key_up(&mut self, key: VirtualKey) -> bool {
        (**self).on_key_up(key)
    }

    fn on_long_press(&mut self, key: VirtualKey) -> bool {
        (**self).on_long_press(key)
    }

    fn on_auto_repeat(&mut self, key: VirtualKey) -> bool {
        (**self).on_auto_repeat(key)
    }

    fn on_inactivity(&mut self, now: Duration) -> bool {
        (**self).on_inactivity(now)
    }

    fn on_transient(&mut self, stable: VirtualKey, spurious: VirtualKey) {
        (**self).on_transient(stable, spurious)
    }
}
