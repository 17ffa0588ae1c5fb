use std::time::Duration;

use super::adc::AdcSource;
use super::inactivity::InactivityTimer;
use super::{ChannelLayout, KeypadConfig, KeypadListener, VirtualKey};

/// Shared keypad state a channel needs while it is being polled
pub(crate) struct PollContext<'a, L>
where
    L: KeypadListener,
{
    pub(crate) config: &'a KeypadConfig,
    pub(crate) inactivity: &'a mut InactivityTimer,
    pub(crate) listener: &'a mut L,
}

/// A single ADC line of the keypad with its debounce and hold timers.
///
/// A `None` deadline means the timer is unarmed.
pub struct Channel<A>
where
    A: AdcSource,
{
    adc: A,
    layout: ChannelLayout,
    last_stable: VirtualKey,
    bounce_deadline: Option<Duration>,
    long_press_deadline: Option<Duration>,
    auto_repeat_deadline: Option<Duration>,
}

impl<A> Channel<A>
where
    A: AdcSource,
{
    pub fn new(adc: A, layout: ChannelLayout) -> Self {
        Self {
            adc,
            layout,
            last_stable: VirtualKey::None,
            bounce_deadline: None,
            long_press_deadline: None,
            auto_repeat_deadline: None,
        }
    }

    /// Last key which completed debouncing; [`VirtualKey::None`] when released
    pub fn last_stable_key(&self) -> VirtualKey {
        self.last_stable
    }

    pub fn layout(&self) -> &ChannelLayout {
        &self.layout
    }

    /// Sample the channel once, returning the raw reading and the key it decodes to
    pub fn sample(&mut self) -> anyhow::Result<(u16, VirtualKey)> {
        let raw = self.adc.read()?;
        Ok((raw, self.layout.decode(raw)))
    }

    /// Poll the channel at `now` and dispatch at most one event to the listener.
    ///
    /// Returns the listener's result, or `false` if nothing was dispatched.
    /// `_other_key` is the stable key of another channel, reserved for chorded keys.
    pub(crate) fn poll<L>(
        &mut self,
        now: Duration,
        ctx: &mut PollContext<'_, L>,
        _other_key: VirtualKey,
    ) -> bool
    where
        L: KeypadListener,
    {
        // still settling
        if self.bounce_deadline.is_some_and(|deadline| now < deadline) {
            return false;
        }

        let key = match self.adc.read() {
            Ok(raw) => {
                let key = self.layout.decode(raw);
                trace!("Read {raw} => {key:?} (stable: {:?})", self.last_stable);
                key
            }
            Err(e) => {
                error!("Failed to read ADC: {e}");
                return false;
            }
        };

        if key == self.last_stable {
            self.handle_steady(now, ctx)
        } else {
            self.handle_transition(now, ctx, key)
        }
    }

    fn handle_steady<L>(&mut self, now: Duration, ctx: &mut PollContext<'_, L>) -> bool
    where
        L: KeypadListener,
    {
        // a change seen earlier did not persist
        self.bounce_deadline = None;

        let key = self.last_stable;
        if !key.is_pressed() {
            if !ctx.inactivity.is_long_inactive(now) {
                return false;
            }
            debug!("User inactive at {now:?}");
            let handled = ctx.listener.on_inactivity(now);
            ctx.inactivity.notify_activity(now);
            return handled;
        }

        if self.long_press_deadline.is_some_and(|deadline| now >= deadline) {
            self.long_press_deadline = None;
            debug!("Key {key:?} long press");
            return ctx.listener.on_long_press(key);
        }

        if self.auto_repeat_deadline.is_some_and(|deadline| now >= deadline) {
            self.auto_repeat_deadline = Some(now.saturating_add(ctx.config.auto_repeat_interval));
            debug!("Key {key:?} repeat");
            return ctx.listener.on_auto_repeat(key);
        }

        false
    }

    fn handle_transition<L>(
        &mut self,
        now: Duration,
        ctx: &mut PollContext<'_, L>,
        key: VirtualKey,
    ) -> bool
    where
        L: KeypadListener,
    {
        // first sight of a change: confirm after the debounce delay
        if self.bounce_deadline.is_none() {
            self.bounce_deadline = Some(now.saturating_add(ctx.config.debounce));
            return false;
        }

        let previous = self.last_stable;
        if !previous.is_pressed() {
            self.long_press_deadline = Some(now.saturating_add(ctx.config.long_press));
            self.auto_repeat_deadline = Some(now.saturating_add(ctx.config.auto_repeat_delay));
            self.bounce_deadline = None;
            debug!("Key {key:?} down");
            let handled = ctx.listener.on_key_down(key);
            ctx.inactivity.notify_activity(now);
            self.last_stable = key;
            return handled;
        }

        if key.is_pressed() {
            // key to key without a release in between is contact noise
            ctx.listener.on_transient(previous, key);
            return false;
        }

        self.long_press_deadline = None;
        self.auto_repeat_deadline = None;
        self.bounce_deadline = None;
        debug!("Key {previous:?} up");
        let handled = ctx.listener.on_key_up(previous);
        ctx.inactivity.notify_activity(now);
        self.last_stable = VirtualKey::None;
        handled
    }
}
