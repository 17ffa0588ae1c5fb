pub mod adc;
mod channel;
mod config;
mod decoder;
mod inactivity;
mod key;
mod listener;

use std::time::Duration;

pub use self::adc::{AdcSource, IioAdc};
pub use self::channel::Channel;
use self::channel::PollContext;
pub use self::config::KeypadConfig;
pub use self::decoder::{ChannelLayout, decode};
pub use self::inactivity::InactivityTimer;
pub use self::key::VirtualKey;
pub use self::listener::KeypadListener;

/// Analog keypad dispatcher.
///
/// Owns every channel of the keypad and services exactly one of them, in round-robin
/// order, per call to [`AnalogKeypad::poll_once`].
pub struct AnalogKeypad<A, L>
where
    A: AdcSource,
    L: KeypadListener,
{
    config: KeypadConfig,
    channels: Vec<Channel<A>>,
    cursor: usize,
    inactivity: InactivityTimer,
    listener: L,
}

impl<A, L> AnalogKeypad<A, L>
where
    A: AdcSource,
    L: KeypadListener,
{
    /// Create a new keypad with the given configuration and channels
    pub fn new(
        config: KeypadConfig,
        channels: Vec<Channel<A>>,
        listener: L,
    ) -> anyhow::Result<Self> {
        if channels.is_empty() {
            anyhow::bail!("Keypad needs at least one channel");
        }
        info!(
            "Keypad with {} channels, polled every {:?}",
            channels.len(),
            config.poll_interval
        );

        Ok(Self {
            inactivity: InactivityTimer::new(config.inactivity),
            config,
            channels,
            cursor: 0,
            listener,
        })
    }

    /// Advance to the next channel and poll it.
    ///
    /// `now` must come from a monotonic clock. Call this every
    /// [`KeypadConfig::poll_interval`]; returns `true` if a listener handled an event.
    pub fn poll_once(&mut self, now: Duration) -> bool {
        // polling start counts as activity
        if !self.inactivity.is_armed() {
            self.inactivity.notify_activity(now);
        }

        self.cursor = (self.cursor + 1) % self.channels.len();
        let other_key = self.other_key(self.cursor);

        let mut ctx = PollContext {
            config: &self.config,
            inactivity: &mut self.inactivity,
            listener: &mut self.listener,
        };
        self.channels[self.cursor].poll(now, &mut ctx, other_key)
    }

    /// Stable key of the channel at `index`
    pub fn last_stable_key(&self, index: usize) -> Option<VirtualKey> {
        self.channels.get(index).map(Channel::last_stable_key)
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn channels_mut(&mut self) -> &mut [Channel<A>] {
        &mut self.channels
    }

    pub fn config(&self) -> &KeypadConfig {
        &self.config
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    fn other_key(&self, index: usize) -> VirtualKey {
        let other = if index == 0 { 1 } else { 0 };
        self.last_stable_key(other).unwrap_or_default()
    }
}
