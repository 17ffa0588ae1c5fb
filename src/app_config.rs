mod keycode;

use std::path::{Path, PathBuf};
use std::time::Duration;

use analog_keypad::{ChannelLayout, KeypadConfig};
use serde::Deserialize;

pub use self::keycode::Keycode;

/// Keypad configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// polling interval in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,
    /// debounce time in milliseconds
    debounce_ms: Option<u64>,
    /// hold time before the long press fires, in milliseconds
    long_press_ms: Option<u64>,
    /// hold time before the first auto-repeat, in milliseconds
    auto_repeat_delay_ms: Option<u64>,
    /// interval between auto-repeats, in milliseconds
    auto_repeat_interval_ms: Option<u64>,
    /// idle time before inactivity is reported, in milliseconds
    inactivity_ms: Option<u64>,
    /// ADC channels configuration
    #[serde(rename = "channel", default)]
    pub channels: Vec<ChannelConfig>,
}

fn default_poll_interval_ms() -> u64 {
    20
}

impl AppConfig {
    /// Load configuration from the specified file path
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file {:?}: {}", path, e))?;
        let config: AppConfig = toml::from_str(&config_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file {:?}: {}", path, e))?;
        Ok(config)
    }

    /// Polling interval
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Keypad timings, falling back to the defaults for anything not configured
    pub fn keypad_config(&self) -> KeypadConfig {
        let defaults = KeypadConfig::default();
        let or_default =
            |ms: Option<u64>, default: Duration| ms.map(Duration::from_millis).unwrap_or(default);

        KeypadConfig {
            debounce: or_default(self.debounce_ms, defaults.debounce),
            long_press: or_default(self.long_press_ms, defaults.long_press),
            auto_repeat_delay: or_default(self.auto_repeat_delay_ms, defaults.auto_repeat_delay),
            auto_repeat_interval: or_default(
                self.auto_repeat_interval_ms,
                defaults.auto_repeat_interval,
            ),
            inactivity: or_default(self.inactivity_ms, defaults.inactivity),
            poll_interval: self.poll_interval(),
        }
    }
}

/// Configuration for an individual ADC channel
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelConfig {
    /// IIO device directory, e.g. `/sys/bus/iio/devices/iio:device0`
    pub device: PathBuf,
    /// Voltage channel index on the device
    pub index: u8,
    /// ADC resolution in bits
    #[serde(default = "default_resolution_bits")]
    pub resolution_bits: u8,
    /// Keys on this channel, from the lowest voltage band to the highest
    pub keys: Vec<Keycode>,
}

fn default_resolution_bits() -> u8 {
    12
}

impl ChannelConfig {
    /// Key layout of the channel
    pub fn layout(&self) -> ChannelLayout {
        ChannelLayout::new(self.keys.iter().map(Keycode::key).collect())
    }
}
