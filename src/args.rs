mod log_level;

use std::path::PathBuf;

pub use self::log_level::LogLevel;

/// analog-keypad - decode a resistor-ladder analog keypad attached to Linux IIO ADC channels
#[derive(argh::FromArgs, Debug)]
pub struct Args {
    /// log raw readings and decoded keys instead of dispatching key events
    #[argh(switch)]
    pub calibrate: bool,
    /// path to config file (default: /etc/analog-keypad/config.toml)
    #[argh(option, default = "PathBuf::from(\"/etc/analog-keypad/config.toml\")")]
    pub config: PathBuf,
    /// log level (off, error, warn, info, debug, trace) (default: info)
    #[argh(option, default = "LogLevel::INFO")]
    pub log_level: LogLevel,
}
