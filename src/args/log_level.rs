use std::fmt;
use std::str::FromStr;

/// Log verbosity given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(log::LevelFilter);

impl LogLevel {
    pub const INFO: LogLevel = LogLevel(log::LevelFilter::Info);
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(input: &str) -> Result<LogLevel, Self::Err> {
        log::LevelFilter::from_str(input)
            .map(LogLevel)
            .map_err(|_| {
                format!("invalid log level '{input}' (off, error, warn, info, debug, trace)")
            })
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}
