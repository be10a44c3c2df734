use clap::ValueEnum;

/// Minimum level of messages written to stderr; `none` turns logging off.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    None,
}

impl LogLevel {
    /// stderrlog verbosity, 0 is errors only
    pub fn verbosity(&self) -> usize {
        match self {
            LogLevel::Error | LogLevel::None => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Debug => 3,
            LogLevel::Trace => 4,
        }
    }
}

/// Initialize stderr logging for this crate only, so HTTP client internals stay quiet
pub fn init_log(level: LogLevel) -> Result<(), log::SetLoggerError> {
    stderrlog::new()
        .module(module_path!().split("::").next().unwrap_or_default())
        .quiet(level == LogLevel::None)
        .verbosity(level.verbosity())
        .init()
}
