use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Log level, from least to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Warnings only; the default.
    Warn,
    /// Adds where the input was read from.
    Info,
    /// Adds per-phase summaries such as token and node counts.
    Debug,
    /// Adds every token and group as it is processed.
    Trace,
}

impl LogLevel {
    /// Maps a `-v` repetition count to a level, starting at `Warn`.
    ///
    /// ## Example
    /// ```
    /// use parsum::util::logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::from_verbosity(0), LogLevel::Warn);
    /// assert_eq!(LogLevel::from_verbosity(2), LogLevel::Debug);
    /// assert_eq!(LogLevel::from_verbosity(9), LogLevel::Trace);
    /// ```
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

/// Installs a compact stderr subscriber filtered at `level`.
///
/// Output is `LEVEL message fields`, without time, target or colors. Calling
/// this more than once is a no-op.
pub fn init_with_level(level: LogLevel) {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level.into());

    let layer = tracing_subscriber::fmt::layer().without_time()
                                                .with_target(false)
                                                .with_level(true)
                                                .with_ansi(false)
                                                .with_writer(std::io::stderr)
                                                .compact()
                                                .with_filter(filter);

    let _ = Registry::default().with(layer).try_init();
}
