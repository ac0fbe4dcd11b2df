use clap::ValueEnum;

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    #[default]
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

impl LogLevel {
    const fn filter(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Error => Some("error"),
            Self::Warn => Some("warn"),
            Self::Info => Some("info"),
            Self::Debug => Some("debug"),
            Self::Trace => Some("trace"),
        }
    }
}

/// Initialize the logger based on log level.
///
/// Logs go to stderr so that stdout carries nothing but the exported JSON.
pub fn init_logging(log_level: LogLevel) {
    let Some(level) = log_level.filter() else {
        return;
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // a logger may already be installed when several commands run in one process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .target(env_logger::Target::Stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_has_no_filter() {
        assert_eq!(LogLevel::None.filter(), None);
    }

    #[test]
    fn test_levels_map_to_filters() {
        assert_eq!(LogLevel::Error.filter(), Some("error"));
        assert_eq!(LogLevel::Warn.filter(), Some("warn"));
        assert_eq!(LogLevel::Info.filter(), Some("info"));
        assert_eq!(LogLevel::Debug.filter(), Some("debug"));
        assert_eq!(LogLevel::Trace.filter(), Some("trace"));
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(LogLevel::default(), LogLevel::None);
    }

    #[test]
    fn test_init_logging_none_is_noop() {
        init_logging(LogLevel::None);
    }
}
