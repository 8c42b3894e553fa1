//! Terminal logging for the `indices-status` command.
use std::sync::Mutex;

use slog::o;
use slog::Drain;
use slog::FnValue;
use slog::IgnoreResult;
use slog::Level;
use slog::Logger;
use slog::OwnedKVList;
use slog::Record;
use slog_term::FullFormat;
use slog_term::TermDecorator;

/// Drop records below a minimum level.
///
/// Unlike [`slog::LevelFilter`] the drain returns `()`, so it can be the root drain of a [`Logger`].
#[derive(Debug, Clone)]
struct MinLevel<D: Drain> {
    drain: D,
    level: Level,
}

impl<D: Drain> Drain for MinLevel<D> {
    type Ok = ();
    type Err = D::Err;

    fn log(&self, record: &Record, values: &OwnedKVList) -> Result<(), D::Err> {
        if record.level().is_at_least(self.level) {
            self.drain.log(record, values)?;
        }
        Ok(())
    }
}

/// Verbosity accepted by `--log-level`.
#[derive(clap::ValueEnum, Clone, Copy, Default, Eq, PartialEq, Hash, Debug)]
pub enum LogLevel {
    Critical,
    Error,
    #[default]
    Warning,
    Info,
    Debug,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warning => Level::Warning,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
        }
    }
}

/// Build the process logger, writing to standard error.
///
/// Standard output is reserved for rendered documents and summaries.
pub fn configure(level: LogLevel) -> Logger {
    let decorator = TermDecorator::new().stderr().build();
    let format = FullFormat::new(decorator).build();
    let drain = MinLevel {
        drain: Mutex::new(format).map(IgnoreResult::new),
        level: level.into(),
    };
    Logger::root(drain, o!("module" => FnValue(|record: &Record| record.module())))
}

#[cfg(test)]
mod tests {
    use slog::Level;

    use super::LogLevel;

    #[test]
    fn levels_map_to_slog() {
        assert_eq!(Level::from(LogLevel::Critical), Level::Critical);
        assert_eq!(Level::from(LogLevel::Warning), Level::Warning);
        assert_eq!(Level::from(LogLevel::default()), Level::Warning);
        assert_eq!(Level::from(LogLevel::Debug), Level::Debug);
    }
}
