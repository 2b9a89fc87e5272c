//! # Logger
//!
//! Installs the process-wide `tracing` subscriber: an optional compact console layer and an
//! optional rolling file sink (plain text or JSON), filtered by a default level, programmatic
//! directives and `RUST_LOG`.
//!
//! ```rust
//! use sledger_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("sledger-doc")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const LOG_FILE_SUFFIX: &str = "log";
const DEFAULT_MAX_FILES: usize = 10;

/// Where and how log files are written.
#[derive(Debug, Clone)]
pub struct FileSink {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl FileSink {
    /// Daily rotated plain-text files in `directory`, keeping ten of them.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }

    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    #[must_use]
    pub const fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// Configures the global subscriber. Obtain one with [`Logger::builder`].
#[derive(Debug)]
#[must_use = "call .init() to install the subscriber"]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    directives: Option<String>,
    file: Option<FileSink>,
}

impl LoggerBuilder {
    /// Application name; also the prefix of rolled files (`<name>.<date>.log`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Extra filter directives such as `sledger_orders=debug,tower_http=info`.
    ///
    /// `RUST_LOG` is ignored once directives are set programmatically.
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        let directives = directives.into();
        self.directives = (!directives.trim().is_empty()).then_some(directives);
        self
    }

    pub fn file(mut self, sink: FileSink) -> Self {
        self.file = Some(sink);
        self
    }

    /// Installs the subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's worker guard; keep it alive until exit.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for a blank name, zero `max_files`, no enabled
    ///   output or unparsable directives.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory is unusable.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.filter()?;

        let mut layers: Vec<BoxedLayer> = Vec::new();
        if self.console {
            layers.push(fmt::layer().compact().with_ansi(true).boxed());
        }

        let guard = match &self.file {
            Some(sink) => {
                let (layer, guard) = file_layer(&self.name, sink)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(layers)
            .try_init()
            .context("installing global subscriber")?;

        tracing::debug!(name = %self.name, file = self.file.is_some(), "Logger initialized");
        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        let invalid = |message: &'static str| LoggerError::InvalidConfiguration {
            message: message.into(),
            context: None,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("logger name cannot be empty"));
        }
        if !self.console && self.file.is_none() {
            return Err(invalid("no output enabled; enable the console or add a file sink"));
        }
        if self.file.as_ref().is_some_and(|sink| sink.max_files == 0) {
            return Err(invalid("max_files must be greater than zero"));
        }
        Ok(())
    }

    fn filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.directives {
            None => Ok(builder.from_env_lossy()),
            Some(directives) => {
                builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("invalid filter '{directives}': {e}").into(),
                    context: None,
                })
            },
        }
    }
}

type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

fn file_layer(name: &str, sink: &FileSink) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(&sink.directory)
        .context(format!("creating {}", sink.directory.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(sink.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(sink.max_files)
        .build(&sink.directory)?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if sink.json { layer.json().boxed() } else { layer.boxed() };

    Ok((layer, guard))
}

/// Handle to the installed subscriber. Dropping it flushes and stops the file writer.
#[must_use = "dropping the handle stops background file logging"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Console-only, `INFO`, unnamed builder; set a name before calling `init`.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            name: String::new(),
            console: true,
            level: LevelFilter::INFO,
            directives: None,
            file: None,
        }
    }

    /// `true` when a file sink is active.
    #[must_use]
    pub const fn has_file_sink(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logger shutting down, flushing file sink");
        }
    }
}

/// Parses `trace`/`debug`/`info`/`warn`/`error`/`off` (case-insensitive).
///
/// # Errors
/// [`LoggerError::InvalidConfiguration`] for anything else.
pub fn parse_level(raw: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(raw.trim()).map_err(|_| LoggerError::InvalidConfiguration {
        message: format!("unknown log level '{raw}'").into(),
        context: None,
    })
}

/// Parses `minutely`/`hourly`/`daily`/`never` (case-insensitive).
///
/// # Errors
/// [`LoggerError::InvalidConfiguration`] for anything else.
pub fn parse_rotation(raw: &str) -> Result<Rotation, LoggerError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "minutely" => Ok(Rotation::MINUTELY),
        "hourly" => Ok(Rotation::HOURLY),
        "daily" => Ok(Rotation::DAILY),
        "never" => Ok(Rotation::NEVER),
        _ => Err(LoggerError::InvalidConfiguration {
            message: format!("unknown rotation '{raw}'").into(),
            context: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder();
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.file.is_none());
        assert!(builder.directives.is_none());
    }

    #[test]
    fn blank_directives_are_dropped() {
        let builder = Logger::builder().name("t").env_filter("  ");
        assert!(builder.directives.is_none());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Logger::builder().name(" ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn no_output_is_rejected() {
        let err = Logger::builder().name("t").console(false).validate().unwrap_err();
        assert!(err.to_string().contains("no output enabled"));
    }

    #[test]
    fn zero_max_files_is_rejected() {
        let builder = Logger::builder().name("t").file(FileSink::new("logs").max_files(0));
        assert!(builder.validate().is_err());
    }

    #[test]
    fn bad_directives_fail_before_install() {
        let err = Logger::builder().name("t").env_filter("sledger=[[").filter().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn levels_and_rotations_parse() {
        assert_eq!(parse_level("DEBUG").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level(" warn ").unwrap(), LevelFilter::WARN);
        assert!(parse_level("loud").is_err());

        assert_eq!(parse_rotation("Hourly").unwrap(), Rotation::HOURLY);
        assert_eq!(parse_rotation("never").unwrap(), Rotation::NEVER);
        assert!(parse_rotation("weekly").is_err());
    }
}
