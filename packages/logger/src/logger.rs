//! Logger facade
//!
//! Routes leveled messages to the sink and records them into the buffer.

use crate::buffer::LogBuffer;
use crate::classify::classify;
use crate::config::LoggerConfig;
use crate::error::LoggerError;
use crate::field::{Field, FieldSet};
use crate::level::Level;
use crate::sink::build_sink;
use log::{Log, Metadata, Record};
use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::Arc;

const TARGET: &str = "services_utils";

/// Leveled logger writing to a sink and a [`LogBuffer`]
///
/// Every call is recorded into the buffer, whatever its level. Only calls at
/// or above [`Logger::level`] reach the sink. None of the logging methods can
/// fail.
pub struct Logger {
    level: Level,
    sink: Box<dyn Log>,
    buffer: Arc<LogBuffer>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("buffered", &self.buffer.len())
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Start building a logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Logger with the default sink for `config`
    pub fn from_config(config: LoggerConfig) -> Result<Self, LoggerError> {
        Self::builder().config(config).build()
    }

    /// Logger configured from `LOG_LEVEL` and `LOG_OUTPUT`
    pub fn from_env() -> Result<Self, LoggerError> {
        Self::from_config(LoggerConfig::from_env())
    }

    /// Minimum level forwarded to the sink
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Shared recent-entry buffer
    #[must_use]
    pub fn buffer(&self) -> &Arc<LogBuffer> {
        &self.buffer
    }

    /// Log at debug level
    #[track_caller]
    pub fn debug(&self, msg: &str, fields: &[Field]) {
        self.emit(Level::Debug, msg.to_string(), msg, fields, Some(Location::caller()));
    }

    /// Log at info level
    #[track_caller]
    pub fn info(&self, msg: &str, fields: &[Field]) {
        self.emit(Level::Info, msg.to_string(), msg, fields, Some(Location::caller()));
    }

    /// Log at warn level
    #[track_caller]
    pub fn warn(&self, msg: &str, fields: &[Field]) {
        self.emit(Level::Warn, msg.to_string(), msg, fields, Some(Location::caller()));
    }

    /// Log at error level
    ///
    /// With a cause, the buffer records `"{msg}: {cause}"` and the sink gets
    /// `msg` with the cause in a separate `error` field.
    #[track_caller]
    pub fn error(&self, msg: &str, cause: Option<&dyn std::error::Error>, fields: &[Field]) {
        let caller = Some(Location::caller());
        match cause {
            Some(cause) => {
                let text = cause.to_string();
                let mut all = fields.to_vec();
                all.push(Field::new("error", text.clone()));
                self.emit(Level::Error, format!("{msg}: {text}"), msg, &all, caller);
            }
            None => self.emit(Level::Error, msg.to_string(), msg, fields, caller),
        }
    }

    /// Log preformatted arguments at debug level, see [`debugf!`](crate::debugf)
    #[track_caller]
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.debug(&args.to_string(), &[]);
    }

    /// Log preformatted arguments at info level, see [`infof!`](crate::infof)
    #[track_caller]
    pub fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.info(&args.to_string(), &[]);
    }

    /// Log preformatted arguments at warn level, see [`warnf!`](crate::warnf)
    #[track_caller]
    pub fn warn_fmt(&self, args: fmt::Arguments<'_>) {
        self.warn(&args.to_string(), &[]);
    }

    /// Log preformatted arguments at error level, see [`errorf!`](crate::errorf)
    #[track_caller]
    pub fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.error(&args.to_string(), None, &[]);
    }

    /// Log values at info level rendered as `[a b c]`
    #[track_caller]
    pub fn print(&self, values: &[&dyn fmt::Display]) {
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.info(&format!("[{joined}]"), &[]);
    }

    /// Log formatted text at info level
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.info_fmt(args);
    }

    /// Flush the sink
    pub fn flush(&self) {
        self.sink.flush();
    }

    fn emit(
        &self,
        level: Level,
        buffered: String,
        msg: &str,
        fields: &[Field],
        caller: Option<&'static Location<'static>>,
    ) {
        self.buffer.append(level, buffered);
        if level < self.level {
            return;
        }
        let fields = FieldSet(fields);
        self.sink.log(
            &Record::builder()
                .level(level.into())
                .target(TARGET)
                .file(caller.map(|c| c.file()))
                .line(caller.map(|c| c.line()))
                .key_values(&fields)
                .args(format_args!("{msg}"))
                .build(),
        );
        self.sink.flush();
    }
}

/// Records from any crate using the `log` macros, once [`install`](crate::install)ed
impl Log for Logger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let level = Level::from(record.level());
        self.buffer.append(level, record.args().to_string());
        if level >= self.level {
            self.sink.log(record);
        }
    }

    fn flush(&self) {
        self.sink.flush();
    }
}

/// Foreign-adapter contract: classify the text, log it, accept every byte
///
/// Each `write` call is one entry. Formatted writes are rendered in full
/// before logging so `writeln!` yields a single entry. Payloads that are
/// empty once line endings are stripped are accepted and dropped.
impl io::Write for &Logger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let msg = text.trim_end_matches(['\r', '\n']);
        if !msg.is_empty() {
            self.emit(classify(buf), msg.to_string(), msg, &[], None);
        }
        Ok(buf.len())
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let line = args.to_string();
        io::Write::write(self, line.as_bytes()).map(|_| ())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush();
        Ok(())
    }
}

impl io::Write for Logger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut this: &Logger = self;
        io::Write::write(&mut this, buf)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let mut this: &Logger = self;
        io::Write::write_fmt(&mut this, args)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut this: &Logger = self;
        io::Write::flush(&mut this)
    }
}

/// Builder for [`Logger`]
#[derive(Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Option<Box<dyn Log>>,
    buffer: Option<Arc<LogBuffer>>,
}

impl LoggerBuilder {
    /// Use `config` for level, outputs and buffer limits
    #[must_use]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the sink threshold
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.config.level = level;
        self
    }

    /// Use a custom sink instead of the configured outputs
    #[must_use]
    pub fn sink<S: Log + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Share an existing buffer instead of creating one
    #[must_use]
    pub fn buffer(mut self, buffer: Arc<LogBuffer>) -> Self {
        self.buffer = Some(buffer);
        self
    }

    /// Open outputs and assemble the logger
    pub fn build(self) -> Result<Logger, LoggerError> {
        let sink = match self.sink {
            Some(sink) => sink,
            None => build_sink(&self.config)?,
        };
        let buffer = match self.buffer {
            Some(buffer) => buffer,
            None => Arc::new(LogBuffer::with_limits(
                self.config.buffer_max,
                self.config.buffer_trim,
            )?),
        };
        Ok(Logger {
            level: self.config.level,
            sink,
            buffer,
        })
    }
}
