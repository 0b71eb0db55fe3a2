//! Logger configuration loaded from the environment

use crate::buffer::{DEFAULT_MAX_ENTRIES, DEFAULT_TRIM_BY};
use crate::level::Level;
use crate::sink::RotationPolicy;
use std::env;
use std::path::PathBuf;

/// Variable holding the minimum sink level
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Variable holding the sink output target
pub const ENV_LOG_OUTPUT: &str = "LOG_OUTPUT";

/// Where sink records are written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    /// Standard output
    #[default]
    Stdout,
    /// Standard error
    Stderr,
    /// Append to a file, created if missing
    File(PathBuf),
}

impl Output {
    /// `stdout` (or empty), `stderr`, anything else is a file path
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "stdout" => Self::Stdout,
            "stderr" => Self::Stderr,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Settings for building a [`Logger`](crate::Logger)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Minimum level forwarded to the sink; the buffer records every level
    pub level: Level,
    /// Primary output
    pub output: Output,
    /// Additional size-rotated file
    pub rotation: Option<RotationPolicy>,
    /// Buffer capacity
    pub buffer_max: usize,
    /// Entries dropped per buffer trim
    pub buffer_trim: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            output: Output::Stdout,
            rotation: None,
            buffer_max: DEFAULT_MAX_ENTRIES,
            buffer_trim: DEFAULT_TRIM_BY,
        }
    }
}

impl LoggerConfig {
    /// Read `LOG_LEVEL` and `LOG_OUTPUT` from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`; unknown levels fall back to `info`
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = lookup(ENV_LOG_LEVEL)
            .and_then(|raw| Level::parse(&raw))
            .unwrap_or_default();
        let output = lookup(ENV_LOG_OUTPUT)
            .map(|raw| Output::parse(&raw))
            .unwrap_or_default();
        Self {
            level,
            output,
            ..Self::default()
        }
    }

    /// Set the sink threshold
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the primary output
    #[must_use]
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Also write to a rotated file at `path` with default rotation settings
    #[must_use]
    pub fn with_rotating_file<P: Into<PathBuf>>(self, path: P) -> Self {
        self.with_rotation(RotationPolicy::new(path))
    }

    /// Also write to a rotated file
    #[must_use]
    pub fn with_rotation(mut self, policy: RotationPolicy) -> Self {
        self.rotation = Some(policy);
        self
    }

    /// Set buffer limits, validated when the logger is built
    #[must_use]
    pub fn with_buffer_limits(mut self, max: usize, trim: usize) -> Self {
        self.buffer_max = max;
        self.buffer_trim = trim;
        self
    }
}
