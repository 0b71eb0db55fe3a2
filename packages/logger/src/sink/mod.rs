//! Sink construction and the JSON record format
//!
//! Records are written as one JSON object per line:
//!
//! ```text
//! {"caller":"src/api.rs:42","id":"123","level":"info","msg":"user created","time":"2024-05-01T12:30:00Z"}
//! ```
//!
//! Fields are merged at the top level; `level`, `time`, `caller` and `msg`
//! win over fields of the same name.

pub mod memory;
pub mod rotating;

pub use memory::MemorySink;
pub use rotating::{RotatingFile, RotationPolicy};

use crate::config::{LoggerConfig, Output};
use crate::error::LoggerError;
use crate::level::Level;
use env_logger::{Target, WriteStyle};
use log::kv::{self, Key, Value as KvValue, VisitSource};
use log::{Log, Record};
use serde_json::{Map, Value};
use services_utils_common::now_utc_string;
use std::fs::OpenOptions;
use std::io::{self, Write};

/// Encode a record as the JSON object written by sinks
#[must_use]
pub fn encode_record(record: &Record<'_>) -> Map<String, Value> {
    let mut out = Map::new();
    let _ = record.key_values().visit(&mut JsonFields(&mut out));
    out.insert(
        "level".to_string(),
        Value::from(Level::from(record.level()).as_str()),
    );
    out.insert("time".to_string(), Value::from(now_utc_string()));
    if let (Some(file), Some(line)) = (record.file(), record.line()) {
        out.insert("caller".to_string(), Value::from(format!("{file}:{line}")));
    }
    out.insert("msg".to_string(), Value::from(record.args().to_string()));
    out
}

struct JsonFields<'a>(&'a mut Map<String, Value>);

impl<'kvs> VisitSource<'kvs> for JsonFields<'_> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: KvValue<'kvs>) -> Result<(), kv::Error> {
        let json = serde_json::to_value(&value).unwrap_or_else(|_| Value::from(value.to_string()));
        self.0.insert(key.as_str().to_string(), json);
        Ok(())
    }
}

/// Build the default `env_logger` sink for `config`
///
/// Opens the output file and the rotated file, if configured.
pub fn build_sink(config: &LoggerConfig) -> Result<Box<dyn Log>, LoggerError> {
    let mut writers: Vec<Box<dyn Write + Send>> = Vec::new();
    match &config.output {
        Output::Stdout => writers.push(Box::new(io::stdout())),
        Output::Stderr => writers.push(Box::new(io::stderr())),
        Output::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            writers.push(Box::new(file));
        }
    }
    if let Some(policy) = &config.rotation {
        writers.push(Box::new(RotatingFile::open(policy.clone())?));
    }

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.level.to_level_filter())
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(Box::new(Tee(writers))))
        .format(|buf, record| {
            let line = serde_json::to_string(&encode_record(record))?;
            writeln!(buf, "{line}")
        });
    Ok(Box::new(builder.build()))
}

/// Fan-out writer; every target gets every write, the first error is reported
struct Tee(Vec<Box<dyn Write + Send>>);

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut first_err = None;
        for w in &mut self.0 {
            if let Err(e) = w.write_all(buf) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut first_err = None;
        for w in &mut self.0 {
            if let Err(e) = w.flush() {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}
