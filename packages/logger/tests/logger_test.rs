//! Leveled emission, sink records and the foreign-writer contract

use serde_json::{json, Value};
use services_utils_logger::{
    debugf, errorf, infof, warnf, Field, Level, LogBuffer, Logger, LoggerConfig, MemorySink, Output,
};
use std::io::{self, Write};
use std::sync::Arc;

const INFO_MSG: &str = "an info message";
const WARN_MSG: &str = "a warn message";
const ERROR_MSG: &str = "an error message";
const DEBUG_MSG: &str = "a debug message";
const NEW_ERROR_MSG: &str = "new error";

fn logger_at(level: Level) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .level(level)
        .sink(sink.clone())
        .build()
        .expect("logger with memory sink");
    (logger, sink)
}

fn last(sink: &MemorySink) -> serde_json::Map<String, Value> {
    sink.last().expect("sink received a record")
}

fn buffered(logger: &Logger) -> Vec<(Level, String)> {
    logger
        .buffer()
        .snapshot()
        .into_iter()
        .map(|e| (e.level(), e.message().to_string()))
        .collect()
}

#[test]
fn test_info_writes_info() {
    let (logger, sink) = logger_at(Level::Info);
    logger.info(INFO_MSG, &[]);
    let record = last(&sink);
    assert_eq!(record["level"], "info");
    assert_eq!(record["msg"], INFO_MSG);
    assert!(record["caller"]
        .as_str()
        .is_some_and(|c| c.contains("logger_test.rs")));
    assert!(record["time"].as_str().is_some_and(|t| !t.is_empty()));
}

#[test]
fn test_info_with_field_writes_field() {
    let (logger, sink) = logger_at(Level::Info);
    logger.info(INFO_MSG, &[Field::new("id", "123"), Field::new("attempt", 2)]);
    let record = last(&sink);
    assert_eq!(record["msg"], INFO_MSG);
    assert_eq!(record["id"], "123");
    assert_eq!(record["attempt"], 2);
}

#[test]
fn test_structured_field_values_survive() {
    let (logger, sink) = logger_at(Level::Info);
    logger.warn(WARN_MSG, &[Field::new("user", json!({"id": 7, "roles": ["admin"]}))]);
    assert_eq!(last(&sink)["user"], json!({"id": 7, "roles": ["admin"]}));
}

#[test]
fn test_core_keys_win_over_fields() {
    let (logger, sink) = logger_at(Level::Info);
    logger.info(INFO_MSG, &[Field::new("msg", "spoofed")]);
    assert_eq!(last(&sink)["msg"], INFO_MSG);
}

#[test]
fn test_error_with_cause() {
    let (logger, sink) = logger_at(Level::Error);
    let cause = io::Error::other(NEW_ERROR_MSG);
    logger.error(ERROR_MSG, Some(&cause), &[Field::new("id", "123")]);

    let record = last(&sink);
    assert_eq!(record["level"], "error");
    assert_eq!(record["msg"], ERROR_MSG);
    assert_eq!(record["error"], NEW_ERROR_MSG);
    assert_eq!(record["id"], "123");

    assert_eq!(
        buffered(&logger),
        vec![(Level::Error, format!("{ERROR_MSG}: {NEW_ERROR_MSG}"))]
    );
}

#[test]
fn test_error_without_cause_has_no_error_field() {
    let (logger, sink) = logger_at(Level::Info);
    logger.error(ERROR_MSG, None, &[]);
    assert!(!last(&sink).contains_key("error"));
    assert_eq!(buffered(&logger), vec![(Level::Error, ERROR_MSG.to_string())]);
}

#[test]
fn test_debug_writes_debug_and_is_buffered() {
    let (logger, sink) = logger_at(Level::Debug);
    logger.debug(DEBUG_MSG, &[Field::new("id", "123")]);
    let record = last(&sink);
    assert_eq!(record["level"], "debug");
    assert_eq!(record["id"], "123");
    assert_eq!(buffered(&logger), vec![(Level::Debug, DEBUG_MSG.to_string())]);
}

#[test]
fn test_threshold_filters_sink_but_not_buffer() {
    let (logger, sink) = logger_at(Level::Warn);
    logger.debug(DEBUG_MSG, &[]);
    logger.info(INFO_MSG, &[]);
    logger.warn(WARN_MSG, &[]);
    logger.error(ERROR_MSG, None, &[]);

    let levels: Vec<Value> = sink.records().iter().map(|r| r["level"].clone()).collect();
    assert_eq!(levels, vec![json!("warn"), json!("error")]);
    assert_eq!(logger.buffer().len(), 4);
}

#[test]
fn test_format_macros() {
    let (logger, sink) = logger_at(Level::Debug);
    debugf!(logger, "{} {}", "debug", 1);
    infof!(logger, "my {} message", "formatted");
    warnf!(logger, "retry {}", 3);
    errorf!(logger, "failed after {}ms", 150);

    let msgs: Vec<Value> = sink.records().iter().map(|r| r["msg"].clone()).collect();
    assert_eq!(
        msgs,
        vec![
            json!("debug 1"),
            json!("my formatted message"),
            json!("retry 3"),
            json!("failed after 150ms")
        ]
    );
    assert!(last(&sink)["caller"]
        .as_str()
        .is_some_and(|c| c.contains("logger_test.rs")));
}

#[test]
fn test_print_joins_values() {
    let (logger, sink) = logger_at(Level::Info);
    logger.print(&[&"a", &"b"]);
    let record = last(&sink);
    assert_eq!(record["level"], "info");
    assert_eq!(record["msg"], "[a b]");
}

#[test]
fn test_printf() {
    let (logger, sink) = logger_at(Level::Info);
    logger.printf(format_args!("my printf message"));
    logger.printf(format_args!("my {} message", "formatted"));
    let msgs: Vec<Value> = sink.records().iter().map(|r| r["msg"].clone()).collect();
    assert_eq!(msgs, vec![json!("my printf message"), json!("my formatted message")]);
}

#[test]
fn test_write_classifies_and_accepts_all_bytes() {
    let (logger, sink) = logger_at(Level::Debug);
    let mut writer = &logger;
    for (payload, expected) in [
        ("an error occurred\n", "error"),
        ("warning: low disk", "warn"),
        ("debug trace", "debug"),
        ("all good", "info"),
    ] {
        let written = writer.write(payload.as_bytes()).expect("write never fails");
        assert_eq!(written, payload.len());
        assert_eq!(last(&sink)["level"], expected);
    }
    assert_eq!(last(&sink)["msg"], "all good");
    assert_eq!(
        buffered(&logger).first(),
        Some(&(Level::Error, "an error occurred".to_string()))
    );
    assert!(io::Write::flush(&mut writer).is_ok());
}

#[test]
fn test_write_through_owned_logger() {
    let (mut logger, sink) = logger_at(Level::Info);
    writeln!(logger, "WARN from adapter").expect("write never fails");
    assert_eq!(last(&sink)["level"], "warn");
}

#[test]
fn test_shared_buffer_between_loggers() {
    let buffer = Arc::new(LogBuffer::new());
    let a = Logger::builder()
        .sink(MemorySink::new())
        .buffer(Arc::clone(&buffer))
        .build()
        .expect("logger");
    let b = Logger::builder()
        .sink(MemorySink::new())
        .buffer(Arc::clone(&buffer))
        .build()
        .expect("logger");
    a.info("from a", &[]);
    b.warn("from b", &[]);
    assert_eq!(buffer.len(), 2);
    a.buffer().clear();
    assert!(b.buffer().is_empty());
}

#[test]
fn test_invalid_buffer_limits_fail_build() {
    let config = LoggerConfig::default().with_buffer_limits(3, 4);
    let result = Logger::builder().config(config).sink(MemorySink::new()).build();
    assert!(result.is_err());
}

#[test]
fn test_file_output_writes_json_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("service.log");
    let config = LoggerConfig::default()
        .with_level(Level::Info)
        .with_output(Output::File(path.clone()));
    let logger = Logger::from_config(config).expect("file output opens");

    logger.debug("not written", &[]);
    logger.info(INFO_MSG, &[Field::new("id", "123")]);
    logger.flush();

    let contents = std::fs::read_to_string(&path).expect("log file exists");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    let record: Value = serde_json::from_str(lines[0]).expect("line is JSON");
    assert_eq!(record["level"], "info");
    assert_eq!(record["msg"], INFO_MSG);
    assert_eq!(record["id"], "123");
    assert_eq!(logger.buffer().len(), 2);
}

#[test]
fn test_missing_output_directory_fails_build() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = LoggerConfig::default()
        .with_output(Output::File(dir.path().join("missing").join("service.log")));
    assert!(Logger::from_config(config).is_err());
}

#[test]
fn test_formatted_write_is_one_entry() {
    let (mut logger, sink) = logger_at(Level::Debug);
    writeln!(logger, "upstream error status {}", 503).expect("write never fails");
    assert_eq!(
        buffered(&logger),
        vec![(Level::Error, "upstream error status 503".to_string())]
    );
    assert_eq!(sink.records().len(), 1);

    let mut writer = &logger;
    write!(writer, "cache {} at {}%", "warning", 91).expect("write never fails");
    assert_eq!(
        buffered(&logger).last(),
        Some(&(Level::Warn, "cache warning at 91%".to_string()))
    );
}

#[test]
fn test_line_endings_alone_are_dropped() {
    let (logger, sink) = logger_at(Level::Debug);
    let mut writer = &logger;
    assert_eq!(writer.write(b"\r\n").expect("write never fails"), 2);
    assert_eq!(writer.write(b"").expect("write never fails"), 0);
    assert!(logger.buffer().is_empty());
    assert!(sink.records().is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn test_sink_write_failures_are_swallowed() {
    // Every write to /dev/full fails with ENOSPC.
    let config = LoggerConfig::default()
        .with_level(Level::Debug)
        .with_output(Output::File("/dev/full".into()));
    let logger = Logger::from_config(config).expect("/dev/full opens for append");

    logger.debug(DEBUG_MSG, &[]);
    logger.info(INFO_MSG, &[Field::new("id", "123")]);
    logger.warn(WARN_MSG, &[]);
    logger.error(ERROR_MSG, Some(&io::Error::other(NEW_ERROR_MSG)), &[]);
    infof!(logger, "my {} message", "formatted");
    logger.print(&[&"a", &"b"]);

    let mut writer = &logger;
    assert_eq!(writer.write(b"an error occurred").expect("write never fails"), 17);
    assert!(io::Write::flush(&mut writer).is_ok());
    logger.flush();

    let levels: Vec<Level> = buffered(&logger).into_iter().map(|(l, _)| l).collect();
    assert_eq!(
        levels,
        vec![
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::Info,
            Level::Info,
            Level::Error
        ]
    );
}
