//! Format-string logging macros

/// Log a formatted message at debug level: `debugf!(logger, "x = {}", x)`
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug_fmt(format_args!($($arg)+))
    };
}

/// Log a formatted message at info level: `infof!(logger, "x = {}", x)`
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info_fmt(format_args!($($arg)+))
    };
}

/// Log a formatted message at warn level: `warnf!(logger, "x = {}", x)`
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn_fmt(format_args!($($arg)+))
    };
}

/// Log a formatted message at error level: `errorf!(logger, "x = {}", x)`
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error_fmt(format_args!($($arg)+))
    };
}
