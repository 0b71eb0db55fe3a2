//! Macros for error creation and early return

/// Build an [`ApiError`](crate::ApiError) from a single-message constructor and a format string
///
/// ```
/// use services_utils_api_error::api_err;
///
/// let err = api_err!(not_found, "No item with index {} found", 3);
/// assert_eq!(err.status_code(), 404);
/// ```
#[macro_export]
macro_rules! api_err {
    ($ctor:ident, $msg:expr) => {
        $crate::ApiError::$ctor($msg)
    };
    ($ctor:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::ApiError::$ctor(format!($fmt, $($arg)*))
    };
}

/// Return early with an [`ApiError`](crate::ApiError) built by [`api_err!`]
#[macro_export]
macro_rules! api_bail {
    ($($arg:tt)*) => {
        return Err($crate::api_err!($($arg)*))
    };
}
