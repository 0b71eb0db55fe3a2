//! Structured API errors for HTTP services
//!
//! Every business-logic failure is converted at the service boundary into an
//! [`ApiError`]: an immutable value carrying a message, an HTTP status code and
//! an ordered list of opaque causes. The transport layer maps the status code
//! straight onto the wire response.
//!
//! - Factory constructors for the status taxonomy (see [`ErrorKind`])
//! - JSON round-trip with a single flattened [`ParseError`]
//! - [`ResultExt`] / [`OptionExt`] for boundary conversion
//! - [`api_err!`] / [`api_bail!`] for formatted construction

pub mod constructors;
pub mod display;
pub mod extensions;
pub mod macros;
pub mod parse;
pub mod types;

pub use extensions::{OptionExt, ResultExt};
pub use parse::ParseError;
pub use types::{ApiError, ErrorKind, Result};
