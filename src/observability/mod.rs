//! Observability
//!
//! Diagnostic logging for `routelint`. Findings are the program's output and
//! go to stdout through the reporter; logs go to stderr.

pub mod logging;

pub use logging::{LogFormat, init_logging};
