//! `routelint` - linter for support-dialogue router files
//!
//! A router file maps user-input regex patterns to response templates:
//!
//! ```json
//! { "routes": [ { "pattern": "bedtime|sleep", "template_id": "tpl_sleep",
//!                 "fallback": "tool_generic_support_intro", "precedence": 10 } ] }
//! ```
//!
//! [`validator::RouteFileValidator`] checks one file's text and reports every
//! problem as a [`validator::Finding`]; [`lint::Linter`] drives it across
//! files named by path arguments.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod lint;
pub mod observability;
pub mod report;
pub mod validator;
