//! Policy configuration
//!
//! The lint policy is the only configuration `routelint` has: which fields
//! every route must declare and which fallback template is accepted. It is
//! fixed when the validator is constructed and can be overridden from a YAML
//! policy file.

pub mod policy;

pub use policy::{DEFAULT_FALLBACK_ID, DEFAULT_REQUIRED_FIELDS, PolicyConfig};
