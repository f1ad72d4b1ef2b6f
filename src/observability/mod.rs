//! Observability module
//!
//! Logging infrastructure for `roomforge` runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
