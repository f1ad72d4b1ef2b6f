//! Project configuration
//!
//! YAML schema, loading pipeline, and validation for `roomforge`
//! project files.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigLoader, LoadResult, LoadWarning};
pub use schema::ProjectConfig;
pub use validation::{ValidationResult, Validator};
