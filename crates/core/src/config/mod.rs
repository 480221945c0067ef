//! Configuration loading and schema definitions
//!
//! Shared file configuration for LibreMore tools.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
