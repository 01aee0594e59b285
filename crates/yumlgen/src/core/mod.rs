//! Core abstractions for diagram generation
//!
//! This module defines the schema data model, the metadata provider trait
//! that decouples the formatter from any concrete model source, and the
//! shared option and error types.

mod error;
pub mod logging;
mod provider;
pub mod schema;
mod types;

pub use error::*;
pub use logging::*;
pub use provider::*;
pub use schema::*;
pub use types::*;
