//! Core error types for diagram generation
//!
//! This module defines the common error types used throughout the schema
//! loading and rendering pipeline.

use thiserror::Error;

/// Core error types for diagram generation
#[derive(Error, Debug)]
pub enum YumlError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Lookup error: {message}")]
    LookupError { message: String },

    #[error("Schema error: {message}")]
    SchemaError { message: String },

    #[error("Transport error for {url}: {source}")]
    TransportError {
        url: String,
        source: Box<ureq::Error>,
    },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl YumlError {
    /// Create a new configuration error
    pub fn config_error(message: String) -> Self {
        Self::ConfigError { message }
    }

    /// Create a new lookup error
    pub fn lookup_error(message: String) -> Self {
        Self::LookupError { message }
    }

    /// Create a new schema error
    pub fn schema_error(message: String) -> Self {
        Self::SchemaError { message }
    }

    /// Create a new transport error for a failed request
    pub fn transport_error(url: impl Into<String>, source: ureq::Error) -> Self {
        Self::TransportError {
            url: url.into(),
            source: Box::new(source),
        }
    }
}
