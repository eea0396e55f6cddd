//! Common types and utilities for the swagger2openapi converter
//!
//! This crate contains the shared error type, the conversion options model,
//! and the constants that describe the two document dialects (reference
//! prefixes, version tags, recognized HTTP methods).

pub mod options;

pub use options::ConverterOptions;

use std::fmt;
use thiserror::Error;

/// Errors that can occur while loading or converting a document
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Version tag a Swagger 2.0 document is expected to carry in `swagger`
pub const SWAGGER_VERSION: &str = "2.0";

/// Version tag written to `openapi` in every converted document
pub const OPENAPI_VERSION: &str = "3.0.0";

/// Reference prefix used by Swagger 2.0 for named type definitions
pub const DEFINITIONS_REF_PREFIX: &str = "#/definitions/";

/// Reference prefix used by OpenAPI 3.0 for named component schemas
pub const COMPONENT_SCHEMAS_REF_PREFIX: &str = "#/components/schemas/";

/// HTTP methods that may appear as operation keys of a path item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    /// All recognized methods, in declaration order
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Trace,
    ];

    /// Match a path item key against the method set, ignoring case
    ///
    /// Returns `None` for anything that is not an operation key
    /// (`parameters`, `$ref`, vendor extensions, typos like `trace2`).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|method| key.eq_ignore_ascii_case(method.as_str()))
    }

    /// Lower-case method name
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Trace => "trace",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}
