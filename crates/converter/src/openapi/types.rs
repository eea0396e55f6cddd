//! OpenAPI 3.0 type definitions
//!
//! Simplified representation covering what the Swagger 2.0 conversion emits

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use swagger2openapi_common::Result;

/// OpenAPI document root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApiDocument {
    /// OpenAPI version, always "3.0.0"
    pub openapi: String,

    /// API metadata
    pub info: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,

    /// Path template -> operations
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    pub components: Components,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<Value>,
}

/// Method key (as written in the input) -> operation
pub type PathItem = IndexMap<String, Operation>;

/// Server information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,
}

/// Reusable components
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    /// Named schemas, always present
    #[serde(default)]
    pub schemas: IndexMap<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_schemes: Option<Value>,
}

/// HTTP operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Value>,

    /// Non-body parameters; never an empty list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    /// Status code -> response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, Response>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<Value>,
}

/// Parameter definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Set alone when the parameter is a reference
    #[serde(rename = "$ref")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Location: query, header, path (formData is carried through as is)
    #[serde(rename = "in")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_empty_value: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

/// Request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    pub required: bool,

    /// Media type -> schema
    pub content: IndexMap<String, MediaType>,
}

/// Response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Set alone when the response is a reference
    #[serde(rename = "$ref")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value>,
}

/// Media type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Value>,
}

/// Counts reported after a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Number of path templates
    pub endpoints: usize,
    /// Number of converted method/path pairs
    pub operations: usize,
    /// Number of component schemas
    pub schemas: usize,
}

impl OpenApiDocument {
    pub fn summary(&self) -> ConversionSummary {
        ConversionSummary {
            endpoints: self.paths.len(),
            operations: self.paths.values().map(IndexMap::len).sum(),
            schemas: self.components.schemas.len(),
        }
    }

    /// Serialize with two-space indentation, non-ASCII kept literal
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize and write the whole document in one step
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json_pretty()?;
        fs::write(path.as_ref(), json)?;
        Ok(())
    }
}
