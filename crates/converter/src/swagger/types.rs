//! Swagger 2.0 type definitions
//!
//! Only the fields the conversion reads are modeled. Fields copied verbatim
//! into the output are kept as raw JSON values; fields the conversion makes
//! decisions on are typed and deserialized leniently, so a wrongly typed
//! value reads as absent instead of failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use swagger2openapi_common::SWAGGER_VERSION;

/// JSON object with input key order preserved
pub type JsonObject = Map<String, Value>;

/// Swagger 2.0 document root
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerDocument {
    /// Version tag, expected to be "2.0"
    #[serde(default)]
    pub swagger: Option<Value>,

    /// API metadata, copied verbatim
    #[serde(default)]
    pub info: Option<Value>,

    /// Host (and optional port) serving the API
    #[serde(default, deserialize_with = "lenient")]
    pub host: Option<String>,

    /// Path prefix shared by every endpoint
    #[serde(default, deserialize_with = "lenient")]
    pub base_path: Option<String>,

    /// Transfer protocols, in preference order
    #[serde(default, deserialize_with = "lenient")]
    pub schemes: Option<Vec<String>>,

    /// Path template -> path item
    #[serde(default, deserialize_with = "lenient")]
    pub paths: Option<JsonObject>,

    /// Type name -> schema
    #[serde(default, deserialize_with = "lenient")]
    pub definitions: Option<JsonObject>,

    #[serde(default)]
    pub security_definitions: Option<Value>,

    #[serde(default)]
    pub security: Option<Value>,

    #[serde(default)]
    pub tags: Option<Value>,

    #[serde(default)]
    pub external_docs: Option<Value>,
}

impl SwaggerDocument {
    /// Whether the document declares `swagger: "2.0"`
    pub fn is_swagger_2(&self) -> bool {
        matches!(&self.swagger, Some(Value::String(version)) if version == SWAGGER_VERSION)
    }

    /// Whether any of the fields that describe the server location is present
    pub fn declares_server(&self) -> bool {
        self.host.is_some() || self.base_path.is_some() || self.schemes.is_some()
    }
}

/// HTTP operation on a single path
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub tags: Option<Value>,

    #[serde(default)]
    pub summary: Option<Value>,

    #[serde(default)]
    pub description: Option<Value>,

    #[serde(default)]
    pub operation_id: Option<Value>,

    #[serde(default)]
    pub deprecated: Option<Value>,

    /// Parameters in declaration order, body parameters included
    #[serde(default, deserialize_with = "lenient_list")]
    pub parameters: Vec<Parameter>,

    /// Status code -> response
    #[serde(default, deserialize_with = "lenient")]
    pub responses: Option<JsonObject>,

    #[serde(default)]
    pub security: Option<Value>,
}

impl Operation {
    /// Read an operation object, `None` if the value is not an object
    pub fn from_value(value: &Value) -> Option<Self> {
        from_object(value)
    }
}

/// Operation parameter
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Reference to a shared parameter, e.g. `#/parameters/limit`
    #[serde(rename = "$ref")]
    #[serde(default, deserialize_with = "lenient")]
    pub reference: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,

    /// Location: query, header, path, formData or body
    #[serde(rename = "in")]
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,

    #[serde(default)]
    pub description: Option<Value>,

    #[serde(default, deserialize_with = "lenient")]
    pub required: Option<bool>,

    #[serde(default)]
    pub deprecated: Option<Value>,

    #[serde(default)]
    pub allow_empty_value: Option<Value>,

    /// Schema (always present on body parameters)
    #[serde(default)]
    pub schema: Option<Value>,

    /// Legacy primitive type of non-body parameters
    #[serde(rename = "type")]
    #[serde(default)]
    pub param_type: Option<Value>,
}

impl Parameter {
    /// Whether this parameter carries the request payload
    pub fn is_body(&self) -> bool {
        self.reference.is_none() && self.location.as_deref() == Some("body")
    }
}

/// Response for one status code
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    /// Reference to a shared response, e.g. `#/responses/NotFound`
    #[serde(rename = "$ref")]
    #[serde(default, deserialize_with = "lenient")]
    pub reference: Option<String>,

    #[serde(default)]
    pub description: Option<Value>,

    #[serde(default)]
    pub schema: Option<Value>,

    #[serde(default)]
    pub headers: Option<Value>,

    #[serde(default)]
    pub examples: Option<Value>,
}

impl Response {
    /// Read a response object, `None` if the value is not an object
    pub fn from_value(value: &Value) -> Option<Self> {
        from_object(value)
    }
}

fn from_object<T: DeserializeOwned>(value: &Value) -> Option<T> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}

/// Deserialize an optional field, reading a wrongly typed value as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            tracing::debug!("Ignoring malformed field: {}", e);
            Ok(None)
        }
    }
}

/// Deserialize a list, keeping only the elements that are objects
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        other => {
            tracing::debug!("Ignoring non-list value where a list was expected: {}", other);
            return Ok(Vec::new());
        }
    };

    Ok(items
        .iter()
        .filter_map(|item| {
            let parsed = from_object(item);
            if parsed.is_none() {
                tracing::debug!("Ignoring malformed list entry: {}", item);
            }
            parsed
        })
        .collect())
}
