//! Swagger spec file loader

use super::converter::convert_document;
use super::types::SwaggerDocument;
use crate::openapi::OpenApiDocument;
use serde_json::{Map, Number, Value};
use std::fs;
use std::path::Path;
use swagger2openapi_common::{ConvertError, ConverterOptions, Result};

/// Serialization format of an input document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick the format from the file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                InputFormat::Yaml
            }
            _ => InputFormat::Json,
        }
    }
}

/// Swagger 2.0 document loader
///
/// Reads the whole document into memory before anything is converted.
pub struct SwaggerParser {
    /// Loaded Swagger document
    document: SwaggerDocument,

    /// Defaults used while synthesizing OpenAPI structures
    options: ConverterOptions,
}

impl SwaggerParser {
    /// Load a Swagger document from a file, choosing the format by extension
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = SwaggerParser::from_file("docs/swagger.json")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let format = InputFormat::from_path(path.as_ref());
        Self::from_file_with_format(path, format)
    }

    /// Load a Swagger document from a file in the given format
    pub fn from_file_with_format<P: AsRef<Path>>(path: P, format: InputFormat) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;

        match format {
            InputFormat::Json => Self::from_json(&content),
            InputFormat::Yaml => Self::from_yaml(&content),
        }
    }

    /// Parse a Swagger document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a Swagger document from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        Self::from_value(yaml_to_json(value)?)
    }

    /// Wrap an already parsed JSON tree
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(ConvertError::Parse(
                "Swagger document root must be an object".to_string(),
            ));
        }

        Ok(Self {
            document: serde_json::from_value(value)?,
            options: ConverterOptions::default(),
        })
    }

    /// Replace the default conversion options
    pub fn with_options(mut self, options: ConverterOptions) -> Self {
        self.options = options;
        self
    }

    /// Whether the input declares `swagger: "2.0"`
    pub fn is_swagger_2(&self) -> bool {
        self.document.is_swagger_2()
    }

    /// Get reference to the loaded document
    pub fn document(&self) -> &SwaggerDocument {
        &self.document
    }

    /// Convert the loaded document to OpenAPI 3.0
    pub fn convert(&self) -> OpenApiDocument {
        convert_document(&self.document, &self.options)
    }
}

/// Turn a YAML tree into a JSON tree
///
/// YAML allows non-string mapping keys; status codes written as `200:` come
/// through as integers and are stringified here.
fn yaml_to_json(value: serde_yaml::Value) -> Result<Value> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => yaml_number_to_json(&n)?,
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut object = Map::new();
            for (key, value) in mapping {
                object.insert(yaml_key_to_string(key)?, yaml_to_json(value)?);
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn yaml_number_to_json(n: &serde_yaml::Number) -> Result<Value> {
    if let Some(i) = n.as_i64() {
        Ok(Value::Number(i.into()))
    } else if let Some(u) = n.as_u64() {
        Ok(Value::Number(u.into()))
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| ConvertError::Parse(format!("Unrepresentable number in YAML: {}", n)))
    }
}

fn yaml_key_to_string(key: serde_yaml::Value) -> Result<String> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        other => Err(ConvertError::Parse(format!(
            "Unsupported YAML mapping key: {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_minimal_swagger() {
        let swagger_json = r#"{
            "swagger": "2.0",
            "info": {
                "title": "Test API",
                "version": "1.0.0"
            },
            "paths": {}
        }"#;

        let parser = SwaggerParser::from_json(swagger_json);
        assert!(parser.is_ok());

        let parser = parser.unwrap();
        assert!(parser.is_swagger_2());
        assert_eq!(
            parser.document().info,
            Some(json!({"title": "Test API", "version": "1.0.0"}))
        );
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = SwaggerParser::from_json("{\"swagger\": ");
        assert!(matches!(result, Err(ConvertError::Json(_))));
    }

    #[test]
    fn test_non_object_root_is_an_error() {
        let result = SwaggerParser::from_json("[1, 2, 3]");
        assert!(matches!(result, Err(ConvertError::Parse(_))));
    }

    #[test]
    fn test_parse_yaml_with_integer_status_codes() {
        let yaml = r##"
swagger: "2.0"
info:
  title: YAML API
paths:
  /ping:
    get:
      responses:
        200:
          description: pong
          schema:
            $ref: "#/definitions/Pong"
definitions:
  Pong:
    type: object
    properties:
      latency:
        type: number
        example: 1.5
"##;

        let converted = SwaggerParser::from_yaml(yaml).unwrap().convert();
        let value = serde_json::to_value(&converted).unwrap();

        assert_eq!(
            value["paths"]["/ping"]["get"]["responses"]["200"]["content"]["application/json"]
                ["schema"],
            json!({"$ref": "#/components/schemas/Pong"})
        );
        assert_eq!(
            value["components"]["schemas"]["Pong"]["properties"]["latency"]["example"],
            json!(1.5)
        );
    }

    #[test]
    fn test_input_format_from_path() {
        assert_eq!(InputFormat::from_path(Path::new("a/swagger.yaml")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("swagger.YML")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("swagger.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("swagger")), InputFormat::Json);
    }

    #[test]
    fn test_with_options() {
        let options = ConverterOptions {
            default_host: "example.internal".to_string(),
            ..Default::default()
        };
        let converted = SwaggerParser::from_json(r#"{"basePath": "/v2"}"#)
            .unwrap()
            .with_options(options)
            .convert();

        let servers = converted.servers.unwrap();
        assert_eq!(servers[0].url, "http://example.internal/v2");
    }
}
