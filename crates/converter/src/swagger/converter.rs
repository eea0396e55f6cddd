//! Converts a Swagger 2.0 document to an OpenAPI 3.0 document

use super::operation::convert_operation;
use super::schema::rewrite_schema;
use super::types::{JsonObject, Operation, SwaggerDocument};
use crate::openapi::{Components, OpenApiDocument, PathItem, Server};
use indexmap::IndexMap;
use serde_json::Value;
use swagger2openapi_common::{ConverterOptions, HttpMethod, OPENAPI_VERSION};

/// Convert a whole document
///
/// `paths` and `components.schemas` are always present in the result; every
/// other optional top-level key appears only when the input has it.
pub fn convert_document(doc: &SwaggerDocument, options: &ConverterOptions) -> OpenApiDocument {
    let paths: IndexMap<String, PathItem> = doc
        .paths
        .as_ref()
        .map(|paths| {
            paths
                .iter()
                .map(|(template, item)| (template.clone(), convert_path_item(template, item, options)))
                .collect()
        })
        .unwrap_or_default();

    let schemas: IndexMap<String, Value> = doc
        .definitions
        .as_ref()
        .map(|definitions| {
            definitions
                .iter()
                .map(|(name, schema)| (name.clone(), rewrite_schema(schema)))
                .collect()
        })
        .unwrap_or_default();

    OpenApiDocument {
        openapi: OPENAPI_VERSION.to_string(),
        info: doc
            .info
            .clone()
            .unwrap_or_else(|| Value::Object(JsonObject::new())),
        servers: build_servers(doc, options),
        paths,
        components: Components {
            schemas,
            security_schemes: doc.security_definitions.clone(),
        },
        security: doc.security.clone(),
        tags: doc.tags.clone(),
        external_docs: doc.external_docs.clone(),
    }
}

/// Build one server entry per scheme from `host`, `basePath` and `schemes`
///
/// Nothing is emitted unless at least one of the three is present.
fn build_servers(doc: &SwaggerDocument, options: &ConverterOptions) -> Option<Vec<Server>> {
    if !doc.declares_server() {
        return None;
    }

    let host = doc.host.as_deref().unwrap_or(options.default_host.as_str());
    let base_path = doc
        .base_path
        .as_deref()
        .unwrap_or(options.default_base_path.as_str());
    let schemes = doc.schemes.as_ref().unwrap_or(&options.default_schemes);

    Some(
        schemes
            .iter()
            .map(|scheme| Server {
                url: format!("{}://{}{}", scheme, host, base_path),
            })
            .collect(),
    )
}

/// Convert the operations of one path, dropping keys that are not HTTP methods
fn convert_path_item(template: &str, item: &Value, options: &ConverterOptions) -> PathItem {
    let mut converted = IndexMap::new();

    let Some(entries) = item.as_object() else {
        tracing::debug!("Path {} is not an object, emitting it without operations", template);
        return converted;
    };

    for (key, value) in entries {
        let Some(method) = HttpMethod::from_key(key) else {
            tracing::debug!("Ignoring key {:?} on path {}", key, template);
            continue;
        };

        match Operation::from_value(value) {
            Some(op) => {
                tracing::debug!("Converting {} {}", method, template);
                converted.insert(key.clone(), convert_operation(&op, options));
            }
            None => {
                tracing::debug!("Skipping {} {}: operation is not an object", method, template);
            }
        }
    }

    converted
}
