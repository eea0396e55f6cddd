//! Converts a single Swagger 2.0 operation

use super::schema::{rewrite_ref, rewrite_schema};
use super::types::{JsonObject, Operation, Parameter, Response};
use crate::openapi;
use indexmap::IndexMap;
use serde_json::{json, Value};
use swagger2openapi_common::ConverterOptions;

/// Convert one operation object
///
/// Body parameters are folded into `requestBody`; every other parameter is
/// kept in order. Response schemas move under `content` with the configured
/// media type. `consumes` and `produces` are not carried over.
pub fn convert_operation(op: &Operation, options: &ConverterOptions) -> openapi::Operation {
    let (body_params, params): (Vec<&Parameter>, Vec<&Parameter>) =
        op.parameters.iter().partition(|param| param.is_body());

    let parameters: Vec<openapi::Parameter> = params.into_iter().map(convert_parameter).collect();

    openapi::Operation {
        tags: op.tags.clone(),
        summary: op.summary.clone(),
        description: op.description.clone(),
        operation_id: op.operation_id.clone(),
        deprecated: op.deprecated.clone(),
        parameters: (!parameters.is_empty()).then_some(parameters),
        request_body: build_request_body(&body_params, &options.media_type),
        responses: op
            .responses
            .as_ref()
            .map(|responses| convert_responses(responses, &options.media_type)),
        security: op.security.clone(),
    }
}

/// Convert a query/header/path/formData parameter
fn convert_parameter(param: &Parameter) -> openapi::Parameter {
    if let Some(reference) = &param.reference {
        tracing::debug!("Keeping parameter reference {}", reference);
        return openapi::Parameter {
            reference: Some(rewrite_ref(reference).into_owned()),
            ..Default::default()
        };
    }

    // A legacy `type` field stands in for a schema when none is given
    let schema = match (&param.schema, &param.param_type) {
        (Some(schema), _) => Some(rewrite_schema(schema)),
        (None, Some(param_type)) => Some(json!({ "type": param_type })),
        (None, None) => None,
    };

    openapi::Parameter {
        reference: None,
        name: param.name.clone(),
        location: param.location.clone(),
        description: param.description.clone(),
        required: param.required,
        deprecated: param.deprecated.clone(),
        allow_empty_value: param.allow_empty_value.clone(),
        schema,
    }
}

/// Build `requestBody` from the body parameters of an operation
///
/// Swagger 2.0 allows only one body parameter, but more are tolerated: the
/// first supplies the schema and any of them being required makes the body
/// required.
fn build_request_body(body_params: &[&Parameter], media_type: &str) -> Option<openapi::RequestBody> {
    let first = body_params.first()?;

    if body_params.len() > 1 {
        tracing::debug!(
            "Operation has {} body parameters, using the first ({:?})",
            body_params.len(),
            first.name
        );
    }

    let schema = first
        .schema
        .as_ref()
        .map(rewrite_schema)
        .unwrap_or_else(|| Value::Object(JsonObject::new()));

    let mut content = IndexMap::new();
    content.insert(
        media_type.to_string(),
        openapi::MediaType {
            schema: Some(schema),
            examples: None,
        },
    );

    Some(openapi::RequestBody {
        required: body_params
            .iter()
            .any(|param| param.required.unwrap_or(false)),
        content,
    })
}

fn convert_responses(
    responses: &JsonObject,
    media_type: &str,
) -> IndexMap<String, openapi::Response> {
    let mut converted = IndexMap::new();

    for (code, value) in responses {
        match Response::from_value(value) {
            Some(response) => {
                converted.insert(code.clone(), convert_response(code, &response, media_type));
            }
            None => {
                tracing::debug!("Skipping response {}: not an object", code);
            }
        }
    }

    converted
}

fn convert_response(code: &str, response: &Response, media_type: &str) -> openapi::Response {
    if let Some(reference) = &response.reference {
        tracing::debug!("Keeping reference {} for response {}", reference, code);
        return openapi::Response {
            reference: Some(rewrite_ref(reference).into_owned()),
            ..Default::default()
        };
    }

    let content = response.schema.as_ref().map(|schema| {
        let mut content = IndexMap::new();
        content.insert(
            media_type.to_string(),
            openapi::MediaType {
                schema: Some(rewrite_schema(schema)),
                examples: response.examples.clone(),
            },
        );
        content
    });

    if content.is_none() && response.examples.is_some() {
        tracing::debug!("Dropping examples of response {}: no schema to attach them to", code);
    }

    openapi::Response {
        reference: None,
        description: response.description.clone(),
        content,
        headers: response.headers.clone(),
    }
}
