//! Reference rewriting for schema subtrees
//!
//! The rewrite walks every object and array uniformly instead of special
//! casing schema keywords, so `allOf`, `properties.*`, `items` and schema
//! valued `additionalProperties` are all covered by the same rule. The only
//! keyword-aware step is the `$ref` prefix swap.

use serde_json::{Map, Value};
use std::borrow::Cow;
use swagger2openapi_common::{COMPONENT_SCHEMAS_REF_PREFIX, DEFINITIONS_REF_PREFIX};

/// Rewrite every `#/definitions/` reference in `node` to `#/components/schemas/`
///
/// Returns a new tree; scalars come back unchanged and arrays have each
/// object element rewritten.
pub fn rewrite_schema(node: &Value) -> Value {
    match node {
        Value::Object(map) => Value::Object(rewrite_object(map)),
        Value::Array(items) => Value::Array(rewrite_items(items)),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => node.clone(),
    }
}

/// Swap the definitions prefix of a reference for the component schemas prefix
///
/// Any other reference (external files, `#/parameters/...`, already converted
/// pointers) is returned as is.
///
/// # Example
/// ```rust
/// use swagger2openapi_converter::rewrite_ref;
///
/// assert_eq!(rewrite_ref("#/definitions/Pet"), "#/components/schemas/Pet");
/// assert_eq!(rewrite_ref("other.json#/Foo"), "other.json#/Foo");
/// ```
pub fn rewrite_ref(target: &str) -> Cow<'_, str> {
    match target.strip_prefix(DEFINITIONS_REF_PREFIX) {
        Some(name) => Cow::Owned(format!("{}{}", COMPONENT_SCHEMAS_REF_PREFIX, name)),
        None => Cow::Borrowed(target),
    }
}

fn rewrite_object(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| {
            let rewritten = match (key.as_str(), value) {
                ("$ref", Value::String(target)) => Value::String(rewrite_ref(target).into_owned()),
                // Non-string $ref values are not pointers; leave them alone
                ("$ref", _) => value.clone(),
                (_, Value::Object(inner)) => Value::Object(rewrite_object(inner)),
                (_, Value::Array(items)) => Value::Array(rewrite_items(items)),
                _ => value.clone(),
            };
            (key.clone(), rewritten)
        })
        .collect()
}

fn rewrite_items(items: &[Value]) -> Vec<Value> {
    items
        .iter()
        .map(|item| match item {
            Value::Object(inner) => Value::Object(rewrite_object(inner)),
            other => other.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rewrite_top_level_ref() {
        let schema = json!({"$ref": "#/definitions/Widget"});
        assert_eq!(
            rewrite_schema(&schema),
            json!({"$ref": "#/components/schemas/Widget"})
        );
    }

    #[test]
    fn test_rewrite_only_touches_prefix() {
        let schema = json!({"$ref": "#/definitions/models.Session#/definitions/x"});
        assert_eq!(
            rewrite_schema(&schema),
            json!({"$ref": "#/components/schemas/models.Session#/definitions/x"})
        );
    }

    #[test]
    fn test_other_refs_pass_through() {
        for target in [
            "other.json#/Foo",
            "#/parameters/limit",
            "#/responses/NotFound",
            "#/components/schemas/Already",
            "definitions/Relative",
        ] {
            let schema = json!({"$ref": target});
            assert_eq!(rewrite_schema(&schema), schema, "{} should be unchanged", target);
        }
    }

    #[test]
    fn test_non_string_ref_passes_through() {
        let schema = json!({
            "properties": {
                "$ref": {"$ref": "#/definitions/Inner"}
            }
        });
        // A property literally named "$ref" holds an object, not a pointer
        assert_eq!(rewrite_schema(&schema), schema);
    }

    #[test]
    fn test_rewrite_nested_combinators() {
        let schema = json!({
            "type": "object",
            "allOf": [
                {"$ref": "#/definitions/Base"},
                {
                    "properties": {
                        "children": {
                            "type": "array",
                            "items": {"$ref": "#/definitions/Node"}
                        },
                        "labels": {
                            "type": "object",
                            "additionalProperties": {"$ref": "#/definitions/Label"}
                        },
                        "choice": {
                            "oneOf": [
                                {"$ref": "#/definitions/A"},
                                {"type": "string"}
                            ]
                        }
                    }
                }
            ],
            "required": ["children"]
        });

        let expected = json!({
            "type": "object",
            "allOf": [
                {"$ref": "#/components/schemas/Base"},
                {
                    "properties": {
                        "children": {
                            "type": "array",
                            "items": {"$ref": "#/components/schemas/Node"}
                        },
                        "labels": {
                            "type": "object",
                            "additionalProperties": {"$ref": "#/components/schemas/Label"}
                        },
                        "choice": {
                            "oneOf": [
                                {"$ref": "#/components/schemas/A"},
                                {"type": "string"}
                            ]
                        }
                    }
                }
            ],
            "required": ["children"]
        });

        assert_eq!(rewrite_schema(&schema), expected);
    }

    #[test]
    fn test_tree_without_definition_refs_is_unchanged() {
        let schema = json!({
            "type": "object",
            "description": "Uses #/definitions/ in prose only",
            "properties": {
                "id": {"type": "string", "format": "uuid"},
                "count": {"type": "integer", "minimum": 0, "maximum": 10},
                "flags": {"type": "array", "items": {"type": "boolean"}},
                "meta": {"type": "object", "additionalProperties": true},
                "nothing": null
            },
            "enum": [1, "two", null, [3]]
        });

        assert_eq!(rewrite_schema(&schema), schema);
    }

    #[test]
    fn test_scalars_unchanged() {
        assert_eq!(rewrite_schema(&json!(null)), json!(null));
        assert_eq!(rewrite_schema(&json!(true)), json!(true));
        assert_eq!(rewrite_schema(&json!(42)), json!(42));
        assert_eq!(
            rewrite_schema(&json!("#/definitions/Foo")),
            json!("#/definitions/Foo")
        );
    }

    #[test]
    fn test_top_level_array_elements_rewritten() {
        let node = json!([{"$ref": "#/definitions/A"}, "#/definitions/B", 7]);
        assert_eq!(
            rewrite_schema(&node),
            json!([{"$ref": "#/components/schemas/A"}, "#/definitions/B", 7])
        );
    }

    #[test]
    fn test_nested_arrays_not_descended() {
        let node = json!({"x-matrix": [[{"$ref": "#/definitions/A"}]]});
        assert_eq!(rewrite_schema(&node), node);
    }

    #[test]
    fn test_key_order_preserved() {
        let schema = json!({"zeta": 1, "$ref": "#/definitions/A", "alpha": 2});
        let rewritten = rewrite_schema(&schema);
        let keys: Vec<&String> = rewritten.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "$ref", "alpha"]);
    }
}
