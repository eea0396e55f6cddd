//! Swagger 2.0 to OpenAPI 3.0 conversion
//!
//! This crate reads a Swagger 2.0 document into memory and rewrites it, in a
//! single pass, into an OpenAPI 3.0.0 document.
//!
//! ## Conversion Strategy
//!
//! The conversion is structural and best-effort:
//! - `host`, `basePath` and `schemes` become `servers`
//! - `definitions` become `components.schemas`, `securityDefinitions` become
//!   `components.securitySchemes`
//! - `in: body` parameters become a `requestBody` with a JSON media type
//! - response `schema`/`examples` move under `content`
//! - every `#/definitions/<Name>` reference becomes `#/components/schemas/<Name>`
//!
//! Optional fields that are missing or malformed are omitted from the output
//! rather than reported. The input is never validated against the Swagger 2.0
//! meta-schema and the output is never validated against OpenAPI 3.0.
//!
//! ## Usage
//! ```rust,ignore
//! use swagger2openapi_converter::SwaggerParser;
//!
//! let parser = SwaggerParser::from_file("api/swagger.json")?;
//! let document = parser.convert();
//! document.write_to_file("api/swagger-openapi3.json")?;
//! ```

pub mod openapi;
pub mod swagger;

pub use openapi::{ConversionSummary, OpenApiDocument};
pub use swagger::{
    convert_document, convert_operation, rewrite_ref, rewrite_schema, InputFormat,
    SwaggerDocument, SwaggerParser,
};
