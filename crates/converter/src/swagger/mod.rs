//! Swagger 2.0 document loading and conversion
//!
//! ## Components
//! - [`SwaggerParser`]: reads JSON or YAML input into a [`SwaggerDocument`]
//! - [`convert_document`]: builds the OpenAPI envelope and walks every path
//! - [`convert_operation`]: converts one operation (parameters, request body,
//!   responses)
//! - [`rewrite_schema`]: redirects `#/definitions/` references in any subtree
//!
//! Every component is a pure mapping from an input subtree to an output
//! subtree; nothing is cached or shared between conversions.

mod converter;
mod operation;
mod parser;
mod schema;
mod types;

pub use converter::convert_document;
pub use operation::convert_operation;
pub use parser::{InputFormat, SwaggerParser};
pub use schema::{rewrite_ref, rewrite_schema};
pub use types::*;
