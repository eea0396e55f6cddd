//! OpenAPI 3.0 output model
//!
//! The converted document is built as these types and serialized once.
//! Optional keys are skipped entirely when absent so the output never
//! carries empty placeholders.

mod types;

pub use types::*;
