//! Field-by-field contracts for slide data
//!
//! A [`Schema`] declares each field's kind, bounds, description and
//! default. It validates host-supplied data strictly, normalizes partial
//! data for rendering, and exports itself as a JSON Schema document.

mod export;
mod field;
mod normalize;
mod validate;

pub use field::{FieldKind, FieldSpec, Schema, TextKind};
pub use validate::json_type_name;
