//! Multi-language normalization for survey documents.
//!
//! Surveys created before multi-language support carry their text as plain
//! strings; multi-language surveys carry maps keyed by language code with a
//! reserved `"default"` anchor entry. This crate converts between the two
//! representations while keeping documents schema-valid: questions, welcome
//! and thank-you cards, and choice lists are localized for a given set of
//! language codes, validated, and handed back as a new document. The
//! caller's input is never mutated.
//!
//! The crate owns no I/O. Documents arrive deserialized from the service
//! layer and leave the same way; rendering, persistence, and transport are
//! someone else's problem.

pub mod i18n;
pub mod schema;
pub mod survey;

pub use schema::{FieldViolation, SchemaError};
