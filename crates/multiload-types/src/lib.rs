//! Foundation types for multi-document load results.
//!
//! This crate provides the schema-less document payload and the identifier
//! type used by `multiload-result`. Payloads are kept in their generic form
//! until the caller materializes them into domain types.
//!
//! # Key Types
//!
//! - [`Document`] — Order-preserving JSON object, the generic document payload
//! - [`DocumentId`] — Case-insensitive document key (e.g. `users/1`)
//! - [`metadata`] — Well-known keys inside a document's `@metadata` object

pub mod document;
pub mod error;
pub mod id;
pub mod metadata;

pub use document::Document;
pub use error::{TypeError, TypeResult};
pub use id::DocumentId;

/// Re-exported so callers can build payloads without a direct `serde_json` dependency.
pub use serde_json::{Map, Value};
