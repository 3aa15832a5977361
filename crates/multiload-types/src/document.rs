use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TypeError;
use crate::id::DocumentId;
use crate::metadata;

/// Generic, schema-less document payload.
///
/// A `Document` is a JSON object whose fields keep their insertion order.
/// It is the lowest-level representation of a stored document, before the
/// caller maps it into a domain type. Nested values are arbitrary JSON:
/// objects, arrays, strings, numbers, booleans and null.
///
/// The server stores bookkeeping under the top-level `@metadata` object;
/// the accessors below read the well-known entries from it.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap an existing JSON object.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Borrow the underlying object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the document and return it as a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Consume the document and return the underlying object.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Set a field, returning the previous value if there was one.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// Remove a field without disturbing the order of the others.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.shift_remove(field)
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of top-level fields, `@metadata` included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Top-level fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    // ---- Metadata ----

    /// The `@metadata` object, if present and an object.
    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        self.0.get(metadata::METADATA).and_then(Value::as_object)
    }

    /// Document key from `@metadata.@id`.
    pub fn id(&self) -> Option<DocumentId> {
        self.metadata_str(metadata::ID)
            .filter(|s| !s.is_empty())
            .map(DocumentId::from)
    }

    /// Version tag from `@metadata.@etag`.
    pub fn etag(&self) -> Option<&str> {
        self.metadata_str(metadata::ETAG)
    }

    /// Collection name from `@metadata.Raven-Entity-Name`.
    pub fn entity_name(&self) -> Option<&str> {
        self.metadata_str(metadata::ENTITY_NAME)
    }

    /// Raw `@metadata.Last-Modified` string.
    pub fn last_modified(&self) -> Option<&str> {
        self.metadata_str(metadata::LAST_MODIFIED)
    }

    /// Set `@metadata.@id`, creating `@metadata` if it is missing or not an object.
    pub fn with_id(mut self, id: impl Into<DocumentId>) -> Self {
        let meta = self
            .0
            .entry(metadata::METADATA)
            .or_insert_with(|| Value::Object(Map::new()));
        if !meta.is_object() {
            *meta = Value::Object(Map::new());
        }
        if let Value::Object(meta) = meta {
            meta.insert(metadata::ID.into(), Value::String(id.into().into_string()));
        }
        self
    }

    fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata()?.get(key)?.as_str()
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Value> for Document {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(TypeError::NotAnObject(kind_name(&other))),
        }
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Object(doc.0)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id() {
            Some(id) => write!(f, "Document({id}, {} fields)", self.len()),
            None => write!(f, "Document({} fields)", self.len()),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
