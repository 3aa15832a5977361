//! Keys of the `@metadata` object the server attaches to every document.

/// Field holding the metadata object at the top level of a document.
pub const METADATA: &str = "@metadata";

/// Document key, e.g. `users/1`.
pub const ID: &str = "@id";

/// Server-assigned version tag.
pub const ETAG: &str = "@etag";

/// Collection the document belongs to.
pub const ENTITY_NAME: &str = "Raven-Entity-Name";

/// Last modification timestamp, as written by the server.
pub const LAST_MODIFIED: &str = "Last-Modified";
