//! Result aggregate for bulk load-by-id operations.
//!
//! A bulk load asks the server for many documents at once and, optionally,
//! for the documents they reference through declared include paths. The
//! answer comes back as a [`MultiLoadResult`]:
//!
//! - `results` -- one slot per requested id, in request order. A slot is
//!   `None` when no document exists for that id.
//! - `includes` -- referenced documents fetched alongside, in no particular
//!   order, for the caller to place in its document cache.
//!
//! # Design Rules
//!
//! 1. Both sequences always exist; "nothing" is an empty `Vec`.
//! 2. The aggregate never validates, reorders, or deduplicates what the
//!    producer hands it.
//! 3. The aggregate holds no request ids. Correlating slots with ids is done
//!    against the caller's own request list (see [`MultiLoadResult::correlate`]).
//! 4. Construction and access never fail.

pub mod builder;
pub mod error;
pub mod result;

pub use builder::MultiLoadResultBuilder;
pub use error::{ResultError, ResultResult};
pub use result::MultiLoadResult;

pub use multiload_types::{Document, DocumentId};
