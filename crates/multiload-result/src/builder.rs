use multiload_types::Document;

use crate::result::MultiLoadResult;

/// Collects result slots and includes, then produces a [`MultiLoadResult`]
/// in one step.
///
/// Loaders push one slot per requested id in request order, using
/// [`push_missing`](Self::push_missing) for ids the server had no document
/// for, and push every included document they received.
#[derive(Clone, Debug, Default)]
pub struct MultiLoadResultBuilder {
    results: Vec<Option<Document>>,
    includes: Vec<Document>,
}

impl MultiLoadResultBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for a request of `ids` documents.
    pub fn with_capacity(ids: usize) -> Self {
        Self {
            results: Vec::with_capacity(ids),
            includes: Vec::new(),
        }
    }

    /// Replace all result slots collected so far.
    pub fn results(mut self, results: Vec<Option<Document>>) -> Self {
        self.results = results;
        self
    }

    /// Replace all includes collected so far.
    pub fn includes(mut self, includes: Vec<Document>) -> Self {
        self.includes = includes;
        self
    }

    /// Append the slot for the next requested id.
    pub fn push_result(&mut self, slot: Option<Document>) -> &mut Self {
        self.results.push(slot);
        self
    }

    /// Append an empty slot for a requested id with no document.
    pub fn push_missing(&mut self) -> &mut Self {
        self.results.push(None);
        self
    }

    pub fn push_include(&mut self, doc: Document) -> &mut Self {
        self.includes.push(doc);
        self
    }

    /// Slots collected so far.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn build(self) -> MultiLoadResult {
        MultiLoadResult::new(self.results, self.includes)
    }
}

impl Extend<Option<Document>> for MultiLoadResultBuilder {
    fn extend<T: IntoIterator<Item = Option<Document>>>(&mut self, iter: T) {
        self.results.extend(iter);
    }
}
