use std::collections::HashMap;

use multiload_types::{Document, DocumentId};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::builder::MultiLoadResultBuilder;
use crate::error::{ResultError, ResultResult};

/// Outcome of a bulk load-by-id operation.
///
/// `results` holds one slot per requested id, in request order; `None` marks
/// an id with no matching document. `includes` holds the referenced
/// documents fetched alongside, which the caller feeds into its document
/// cache so that later navigation needs no extra round trip.
///
/// The value is produced once by the loader and read thereafter. Mutation
/// through [`set_results`](Self::set_results) and
/// [`set_includes`](Self::set_includes) replaces a whole sequence and needs
/// exclusive access, so readers never observe a half-written aggregate.
///
/// On the wire the aggregate is the server's response body:
/// `{"Results": [...], "Includes": [...]}`. A missing or `null` sequence
/// reads as empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiLoadResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    results: Vec<Option<Document>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    includes: Vec<Document>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl MultiLoadResult {
    /// Build an aggregate from both sequences in one step.
    pub fn new(results: Vec<Option<Document>>, includes: Vec<Document>) -> Self {
        debug!(
            results = results.len(),
            includes = includes.len(),
            "multi-load result assembled"
        );
        Self { results, includes }
    }

    /// Start a builder for incremental population.
    pub fn builder() -> MultiLoadResultBuilder {
        MultiLoadResultBuilder::new()
    }

    /// Result slots in request order.
    pub fn results(&self) -> &[Option<Document>] {
        &self.results
    }

    /// Replace every result slot.
    ///
    /// No length or content check is made; keeping slots aligned with the
    /// request is the producer's job.
    pub fn set_results(&mut self, results: Vec<Option<Document>>) {
        debug!(
            previous = self.results.len(),
            results = results.len(),
            "replacing multi-load results"
        );
        self.results = results;
    }

    /// Included documents, as gathered by the producer.
    pub fn includes(&self) -> &[Document] {
        &self.includes
    }

    /// Replace every included document.
    pub fn set_includes(&mut self, includes: Vec<Document>) {
        debug!(
            previous = self.includes.len(),
            includes = includes.len(),
            "replacing multi-load includes"
        );
        self.includes = includes;
    }

    /// Number of result slots, i.e. the number of ids requested.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// `true` when there are neither result slots nor includes.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.includes.is_empty()
    }

    /// Number of slots holding a document.
    pub fn found_count(&self) -> usize {
        self.results.iter().filter(|slot| slot.is_some()).count()
    }

    /// Positions of slots with no document, ascending.
    pub fn missing_positions(&self) -> Vec<usize> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.is_none().then_some(i))
            .collect()
    }

    /// Consume the aggregate and return `(results, includes)`.
    pub fn into_parts(self) -> (Vec<Option<Document>>, Vec<Document>) {
        (self.results, self.includes)
    }

    /// Pair each requested id with its result slot.
    ///
    /// `ids` must be the id list of the original request, in request order.
    /// Returns [`ResultError::LengthMismatch`] when it does not have exactly
    /// one entry per slot.
    pub fn correlate<'a, I>(&'a self, ids: &'a [I]) -> ResultResult<Vec<(&'a I, Option<&'a Document>)>> {
        if ids.len() != self.results.len() {
            return Err(ResultError::LengthMismatch {
                requested: ids.len(),
                results: self.results.len(),
            });
        }
        Ok(ids
            .iter()
            .zip(self.results.iter().map(Option::as_ref))
            .collect())
    }

    /// Index included documents by their `@metadata.@id`.
    ///
    /// Includes without an id are skipped. If an id occurs more than once,
    /// the first occurrence is kept.
    pub fn includes_by_id(&self) -> HashMap<DocumentId, &Document> {
        let mut index = HashMap::with_capacity(self.includes.len());
        let mut skipped = 0usize;
        for doc in &self.includes {
            match doc.id() {
                Some(id) => {
                    index.entry(id).or_insert(doc);
                }
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            debug!(skipped, "includes without @id left out of index");
        }
        index
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn document() -> impl Strategy<Value = Document> {
        prop::collection::vec(("[A-Za-z]{1,8}", any::<i64>()), 0..4).prop_map(|fields| {
            let mut doc = Document::new();
            for (name, value) in fields {
                doc.insert(name, value);
            }
            doc
        })
    }

    fn slots() -> impl Strategy<Value = Vec<Option<Document>>> {
        prop::collection::vec(prop::option::of(document()), 0..8)
    }

    fn includes() -> impl Strategy<Value = Vec<Document>> {
        prop::collection::vec(document(), 0..8)
    }

    proptest! {
        #[test]
        fn results_read_back_what_was_set(s in slots()) {
            let mut result = MultiLoadResult::default();
            result.set_results(s.clone());
            prop_assert_eq!(result.results(), s.as_slice());
        }

        #[test]
        fn includes_read_back_what_was_set(s in includes()) {
            let mut result = MultiLoadResult::default();
            result.set_includes(s.clone());
            prop_assert_eq!(result.includes(), s.as_slice());
        }

        #[test]
        fn setting_includes_leaves_results_alone(s1 in slots(), s2 in includes()) {
            let mut result = MultiLoadResult::default();
            result.set_results(s1.clone());
            result.set_includes(s2);
            prop_assert_eq!(result.results(), s1.as_slice());
        }

        #[test]
        fn set_results_is_idempotent(s in slots()) {
            let mut once = MultiLoadResult::default();
            once.set_results(s.clone());
            let mut twice = MultiLoadResult::default();
            twice.set_results(s.clone());
            twice.set_results(s);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn found_plus_missing_is_len(s in slots()) {
            let result = MultiLoadResult::new(s, Vec::new());
            prop_assert_eq!(result.found_count() + result.missing_positions().len(), result.len());
        }

        #[test]
        fn json_preserves_slots(s1 in slots(), s2 in includes()) {
            let result = MultiLoadResult::new(s1, s2);
            let json = serde_json::to_string(&result).unwrap();
            let parsed: MultiLoadResult = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, result);
        }
    }
}
