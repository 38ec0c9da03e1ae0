//! Search registry: the set of content hashes matched by each live query.
//!
//! Every incoming batch is tested against every registered query, so a
//! result that arrives for one search also lands in any other search it
//! matches. Result sets only grow.

use crate::app::event::{Event, SearchHit};
use crate::domain::Tth;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Snapshot of all registered queries and their results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchesState {
    queries: BTreeMap<String, Arc<BTreeSet<Tth>>>,
}

impl SearchesState {
    /// Hashes matched so far by `query`, or `None` if it was never registered.
    #[must_use]
    pub fn results(&self, query: &str) -> Option<&BTreeSet<Tth>> {
        self.queries.get(query).map(Arc::as_ref)
    }

    #[must_use]
    pub fn contains(&self, query: &str) -> bool {
        self.queries.contains_key(query)
    }

    /// Registered query texts, in lexical order.
    pub fn queries(&self) -> impl Iterator<Item = &String> {
        self.queries.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

/// Whether `filename` contains every term, case-sensitively.
///
/// Terms match independently anywhere in the name; with no terms every
/// filename matches.
///
/// # Examples
///
/// ```
/// use sparrow_state::slices::searches::matches_terms;
///
/// assert!(matches_terms(&["foo", "bar"], "foo_bar_baz"));
/// assert!(!matches_terms(&["foo", "bar"], "foo_baz"));
/// assert!(!matches_terms(&["Foo"], "foo"));
/// ```
#[must_use]
pub fn matches_terms(terms: &[&str], filename: &str) -> bool {
    terms.iter().all(|term| filename.contains(term))
}

/// Applies `event` to the search registry.
#[must_use]
pub fn reduce(state: &Arc<SearchesState>, event: &Event) -> Arc<SearchesState> {
    match event {
        Event::NewSearch { query_text } => {
            if state.contains(query_text) {
                return Arc::clone(state);
            }
            tracing::debug!(query = %query_text, "search registered");
            let mut next = Arc::clone(state);
            Arc::make_mut(&mut next)
                .queries
                .insert(query_text.clone(), Arc::default());
            next
        }
        Event::ReceiveSearchResult { batch } => apply_batch(state, batch),
        _ => Arc::clone(state),
    }
}

fn apply_batch(state: &Arc<SearchesState>, batch: &[SearchHit]) -> Arc<SearchesState> {
    if state.is_empty() || batch.is_empty() {
        return Arc::clone(state);
    }

    let _span = tracing::debug_span!(
        "searches",
        queries = state.len(),
        batch_len = batch.len()
    )
    .entered();

    let mut next = Arc::clone(state);
    let mut added = 0usize;
    for (query, results) in &mut Arc::make_mut(&mut next).queries {
        let terms: Vec<&str> = query.split_whitespace().collect();
        let fresh: Vec<&Tth> = batch
            .iter()
            .filter(|hit| matches_terms(&terms, &hit.name))
            .map(|hit| &hit.tth)
            .filter(|tth| !results.contains(*tth))
            .collect();
        if fresh.is_empty() {
            continue;
        }
        let results = Arc::make_mut(results);
        for tth in fresh {
            if results.insert(tth.clone()) {
                added += 1;
            }
        }
    }

    tracing::debug!(added, "search results merged");
    next
}
