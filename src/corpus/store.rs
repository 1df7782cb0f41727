// Corpus snapshots — the in-memory document store.
//
// A Corpus is an immutable snapshot: documents in a deterministic order,
// built once by the loader and never mutated. Reload builds a fresh Corpus
// and publishes it through CorpusHandle, so concurrent readers always see
// one consistent snapshot.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// A single policy document, keyed by its path relative to the
/// knowledge-base root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

/// An immutable snapshot of the loaded knowledge base.
///
/// Documents are held in id order, which fixes the iteration order the
/// retrieval engine depends on for its fast path and tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<Document>,
}

impl Corpus {
    /// Build a snapshot from loaded documents. Sorts by id so iteration
    /// order is independent of filesystem enumeration order.
    pub fn new(mut docs: Vec<Document>) -> Self {
        docs.sort_by(|a, b| a.id.cmp(&b.id));
        Self { docs }
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.docs.iter().find(|d| d.id == id)
    }

    /// Iterate documents in the fixed snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.iter()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Total character count across all documents (status display).
    pub fn total_chars(&self) -> usize {
        self.docs.iter().map(|d| d.text.chars().count()).sum()
    }
}

/// Shared handle to the current corpus snapshot.
///
/// Readers take an Arc clone of the current snapshot and keep using it for
/// the whole operation; a reload swaps in a brand-new Arc without touching
/// snapshots already handed out.
pub struct CorpusHandle {
    inner: RwLock<Arc<Corpus>>,
}

impl CorpusHandle {
    pub fn new(corpus: Corpus) -> Self {
        Self {
            inner: RwLock::new(Arc::new(corpus)),
        }
    }

    /// The current snapshot. Cheap: clones the Arc, not the documents.
    pub fn snapshot(&self) -> Arc<Corpus> {
        self.inner.read().unwrap().clone()
    }

    /// Atomically publish a replacement snapshot.
    pub fn replace(&self, corpus: Corpus) {
        *self.inner.write().unwrap() = Arc::new(corpus);
    }
}
