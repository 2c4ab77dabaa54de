//! Document storage used by the HTTP surface.
//!
//! Persistence belongs to the business layer; the in-memory implementation is
//! for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;

use forgeerp_core::SalesDocumentId;
use forgeerp_sales::SalesDocument;

/// Key/value access to sales documents.
pub trait DocumentStore: Send + Sync {
    fn get(&self, id: SalesDocumentId) -> Option<SalesDocument>;
    fn upsert(&self, id: SalesDocumentId, doc: SalesDocument);
}

/// In-memory document store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    inner: RwLock<HashMap<SalesDocumentId, SalesDocument>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `doc` under a fresh id (assigning it to the document) and return the id.
    pub fn insert_new(&self, mut doc: SalesDocument) -> SalesDocumentId {
        let id = SalesDocumentId::new();
        doc.id = Some(id);
        self.upsert(id, doc);
        id
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn get(&self, id: SalesDocumentId) -> Option<SalesDocument> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    fn upsert(&self, id: SalesDocumentId, doc: SalesDocument) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(id, doc);
        }
    }
}
