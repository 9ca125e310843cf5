//! In-memory recall backend for tests.

use std::collections::HashMap;
use std::sync::RwLock;

use attest_types::EntryId;

use crate::error::RecallError;
use crate::reader::RecallReader;
use crate::types::{RecallEntry, RecallHit, RecallQuery};
use crate::writer::RecallWriter;

/// Naive substring-match store. Scoring is the matched fraction of the
/// entry body, which is enough for contract tests.
pub struct InMemoryRecall {
    entries: RwLock<HashMap<EntryId, RecallEntry>>,
}

impl InMemoryRecall {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryRecall {
    fn default() -> Self {
        Self::new()
    }
}

impl RecallReader for InMemoryRecall {
    async fn query(&self, query: RecallQuery) -> Result<Vec<RecallHit>, RecallError> {
        if query.text.is_empty() {
            return Err(RecallError::InvalidQuery("empty query text".into()));
        }
        let entries = self
            .entries
            .read()
            .map_err(|_| RecallError::Backend("poisoned lock".into()))?;

        let mut hits: Vec<RecallHit> = entries
            .iter()
            .filter(|(_, entry)| entry.body.contains(&query.text))
            .filter(|(_, entry)| {
                query
                    .tag
                    .as_ref()
                    .map(|tag| entry.tags.contains(tag))
                    .unwrap_or(true)
            })
            .map(|(id, entry)| RecallHit {
                entry: entry.clone(),
                id: *id,
                score: query.text.len() as f64 / entry.body.len().max(1) as f64,
            })
            .collect();

        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(query.limit);
        Ok(hits)
    }
}

impl RecallWriter for InMemoryRecall {
    async fn store(&self, entry: RecallEntry) -> Result<EntryId, RecallError> {
        let id = EntryId::new();
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RecallError::Backend("poisoned lock".into()))?;
        entries.insert(id, entry);
        Ok(id)
    }

    async fn delete(&self, id: EntryId) -> Result<bool, RecallError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RecallError::Backend("poisoned lock".into()))?;
        Ok(entries.remove(&id).is_some())
    }
}
