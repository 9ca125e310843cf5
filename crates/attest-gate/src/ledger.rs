use std::collections::HashMap;
use std::sync::RwLock;

use attest_types::FactId;
use tracing::info;

use crate::error::LedgerError;
use crate::fact::{CorrectionEvent, Fact};

/// Kernel-owned fact store: write-once, many-reader, append-only.
///
/// Facts are stored by value and handed out as clones; nothing in the API
/// can mutate an appended fact. Corrections are appended alongside and
/// indexed by the fact they correct.
pub struct FactLedger {
    facts: RwLock<HashMap<FactId, Fact>>,
    corrections: RwLock<Vec<CorrectionEvent>>,
}

impl FactLedger {
    pub fn new() -> Self {
        Self {
            facts: RwLock::new(HashMap::new()),
            corrections: RwLock::new(Vec::new()),
        }
    }

    /// Append a fact. Duplicate ids violate append-only and are rejected.
    pub fn append(&self, fact: Fact) -> Result<(), LedgerError> {
        let mut facts = self.facts.write().map_err(|_| LedgerError::Poisoned)?;
        if facts.contains_key(&fact.id) {
            return Err(LedgerError::DuplicateFact(fact.id));
        }
        info!(fact_id = %fact.id, kind = %fact.content.kind, "Fact appended");
        facts.insert(fact.id, fact);
        Ok(())
    }

    pub fn get(&self, id: &FactId) -> Option<Fact> {
        self.facts.read().ok()?.get(id).cloned()
    }

    pub fn contains(&self, id: &FactId) -> bool {
        self.facts
            .read()
            .map(|facts| facts.contains_key(id))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.facts.read().map(|facts| facts.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn record_correction(&self, correction: CorrectionEvent) -> Result<(), LedgerError> {
        let mut corrections = self
            .corrections
            .write()
            .map_err(|_| LedgerError::Poisoned)?;
        info!(
            correction_id = %correction.id,
            corrects = %correction.corrects,
            replacement = %correction.replacement,
            "Correction recorded"
        );
        corrections.push(correction);
        Ok(())
    }

    /// All corrections referencing the given fact, in recording order.
    pub fn corrections_for(&self, id: &FactId) -> Vec<CorrectionEvent> {
        self.corrections
            .read()
            .map(|corrections| {
                corrections
                    .iter()
                    .filter(|c| c.corrects == *id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Default for FactLedger {
    fn default() -> Self {
        Self::new()
    }
}
