use attest_types::EntryId;
use serde::{Deserialize, Serialize};

/// A unit of recallable content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecallEntry {
    pub body: String,
    pub tags: Vec<String>,
}

impl RecallEntry {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// A recall query. `limit` bounds the result set; `tag` optionally narrows
/// it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecallQuery {
    pub limit: usize,
    pub tag: Option<String>,
    pub text: String,
}

impl RecallQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            limit: 10,
            tag: None,
            text: text.into(),
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// One scored query result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecallHit {
    pub entry: RecallEntry,
    pub id: EntryId,
    pub score: f64,
}
