use serde::{Deserialize, Serialize};

/// Envelope for persistence-tier records.
///
/// Persisted records carry an explicit `schema_version`; API-tier types do
/// not — their version is tracked by artifact identity. The persistence
/// collaborator wraps each record it writes in this envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Persisted<T> {
    pub payload: T,
    pub schema_version: u32,
}

impl<T: PersistSchema> Persisted<T> {
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            schema_version: T::SCHEMA_VERSION,
        }
    }

    /// True when the envelope's version matches the current schema.
    pub fn is_current(&self) -> bool {
        self.schema_version == T::SCHEMA_VERSION
    }
}

/// Declares the current persistence schema version of a record type.
pub trait PersistSchema {
    const SCHEMA_VERSION: u32;
}
