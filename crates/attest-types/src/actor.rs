use serde::{Deserialize, Serialize};

/// Who authorized or performed an action.
///
/// Attached to promotion records and correction events; immutable after
/// attachment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Actor {
    /// A human operator, identified by a stable operator id.
    Human { id: String },
    /// An agent run, identified by agent name and run id.
    Agent { id: String, run_id: String },
    /// The system itself (scheduled maintenance, migrations).
    System { component: String },
}

impl Actor {
    pub fn human(id: impl Into<String>) -> Self {
        Actor::Human { id: id.into() }
    }

    pub fn agent(id: impl Into<String>, run_id: impl Into<String>) -> Self {
        Actor::Agent {
            id: id.into(),
            run_id: run_id.into(),
        }
    }

    pub fn system(component: impl Into<String>) -> Self {
        Actor::System {
            component: component.into(),
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Actor::Human { .. })
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::Human { id } => write!(f, "human:{id}"),
            Actor::Agent { id, run_id } => write!(f, "agent:{id}/{run_id}"),
            Actor::System { component } => write!(f, "system:{component}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_serialization() {
        let json = serde_json::to_string(&Actor::human("op-7")).unwrap();
        assert!(json.contains("\"kind\":\"human\""));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Actor::agent("planner", "run-1").to_string(), "agent:planner/run-1");
        assert_eq!(Actor::system("migrator").to_string(), "system:migrator");
    }
}
