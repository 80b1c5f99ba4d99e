use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the two isolated conversation/document contexts a session
/// targets. Fixed for the lifetime of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Documents live only in the backend's working set for this session.
    Local,
    /// Documents are persisted to the durable remote store.
    Persistent,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Local => "local",
            Scope::Persistent => "persistent",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
