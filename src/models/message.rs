use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// One conversation entry. `content` is kept verbatim, including internal
/// whitespace and line breaks. `timestamp` is a display-formatted local time
/// string: client-synthesized turns stamp it at creation, turns carried in
/// backend history keep whatever the backend sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub timestamp: String,
}

impl Turn {
    /// A user turn stamped with the current local time.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: display_timestamp(),
        }
    }

    /// An assistant turn stamped with the current local time.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: display_timestamp(),
        }
    }
}

fn display_timestamp() -> String {
    Local::now().format("%-I:%M:%S %p").to_string()
}
