//! Lifecycle of a single query

use std::fmt;

use serde::{Deserialize, Serialize};

/// State of one submit/poll/fetch lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QueryState {
    /// Nothing sent yet
    #[default]
    Init,

    /// The service accepted the query and returned an operation handle
    Submitted,

    /// Waiting for the operation to be processed
    Polling,

    /// Operation processed; results may be fetched
    Completed,

    /// Retry budget exhausted or transport fault
    Failed,
}

impl QueryState {
    /// Check if this state ends the lifecycle
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Check if this state can transition to another state
    pub fn can_transition_to(&self, target: QueryState) -> bool {
        match (self, target) {
            (Self::Init, Self::Submitted) => true,
            (Self::Init, Self::Failed) => true,

            (Self::Submitted, Self::Polling) => true,
            (Self::Submitted, Self::Failed) => true,

            (Self::Polling, Self::Completed) => true,
            (Self::Polling, Self::Failed) => true,

            // Terminal states cannot transition
            (Self::Completed, _) => false,
            (Self::Failed, _) => false,

            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Submitted => "submitted",
            Self::Polling => "polling",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for QueryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
