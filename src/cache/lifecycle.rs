use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cache::fetcher::FetchError;
use crate::cache::store::StoreError;

/// Versioned worker lifecycle. `Superseded` is entered when a newer version
/// takes over while this one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    New,
    Installing,
    Waiting,
    Activating,
    Active,
    Superseded,
}

impl LifecyclePhase {
    /// Transition table. Install failure returns to `New`: retry on next
    /// load is the hosting runtime's job, the phase just has to allow it.
    pub fn can_transition(self, to: LifecyclePhase) -> bool {
        use LifecyclePhase::*;
        matches!(
            (self, to),
            (New, Installing)
                | (Installing, Waiting)
                | (Installing, New)
                | (Waiting, Activating)
                | (Activating, Active)
                | (Active, Superseded)
        )
    }
}

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("invalid lifecycle transition {from:?} -> {to:?}")]
    InvalidTransition {
        from: LifecyclePhase,
        to: LifecyclePhase,
    },
    #[error("precache failed for {path}: {source}")]
    Precache {
        path: String,
        #[source]
        source: FetchError,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Operator command channel; `{"type": "CLEAR_CACHE"}` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorMessage {
    #[serde(rename = "CLEAR_CACHE")]
    ClearCache,
    #[serde(rename = "SKIP_WAITING")]
    SkipWaiting,
}
