use thiserror::Error;

use crate::types::SourceId;

/// Error type for document-source fetch failures.
#[derive(Debug, Error)]
pub enum SidebarError {
    #[error("annotation source '{source_id}' is unavailable: {reason}")]
    SourceUnavailable { source_id: SourceId, reason: String },
    #[error("annotation fetch from '{source_id}' was interrupted: {reason}")]
    FetchInterrupted { source_id: SourceId, reason: String },
}
