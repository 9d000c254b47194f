//! Records Module
//!
//! Record models, validation, persisted record stores and list filtering.

pub mod ids;
pub mod models;
pub mod search;
pub mod store;
pub mod validation;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;

pub use validation::ErrorMap;

/// Record errors
#[derive(Debug, Error)]
pub enum RecordError {
    /// Required fields or formats failed; the map holds per-field messages.
    #[error("{summary}")]
    Invalid { summary: String, errors: ErrorMap },

    /// Submission refused before validation produced an error map.
    #[error("{0}")]
    Rejected(String),

    #[error("No record at position {0}")]
    OutOfRange(usize),

    #[error("No record with id {0}")]
    UnknownId(i64),

    #[error("Record at position {0} changed before the deletion was confirmed")]
    Stale(usize),

    #[error("No contact ids left")]
    IdsExhausted,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl RecordError {
    /// Per-field messages, if this is a validation failure.
    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            Self::Invalid { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Whether the user can fix this by editing the form.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Invalid { .. } | Self::Rejected(_))
    }
}

pub type RecordResult<T> = Result<T, RecordError>;

/// A value persisted under a fixed blob key.
pub trait Record: Clone + PartialEq + Serialize + DeserializeOwned {
    const BLOB_KEY: &'static str;
}

// Re-exports
pub use models::{Contact, Registration, Student};
pub use search::{filter, VisibleRow};
pub use store::RecordStore;
