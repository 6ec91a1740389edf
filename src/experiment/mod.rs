//! Experiments: definition, result document, and the result store
//!
//! ## Lifecycle
//!
//! ```text
//! request text ──parse──> ExperimentDefinition ──run──> payload
//!                                                         │
//!                                  ResultStore <──record──┘
//!                                       │
//!                                       └──read by id──> ResultDocument
//! ```
//!
//! An experiment is pending once its definition is built, completed once
//! its result is recorded under a fresh id, and retrievable by that id
//! for the lifetime of the store.

mod definition;
mod document;
mod store;

pub use definition::ExperimentDefinition;
pub use document::{ResultDocument, TaskState};
pub use store::ResultStore;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A completed experiment: its id, the definition that produced it, and
/// the recorded result.
///
/// Returned by [`ExperimentService::execute`](crate::service::ExperimentService::execute)
/// after the result has been recorded; immutable from then on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    /// Unique, monotonically assigned experiment id.
    pub id: u64,
    /// The validated pipeline configuration that was executed.
    pub definition: ExperimentDefinition,
    /// The recorded outcome.
    pub result: ResultDocument,
    /// When the result was recorded.
    pub created_at: DateTime<Utc>,
}

impl Experiment {
    /// Assemble a completed experiment, stamped with the current time.
    #[must_use]
    pub fn new(id: u64, definition: ExperimentDefinition, result: ResultDocument) -> Self {
        Self {
            id,
            definition,
            result,
            created_at: Utc::now(),
        }
    }
}
