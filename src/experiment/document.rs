//! Result documents: the one shape every retrieval returns
//!
//! Downstream presentation code renders the same document shape whether
//! an experiment succeeded or its retrieval failed, so errors are a
//! closed variant serialized into the legacy wire form rather than a
//! transport-level failure.

use serde::ser::{Serialize, Serializer};
use serde_json::{json, Value};

/// State of an experiment task inside a result document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TaskState {
    /// Task is still being assembled.
    #[serde(rename = "BUILD")]
    Build,
    /// Task finished successfully.
    #[serde(rename = "DONE")]
    Done,
    /// Task failed; `errorMessage` carries the reason.
    #[serde(rename = "FAILED")]
    Failed,
}

/// A retrievable experiment result.
///
/// `Success` wraps the runner's payload verbatim. `Error` carries the
/// originating experiment id (0 when the id itself was unparseable;
/// negative ids parse but can never have been assigned) and a
/// human-readable message; on the wire it takes the same
/// `experimentTasks` shape as a failed run, so callers never need a
/// second rendering path.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultDocument {
    /// Pipeline output plus execution metadata, as produced by the runner.
    Success(Value),
    /// A recovered retrieval failure.
    Error {
        /// Originating experiment id, or 0 if the id was unparseable.
        id: i64,
        /// Human-readable failure description.
        message: String,
    },
}

impl ResultDocument {
    /// Wrap a runner payload.
    #[must_use]
    pub const fn success(payload: Value) -> Self {
        Self::Success(payload)
    }

    /// Build an error-shaped document. Never fails.
    #[must_use]
    pub fn error(id: i64, message: impl Into<String>) -> Self {
        Self::Error {
            id,
            message: message.into(),
        }
    }

    /// Whether this document reports a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The successful payload, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error { .. } => None,
        }
    }

    /// The wire form of this document.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Success(value) => value.clone(),
            Self::Error { id, message } => json!({
                "experimentTasks": [{
                    "taskId": id,
                    "state": TaskState::Failed,
                    "errorMessage": message,
                }]
            }),
        }
    }
}

impl Serialize for ResultDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serializes_payload_verbatim() {
        let payload = json!({"experimentTasks": [{"taskId": 7, "state": "DONE"}]});
        let doc = ResultDocument::success(payload.clone());

        assert_eq!(doc.to_value(), payload);
        assert_eq!(doc.payload(), Some(&payload));
        assert!(!doc.is_error());
    }

    #[test]
    fn test_error_takes_failed_task_shape() {
        let doc = ResultDocument::error(42, "something broke");
        let value = doc.to_value();

        let task = &value["experimentTasks"][0];
        assert_eq!(task["taskId"], 42);
        assert_eq!(task["state"], "FAILED");
        assert_eq!(task["errorMessage"], "something broke");
        assert!(doc.is_error());
        assert_eq!(doc.payload(), None);
    }

    #[test]
    fn test_task_state_wire_names() {
        assert_eq!(serde_json::to_string(&TaskState::Build).unwrap(), "\"BUILD\"");
        assert_eq!(serde_json::to_string(&TaskState::Done).unwrap(), "\"DONE\"");
        assert_eq!(
            serde_json::to_string(&TaskState::Failed).unwrap(),
            "\"FAILED\""
        );
    }
}
