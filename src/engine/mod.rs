//! Execution seams: definition building and pipeline running
//!
//! The service never executes a pipeline itself. It parses requests
//! through a [`DefinitionBuilder`] and hands the validated definition to
//! an [`ExperimentRunner`], which owns the actual linking computation
//! and produces the result payload.

use std::future::Future;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::experiment::ExperimentDefinition;

/// Parses a serialized experiment description into a validated
/// definition.
pub trait DefinitionBuilder: Send + Sync {
    /// Parse and validate `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Definition`] for malformed or invalid input.
    fn parse(&self, raw: &str) -> Result<ExperimentDefinition>;
}

/// Executes a validated experiment definition.
///
/// A run is a single synchronous unit of work from the caller's point of
/// view: it completes or fails, with no timeout, cancellation, or retry
/// at this boundary.
pub trait ExperimentRunner: Send + Sync {
    /// Run the pipeline and produce the result payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Execution`] on internal pipeline failure; no
    /// partial result survives a failed run.
    fn run(&self, definition: &ExperimentDefinition) -> impl Future<Output = Result<Value>> + Send;
}

/// The standard builder for the JSON experiment request format.
///
/// Unlike the discovery endpoints, the builder does not fall back to the
/// default pipeline type: a request that names an unknown type is
/// rejected, because here the caller stated it explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDefinitionBuilder;

impl JsonDefinitionBuilder {
    /// Create the builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DefinitionBuilder for JsonDefinitionBuilder {
    fn parse(&self, raw: &str) -> Result<ExperimentDefinition> {
        let definition: ExperimentDefinition =
            serde_json::from_str(raw).map_err(|e| Error::Definition(e.to_string()))?;
        definition.validate()?;
        Ok(definition)
    }
}
