//! # linklab: entity-resolution experiment orchestration
//!
//! linklab is the service core for configuring, executing, and
//! retrieving results of experiments: runs of a multi-stage
//! entity-resolution pipeline composed of linkers and inter-component
//! processors (combiners, splitters, filters, translators).
//!
//! The crate owns the experiment identity scheme, the synchronous
//! execution contract, the error taxonomy for malformed or absent
//! results, and the type-indexed enumeration of valid pipeline
//! components. The pipeline engine, dataset storage, and component
//! registry are external collaborators consumed through traits.
//!
//! ## Example
//!
//! ```rust
//! use linklab::registry::{StaticCatalog, StaticRegistry};
//! use linklab::service::ExperimentService;
//! use linklab::engine::JsonDefinitionBuilder;
//! # use linklab::engine::ExperimentRunner;
//! # use linklab::experiment::ExperimentDefinition;
//! # use std::future::Future;
//! # struct NoopRunner;
//! # impl ExperimentRunner for NoopRunner {
//! #     fn run(&self, _d: &ExperimentDefinition)
//! #         -> impl Future<Output = linklab::Result<serde_json::Value>> + Send {
//! #         async { Ok(serde_json::json!({"experimentTasks": []})) }
//! #     }
//! # }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> linklab::Result<()> {
//! let service = ExperimentService::new(
//!     JsonDefinitionBuilder::new(),
//!     NoopRunner,
//!     StaticCatalog::from_names(["ace2004", "kore50"]),
//!     StaticRegistry::with_defaults(),
//! );
//!
//! // Discovery is stateless and always sorted.
//! assert_eq!(service.list_datasets(), ["ace2004", "kore50"]);
//!
//! // Retrieval never fails: unknown ids come back as error documents.
//! assert!(service.fetch_result_json(Some("9999")).is_error());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod engine;
pub mod error;
pub mod experiment;
pub mod pipeline;
pub mod registry;
pub mod service;

pub use error::{Error, Result};
pub use experiment::{Experiment, ExperimentDefinition, ResultDocument, ResultStore};
pub use pipeline::{Category, PipelineType};
pub use service::ExperimentService;
