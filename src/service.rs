//! Orchestration service: the experiment boundary
//!
//! Sequences builder -> runner -> store for execution and answers the
//! stateless configuration-discovery queries. Every retrieval failure is
//! recovered into an error-shaped [`ResultDocument`]; only definition
//! and execution failures propagate, since they occur before any id
//! exists to report through.

use std::sync::Arc;

use tracing::{info, warn};

use crate::engine::{DefinitionBuilder, ExperimentRunner};
use crate::error::{Error, Result};
use crate::experiment::{Experiment, ResultDocument, ResultStore};
use crate::pipeline::{Category, PipelineType};
use crate::registry::{ComponentRegistry, DatasetCatalog};

/// The experiment orchestration boundary.
///
/// Owns the [`ResultStore`] and borrows everything else through traits,
/// so the pipeline engine, dataset storage, and configuration registry
/// stay external collaborators. Boundary calls are independent units of
/// work; the store is the only shared mutable state.
#[derive(Debug)]
pub struct ExperimentService<B, R, C, G> {
    builder: B,
    runner: R,
    catalog: C,
    registry: G,
    store: Arc<ResultStore>,
}

impl<B, R, C, G> ExperimentService<B, R, C, G>
where
    B: DefinitionBuilder,
    R: ExperimentRunner,
    C: DatasetCatalog,
    G: ComponentRegistry,
{
    /// Assemble a service with a fresh, empty result store.
    #[must_use]
    pub fn new(builder: B, runner: R, catalog: C, registry: G) -> Self {
        Self::with_store(builder, runner, catalog, registry, Arc::new(ResultStore::new()))
    }

    /// Assemble a service around an existing store.
    #[must_use]
    pub fn with_store(
        builder: B,
        runner: R,
        catalog: C,
        registry: G,
        store: Arc<ResultStore>,
    ) -> Self {
        Self {
            builder,
            runner,
            catalog,
            registry,
            store,
        }
    }

    /// The result store backing this service.
    #[must_use]
    pub fn store(&self) -> &Arc<ResultStore> {
        &self.store
    }

    /// Execute a serialized experiment description end to end.
    ///
    /// Parses and validates the description, runs the pipeline, then
    /// assigns a fresh id and records the result. Nothing is stored on
    /// failure; the call runs to completion or fails, with no retry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Definition`] for malformed or invalid
    /// descriptions and [`Error::Execution`] when the pipeline run
    /// fails. Both propagate verbatim.
    pub async fn execute(&self, experiment_data: &str) -> Result<Experiment> {
        info!(bytes = experiment_data.len(), "received experiment request");

        let definition = self.builder.parse(experiment_data)?;
        let payload = self.runner.run(&definition).await?;

        let result = ResultDocument::success(payload);
        let id = self.store.next_id();
        self.store.record_result(id, &result);
        info!(id, "experiment completed");

        Ok(Experiment::new(id, definition, result))
    }

    /// Resolve which experiment a result view should show.
    ///
    /// An absent id resolves to the most recently completed experiment;
    /// a present id passes through verbatim, with format validation
    /// deferred to [`fetch_result_json`](Self::fetch_result_json). The
    /// returned reference is what a presentation layer uses to request
    /// the result body separately.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoExperiments`] when the id is absent and
    /// nothing has completed yet.
    pub fn retrieve(&self, id: Option<&str>) -> Result<String> {
        match id {
            Some(id) => {
                info!(id, "show experiment result");
                Ok(id.to_string())
            }
            None => {
                let last = self.store.last_experiment_id()?;
                info!(id = last, "show last experiment result");
                Ok(last.to_string())
            }
        }
    }

    /// Fetch an experiment result as a document.
    ///
    /// This call never fails to its caller: every error path is
    /// converted into an error-shaped document so downstream rendering
    /// has a single shape to handle. An absent id resolves to the last
    /// completed experiment; non-integer ids yield an error document
    /// tagged with id 0, and negative ids report as nonexistent since
    /// they can never have been assigned.
    pub fn fetch_result_json(&self, id_text: Option<&str>) -> ResultDocument {
        let id_text = match id_text {
            Some(text) => text.to_string(),
            None => match self.store.last_experiment_id() {
                Ok(last) => {
                    info!(id = last, "returning JSON of last experiment result");
                    last.to_string()
                }
                Err(_) => {
                    warn!("result requested but no experiments have been recorded yet");
                    return ResultDocument::error(0, "No experiments have been recorded yet");
                }
            },
        };

        let Ok(id) = id_text.parse::<i64>() else {
            warn!(id = %id_text, "non-integer experiment task ID");
            return ResultDocument::error(0, format!("Non-integer experiment task ID: {id_text}"));
        };

        // Negative ids parse as integers but can never have been
        // assigned, so they take the not-found path with the id intact.
        let Ok(assigned) = u64::try_from(id) else {
            return ResultDocument::error(id, format!("Experiment with ID '{id}' doesn't exist"));
        };

        match self.store.read_result(assigned) {
            Ok(document) => document,
            Err(Error::NotFound(_)) => {
                ResultDocument::error(id, format!("Experiment with ID '{id}' doesn't exist"))
            }
            Err(Error::Storage { reason, .. }) => ResultDocument::error(id, reason),
            Err(other) => ResultDocument::error(id, other.to_string()),
        }
    }

    /// All available dataset names, sorted ascending.
    #[must_use]
    pub fn list_datasets(&self) -> Vec<String> {
        self.catalog.datasets().into_iter().collect()
    }

    /// Linker names valid under the named pipeline type, sorted
    /// ascending.
    ///
    /// An absent or unrecognized type name falls back to the default
    /// pipeline type; unrecognized names are logged but never an error.
    #[must_use]
    pub fn list_linkers(&self, pipeline_type: Option<&str>) -> Vec<String> {
        let resolved = match pipeline_type {
            None => PipelineType::default(),
            Some(name) => PipelineType::from_name(name).unwrap_or_else(|| {
                warn!(
                    name,
                    default = PipelineType::default().name(),
                    "invalid pipeline type, returning linkers for default"
                );
                PipelineType::default()
            }),
        };
        self.registry.linkers_for(resolved).into_iter().collect()
    }

    /// Component names for an inter-component processor category,
    /// sorted ascending and deduplicated.
    ///
    /// An unknown category name returns the union of all categories, so
    /// a front end asking for something this build does not know still
    /// gets every option to offer. The category parameter itself is
    /// mandatory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParameter`] when `category` is absent.
    pub fn list_components(&self, category: Option<&str>) -> Result<Vec<String>> {
        let name = category.ok_or(Error::MissingParameter("icpType"))?;

        let names = match Category::from_name(name) {
            Some(category) => self.registry.names_for(category),
            None => Category::ALL
                .iter()
                .flat_map(|c| self.registry.names_for(*c))
                .collect(),
        };
        Ok(names.into_iter().collect())
    }
}
