//! Pipeline configuration graph
//!
//! A pipeline configuration is a small DAG: components grouped by stage
//! kind, directed connections between them, and explicit start/end
//! markers. The shape mirrors the experiment request wire format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How a pipeline configuration was authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineConfigType {
    /// A stock linker used as-is.
    Standard,
    /// A single linker with user-chosen settings.
    Custom,
    /// A free-form component graph.
    Complex,
}

/// One component instance inside a pipeline graph.
///
/// `id` is the node identifier referenced by connections (`"MD1"`,
/// `"CO1"`); `value` is the component name to instantiate (`"Babelfy"`,
/// `"union"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRef {
    /// Node identifier, unique within the graph.
    pub id: String,
    /// Component name resolved against the registry.
    pub value: String,
}

/// A directed edge between two component nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Node id the edge leaves from.
    pub source: String,
    /// Node id the edge points to.
    pub target: String,
}

/// A pipeline component graph as supplied by the experiment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Authoring shape of this configuration.
    pub pipeline_config_type: PipelineConfigType,
    /// Components grouped by stage kind (`"md"`, `"cg_ed"`, `"combiner"`, ...).
    pub components: BTreeMap<String, Vec<ComponentRef>>,
    /// Edges of the graph.
    #[serde(default)]
    pub connections: Vec<Connection>,
    /// Node ids the pipeline starts from.
    #[serde(default)]
    pub start_components: Vec<String>,
    /// Node ids whose output forms the result.
    #[serde(default)]
    pub end_components: Vec<String>,
}

impl PipelineConfig {
    /// All node ids declared in the component groups.
    #[must_use]
    pub fn node_ids(&self) -> Vec<&str> {
        self.components
            .values()
            .flatten()
            .map(|c| c.id.as_str())
            .collect()
    }

    /// Structural validation: every connection endpoint and every
    /// start/end marker must name a declared node, and node ids must be
    /// unique across groups.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Definition`] describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        let ids = self.node_ids();

        let mut seen = std::collections::BTreeSet::new();
        for id in &ids {
            if !seen.insert(*id) {
                return Err(Error::Definition(format!(
                    "duplicate component id '{id}' in pipeline configuration"
                )));
            }
        }

        let known = |id: &str| ids.contains(&id);
        for conn in &self.connections {
            if !known(&conn.source) || !known(&conn.target) {
                return Err(Error::Definition(format!(
                    "connection {} -> {} references an undeclared component",
                    conn.source, conn.target
                )));
            }
        }
        for id in self.start_components.iter().chain(&self.end_components) {
            if !known(id) {
                return Err(Error::Definition(format!(
                    "start/end marker references undeclared component '{id}'"
                )));
            }
        }
        Ok(())
    }
}
