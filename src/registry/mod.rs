//! Dataset catalog and pipeline-component registry
//!
//! Both collaborators are consumed through traits: the service only
//! needs to enumerate names, and always re-sorts what it receives, so
//! implementations are free to return sets in any internal order. The
//! in-memory `Static*` implementations back tests and embedded setups.

use std::collections::{BTreeSet, HashMap};

use crate::pipeline::{Category, PipelineType};

/// Enumerates the datasets available for experiments.
pub trait DatasetCatalog: Send + Sync {
    /// Names of all available datasets. May be empty.
    fn datasets(&self) -> BTreeSet<String>;
}

/// Enumerates the valid pipeline-component choices.
pub trait ComponentRegistry: Send + Sync {
    /// Linker names valid under the given pipeline type.
    fn linkers_for(&self, pipeline_type: PipelineType) -> BTreeSet<String>;

    /// Component names registered under the given category.
    fn names_for(&self, category: Category) -> BTreeSet<String>;
}

/// Fixed in-memory dataset catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    datasets: BTreeSet<String>,
}

impl StaticCatalog {
    /// Build a catalog from dataset names. Duplicates collapse.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            datasets: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl DatasetCatalog for StaticCatalog {
    fn datasets(&self) -> BTreeSet<String> {
        self.datasets.clone()
    }
}

/// Fixed in-memory component registry.
///
/// # Example
///
/// ```rust
/// use linklab::pipeline::{Category, PipelineType};
/// use linklab::registry::{ComponentRegistry, StaticRegistry};
///
/// let registry = StaticRegistry::new()
///     .with_linker(PipelineType::Full, "Babelfy")
///     .with_component(Category::Combiner, "union");
///
/// assert!(registry.linkers_for(PipelineType::Full).contains("Babelfy"));
/// assert!(registry.names_for(Category::Splitter).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    linkers: HashMap<PipelineType, BTreeSet<String>>,
    components: HashMap<Category, BTreeSet<String>>,
}

impl StaticRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the stock linkers and inter-component
    /// processors.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for linker in ["Babelfy", "DBpediaSpotlight", "AIDA"] {
            registry = registry
                .with_linker(PipelineType::Full, linker)
                .with_linker(PipelineType::Md, linker);
        }
        registry
            .with_linker(PipelineType::Cg, "DBpediaLookup")
            .with_linker(PipelineType::Cg, "WikidataDict")
            .with_linker(PipelineType::MdCg, "Babelfy")
            .with_linker(PipelineType::MdCg, "DBpediaLookup")
            .with_linker(PipelineType::CgEd, "Babelfy")
            .with_linker(PipelineType::CgEd, "DBpediaSpotlight")
            .with_linker(PipelineType::Ed, "AIDA")
            .with_component(Category::Combiner, "union")
            .with_component(Category::Combiner, "intersection")
            .with_component(Category::Splitter, "copy")
            .with_component(Category::Translator, "DBP2WD")
    }

    /// Register a linker as valid under a pipeline type.
    #[must_use]
    pub fn with_linker(mut self, pipeline_type: PipelineType, name: impl Into<String>) -> Self {
        self.linkers
            .entry(pipeline_type)
            .or_default()
            .insert(name.into());
        self
    }

    /// Register a component name under a category.
    #[must_use]
    pub fn with_component(mut self, category: Category, name: impl Into<String>) -> Self {
        self.components
            .entry(category)
            .or_default()
            .insert(name.into());
        self
    }
}

impl ComponentRegistry for StaticRegistry {
    fn linkers_for(&self, pipeline_type: PipelineType) -> BTreeSet<String> {
        self.linkers.get(&pipeline_type).cloned().unwrap_or_default()
    }

    fn names_for(&self, category: Category) -> BTreeSet<String> {
        self.components.get(&category).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_collapses_duplicates() {
        let catalog = StaticCatalog::from_names(["kore50", "ace2004", "kore50"]);
        let names: Vec<String> = catalog.datasets().into_iter().collect();
        assert_eq!(names, ["ace2004", "kore50"]);
    }

    #[test]
    fn test_empty_registry_returns_empty_sets() {
        let registry = StaticRegistry::new();
        assert!(registry.linkers_for(PipelineType::Full).is_empty());
        assert!(registry.names_for(Category::Filter).is_empty());
    }

    #[test]
    fn test_linker_namespaces_are_per_pipeline_type() {
        let registry = StaticRegistry::new()
            .with_linker(PipelineType::Full, "Babelfy")
            .with_linker(PipelineType::Cg, "DBpediaLookup");

        assert!(registry.linkers_for(PipelineType::Full).contains("Babelfy"));
        assert!(!registry
            .linkers_for(PipelineType::Cg)
            .contains("Babelfy"));
    }

    #[test]
    fn test_defaults_cover_every_pipeline_type() {
        let registry = StaticRegistry::with_defaults();
        for pipeline_type in PipelineType::ALL {
            assert!(
                !registry.linkers_for(pipeline_type).is_empty(),
                "no linkers for {}",
                pipeline_type.name()
            );
        }
    }

    #[test]
    fn test_defaults_leave_filters_empty() {
        // No stock filters ship; the namespace still answers.
        let registry = StaticRegistry::with_defaults();
        assert!(registry.names_for(Category::Filter).is_empty());
        assert!(registry.names_for(Category::Combiner).contains("union"));
    }
}
