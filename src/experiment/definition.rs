//! Experiment definition: the validated form of an experiment request

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pipeline::{PipelineConfig, PipelineType};

/// A validated experiment request.
///
/// Built once by a [`DefinitionBuilder`](crate::engine::DefinitionBuilder)
/// and immutable from then on: the runner consumes it, the store keeps it
/// alongside the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentDefinition {
    /// Profile constraining which linkers and stages are valid.
    #[serde(default)]
    pub pipeline_type: PipelineType,
    /// Matching strategy for comparing resolved entities, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching: Option<String>,
    /// Pipeline graphs to execute, one experiment task each.
    pub linker_configs: Vec<PipelineConfig>,
    /// Knowledge bases to resolve against.
    #[serde(default)]
    pub knowledge_bases: Vec<String>,
    /// Named datasets to run over (exclusive with `input_texts`).
    #[serde(default)]
    pub datasets: Vec<String>,
    /// Ad-hoc input texts to run over (exclusive with `datasets`).
    #[serde(default)]
    pub input_texts: Vec<String>,
}

impl ExperimentDefinition {
    /// Structural validation of the whole definition.
    ///
    /// A definition must carry at least one pipeline graph and exactly
    /// one input source (datasets or input texts, not both, not neither).
    /// Each pipeline graph is validated in turn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Definition`] describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.linker_configs.is_empty() {
            return Err(Error::Definition(
                "experiment carries no linker configuration".to_string(),
            ));
        }
        match (self.datasets.is_empty(), self.input_texts.is_empty()) {
            (true, true) => {
                return Err(Error::Definition(
                    "experiment carries neither datasets nor input texts".to_string(),
                ))
            }
            (false, false) => {
                return Err(Error::Definition(
                    "experiment carries both datasets and input texts".to_string(),
                ))
            }
            _ => {}
        }
        for config in &self.linker_configs {
            config.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json(sources: &str) -> String {
        format!(
            r#"{{
                "pipelineType": "FULL",
                "linkerConfigs": [{{
                    "pipelineConfigType": "complex",
                    "components": {{"md": [{{"id": "MD1", "value": "Babelfy"}}]}},
                    "startComponents": ["MD1"],
                    "endComponents": ["MD1"]
                }}],
                "knowledgeBases": ["Wikidata"],
                {sources}
            }}"#
        )
    }

    #[test]
    fn test_definition_parses_request_format() {
        let def: ExperimentDefinition =
            serde_json::from_str(&minimal_json(r#""datasets": ["ace2004"]"#)).unwrap();
        assert_eq!(def.pipeline_type, PipelineType::Full);
        assert_eq!(def.datasets, ["ace2004"]);
        assert!(def.validate().is_ok());
    }

    #[test]
    fn test_definition_pipeline_type_defaults_to_full() {
        let def: ExperimentDefinition = serde_json::from_str(
            r#"{"linkerConfigs": [], "inputTexts": ["Napoleon was born in Ajaccio."]}"#,
        )
        .unwrap();
        assert_eq!(def.pipeline_type, PipelineType::Full);
    }

    #[test]
    fn test_validate_requires_a_pipeline() {
        let def: ExperimentDefinition =
            serde_json::from_str(r#"{"linkerConfigs": [], "datasets": ["ace2004"]}"#).unwrap();
        let err = def.validate().unwrap_err();
        assert!(err.to_string().contains("no linker configuration"));
    }

    #[test]
    fn test_validate_requires_exactly_one_input_source() {
        let def: ExperimentDefinition = serde_json::from_str(&minimal_json(
            r#""datasets": ["ace2004"], "inputTexts": ["text"]"#,
        ))
        .unwrap();
        assert!(def.validate().is_err());

        let def: ExperimentDefinition =
            serde_json::from_str(&minimal_json(r#""datasets": []"#)).unwrap();
        assert!(def.validate().is_err());
    }
}
