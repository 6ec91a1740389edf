//! Pipeline vocabulary: pipeline types and inter-component processor
//! categories
//!
//! A pipeline type names a configuration profile (which stages run) and
//! constrains which linkers are valid for an experiment. Inter-component
//! processors are the auxiliary stages composed around linkers.

mod config;

pub use config::{ComponentRef, Connection, PipelineConfig, PipelineConfigType};

use serde::{Deserialize, Serialize};

/// Pipeline configuration profile.
///
/// The profile names which stages of the entity-resolution pipeline run:
/// mention detection (MD), candidate generation (CG), and entity
/// disambiguation (ED). `Full` runs all stages and is the default used
/// whenever a request omits the type or names an unknown one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipelineType {
    /// Mention detection only.
    #[serde(rename = "MD")]
    Md,
    /// Candidate generation only.
    #[serde(rename = "CG")]
    Cg,
    /// Entity disambiguation only.
    #[serde(rename = "ED")]
    Ed,
    /// Mention detection followed by candidate generation.
    #[serde(rename = "MD_CG")]
    MdCg,
    /// Combined candidate generation and disambiguation.
    #[serde(rename = "CG_ED")]
    CgEd,
    /// The complete pipeline, all stages.
    #[default]
    #[serde(rename = "FULL")]
    Full,
}

impl PipelineType {
    /// All pipeline types, in wire-name order.
    pub const ALL: [Self; 6] = [
        Self::Md,
        Self::Cg,
        Self::Ed,
        Self::MdCg,
        Self::CgEd,
        Self::Full,
    ];

    /// Resolve a wire name (`"FULL"`, `"MD_CG"`, ...) to a pipeline type.
    ///
    /// Returns `None` for unrecognized names; the fallback-to-default
    /// policy lives at the service boundary, not here.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Wire name of this pipeline type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md => "MD",
            Self::Cg => "CG",
            Self::Ed => "ED",
            Self::MdCg => "MD_CG",
            Self::CgEd => "CG_ED",
            Self::Full => "FULL",
        }
    }
}

/// Inter-component processor category.
///
/// Each category is an independent namespace of component names in the
/// registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Merges the outputs of parallel branches into one stream.
    Combiner,
    /// Duplicates or partitions a stream across parallel branches.
    Splitter,
    /// Drops records that fail a predicate.
    Filter,
    /// Maps identifiers between knowledge bases.
    Translator,
}

impl Category {
    /// All categories, in wire-name order.
    pub const ALL: [Self; 4] = [
        Self::Combiner,
        Self::Splitter,
        Self::Filter,
        Self::Translator,
    ];

    /// Resolve a wire name (`"combiner"`, ...) to a category.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Wire name of this category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Combiner => "combiner",
            Self::Splitter => "splitter",
            Self::Filter => "filter",
            Self::Translator => "translator",
        }
    }
}
