use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::artifact::{DEFAULT_SCOPE, DEFAULT_TYPE};

/// Why the resolver kept or dropped the edge leading to an artifact
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resolution {
    #[default]
    Included,
    Parent,
    OmittedForConflict,
    OmittedForDuplicate,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Included => "INCLUDED",
            Resolution::Parent => "PARENT",
            Resolution::OmittedForConflict => "OMITTED_FOR_CONFLICT",
            Resolution::OmittedForDuplicate => "OMITTED_FOR_DUPLICATE",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved artifact as reported by the dependency resolver
///
/// `effective_version` is the version selected after conflict resolution and
/// may differ from the requested `version`; it is absent when both agree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default)]
    effective_version: Option<String>,
    #[serde(default = "default_types")]
    pub types: BTreeSet<String>,
    #[serde(default)]
    pub classifiers: BTreeSet<String>,
    #[serde(default = "default_scopes")]
    pub scopes: BTreeSet<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub resolution: Resolution,
}

fn default_types() -> BTreeSet<String> {
    BTreeSet::from([DEFAULT_TYPE.to_string()])
}

fn default_scopes() -> BTreeSet<String> {
    BTreeSet::from([DEFAULT_SCOPE.to_string()])
}

impl Artifact {
    pub fn builder() -> ArtifactBuilder {
        ArtifactBuilder::new()
    }

    /// Stable node identifier: `group:artifact:version:classifier:type`
    pub fn natural_key(&self) -> String {
        let classifiers: Vec<&str> = self.classifiers.iter().map(String::as_str).collect();
        let types: Vec<&str> = self.types.iter().map(String::as_str).collect();
        format!(
            "{}:{}:{}:{}:{}",
            self.group_id,
            self.artifact_id,
            self.version,
            classifiers.join("/"),
            types.join("/")
        )
    }

    /// Version selected after conflict resolution
    pub fn effective_version(&self) -> &str {
        self.effective_version.as_deref().unwrap_or(&self.version)
    }

    /// Scope used for style matching and PlantUML stereotypes
    pub fn primary_scope(&self) -> &str {
        self.scopes
            .iter()
            .next()
            .map(String::as_str)
            .unwrap_or(DEFAULT_SCOPE)
    }

    /// Packaging type used for style matching
    pub fn primary_type(&self) -> &str {
        self.types
            .iter()
            .next()
            .map(String::as_str)
            .unwrap_or(DEFAULT_TYPE)
    }
}

pub struct ArtifactBuilder {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    effective_version: Option<String>,
    types: BTreeSet<String>,
    classifiers: BTreeSet<String>,
    scopes: BTreeSet<String>,
    optional: bool,
    resolution: Resolution,
}

impl Default for ArtifactBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactBuilder {
    pub fn new() -> Self {
        Self {
            group_id: None,
            artifact_id: None,
            version: None,
            effective_version: None,
            types: BTreeSet::new(),
            classifiers: BTreeSet::new(),
            scopes: BTreeSet::new(),
            optional: false,
            resolution: Resolution::Included,
        }
    }

    pub fn with_group_id(mut self, group_id: &str) -> Self {
        self.group_id = Some(group_id.to_string());
        self
    }

    pub fn with_artifact_id(mut self, artifact_id: &str) -> Self {
        self.artifact_id = Some(artifact_id.to_string());
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_effective_version(mut self, effective_version: &str) -> Self {
        self.effective_version = Some(effective_version.to_string());
        self
    }

    pub fn with_type(mut self, packaging_type: &str) -> Self {
        self.types.insert(packaging_type.to_string());
        self
    }

    pub fn with_classifier(mut self, classifier: &str) -> Self {
        self.classifiers.insert(classifier.to_string());
        self
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scopes.insert(scope.to_string());
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }
}

impl crate::common::ConfigBuilder for ArtifactBuilder {
    type Config = Artifact;

    fn build(self) -> Result<Self::Config, crate::error::ExportError> {
        Ok(Artifact {
            group_id: self.group_id.ok_or_else(|| {
                crate::error::ExportError::ConfigurationError {
                    message: "Missing required field: group_id".to_string(),
                }
            })?,
            artifact_id: self.artifact_id.ok_or_else(|| {
                crate::error::ExportError::ConfigurationError {
                    message: "Missing required field: artifact_id".to_string(),
                }
            })?,
            version: self.version.ok_or_else(|| {
                crate::error::ExportError::ConfigurationError {
                    message: "Missing required field: version".to_string(),
                }
            })?,
            effective_version: self.effective_version,
            types: if self.types.is_empty() {
                default_types()
            } else {
                self.types
            },
            classifiers: self.classifiers,
            scopes: if self.scopes.is_empty() {
                default_scopes()
            } else {
                self.scopes
            },
            optional: self.optional,
            resolution: self.resolution,
        })
    }
}
