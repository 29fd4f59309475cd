//! Shared types for the compatibility dataset.
//!
//! This module defines the records carried by the dataset document:
//! applications with their base-package requirements, the matrix
//! cross-reference, per-package consumer lists and the roadmap.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Compatibility classification of a dependency version.
///
/// The set is closed; any other string in a document is a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Works with the application.
    Compatible,
    /// Still works, but support is ending.
    Deprecated,
    /// Does not work with the application.
    Incompatible,
    /// Under evaluation.
    Testing,
    /// Current stable release line.
    Stable,
    /// Long-term support release line.
    Lts,
    /// End of life, no longer supported.
    Eol,
    /// Announced but not yet released.
    Planned,
}

/// Display grouping of statuses, used for colors and icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    /// compatible, stable, lts
    Good,
    /// deprecated
    Warning,
    /// incompatible, eol
    Critical,
    /// testing, planned
    Pending,
}

impl Status {
    /// Every status, in the order the dashboard cycles through them.
    pub const ALL: [Status; 8] = [
        Status::Compatible,
        Status::Deprecated,
        Status::Incompatible,
        Status::Testing,
        Status::Stable,
        Status::Lts,
        Status::Eol,
        Status::Planned,
    ];

    /// Returns the lowercase document label.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Compatible => "compatible",
            Status::Deprecated => "deprecated",
            Status::Incompatible => "incompatible",
            Status::Testing => "testing",
            Status::Stable => "stable",
            Status::Lts => "lts",
            Status::Eol => "eol",
            Status::Planned => "planned",
        }
    }

    /// Returns the display tone for this status.
    pub fn tone(&self) -> StatusTone {
        match self {
            Status::Compatible | Status::Stable | Status::Lts => StatusTone::Good,
            Status::Deprecated => StatusTone::Warning,
            Status::Incompatible | Status::Eol => StatusTone::Critical,
            Status::Testing | Status::Planned => StatusTone::Pending,
        }
    }

    /// Returns true if a dependency in this status counts as a risk factor.
    pub fn is_risk(&self) -> bool {
        matches!(self, Status::Deprecated | Status::Incompatible)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Status::ALL
            .into_iter()
            .find(|status| status.label() == lower)
            .ok_or_else(|| format!("Unknown status: '{}'", s))
    }
}

/// A base package required by an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRequirement {
    /// Package name (e.g., "Python", "Node.js").
    pub name: String,
    /// Version or version range (e.g., "3.9.x", "16.x - 18.x").
    pub version: String,
    /// Compatibility of this version with the application.
    pub status: Status,
}

impl PackageRequirement {
    /// Creates a new requirement.
    pub fn new(name: impl Into<String>, version: impl Into<String>, status: Status) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            status,
        }
    }

    /// Composite identifier, `name-version`.
    pub fn id(&self) -> String {
        composite_id(&self.name, &self.version)
    }

    /// Human readable name, `name version`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

/// An application release and the base packages it runs on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Ordered base-package requirements.
    #[serde(default)]
    pub base_packages: Vec<PackageRequirement>,
}

impl Application {
    /// Creates an application with no requirements.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            base_packages: Vec::new(),
        }
    }

    /// Adds a requirement, builder style.
    pub fn with_requirement(
        mut self,
        name: impl Into<String>,
        version: impl Into<String>,
        status: Status,
    ) -> Self {
        self.base_packages
            .push(PackageRequirement::new(name, version, status));
        self
    }

    /// Composite identifier, `name-version`.
    pub fn id(&self) -> String {
        composite_id(&self.name, &self.version)
    }

    /// Human readable name, `name version`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

/// One cell of the compatibility matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionCell {
    /// Version or range the application supports.
    pub version: String,
    /// Compatibility status.
    pub status: Status,
    /// Free-form note.
    #[serde(default)]
    pub notes: Option<String>,
}

/// A matrix row: one base package keyed by application display-name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixPackage {
    /// Package name.
    pub name: String,
    /// Application display-name -> supported version.
    #[serde(default)]
    pub versions: HashMap<String, VersionCell>,
}

impl MatrixPackage {
    /// Looks up the cell for an application display-name.
    pub fn cell(&self, application: &str) -> Option<&VersionCell> {
        self.versions.get(application)
    }
}

/// An application consuming a given base-package version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumer {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Compatibility status.
    pub status: Status,
}

/// A base-package version and the applications that consume it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyPackage {
    /// Package name.
    pub name: String,
    /// Package version.
    pub version: String,
    /// Consuming applications.
    #[serde(default)]
    pub applications: Vec<Consumer>,
}

impl DependencyPackage {
    /// Human readable name, `name version`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

/// A point on a package roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    /// Package version.
    pub version: String,
    /// Lifecycle status.
    pub status: Status,
    /// End-of-life date, as written in the document.
    pub eol: String,
    /// Display-names of applications using this version.
    #[serde(default)]
    pub apps: Vec<String>,
}

impl TimelineItem {
    /// Advice shown next to versions that need attention.
    pub fn advisory(&self) -> Option<&'static str> {
        match self.status {
            Status::Deprecated => Some("Action Required: Plan migration before EOL date"),
            Status::Eol => Some("Critical: This version is no longer supported"),
            _ => None,
        }
    }
}

/// Per-package lifecycle timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapEntry {
    /// Package name.
    pub package: String,
    /// Ordered timeline.
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
}

/// The full dataset document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Matrix rows.
    #[serde(default)]
    pub base_packages: Vec<MatrixPackage>,
    /// Matrix columns, as application display-names.
    #[serde(default)]
    pub matrix_applications: Vec<String>,
    /// Applications and their requirements.
    pub applications: Vec<Application>,
    /// Package versions and their consumers.
    #[serde(default)]
    pub dependency_base_packages: Vec<DependencyPackage>,
    /// Package roadmaps, if the document has any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roadmap: Option<Vec<RoadmapEntry>>,
}

impl Dataset {
    /// Creates a dataset holding only applications.
    pub fn from_applications(applications: Vec<Application>) -> Self {
        Self {
            base_packages: Vec::new(),
            matrix_applications: Vec::new(),
            applications,
            dependency_base_packages: Vec::new(),
            roadmap: None,
        }
    }

    /// Returns the roadmap entries, empty when the document has none.
    pub fn roadmap_entries(&self) -> &[RoadmapEntry] {
        self.roadmap.as_deref().unwrap_or(&[])
    }

    /// Total number of dependency references across all applications.
    pub fn requirement_count(&self) -> usize {
        self.applications
            .iter()
            .map(|app| app.base_packages.len())
            .sum()
    }
}

/// Builds the `name-version` identifier shared by applications and packages.
pub fn composite_id(name: &str, version: &str) -> String {
    format!("{}-{}", name, version)
}
