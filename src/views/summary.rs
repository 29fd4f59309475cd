//! Summary counts shown under the network graph.

use std::collections::HashSet;

use serde::Serialize;

use crate::dataset::{Application, Dataset};

/// Aggregate counts over a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Application records in the document.
    ///
    /// Repeated `name-version` records are each counted here, while the
    /// network graph draws them as one node.
    pub applications: usize,
    /// Unique base-package versions referenced by applications.
    pub unique_packages: usize,
    /// Deprecated or incompatible dependency entries.
    pub risk_factors: usize,
}

impl Summary {
    /// Computes the summary of a dataset.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self::from_applications(&dataset.applications)
    }

    /// Computes the summary of an application list.
    pub fn from_applications(apps: &[Application]) -> Self {
        Self {
            applications: apps.len(),
            unique_packages: unique_package_count(apps),
            risk_factors: risk_count(apps),
        }
    }
}

/// Number of distinct `name-version` pairs across all requirements.
pub fn unique_package_count(apps: &[Application]) -> usize {
    apps.iter()
        .flat_map(|app| app.base_packages.iter().map(|pkg| pkg.id()))
        .collect::<HashSet<_>>()
        .len()
}

/// Number of requirements whose status is deprecated or incompatible.
///
/// Every occurrence counts, including the same package referenced by
/// several applications.
pub fn risk_count(apps: &[Application]) -> usize {
    apps.iter()
        .flat_map(|app| &app.base_packages)
        .filter(|pkg| pkg.status.is_risk())
        .count()
}
