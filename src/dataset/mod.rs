//! Dataset module for compatscope.
//!
//! This module provides the data model of the compatibility document and
//! the functions that read it from strings and files.
//!
//! # Example
//!
//! ```
//! use compatscope::dataset::{parse_str, Status};
//!
//! let json = r#"{"applications": [
//!     {"name": "App A", "version": "v1", "basePackages": [
//!         {"name": "Node", "version": "14", "status": "deprecated"}
//!     ]}
//! ]}"#;
//!
//! let dataset = parse_str(json).unwrap();
//! let risky = dataset.applications[0]
//!     .base_packages
//!     .iter()
//!     .filter(|p| p.status.is_risk())
//!     .count();
//! assert_eq!(risky, 1);
//! assert_eq!(dataset.applications[0].base_packages[0].status, Status::Deprecated);
//! ```

pub mod document;
pub mod sample;
pub mod types;

// Re-export commonly used types for convenience
pub use document::{parse_file, parse_str, ParseError, ParseResult};
pub use sample::{sample_dataset, SAMPLE_JSON};

pub use types::{
    composite_id, Application, Consumer, Dataset, DependencyPackage, MatrixPackage,
    PackageRequirement, RoadmapEntry, Status, StatusTone, TimelineItem, VersionCell,
};
