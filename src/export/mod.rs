//! Export functionality for compatibility data.
//!
//! This module provides exporters for writing the dependency network, the
//! summary counts and the matrix/roadmap in various formats: JSON, CSV,
//! and Markdown.

pub mod csv;
pub mod json;
pub mod markdown;

use crate::dataset::Dataset;
use crate::graph::NetworkGraph;
use crate::views::Summary;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON format - node-link graph plus summary
    Json,
    /// CSV format - one row per dependency edge
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: json, csv, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Data container for export operations.
///
/// Borrows the dataset and holds everything derived from it.
#[derive(Debug, Clone)]
pub struct ExportData<'a> {
    /// The loaded dataset
    pub dataset: &'a Dataset,
    /// Dependency network built from the applications
    pub graph: NetworkGraph,
    /// Aggregate counts
    pub summary: Summary,
}

impl<'a> ExportData<'a> {
    /// Derive export data from a dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            graph: NetworkGraph::from_applications(&dataset.applications),
            summary: Summary::from_dataset(dataset),
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData<'_>, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &ExportData<'_>,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Json => json::JsonExporter.export(data, writer),
        ExportFormat::Csv => csv::CsvExporter.export(data, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &ExportData<'_>) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
