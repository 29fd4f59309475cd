//! Markdown export implementation.
//!
//! Exports the summary, compatibility matrix and roadmap in Markdown format
//! for documentation and reporting.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Escape pipes so cell content does not split table columns.
    fn cell(value: &str) -> String {
        value.replace('|', "\\|")
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData<'_>, writer: &mut W) -> io::Result<()> {
        let dataset = data.dataset;

        // Title
        writeln!(writer, "# Version Compatibility Report")?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Applications | {} |", data.summary.applications)?;
        writeln!(
            writer,
            "| Unique Package Versions | {} |",
            data.summary.unique_packages
        )?;
        writeln!(writer, "| Risk Factors | {} |", data.summary.risk_factors)?;
        writeln!(writer)?;

        // Matrix
        if !dataset.base_packages.is_empty() && !dataset.matrix_applications.is_empty() {
            writeln!(writer, "## Compatibility Matrix")?;
            writeln!(writer)?;

            let header: Vec<String> = dataset
                .matrix_applications
                .iter()
                .map(|a| Self::cell(a))
                .collect();
            writeln!(writer, "| Base Package | {} |", header.join(" | "))?;
            writeln!(
                writer,
                "|--------------|{}",
                "---|".repeat(dataset.matrix_applications.len())
            )?;

            for pkg in &dataset.base_packages {
                let cells: Vec<String> = dataset
                    .matrix_applications
                    .iter()
                    .map(|app| match pkg.cell(app) {
                        Some(cell) => format!("{} ({})", Self::cell(&cell.version), cell.status),
                        None => "N/A".to_string(),
                    })
                    .collect();
                writeln!(writer, "| {} | {} |", Self::cell(&pkg.name), cells.join(" | "))?;
            }
            writeln!(writer)?;
        }

        // Dependencies per application
        if !dataset.applications.is_empty() {
            writeln!(writer, "## Applications")?;
            writeln!(writer)?;
            for app in &dataset.applications {
                writeln!(
                    writer,
                    "### {} ({} base packages)",
                    app.display_name(),
                    app.base_packages.len()
                )?;
                writeln!(writer)?;
                writeln!(writer, "| Package | Version | Status |")?;
                writeln!(writer, "|---------|---------|--------|")?;
                for pkg in &app.base_packages {
                    writeln!(
                        writer,
                        "| {} | {} | {} |",
                        Self::cell(&pkg.name),
                        Self::cell(&pkg.version),
                        pkg.status
                    )?;
                }
                writeln!(writer)?;
            }
        }

        // Roadmap
        writeln!(writer, "## Roadmap")?;
        writeln!(writer)?;
        if dataset.roadmap_entries().is_empty() {
            writeln!(writer, "No roadmap data available.")?;
            writeln!(writer)?;
        }
        for entry in dataset.roadmap_entries() {
            writeln!(writer, "### {}", entry.package)?;
            writeln!(writer)?;
            for item in &entry.timeline {
                writeln!(
                    writer,
                    "- **{}** `{}` (EOL: {}) used by: {}",
                    item.version,
                    item.status,
                    item.eol,
                    if item.apps.is_empty() {
                        "none".to_string()
                    } else {
                        item.apps.join(", ")
                    }
                )?;
                if let Some(advice) = item.advisory() {
                    writeln!(writer, "  - > {}", advice)?;
                }
            }
            writeln!(writer)?;
        }

        // Footer
        writeln!(writer, "---")?;
        writeln!(writer, "*Generated by compatscope*")?;

        Ok(())
    }
}
