//! CSV export implementation.
//!
//! Writes one row per application -> package dependency, for spreadsheet use.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// CSV exporter implementation.
pub struct CsvExporter;

impl CsvExporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, data: &ExportData<'_>, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "application,application_version,package,package_version,status"
        )?;

        // Walk the source records rather than the graph so duplicates survive
        for app in &data.dataset.applications {
            for pkg in &app.base_packages {
                writeln!(
                    writer,
                    "{},{},{},{},{}",
                    Self::escape_field(&app.name),
                    Self::escape_field(&app.version),
                    Self::escape_field(&pkg.name),
                    Self::escape_field(&pkg.version),
                    pkg.status.label()
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Application, Dataset, Status};

    fn export_lines(dataset: &Dataset) -> Vec<String> {
        let data = ExportData::new(dataset);
        let mut output = Vec::new();
        CsvExporter.export(&data, &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_csv_export_basic() {
        let dataset = Dataset::from_applications(vec![
            Application::new("AppA", "v1")
                .with_requirement("Python", "3.9", Status::Compatible)
                .with_requirement("Node", "14", Status::Deprecated),
            Application::new("AppB", "v1").with_requirement("Python", "3.9", Status::Compatible),
        ]);
        let lines = export_lines(&dataset);

        // Header + one row per edge
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "application,application_version,package,package_version,status"
        );
        assert_eq!(lines[1], "AppA,v1,Python,3.9,compatible");
        assert_eq!(lines[2], "AppA,v1,Node,14,deprecated");
        assert_eq!(lines[3], "AppB,v1,Python,3.9,compatible");
    }

    #[test]
    fn test_csv_escape_field() {
        // No escaping needed
        assert_eq!(CsvExporter::escape_field("simple"), "simple");

        // Contains comma
        assert_eq!(
            CsvExporter::escape_field("has,comma"),
            "\"has,comma\""
        );

        // Contains quotes
        assert_eq!(
            CsvExporter::escape_field("has\"quote"),
            "\"has\"\"quote\""
        );

        // Contains newline
        assert_eq!(
            CsvExporter::escape_field("has\nnewline"),
            "\"has\nnewline\""
        );
    }

    #[test]
    fn test_csv_export_special_characters() {
        let dataset = Dataset::from_applications(vec![Application::new("App", "1")
            .with_requirement("Node.js", ">=16, <20", Status::Testing)]);
        let lines = export_lines(&dataset);

        // Version with comma should be quoted
        assert_eq!(lines[1], "App,1,Node.js,\">=16, <20\",testing");
    }

    #[test]
    fn test_csv_export_header_only_when_empty() {
        let lines = export_lines(&Dataset::from_applications(vec![]));
        assert_eq!(lines.len(), 1);
    }
}
