//! JSON export implementation.
//!
//! Writes the dependency network in node-link form, the shape force-layout
//! libraries consume, together with the summary counts.

use super::{ExportData, Exporter};
use crate::graph::{GraphEdge, GraphNode};
use crate::views::Summary;
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Root JSON export structure.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    summary: Summary,
    nodes: Vec<&'a GraphNode>,
    links: Vec<&'a GraphEdge>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData<'_>, writer: &mut W) -> io::Result<()> {
        let export = JsonExport {
            summary: data.summary,
            nodes: data.graph.nodes(),
            links: data.graph.edges(),
        };

        serde_json::to_writer_pretty(&mut *writer, &export)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writeln!(writer)?;

        Ok(())
    }
}
