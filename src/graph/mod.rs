//! Graph module for the application / base-package network.
//!
//! This module provides [`NetworkGraph`], which flattens applications and
//! their requirements into deduplicated nodes and per-requirement edges,
//! and [`ForceLayout`], which positions that graph for drawing.
//!
//! # Example
//!
//! ```rust
//! use compatscope::dataset::{Application, Status};
//! use compatscope::graph::{ForceLayout, NetworkGraph};
//!
//! let apps = vec![Application::new("App", "1").with_requirement("Node", "18", Status::Lts)];
//! let graph = NetworkGraph::from_applications(&apps);
//!
//! let mut layout = ForceLayout::new(&graph);
//! layout.run(50);
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(layout.len(), 2);
//! ```

mod layout;
mod network;

pub use layout::{ForceLayout, ForceLayoutState, Point};
pub use network::{GraphEdge, GraphNode, NetworkGraph, NodeKind, Relationship};
