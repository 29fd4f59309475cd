//! Dependency network built on petgraph.
//!
//! Flattens applications and their nested base-package requirements into a
//! deduplicated node list and an edge list, suitable for force-directed
//! layout and node-link export.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use crate::dataset::{composite_id, Application, PackageRequirement, Status};

/// The kind of entity a node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// An application release.
    Application,
    /// A base-package version.
    BasePackage,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Application => write!(f, "application"),
            Self::BasePackage => write!(f, "basePackage"),
        }
    }
}

/// Relationship carried by an edge. There is only one today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Relationship {
    /// The source application depends on the target package.
    #[default]
    #[serde(rename = "depends-on")]
    DependsOn,
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DependsOn => write!(f, "depends-on"),
        }
    }
}

/// A node in the dependency network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    /// Composite `name-version` identifier, unique in the graph.
    pub id: String,
    /// Display name, `name version`.
    pub name: String,
    /// Application or base package.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Grouping key, the bare name.
    pub group: String,
    /// Package status; applications have none.
    #[serde(serialize_with = "serialize_node_status")]
    pub status: Option<Status>,
}

impl GraphNode {
    /// Creates the node for an application.
    pub fn application(app: &Application) -> Self {
        Self {
            id: app.id(),
            name: app.display_name(),
            kind: NodeKind::Application,
            group: app.name.clone(),
            status: None,
        }
    }

    /// Creates the node for a base-package requirement.
    ///
    /// The status is taken from the first requirement that introduced the
    /// package version.
    pub fn base_package(pkg: &PackageRequirement) -> Self {
        Self {
            id: pkg.id(),
            name: pkg.display_name(),
            kind: NodeKind::BasePackage,
            group: pkg.name.clone(),
            status: Some(pkg.status),
        }
    }

    /// Returns true if this node is an application.
    pub fn is_application(&self) -> bool {
        self.kind == NodeKind::Application
    }

}

fn serialize_node_status<S: Serializer>(
    status: &Option<Status>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(status.map_or("application", |s| s.label()))
}

/// An edge from an application to a base package it depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    /// Id of the application node.
    pub source: String,
    /// Id of the base-package node.
    pub target: String,
    /// Status of this particular requirement.
    pub status: Status,
    /// Always `depends-on`.
    pub relationship: Relationship,
}

impl GraphEdge {
    /// Creates a `depends-on` edge.
    pub fn depends_on(source: impl Into<String>, target: impl Into<String>, status: Status) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            status,
            relationship: Relationship::DependsOn,
        }
    }
}

/// A directed graph of applications and the base packages they use.
///
/// Nodes are keyed by kind and composite id, so a package version whose id
/// matches an application release still gets its own node. Edges always
/// point from an application to a base package.
///
/// # Example
///
/// ```rust
/// use compatscope::dataset::{Application, Status};
/// use compatscope::graph::NetworkGraph;
///
/// let apps = vec![
///     Application::new("AppA", "v1")
///         .with_requirement("Python", "3.9", Status::Compatible)
///         .with_requirement("Node", "14", Status::Deprecated),
///     Application::new("AppB", "v1")
///         .with_requirement("Python", "3.9", Status::Compatible),
/// ];
///
/// let graph = NetworkGraph::from_applications(&apps);
/// assert_eq!(graph.application_nodes().len(), 2);
/// assert_eq!(graph.base_package_nodes().len(), 2);
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    /// The underlying directed graph
    graph: DiGraph<GraphNode, GraphEdge>,
    /// Maps (kind, composite id) to node indices for O(1) lookup
    node_indices: HashMap<(NodeKind, String), NodeIndex>,
}

impl Default for NetworkGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
        }
    }

    /// Creates a new graph with pre-allocated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            node_indices: HashMap::with_capacity(nodes),
        }
    }

    /// Builds the network for a set of applications.
    ///
    /// One pass over the applications adds their nodes, then one pass over
    /// every requirement adds each package version the first time it is
    /// seen and one edge per requirement.
    pub fn from_applications(apps: &[Application]) -> Self {
        let references: usize = apps.iter().map(|a| a.base_packages.len()).sum();
        let mut graph = Self::with_capacity(apps.len() + references, references);

        for app in apps {
            graph.add_node(GraphNode::application(app));
        }

        for app in apps {
            let app_id = app.id();
            for pkg in &app.base_packages {
                graph.add_node(GraphNode::base_package(pkg));
                graph.add_edge(GraphEdge::depends_on(app_id.as_str(), pkg.id(), pkg.status));
            }
        }

        graph
    }

    /// Adds a node.
    ///
    /// If a node of the same kind and id already exists, returns its
    /// existing index without modification.
    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        let key = (node.kind, node.id.clone());
        if let Some(&idx) = self.node_indices.get(&key) {
            return idx;
        }

        let idx = self.graph.add_node(node);
        self.node_indices.insert(key, idx);
        idx
    }

    fn index_of(&self, kind: NodeKind, id: &str) -> Option<NodeIndex> {
        self.node_indices.get(&(kind, id.to_string())).copied()
    }

    /// Application first, then base package.
    fn any_index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index_of(NodeKind::Application, id)
            .or_else(|| self.index_of(NodeKind::BasePackage, id))
    }

    /// Adds an edge between two existing nodes.
    ///
    /// # Returns
    ///
    /// `true` if the edge was added, `false` if the source application or
    /// the target base package is missing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use compatscope::dataset::{Application, PackageRequirement, Status};
    /// use compatscope::graph::{GraphEdge, GraphNode, NetworkGraph};
    ///
    /// let mut graph = NetworkGraph::new();
    /// graph.add_node(GraphNode::application(&Application::new("App", "1")));
    /// graph.add_node(GraphNode::base_package(&PackageRequirement::new(
    ///     "Python", "3.9", Status::Stable,
    /// )));
    ///
    /// assert!(graph.add_edge(GraphEdge::depends_on("App-1", "Python-3.9", Status::Stable)));
    /// assert!(!graph.add_edge(GraphEdge::depends_on("App-1", "Ruby-3", Status::Stable)));
    /// ```
    pub fn add_edge(&mut self, edge: GraphEdge) -> bool {
        let Some(from_idx) = self.index_of(NodeKind::Application, &edge.source) else {
            return false;
        };
        let Some(to_idx) = self.index_of(NodeKind::BasePackage, &edge.target) else {
            return false;
        };

        self.graph.add_edge(from_idx, to_idx, edge);
        true
    }

    /// Gets a node by id, preferring the application when an application
    /// and a package share it.
    pub fn get_node(&self, id: &str) -> Option<&GraphNode> {
        self.any_index_of(id)
            .and_then(|idx| self.graph.node_weight(idx))
    }

    /// Gets a node by kind and id.
    pub fn get_node_of_kind(&self, kind: NodeKind, id: &str) -> Option<&GraphNode> {
        self.index_of(kind, id)
            .and_then(|idx| self.graph.node_weight(idx))
    }

    /// Gets the packages a node depends on (outgoing edges).
    ///
    /// A package referenced twice by the same application is returned twice.
    pub fn get_dependencies(&self, id: &str) -> Vec<&GraphNode> {
        self.neighbors(NodeKind::Application, id, Direction::Outgoing)
    }

    /// Gets the applications that depend on a node (incoming edges).
    pub fn get_dependents(&self, id: &str) -> Vec<&GraphNode> {
        self.neighbors(NodeKind::BasePackage, id, Direction::Incoming)
    }

    fn neighbors(&self, kind: NodeKind, id: &str, direction: Direction) -> Vec<&GraphNode> {
        let Some(idx) = self.index_of(kind, id) else {
            return Vec::new();
        };

        let mut found: Vec<(usize, &GraphNode)> = self
            .graph
            .edges_directed(idx, direction)
            .filter_map(|edge| {
                let other = match direction {
                    Direction::Outgoing => edge.target(),
                    Direction::Incoming => edge.source(),
                };
                self.graph
                    .node_weight(other)
                    .map(|node| (edge.id().index(), node))
            })
            .collect();
        // petgraph walks adjacency lists newest-first; report insertion order.
        found.sort_by_key(|(edge_index, _)| *edge_index);
        found.into_iter().map(|(_, node)| node).collect()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> Vec<&GraphNode> {
        self.graph.node_weights().collect()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> Vec<&GraphEdge> {
        self.graph.edge_weights().collect()
    }

    /// Nodes of one kind, in insertion order.
    pub fn get_nodes_by_kind(&self, kind: NodeKind) -> Vec<&GraphNode> {
        self.graph
            .node_weights()
            .filter(|node| node.kind == kind)
            .collect()
    }

    /// Application nodes, in insertion order.
    pub fn application_nodes(&self) -> Vec<&GraphNode> {
        self.get_nodes_by_kind(NodeKind::Application)
    }

    /// Base-package nodes, in insertion order.
    pub fn base_package_nodes(&self) -> Vec<&GraphNode> {
        self.get_nodes_by_kind(NodeKind::BasePackage)
    }

    /// Position of a node in [`nodes`](Self::nodes) order.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.any_index_of(id).map(|idx| idx.index())
    }

    /// Edge endpoints as positions in [`nodes`](Self::nodes) order.
    pub fn edge_endpoints(&self) -> Vec<(usize, usize)> {
        self.graph
            .edge_references()
            .map(|edge| (edge.source().index(), edge.target().index()))
            .collect()
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Checks if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Checks if a node exists in the graph.
    pub fn contains(&self, id: &str) -> bool {
        self.any_index_of(id).is_some()
    }

    /// Looks up a node id by composite parts.
    pub fn contains_version(&self, name: &str, version: &str) -> bool {
        self.contains(&composite_id(name, version))
    }
}
