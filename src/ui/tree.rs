//! Tree data structures for the App → Base and Base → Apps views
//!
//! Provides `TreeNode` for hierarchical data and `FlattenedNode`
//! for rendering the tree as a scrollable list in the TUI.

use crate::dataset::{Application, DependencyPackage, Status};

/// A node in a relationship tree
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Application or package name
    pub name: String,
    /// Version shown next to the name
    pub version: String,
    /// Compatibility status of the relationship, if this node is a leaf
    pub status: Option<Status>,
    /// Child nodes
    pub children: Vec<TreeNode>,
    /// Whether this node is expanded in the UI
    pub expanded: bool,
    /// Depth in the tree (0 = root)
    pub depth: usize,
}

impl TreeNode {
    /// Create a new tree node
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            status: None,
            children: Vec::new(),
            expanded: false,
            depth: 0,
        }
    }

    /// Create a leaf carrying a status
    pub fn with_status(name: impl Into<String>, version: impl Into<String>, status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::new(name, version)
        }
    }

    /// Build the App → Base tree: one branch per application, one leaf per
    /// base-package requirement.
    ///
    /// The root and every application branch start expanded.
    pub fn from_applications(title: &str, apps: &[&Application]) -> Self {
        let mut root = TreeNode::new(title, format!("{} applications", apps.len()));
        for app in apps {
            let mut branch = TreeNode::new(app.name.clone(), app.version.clone());
            for pkg in &app.base_packages {
                branch.add_child(TreeNode::with_status(
                    pkg.name.clone(),
                    pkg.version.clone(),
                    pkg.status,
                ));
            }
            branch.expanded = true;
            root.add_child(branch);
        }
        root.expanded = true;
        root
    }

    /// Build the Base → Apps tree: one branch per package version, one leaf
    /// per consuming application.
    pub fn from_dependency_packages(title: &str, packages: &[&DependencyPackage]) -> Self {
        let mut root = TreeNode::new(title, format!("{} package versions", packages.len()));
        for pkg in packages {
            let mut branch = TreeNode::new(pkg.name.clone(), pkg.version.clone());
            for consumer in &pkg.applications {
                branch.add_child(TreeNode::with_status(
                    consumer.name.clone(),
                    consumer.version.clone(),
                    consumer.status,
                ));
            }
            branch.expanded = true;
            root.add_child(branch);
        }
        root.expanded = true;
        root
    }

    /// Add a child node
    pub fn add_child(&mut self, mut child: TreeNode) {
        child.set_depth(self.depth + 1);
        self.children.push(child);
    }

    fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
        for child in &mut self.children {
            child.set_depth(depth + 1);
        }
    }

    /// Toggle the expanded state
    pub fn toggle_expanded(&mut self) {
        if !self.children.is_empty() {
            self.expanded = !self.expanded;
        }
    }

    /// Check if this node has children
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Flatten the tree into a list for rendering
    ///
    /// Only includes nodes that are visible (i.e., all ancestors are expanded)
    pub fn flatten(&self) -> Vec<FlattenedNode> {
        let mut result = Vec::new();
        self.flatten_recursive(&mut result, true);
        result
    }

    fn flatten_recursive(&self, result: &mut Vec<FlattenedNode>, is_last: bool) {
        result.push(FlattenedNode {
            name: self.name.clone(),
            version: self.version.clone(),
            status: self.status,
            depth: self.depth,
            is_expanded: self.expanded,
            has_children: self.has_children(),
            is_last_child: is_last,
        });

        if self.expanded {
            let child_count = self.children.len();
            for (i, child) in self.children.iter().enumerate() {
                let is_last_child = i == child_count - 1;
                child.flatten_recursive(result, is_last_child);
            }
        }
    }

    /// Find a node at a given flattened index and toggle its expansion
    ///
    /// Returns true if the toggle was successful
    pub fn toggle_at_index(&mut self, target_index: usize) -> bool {
        let mut current_index = 0;
        self.toggle_at_index_recursive(target_index, &mut current_index)
    }

    fn toggle_at_index_recursive(
        &mut self,
        target_index: usize,
        current_index: &mut usize,
    ) -> bool {
        if *current_index == target_index {
            self.toggle_expanded();
            return true;
        }
        *current_index += 1;

        if self.expanded {
            for child in &mut self.children {
                if child.toggle_at_index_recursive(target_index, current_index) {
                    return true;
                }
            }
        }
        false
    }
}

/// A flattened representation of a tree node for rendering
#[derive(Debug, Clone)]
pub struct FlattenedNode {
    pub name: String,
    pub version: String,
    pub status: Option<Status>,
    /// Depth in the tree
    pub depth: usize,
    /// Whether this node is currently expanded
    pub is_expanded: bool,
    /// Whether this node has children
    pub has_children: bool,
    /// Whether this is the last child of its parent
    pub is_last_child: bool,
}

impl FlattenedNode {
    /// Get the expansion indicator character
    pub fn expansion_indicator(&self) -> &'static str {
        if !self.has_children {
            "  "
        } else if self.is_expanded {
            "▼ "
        } else {
            "▶ "
        }
    }
}

/// Build the branch prefix (`│   `, `├── `, `└── `) for every row of a
/// flattened tree.
pub fn tree_prefixes(nodes: &[FlattenedNode]) -> Vec<String> {
    // ancestors_last[i] is the is_last_child flag of the open ancestor at depth i + 1
    let mut ancestors_last: Vec<bool> = Vec::new();
    let mut prefixes = Vec::with_capacity(nodes.len());

    for node in nodes {
        ancestors_last.truncate(node.depth.saturating_sub(1));

        let mut prefix = String::new();
        for &is_last in &ancestors_last {
            prefix.push_str(if is_last { "    " } else { "│   " });
        }
        if node.depth > 0 {
            prefix.push_str(if node.is_last_child { "└── " } else { "├── " });
            ancestors_last.push(node.is_last_child);
        }
        prefixes.push(prefix);
    }

    prefixes
}
