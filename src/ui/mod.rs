//! UI module for the compatibility dashboard
//!
//! This module provides the terminal user interface: tab state, the
//! relationship trees, the network canvas and the key bindings.

mod app;
mod render;
pub mod tabs;
pub mod theme;
pub mod tree;

pub use app::{run_app, App, DerivedViews, VirtualScrollState, LAYOUT_TICKS};
pub use tabs::Tab;
pub use tree::{FlattenedNode, TreeNode};
