//! compatscope - Terminal dashboard for application and base-package version compatibility
//!
//! This crate loads a compatibility document (applications, the runtimes
//! they depend on, and package roadmaps), derives a dependency network and
//! summary counts from it, and presents the result as a terminal dashboard
//! or as JSON, CSV and Markdown reports.

pub mod config;
pub mod dataset;
pub mod export;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod ui;
pub mod views;
