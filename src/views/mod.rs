//! Derived views over a loaded dataset.
//!
//! Filters select the records a view shows; the summary aggregates counts
//! over the whole dataset. Everything here is a stateless function of its
//! inputs.

mod filter;
mod summary;

pub use filter::{apply_filters, matches_search, Filterable, StatusFilter};
pub use summary::{risk_count, unique_package_count, Summary};
