//! Search and status filtering for the dashboard views.
//!
//! Both filters are pure functions of `(items, term, status)`. They keep
//! the input order and are combined with logical AND.

use std::borrow::Cow;
use std::fmt;

use crate::dataset::{Application, DependencyPackage, MatrixPackage, RoadmapEntry, Status};

/// Status category selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    /// Every record passes.
    #[default]
    All,
    /// Only records with at least one nested entry in this status pass.
    Only(Status),
}

impl StatusFilter {
    /// Cycles All -> compatible -> ... -> planned -> All.
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(Status::ALL[0]),
            StatusFilter::Only(status) => {
                let pos = Status::ALL.iter().position(|s| *s == status).unwrap_or(0);
                Status::ALL
                    .get(pos + 1)
                    .map_or(StatusFilter::All, |s| StatusFilter::Only(*s))
            }
        }
    }

    /// Cycles in the opposite direction to [`next`](Self::next).
    pub fn previous(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(Status::ALL[Status::ALL.len() - 1]),
            StatusFilter::Only(status) => {
                let pos = Status::ALL.iter().position(|s| *s == status).unwrap_or(0);
                if pos == 0 {
                    StatusFilter::All
                } else {
                    StatusFilter::Only(Status::ALL[pos - 1])
                }
            }
        }
    }

    /// Returns true if a record with the given statuses passes.
    pub fn accepts<I>(&self, mut statuses: I) -> bool
    where
        I: Iterator<Item = Status>,
    {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => statuses.any(|s| s == *wanted),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<Status>().map(StatusFilter::Only)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

/// A record that can be searched by name and filtered by status.
pub trait Filterable {
    /// The text the search term is matched against.
    fn search_text(&self) -> Cow<'_, str>;

    /// Statuses of the record's nested entries.
    fn statuses(&self) -> Box<dyn Iterator<Item = Status> + '_>;
}

impl Filterable for MatrixPackage {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn statuses(&self) -> Box<dyn Iterator<Item = Status> + '_> {
        Box::new(self.versions.values().map(|cell| cell.status))
    }
}

impl Filterable for Application {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.display_name())
    }

    fn statuses(&self) -> Box<dyn Iterator<Item = Status> + '_> {
        Box::new(self.base_packages.iter().map(|pkg| pkg.status))
    }
}

impl Filterable for DependencyPackage {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.display_name())
    }

    fn statuses(&self) -> Box<dyn Iterator<Item = Status> + '_> {
        Box::new(self.applications.iter().map(|app| app.status))
    }
}

impl Filterable for RoadmapEntry {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.package)
    }

    fn statuses(&self) -> Box<dyn Iterator<Item = Status> + '_> {
        Box::new(self.timeline.iter().map(|item| item.status))
    }
}

/// Case-insensitive substring match. An empty term matches everything.
///
/// # Example
///
/// ```
/// use compatscope::views::matches_search;
///
/// assert!(matches_search("Node.js", "NODE"));
/// assert!(matches_search("App A v2.1", "a v2"));
/// assert!(!matches_search("Python", "ruby"));
/// assert!(matches_search("Python", ""));
/// ```
pub fn matches_search(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Returns the items matching both the search term and the status filter.
///
/// # Example
///
/// ```
/// use compatscope::dataset::{Application, Status};
/// use compatscope::views::{apply_filters, StatusFilter};
///
/// let apps = vec![
///     Application::new("App A", "v1").with_requirement("Node", "14", Status::Deprecated),
///     Application::new("App B", "v1").with_requirement("Node", "18", Status::Compatible),
/// ];
///
/// let risky = apply_filters(&apps, "app", StatusFilter::Only(Status::Deprecated));
/// assert_eq!(risky.len(), 1);
/// assert_eq!(risky[0].name, "App A");
/// ```
pub fn apply_filters<'a, T: Filterable>(
    items: &'a [T],
    term: &str,
    status: StatusFilter,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches_search(&item.search_text(), term))
        .filter(|item| status.accepts(item.statuses()))
        .collect()
}
