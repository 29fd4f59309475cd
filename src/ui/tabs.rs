//! Dashboard tabs.

/// The five dashboard views. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Base packages cross-referenced with application display-names
    #[default]
    Matrix,
    /// Applications and the base packages they depend on
    AppToBase,
    /// Base-package versions and the applications consuming them
    BaseToApps,
    /// Per-package deprecation timeline
    Roadmap,
    /// Force-directed dependency graph with summary cards
    Network,
}

impl Tab {
    /// Tabs in display order.
    pub const ALL: [Tab; 5] = [
        Tab::Matrix,
        Tab::AppToBase,
        Tab::BaseToApps,
        Tab::Roadmap,
        Tab::Network,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Matrix => "Matrix",
            Tab::AppToBase => "App → Base",
            Tab::BaseToApps => "Base → Apps",
            Tab::Roadmap => "Roadmap",
            Tab::Network => "Network",
        }
    }

    /// Position in [`Tab::ALL`].
    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn previous(self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Whether the search bar and status filter apply to this tab.
    pub fn supports_search(&self) -> bool {
        matches!(self, Tab::Matrix | Tab::AppToBase | Tab::BaseToApps)
    }
}
