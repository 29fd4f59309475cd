//! Application state and TUI event loop
//!
//! Manages the load state, the active tab, search and status filters, and
//! the views derived from the current dataset. Key presses are mapped onto
//! state changes by [`App::handle_key`].

use std::io;
use std::path::Path;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::Backend,
    widgets::{ListState, TableState},
    Terminal,
};
use tracing::{debug, info, warn};

use crate::dataset::{
    parse_file, parse_str, sample_dataset, Application, Dataset, DependencyPackage,
    MatrixPackage, ParseError,
};
use crate::graph::{ForceLayout, NetworkGraph};
use crate::loader::{LoadError, LoadState};
use crate::views::{apply_filters, StatusFilter, Summary};

use super::render::render;
use super::tabs::Tab;
use super::tree::{FlattenedNode, TreeNode};

/// Simulation ticks run after every dataset change
pub const LAYOUT_TICKS: usize = 300;

/// How long the event loop waits for a key before polling the loader again
const TICK_RATE: Duration = Duration::from_millis(100);

/// Virtual scroll state for efficient rendering of large trees
#[derive(Debug, Default, Clone)]
pub struct VirtualScrollState {
    /// First visible row index
    pub offset: usize,
    /// Number of visible rows in the viewport
    pub viewport_height: usize,
}

impl VirtualScrollState {
    /// Create a new virtual scroll state
    pub fn new() -> Self {
        Self {
            offset: 0,
            viewport_height: 0,
        }
    }

    /// Update the viewport height
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
    }

    /// Calculate the visible range for the given selection and total items
    pub fn visible_range(&self, selected: usize, total: usize) -> (usize, usize) {
        if total == 0 || self.viewport_height == 0 {
            return (0, 0);
        }

        let mut offset = self.offset;
        if selected < offset {
            offset = selected;
        } else if selected >= offset + self.viewport_height {
            offset = selected.saturating_sub(self.viewport_height - 1);
        }

        let start = offset.min(total);
        let end = (offset + self.viewport_height).min(total);

        (start, end)
    }

    /// Update offset to ensure selection is visible
    pub fn ensure_visible(&mut self, selected: usize, total: usize) {
        if total == 0 || self.viewport_height == 0 {
            return;
        }

        if selected < self.offset {
            self.offset = selected;
        } else if selected >= self.offset + self.viewport_height {
            self.offset = selected.saturating_sub(self.viewport_height - 1);
        }
    }
}

/// Everything computed from a loaded dataset for the network view
#[derive(Debug, Clone)]
pub struct DerivedViews {
    pub graph: NetworkGraph,
    pub layout: ForceLayout,
    pub summary: Summary,
}

impl DerivedViews {
    fn new(dataset: &Dataset) -> Self {
        let graph = NetworkGraph::from_applications(&dataset.applications);
        let mut layout = ForceLayout::new(&graph);
        layout.run(LAYOUT_TICKS);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "network layout computed"
        );
        Self {
            summary: Summary::from_dataset(dataset),
            graph,
            layout,
        }
    }
}

/// Application state
pub struct App {
    /// Progress of the dataset load
    pub state: LoadState,
    /// Graph, layout and summary of the loaded dataset
    pub derived: Option<DerivedViews>,
    /// Active tab
    pub tab: Tab,
    /// Currently selected row in the active view
    pub selected_index: usize,
    pub(super) list_state: ListState,
    pub(super) table_state: TableState,
    /// Virtual scroll state for the tree views
    pub scroll_state: VirtualScrollState,
    /// Whether search mode is active
    pub search_active: bool,
    /// Current search query
    pub search_query: String,
    /// Current status category
    pub status_filter: StatusFilter,
    /// Tree for the App → Base or Base → Apps tab
    pub tree: Option<TreeNode>,
    /// Visible rows of `tree`
    pub flattened: Vec<FlattenedNode>,
    /// Modal message; any key dismisses it
    pub alert: Option<String>,
    /// Path being typed into the open-file prompt
    pub open_prompt: Option<String>,
    pending: Option<Receiver<Result<Dataset, LoadError>>>,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create an application in the loading state with no load in flight
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            derived: None,
            tab: Tab::default(),
            selected_index: 0,
            list_state: ListState::default(),
            table_state: TableState::default(),
            scroll_state: VirtualScrollState::new(),
            search_active: false,
            search_query: String::new(),
            status_filter: StatusFilter::All,
            tree: None,
            flattened: Vec::new(),
            alert: None,
            open_prompt: None,
            pending: None,
            should_quit: false,
        }
    }

    /// Create an application waiting on a background load
    pub fn loading(receiver: Receiver<Result<Dataset, LoadError>>) -> Self {
        Self {
            pending: Some(receiver),
            ..Self::new()
        }
    }

    /// Create an application showing `dataset`
    pub fn with_dataset(dataset: Dataset) -> Self {
        let mut app = Self::new();
        app.set_dataset(dataset);
        app
    }

    /// The loaded dataset, if any
    pub fn dataset(&self) -> Option<&Dataset> {
        self.state.dataset()
    }

    /// Replace the current dataset wholesale and recompute derived views
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.derived = Some(DerivedViews::new(&dataset));
        self.state = LoadState::Loaded(dataset);
        self.reset_selection();
        self.refresh_view();
    }

    /// Check the background load without blocking
    pub fn poll_load(&mut self) {
        let Some(receiver) = &self.pending else {
            return;
        };

        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.state = LoadState::Failed("loader stopped without a result".to_string());
                return;
            }
        };

        self.pending = None;
        match LoadState::from(result) {
            LoadState::Loaded(dataset) => self.set_dataset(dataset),
            other => {
                if let LoadState::Failed(message) = &other {
                    warn!(%message, "dataset load failed");
                }
                self.derived = None;
                self.state = other;
            }
        }
    }

    /// Whether a background load is still in flight
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace the dataset with a document supplied by the user.
    ///
    /// On failure an alert is raised and the current dataset is kept.
    pub fn apply_document(&mut self, content: &str) -> Result<(), ParseError> {
        match parse_str(content) {
            Ok(dataset) => {
                info!(applications = dataset.applications.len(), "document applied");
                self.set_dataset(dataset);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "rejected document");
                self.alert = Some(format!("Error parsing JSON file: {}", err));
                Err(err)
            }
        }
    }

    /// Replace the dataset with the contents of a local file.
    ///
    /// Same failure behavior as [`apply_document`](Self::apply_document).
    pub fn open_file(&mut self, path: &Path) -> Result<(), ParseError> {
        match parse_file(path) {
            Ok(dataset) => {
                info!(path = %path.display(), "file opened");
                self.set_dataset(dataset);
                Ok(())
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not open file");
                self.alert = Some(format!("Could not load {}: {}", path.display(), err));
                Err(err)
            }
        }
    }

    /// Swap in the built-in sample dataset
    pub fn load_sample(&mut self) {
        match sample_dataset() {
            Ok(dataset) => self.set_dataset(dataset),
            Err(err) => self.alert = Some(format!("Sample data is invalid: {}", err)),
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Open the path prompt
    pub fn start_open_prompt(&mut self) {
        self.open_prompt = Some(String::new());
    }

    pub fn cancel_open_prompt(&mut self) {
        self.open_prompt = None;
    }

    /// Close the prompt and open the typed path
    pub fn submit_open_prompt(&mut self) {
        if let Some(path) = self.open_prompt.take() {
            let path = path.trim();
            if !path.is_empty() {
                // Failure is reported through the alert
                let _ = self.open_file(Path::new(path));
            }
        }
    }

    /// Switch to a tab
    pub fn select_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.search_active = false;
            self.reset_selection();
            self.refresh_view();
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.select_tab(self.tab.previous());
    }

    /// Step the status filter forwards or backwards
    pub fn cycle_status_filter(&mut self, forward: bool) {
        self.status_filter = if forward {
            self.status_filter.next()
        } else {
            self.status_filter.previous()
        };
        self.reset_selection();
        self.refresh_view();
    }

    /// Matrix rows passing the current filters
    pub fn filtered_matrix(&self) -> Vec<&MatrixPackage> {
        match self.dataset() {
            Some(dataset) => {
                apply_filters(&dataset.base_packages, &self.search_query, self.status_filter)
            }
            None => Vec::new(),
        }
    }

    /// Applications passing the current filters
    pub fn filtered_applications(&self) -> Vec<&Application> {
        match self.dataset() {
            Some(dataset) => {
                apply_filters(&dataset.applications, &self.search_query, self.status_filter)
            }
            None => Vec::new(),
        }
    }

    /// Package versions passing the current filters
    pub fn filtered_dependency_packages(&self) -> Vec<&DependencyPackage> {
        match self.dataset() {
            Some(dataset) => apply_filters(
                &dataset.dependency_base_packages,
                &self.search_query,
                self.status_filter,
            ),
            None => Vec::new(),
        }
    }

    /// Rebuild the tree for the active tab from the filtered records
    pub fn refresh_view(&mut self) {
        self.tree = match self.tab {
            Tab::AppToBase => Some(TreeNode::from_applications(
                "Applications",
                &self.filtered_applications(),
            )),
            Tab::BaseToApps => Some(TreeNode::from_dependency_packages(
                "Base packages",
                &self.filtered_dependency_packages(),
            )),
            _ => None,
        };
        self.refresh_flattened();
    }

    /// Refresh the flattened view from the tree
    pub fn refresh_flattened(&mut self) {
        self.flattened = self.tree.as_ref().map(TreeNode::flatten).unwrap_or_default();

        // Ensure selected index is valid
        let total = self.current_list_len();
        if total > 0 && self.selected_index >= total {
            self.selected_index = total - 1;
        }
    }

    fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.list_state = ListState::default();
        self.table_state = TableState::default();
        self.scroll_state.offset = 0;
    }

    /// Get the number of selectable rows in the active view
    pub fn current_list_len(&self) -> usize {
        match self.tab {
            Tab::Matrix => self.filtered_matrix().len(),
            Tab::AppToBase | Tab::BaseToApps => self.flattened.len(),
            Tab::Roadmap => self.dataset().map_or(0, |d| d.roadmap_entries().len()),
            Tab::Network => 0,
        }
    }

    /// Move selection to the next item
    pub fn select_next(&mut self) {
        let total = self.current_list_len();
        if total > 0 {
            self.selected_index = (self.selected_index + 1).min(total - 1);
            self.scroll_state.ensure_visible(self.selected_index, total);
        }
    }

    /// Move selection to the previous item
    pub fn select_previous(&mut self) {
        let total = self.current_list_len();
        if total > 0 && self.selected_index > 0 {
            self.selected_index -= 1;
            self.scroll_state.ensure_visible(self.selected_index, total);
        }
    }

    /// Move selection down by a page
    pub fn page_down(&mut self) {
        let total = self.current_list_len();
        if total > 0 {
            let page_size = self.scroll_state.viewport_height.max(1);
            self.selected_index = (self.selected_index + page_size).min(total - 1);
            self.scroll_state.ensure_visible(self.selected_index, total);
        }
    }

    /// Move selection up by a page
    pub fn page_up(&mut self) {
        let total = self.current_list_len();
        if total > 0 {
            let page_size = self.scroll_state.viewport_height.max(1);
            self.selected_index = self.selected_index.saturating_sub(page_size);
            self.scroll_state.ensure_visible(self.selected_index, total);
        }
    }

    /// Jump to the first item
    pub fn select_first(&mut self) {
        if self.current_list_len() > 0 {
            self.selected_index = 0;
            self.scroll_state.offset = 0;
        }
    }

    /// Jump to the last item
    pub fn select_last(&mut self) {
        let total = self.current_list_len();
        if total > 0 {
            self.selected_index = total - 1;
            self.scroll_state.ensure_visible(self.selected_index, total);
        }
    }

    /// Toggle expansion of the selected tree row
    pub fn toggle_selected(&mut self) {
        let toggled = match self.tree.as_mut() {
            Some(tree) => tree.toggle_at_index(self.selected_index),
            None => false,
        };
        if toggled {
            self.refresh_flattened();
        }
    }

    /// Signal that the application should quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Start search mode, on tabs that support it
    pub fn start_search(&mut self) {
        if self.tab.supports_search() {
            self.search_active = true;
        }
    }

    /// Clear search and return to normal mode
    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_query.clear();
        self.reset_selection();
        self.refresh_view();
    }

    /// Add a character to the search query
    pub fn search_push(&mut self, c: char) {
        self.search_query.push(c);
        self.reset_selection();
        self.refresh_view();
    }

    /// Remove the last character from the search query
    pub fn search_pop(&mut self) {
        self.search_query.pop();
        self.reset_selection();
        self.refresh_view();
    }

    /// Apply a key press
    pub fn handle_key(&mut self, code: KeyCode) {
        if self.alert.is_some() {
            self.dismiss_alert();
            return;
        }

        if !matches!(self.state, LoadState::Loaded(_)) {
            // Loading and error pages only allow quitting
            if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                self.quit();
            }
            return;
        }

        if let Some(path) = self.open_prompt.as_mut() {
            match code {
                KeyCode::Esc => self.cancel_open_prompt(),
                KeyCode::Enter => self.submit_open_prompt(),
                KeyCode::Backspace => {
                    path.pop();
                }
                KeyCode::Char(c) => path.push(c),
                _ => {}
            }
            return;
        }

        if self.search_active {
            match code {
                KeyCode::Esc => self.clear_search(),
                KeyCode::Enter => {
                    // Exit search mode but keep the filter active
                    self.search_active = false;
                }
                KeyCode::Backspace => self.search_pop(),
                KeyCode::Char(c) => self.search_push(c),
                KeyCode::Down => self.select_next(),
                KeyCode::Up => self.select_previous(),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc => {
                if !self.search_query.is_empty() {
                    // Clear the filter but stay in normal mode
                    self.clear_search();
                } else {
                    self.quit();
                }
            }
            KeyCode::Tab => self.next_tab(),
            KeyCode::BackTab => self.previous_tab(),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.select_tab(Tab::ALL[index]);
            }
            KeyCode::Char('/') => self.start_search(),
            KeyCode::Char('s') if self.tab.supports_search() => self.cycle_status_filter(true),
            KeyCode::Char('S') if self.tab.supports_search() => self.cycle_status_filter(false),
            KeyCode::Char('o') => self.start_open_prompt(),
            KeyCode::Char('l') => self.load_sample(),
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::PageDown | KeyCode::Char('d') => self.page_down(),
            KeyCode::PageUp | KeyCode::Char('u') => self.page_up(),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            _ => {}
        }
    }
}

/// Run the TUI application
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.poll_load();
        terminal.draw(|frame| render(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Status;
    use crate::loader::FetchError;
    use std::sync::mpsc;

    fn create_test_app() -> App {
        App::with_dataset(sample_dataset().unwrap())
    }

    fn unavailable() -> LoadError {
        let missing = |location: &str| FetchError::Io {
            location: location.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        LoadError::Unavailable {
            primary: missing("base/sample-data.json"),
            fallback: missing("./sample-data.json"),
        }
    }

    #[test]
    fn test_app_creation() {
        let app = create_test_app();
        assert_eq!(app.selected_index, 0);
        assert!(!app.should_quit);
        assert_eq!(app.tab, Tab::Matrix);
        assert!(app.dataset().is_some());
        let derived = app.derived.as_ref().unwrap();
        assert_eq!(derived.graph.node_count(), 6);
        assert_eq!(derived.layout.len(), 6);
        assert_eq!(derived.summary.risk_factors, 1);
    }

    #[test]
    fn test_poll_load_success() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::loading(rx);
        assert!(app.is_loading());

        // Nothing sent yet
        app.poll_load();
        assert_eq!(app.state, LoadState::Loading);

        tx.send(Ok(sample_dataset().unwrap())).unwrap();
        app.poll_load();
        assert!(!app.is_loading());
        assert!(matches!(app.state, LoadState::Loaded(_)));
        assert!(app.derived.is_some());
    }

    #[test]
    fn test_poll_load_failure() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::loading(rx);
        tx.send(Err(unavailable())).unwrap();
        app.poll_load();

        match &app.state {
            LoadState::Failed(message) => assert!(message.contains("failed to load data")),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(app.dataset().is_none());
        assert!(app.derived.is_none());
    }

    #[test]
    fn test_poll_load_disconnected() {
        let (tx, rx) = mpsc::channel::<Result<Dataset, LoadError>>();
        drop(tx);
        let mut app = App::loading(rx);
        app.poll_load();
        assert!(matches!(app.state, LoadState::Failed(_)));
    }

    #[test]
    fn test_failed_state_only_quits() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::loading(rx);
        tx.send(Err(unavailable())).unwrap();
        app.poll_load();

        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Char('l'));
        assert_eq!(app.tab, Tab::Matrix);
        assert!(app.dataset().is_none());

        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_invalid_document_keeps_dataset() {
        let mut app = create_test_app();
        let before = app.dataset().cloned();

        assert!(app.apply_document("not valid json").is_err());
        assert!(app.alert.as_ref().unwrap().starts_with("Error parsing JSON file"));
        assert_eq!(app.dataset().cloned(), before);

        // Any key dismisses the alert without other effects
        app.handle_key(KeyCode::Char('q'));
        assert!(app.alert.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_apply_document_replaces_dataset() {
        let mut app = create_test_app();
        let doc = r#"{"applications": [
            {"name": "Solo", "version": "1", "basePackages": [
                {"name": "Go", "version": "1.22", "status": "lts"}
            ]}
        ]}"#;
        app.apply_document(doc).unwrap();

        let dataset = app.dataset().unwrap();
        assert_eq!(dataset.applications.len(), 1);
        assert!(dataset.roadmap.is_none());
        assert_eq!(app.derived.as_ref().unwrap().graph.node_count(), 2);
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_open_prompt_loads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("override.json");
        std::fs::write(
            &path,
            r#"{"applications": [{"name": "X", "version": "1", "basePackages": []}]}"#,
        )
        .unwrap();

        let mut app = create_test_app();
        app.handle_key(KeyCode::Char('o'));
        for c in path.to_string_lossy().chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);

        assert!(app.open_prompt.is_none());
        assert!(app.alert.is_none());
        assert_eq!(app.dataset().unwrap().applications[0].name, "X");
    }

    #[test]
    fn test_open_missing_file_alerts() {
        let mut app = create_test_app();
        assert!(app.open_file(Path::new("/definitely/not/here.json")).is_err());
        assert!(app.alert.is_some());
        assert_eq!(app.dataset().unwrap().applications.len(), 2);
    }

    #[test]
    fn test_open_prompt_cancel() {
        let mut app = create_test_app();
        app.handle_key(KeyCode::Char('o'));
        app.handle_key(KeyCode::Char('x'));
        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.open_prompt.as_deref(), Some(""));
        app.handle_key(KeyCode::Esc);
        assert!(app.open_prompt.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_load_sample_key() {
        let mut app = create_test_app();
        app.apply_document(r#"{"applications": []}"#).unwrap();
        assert!(app.dataset().unwrap().applications.is_empty());

        app.handle_key(KeyCode::Char('l'));
        assert_eq!(app.dataset().unwrap().applications.len(), 2);
    }

    #[test]
    fn test_tab_switching_resets_selection() {
        let mut app = create_test_app();
        app.select_next();
        assert_eq!(app.selected_index, 1);

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.tab, Tab::AppToBase);
        assert_eq!(app.selected_index, 0);
        assert!(app.tree.is_some());

        app.handle_key(KeyCode::BackTab);
        assert_eq!(app.tab, Tab::Matrix);
        assert!(app.tree.is_none());

        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.tab, Tab::Network);
        assert_eq!(app.current_list_len(), 0);
    }

    #[test]
    fn test_search_filters_matrix() {
        let mut app = create_test_app();
        assert_eq!(app.current_list_len(), 2);

        app.handle_key(KeyCode::Char('/'));
        assert!(app.search_active);
        for c in "node".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        let rows = app.filtered_matrix();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Node.js");

        // Enter keeps the filter, Esc then clears it
        app.handle_key(KeyCode::Enter);
        assert!(!app.search_active);
        assert_eq!(app.current_list_len(), 1);
        app.handle_key(KeyCode::Esc);
        assert!(app.search_query.is_empty());
        assert_eq!(app.current_list_len(), 2);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_search_unavailable_on_roadmap() {
        let mut app = create_test_app();
        app.select_tab(Tab::Roadmap);
        app.handle_key(KeyCode::Char('/'));
        assert!(!app.search_active);
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.status_filter, StatusFilter::All);
        assert_eq!(app.current_list_len(), 1);
    }

    #[test]
    fn test_status_filter_on_tree() {
        let mut app = create_test_app();
        app.select_tab(Tab::AppToBase);
        // root + 2 apps + 4 requirements
        assert_eq!(app.flattened.len(), 7);

        // compatible -> deprecated
        app.handle_key(KeyCode::Char('s'));
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.status_filter, StatusFilter::Only(Status::Deprecated));

        let apps = app.filtered_applications();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].version, "v2.1");
        assert_eq!(app.flattened.len(), 4);

        app.handle_key(KeyCode::Char('S'));
        assert_eq!(app.status_filter, StatusFilter::Only(Status::Compatible));
        assert_eq!(app.filtered_applications().len(), 2);
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = create_test_app();
        app.select_tab(Tab::BaseToApps);
        // root + 2 package versions + 1 consumer each
        assert_eq!(app.flattened.len(), 5);

        // Collapse the first package version
        app.select_next();
        app.toggle_selected();
        assert_eq!(app.flattened.len(), 4);

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.flattened.len(), 5);
    }

    #[test]
    fn test_select_next_previous_bounds() {
        let mut app = create_test_app();
        app.select_previous();
        assert_eq!(app.selected_index, 0);

        app.select_next();
        app.select_next();
        // Matrix has two rows
        assert_eq!(app.selected_index, 1);

        app.select_first();
        assert_eq!(app.selected_index, 0);
        app.select_last();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_page_navigation() {
        let mut app = create_test_app();
        app.select_tab(Tab::AppToBase);
        app.scroll_state.set_viewport_height(2);

        app.page_down();
        assert_eq!(app.selected_index, 2);
        app.page_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        assert!(!app.should_quit);

        app.quit();
        assert!(app.should_quit);
    }

    #[test]
    fn test_virtual_scroll_visible_range() {
        let mut state = VirtualScrollState::new();
        state.set_viewport_height(10);

        // At start
        let (start, end) = state.visible_range(0, 100);
        assert_eq!(start, 0);
        assert_eq!(end, 10);

        // At end
        let (start, end) = state.visible_range(99, 100);
        assert!(start >= 90);
        assert_eq!(end, 100);

        // Empty list
        assert_eq!(state.visible_range(0, 0), (0, 0));
    }

    #[test]
    fn test_virtual_scroll_ensure_visible() {
        let mut state = VirtualScrollState::new();
        state.set_viewport_height(10);
        state.offset = 50;

        // Selection above visible area - should scroll up
        state.ensure_visible(40, 100);
        assert_eq!(state.offset, 40);

        // Selection below visible area - should scroll down
        state.offset = 0;
        state.ensure_visible(15, 100);
        assert!(state.offset > 0);
        assert!(state.offset + state.viewport_height > 15);
    }
}
