//! Rendering of the dashboard.
//!
//! Every function here reads the [`App`] state and draws it; the only state
//! written back is scroll and selection bookkeeping.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, Tabs, Wrap,
    },
    Frame,
};

use crate::dataset::{Dataset, MatrixPackage};
use crate::loader::LoadState;
use crate::views::StatusFilter;

use super::app::{App, DerivedViews};
use super::tabs::Tab;
use super::theme::{self, APPLICATION_COLOR};
use super::tree::tree_prefixes;

/// Render the application UI
pub(super) fn render(frame: &mut Frame, app: &mut App) {
    let show_search = matches!(app.state, LoadState::Loaded(_)) && app.tab.supports_search();

    let mut constraints = vec![Constraint::Length(3)]; // Header
    if show_search {
        constraints.push(Constraint::Length(3)); // Search bar
    }
    constraints.push(Constraint::Min(0)); // Body
    constraints.push(Constraint::Length(4)); // Footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    let body = if show_search {
        render_search_bar(frame, app, chunks[1]);
        chunks[2]
    } else {
        chunks[1]
    };
    render_body(frame, app, body);
    render_footer(frame, app, chunks[chunks.len() - 1]);

    if let Some(path) = &app.open_prompt {
        render_open_prompt(frame, path);
    }
    if let Some(message) = &app.alert {
        render_alert(frame, message);
    }
}

/// Render the title and tab bar
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let tabs = Tabs::new(Tab::ALL.iter().map(Tab::label))
        .select(app.tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│")
        .block(
            Block::default()
                .title(" compatscope - Version Compatibility Dashboard ")
                .borders(Borders::ALL),
        );
    frame.render_widget(tabs, area);
}

/// Render the search bar and status filter
fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (border_color, title) = if app.search_active {
        (Color::Yellow, "Search (Enter to confirm, Esc to cancel)")
    } else {
        (Color::Gray, "Filter (/ to search, s/S status, Esc to clear)")
    };

    let cursor = if app.search_active { "_" } else { "" };
    let status_style = match app.status_filter {
        StatusFilter::All => Style::default().fg(Color::White),
        StatusFilter::Only(status) => Style::default().fg(theme::status_color(status)),
    };

    let content = Line::from(vec![
        Span::styled(
            format!("/{}", app.search_query),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            cursor,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
        Span::styled("   Status: ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.status_filter.to_string(), status_style),
    ]);

    let search_bar = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(search_bar, area);
}

fn render_body(frame: &mut Frame, app: &mut App, area: Rect) {
    match &app.state {
        LoadState::Loading => return render_loading(frame, area),
        LoadState::Failed(message) => return render_error(frame, message, area),
        LoadState::Loaded(_) => {}
    }

    match app.tab {
        Tab::Matrix => render_matrix(frame, app, area),
        Tab::AppToBase => render_tree(frame, app, area, "App → Base"),
        Tab::BaseToApps => render_tree(frame, app, area, "Base → Apps"),
        Tab::Roadmap => render_roadmap(frame, app, area),
        Tab::Network => render_network(frame, app, area),
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new("Loading compatibility data...")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(text, area);
}

fn render_error(frame: &mut Frame, message: &str, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Error loading data",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press q to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let page = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(page, area);
}

/// Render the compatibility matrix and the notes of the selected row
fn render_matrix(frame: &mut Frame, app: &mut App, area: Rect) {
    // Detached while the table borrows the dataset
    let mut table_state = std::mem::take(&mut app.table_state);
    let Some(dataset) = app.dataset() else {
        return;
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);

    let rows_data = app.filtered_matrix();
    let columns = &dataset.matrix_applications;

    let header = Row::new(
        std::iter::once(Cell::from("Base Package")).chain(columns.iter().map(|c| Cell::from(c.as_str()))),
    )
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = rows_data
        .iter()
        .map(|pkg| {
            let cells = columns.iter().map(|column| match pkg.cell(column) {
                Some(cell) => Cell::from(Line::from(vec![
                    Span::styled(
                        format!("{} ", theme::status_icon(cell.status)),
                        Style::default().fg(theme::status_color(cell.status)),
                    ),
                    Span::raw(cell.version.clone()),
                ])),
                None => Cell::from(Span::styled("N/A", Style::default().fg(Color::DarkGray))),
            });
            Row::new(std::iter::once(Cell::from(pkg.name.clone())).chain(cells))
        })
        .collect();

    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(16))
        .chain(columns.iter().map(|_| Constraint::Min(14)))
        .collect();

    let notes = rows_data
        .get(app.selected_index)
        .map(|pkg| matrix_notes(pkg, columns))
        .unwrap_or_default();
    let row_count = rows.len();

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!("Compatibility Matrix ({})", row_count))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let notes_widget = Paragraph::new(notes)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Notes").borders(Borders::ALL));

    table_state.select((row_count > 0).then_some(app.selected_index));
    frame.render_stateful_widget(table, chunks[0], &mut table_state);
    frame.render_widget(notes_widget, chunks[1]);
    app.table_state = table_state;
}

/// Notes of one matrix row, `application: note` joined
fn matrix_notes(pkg: &MatrixPackage, columns: &[String]) -> String {
    columns
        .iter()
        .filter_map(|column| {
            let note = pkg.cell(column)?.notes.as_deref()?;
            Some(format!("{}: {}", column, note))
        })
        .collect::<Vec<_>>()
        .join("  ·  ")
}

/// Render a relationship tree with virtual scrolling
///
/// Only renders visible rows. Updates the scroll state viewport height
/// based on the available area.
fn render_tree(frame: &mut Frame, app: &mut App, area: Rect, title: &str) {
    let total_nodes = app.flattened.len();

    // Border takes 2 rows (top + bottom)
    let viewport_height = (area.height as usize).saturating_sub(2);
    app.scroll_state.set_viewport_height(viewport_height);
    app.scroll_state.ensure_visible(app.selected_index, total_nodes);
    let (start_idx, end_idx) = app
        .scroll_state
        .visible_range(app.selected_index, total_nodes);

    let prefixes = tree_prefixes(&app.flattened);
    let items: Vec<ListItem> = app.flattened[start_idx..end_idx]
        .iter()
        .zip(&prefixes[start_idx..end_idx])
        .map(|(node, prefix)| {
            let name_color = match node.status {
                Some(status) => theme::status_color(status),
                None if node.depth == 0 => Color::White,
                None => Color::Cyan,
            };

            let mut spans = vec![
                Span::styled(prefix.clone(), Style::default().fg(Color::DarkGray)),
                Span::styled(node.expansion_indicator(), Style::default().fg(Color::Yellow)),
            ];
            if let Some(status) = node.status {
                spans.push(Span::styled(
                    format!("{} ", theme::status_icon(status)),
                    Style::default().fg(name_color),
                ));
            }
            if node.depth == 1 {
                spans.extend(highlight_matches(&node.name, &app.search_query, name_color));
            } else {
                spans.push(Span::styled(node.name.clone(), Style::default().fg(name_color)));
            }
            spans.push(Span::styled(
                format!(" {}", node.version),
                Style::default().fg(Color::DarkGray),
            ));
            if let Some(status) = node.status {
                spans.push(Span::styled(
                    format!("  [{}]", status),
                    Style::default().fg(name_color),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    // Selection is relative to the visible window
    app.list_state
        .select((total_nodes > 0).then(|| app.selected_index.saturating_sub(start_idx)));

    let title = if total_nodes > viewport_height {
        format!("{} ({}-{} of {})", title, start_idx + 1, end_idx, total_nodes)
    } else {
        format!("{} ({})", title, total_nodes)
    };

    let tree_list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    frame.render_stateful_widget(tree_list, area, &mut app.list_state);
}

/// Highlight the first case-insensitive occurrence of `query` in `text`
fn highlight_matches(text: &str, query: &str, base_color: Color) -> Vec<Span<'static>> {
    let base = Style::default().fg(base_color);
    let lower = text.to_lowercase();

    // Byte offsets only line up when lowercasing keeps lengths
    let found = if query.is_empty() || lower.len() != text.len() {
        None
    } else {
        lower.find(&query.to_lowercase())
    };

    match found {
        Some(start) if text.is_char_boundary(start + query.len()) => {
            let end = start + query.len();
            vec![
                Span::styled(text[..start].to_string(), base),
                Span::styled(
                    text[start..end].to_string(),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
                Span::styled(text[end..].to_string(), base),
            ]
        }
        _ => vec![Span::styled(text.to_string(), base)],
    }
}

/// Render the per-package roadmap
fn render_roadmap(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title("Roadmap")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let Some(dataset) = app.dataset() else {
        return;
    };
    if dataset.roadmap_entries().is_empty() {
        let empty = Paragraph::new("No roadmap data available")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items = roadmap_items(dataset);
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("► ");

    app.list_state.select(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn roadmap_items(dataset: &Dataset) -> Vec<ListItem<'static>> {
    dataset
        .roadmap_entries()
        .iter()
        .map(|entry| {
            let mut lines = vec![Line::from(Span::styled(
                entry.package.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))];
            for item in &entry.timeline {
                let color = theme::status_color(item.status);
                let apps = if item.apps.is_empty() {
                    "none".to_string()
                } else {
                    item.apps.join(", ")
                };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {} {:<10}", theme::status_icon(item.status), item.version),
                        Style::default().fg(color),
                    ),
                    Span::styled(format!("{:<13}", item.status.label()), Style::default().fg(color)),
                    Span::styled(format!("EOL: {:<12}", item.eol), Style::default().fg(Color::Gray)),
                    Span::styled(format!("Apps: {}", apps), Style::default().fg(Color::DarkGray)),
                ]));
                if let Some(advice) = item.advisory() {
                    lines.push(Line::from(Span::styled(
                        format!("      {}", advice),
                        Style::default().fg(color).add_modifier(Modifier::ITALIC),
                    )));
                }
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect()
}

/// Render the network graph and the summary cards
fn render_network(frame: &mut Frame, app: &App, area: Rect) {
    let Some(derived) = &app.derived else {
        return;
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);

    render_graph_canvas(frame, derived, chunks[0]);
    render_summary_cards(frame, derived, chunks[1]);
}

fn render_graph_canvas(frame: &mut Frame, derived: &DerivedViews, area: Rect) {
    let block = Block::default()
        .title(format!(
            "Dependency Network ({} nodes, {} links)",
            derived.graph.node_count(),
            derived.graph.edge_count()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let Some((min, max)) = derived.layout.bounds() else {
        let empty = Paragraph::new("No applications to display")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    // Pad so labels at the edge stay inside the canvas
    let pad_x = ((max.x - min.x) * 0.15).max(10.0);
    let pad_y = ((max.y - min.y) * 0.15).max(10.0);

    let links: Vec<CanvasLine> = derived
        .graph
        .edges()
        .iter()
        .zip(derived.layout.segments())
        .map(|(edge, (from, to))| {
            CanvasLine::new(from.x, from.y, to.x, to.y, theme::status_color(edge.status))
        })
        .collect();

    // Layout positions follow graph node order
    let nodes: Vec<((f64, f64), String, Color)> = derived
        .graph
        .nodes()
        .into_iter()
        .zip(derived.layout.positions())
        .map(|(node, (_, pos))| {
            let color = match node.status {
                Some(status) => theme::status_color(status),
                None => APPLICATION_COLOR,
            };
            ((pos.x, pos.y), node.name.clone(), color)
        })
        .collect();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([min.x - pad_x, max.x + pad_x])
        .y_bounds([min.y - pad_y, max.y + pad_y])
        .paint(|ctx| {
            for line in &links {
                ctx.draw(line);
            }
            ctx.layer();
            for ((x, y), _, color) in &nodes {
                ctx.draw(&Points {
                    coords: &[(*x, *y)],
                    color: *color,
                });
            }
            for ((x, y), label, color) in &nodes {
                ctx.print(*x, *y, Span::styled(label.clone(), Style::default().fg(*color)));
            }
        });
    frame.render_widget(canvas, area);
}

fn render_summary_cards(frame: &mut Frame, derived: &DerivedViews, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let summary = derived.summary;
    let risk_color = if summary.risk_factors > 0 {
        Color::Red
    } else {
        Color::Green
    };
    let entries = [
        ("Applications", summary.applications, APPLICATION_COLOR),
        ("Unique Package Versions", summary.unique_packages, Color::Cyan),
        ("Risk Factors", summary.risk_factors, risk_color),
    ];

    for ((title, value, color), area) in entries.into_iter().zip(cards.iter()) {
        let card = Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(card, *area);
    }
}

/// Render the footer with help text and the status legend
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let help_text = if app.open_prompt.is_some() {
        Line::from(vec![
            Span::styled("Type", key),
            Span::raw(" a path  "),
            Span::styled("Enter", key),
            Span::raw(" Open  "),
            Span::styled("Esc", key),
            Span::raw(" Cancel"),
        ])
    } else if app.search_active {
        Line::from(vec![
            Span::styled("Type", key),
            Span::raw(" to search  "),
            Span::styled("↑/↓", key),
            Span::raw(" Navigate  "),
            Span::styled("Enter", key),
            Span::raw(" Confirm  "),
            Span::styled("Esc", key),
            Span::raw(" Cancel"),
        ])
    } else if !matches!(app.state, LoadState::Loaded(_)) {
        Line::from(vec![Span::styled("q", key), Span::raw(" Quit")])
    } else {
        Line::from(vec![
            Span::styled("Tab", key),
            Span::raw(" View  "),
            Span::styled("/", key),
            Span::raw(" Search  "),
            Span::styled("s/S", key),
            Span::raw(" Status  "),
            Span::styled("j/k", key),
            Span::raw(" Nav  "),
            Span::styled("Enter", key),
            Span::raw(" Toggle  "),
            Span::styled("o", key),
            Span::raw(" Open file  "),
            Span::styled("l", key),
            Span::raw(" Sample  "),
            Span::styled("q", key),
            Span::raw(" Quit"),
        ])
    };

    let mut legend = Vec::new();
    for (tone, label) in theme::legend() {
        let color = theme::tone_color(tone);
        legend.push(Span::styled(
            format!("{} ", theme::tone_icon(tone)),
            Style::default().fg(color),
        ));
        legend.push(Span::styled(format!("{}  ", label), Style::default().fg(color)));
    }
    legend.push(Span::styled("● ", Style::default().fg(APPLICATION_COLOR)));
    legend.push(Span::styled("Application", Style::default().fg(APPLICATION_COLOR)));

    let footer = Paragraph::new(vec![help_text, Line::from(legend)])
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_open_prompt(frame: &mut Frame, path: &str) {
    let area = centered_rect(60, 3, frame.area());
    let input = Paragraph::new(Line::from(vec![
        Span::styled(path.to_string(), Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]))
    .block(
        Block::default()
            .title("Open JSON file")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(input, area);
}

fn render_alert(frame: &mut Frame, message: &str) {
    let area = centered_rect(60, 7, frame.area());
    let alert = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title("Alert")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(alert, area);
}

/// A rect of `percent_x` width and `height` rows centred in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample_dataset;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(app: &mut App) -> Buffer {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        let mut text = String::new();
        for row in buffer.content.chunks(width) {
            for cell in row {
                text.push_str(cell.symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_loading_page() {
        let mut app = App::new();
        let text = buffer_text(&draw(&mut app));
        assert!(text.contains("Loading compatibility data..."));
    }

    #[test]
    fn test_render_error_page() {
        let mut app = App::new();
        app.state = LoadState::Failed("failed to load data".to_string());
        let text = buffer_text(&draw(&mut app));
        assert!(text.contains("Error loading data"));
        assert!(text.contains("Press q to quit"));
    }

    #[test]
    fn test_render_matrix() {
        let mut app = App::with_dataset(sample_dataset().unwrap());
        let text = buffer_text(&draw(&mut app));
        assert!(text.contains("Compatibility Matrix (2)"));
        assert!(text.contains("Node.js"));
        assert!(text.contains("Legacy support"));
        assert!(text.contains("Status: all"));
    }

    #[test]
    fn test_render_every_tab() {
        let mut app = App::with_dataset(sample_dataset().unwrap());
        for tab in Tab::ALL {
            app.select_tab(tab);
            let text = buffer_text(&draw(&mut app));
            assert!(text.contains(tab.label()), "{:?} header", tab);
        }

        app.select_tab(Tab::Network);
        let text = buffer_text(&draw(&mut app));
        assert!(text.contains("Unique Package Versions"));
        assert!(text.contains("Risk Factors"));
    }

    #[test]
    fn test_render_roadmap_advice() {
        let mut app = App::with_dataset(sample_dataset().unwrap());
        app.select_tab(Tab::Roadmap);
        let text = buffer_text(&draw(&mut app));
        assert!(text.contains("Action Required: Plan migration before EOL date"));
    }

    #[test]
    fn test_render_missing_roadmap() {
        let mut app = App::new();
        app.apply_document(r#"{"applications": []}"#).unwrap();
        app.select_tab(Tab::Roadmap);
        let text = buffer_text(&draw(&mut app));
        assert!(text.contains("No roadmap data available"));
    }

    #[test]
    fn test_render_alert_over_view() {
        let mut app = App::with_dataset(sample_dataset().unwrap());
        let _ = app.apply_document("{");
        let text = buffer_text(&draw(&mut app));
        assert!(text.contains("Alert"));
        assert!(text.contains("Press any key to dismiss"));
    }

    #[test]
    fn test_highlight_matches() {
        let spans = highlight_matches("Python 3.9", "TH", Color::White);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content, "th");

        let spans = highlight_matches("Python", "ruby", Color::White);
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_centered_rect_fits() {
        let outer = Rect::new(0, 0, 100, 10);
        let inner = centered_rect(60, 20, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 10);
        assert_eq!(inner.x, 20);
    }
}
