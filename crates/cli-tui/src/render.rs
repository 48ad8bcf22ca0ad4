use jobtrack_core::{Job, Tab, ViewController};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::app::App;
use crate::theme::ColorScheme;

/// Below this size only the counters are shown
const MIN_WIDTH: u16 = 80;
const MIN_HEIGHT: u16 = 20;

const SIDEBAR_WIDTH: u16 = 20;

pub fn ui(f: &mut Frame, app: &App) {
    let size = f.area();

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        render_simplified_view(f, app, size);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(size);

    render_sidebar(f, app, columns[0]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Search
            Constraint::Min(0),    // Tab content
            Constraint::Length(3), // Status bar
        ])
        .split(columns[1]);

    render_header(f, app, chunks[0]);
    render_search(f, app, chunks[1]);

    match app.view.active_tab() {
        Tab::Dashboard => render_dashboard(f, app, chunks[2]),
        Tab::Jobs => render_jobs_table(f, app, chunks[2]),
        Tab::Settings => render_settings(f, app, chunks[2]),
    }

    render_status_bar(f, app, chunks[3]);
}

fn render_simplified_view(f: &mut Frame, app: &App, area: Rect) {
    let colors = &app.color_scheme;
    let stats = app.view.stats();

    let lines = vec![
        Line::from(Span::styled(
            "⚠  TERMINAL TOO SMALL",
            Style::default().fg(colors.red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Current: {}x{} | Minimum: {}x{}", area.width, area.height, MIN_WIDTH, MIN_HEIGHT),
            Style::default().fg(colors.text_secondary),
        )),
        Line::from(""),
        Line::from(format!("Total: {}", stats.total)),
        Line::from(Span::styled(format!("Applied: {}", stats.applied), Style::default().fg(colors.green))),
        Line::from(Span::styled(format!("Pending: {}", stats.pending), Style::default().fg(colors.yellow))),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("JobTracker"))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let colors = &app.color_scheme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let brand = Paragraph::new(Line::from(vec![
        Span::styled("▣ ", Style::default().fg(colors.brand)),
        Span::styled(
            "JobTracker",
            Style::default().fg(colors.text_primary).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(colors.border_normal)));
    f.render_widget(brand, chunks[0]);

    let items: Vec<ListItem> = Tab::ALL
        .iter()
        .map(|tab| {
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {} ", ColorScheme::tab_glyph(*tab))),
                Span::raw(tab.title()),
                Span::styled(format!("  {}", tab.shortcut()), Style::default().fg(colors.text_muted)),
            ]))
        })
        .collect();

    let nav = List::new(items)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(colors.border_normal)))
        .style(Style::default().fg(colors.text_secondary))
        .highlight_style(
            Style::default()
                .fg(colors.nav_active_fg)
                .bg(colors.nav_active_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▌");

    let mut state = ListState::default();
    state.select(Some(app.view.active_tab().index()));
    f.render_stateful_widget(nav, chunks[1], &mut state);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let colors = &app.color_scheme;

    let lines = vec![
        Line::from(Span::styled(
            app.view.active_tab().title(),
            Style::default().fg(colors.text_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Track your job applications and progress",
            Style::default().fg(colors.text_secondary),
        )),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border_normal))
            .title_top(Line::from("🔔 👤 ").right_aligned()),
    );
    f.render_widget(header, area);
}

fn render_search(f: &mut Frame, app: &App, area: Rect) {
    let colors = &app.color_scheme;
    let focused = app.view.is_search_focused();
    let query = app.view.search();

    let mut spans = vec![Span::styled("🔍 ", Style::default().fg(colors.text_muted))];
    if query.is_empty() && !focused {
        spans.push(Span::styled("Search jobs...", Style::default().fg(colors.text_muted)));
    } else {
        spans.push(Span::styled(query.to_string(), Style::default().fg(colors.text_primary)));
    }
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(colors.border_focused)));
    }

    let border = if focused { colors.border_focused } else { colors.border_normal };
    let search = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(border)));
    f.render_widget(search, area);
}

fn render_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    render_stat_tiles(f, app, chunks[0]);
    render_recent_applications(f, app, chunks[1]);
}

fn render_stat_tiles(f: &mut Frame, app: &App, area: Rect) {
    let colors = &app.color_scheme;
    let stats = app.view.stats();

    let tiles = [
        ("Total Applications", stats.total, colors.tile_total),
        ("Applied This Week", stats.applied, colors.green),
        ("Pending Response", stats.pending, colors.yellow),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(1, 3), Constraint::Ratio(1, 3)])
        .split(area);

    for ((label, count, accent), chunk) in tiles.into_iter().zip(chunks.iter()) {
        let tile = Paragraph::new(vec![
            Line::from(Span::styled(label, Style::default().fg(colors.text_primary))),
            Line::from(Span::styled(
                count.to_string(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(colors.border_normal)));
        f.render_widget(tile, *chunk);
    }
}

fn render_recent_applications(f: &mut Frame, app: &App, area: Rect) {
    let colors = &app.color_scheme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border_normal))
        .title(Span::styled(
            "Recent Applications",
            Style::default().fg(colors.header).add_modifier(Modifier::BOLD),
        ));

    let jobs = app.view.visible_jobs();
    if jobs.is_empty() {
        f.render_widget(empty_list_message(app).block(block), area);
        return;
    }

    let rows: Vec<Row> = jobs
        .iter()
        .map(|job| {
            let icon = ViewController::status_icon(job.status);
            Row::new(vec![
                Span::styled(job.title.clone(), Style::default().fg(colors.text_primary).add_modifier(Modifier::BOLD)),
                Span::styled(job.company.clone(), Style::default().fg(colors.text_secondary)),
                Span::styled(job.date.clone(), Style::default().fg(colors.text_secondary)),
                Span::styled(icon.glyph, Style::default().fg(colors.status_color(job.status))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Length(10),
            Constraint::Length(1),
        ],
    )
    .block(block);
    f.render_widget(table, area);
}

fn render_jobs_table(f: &mut Frame, app: &App, area: Rect) {
    let colors = &app.color_scheme;
    let jobs: Vec<&Job> = app.view.visible_jobs();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border_normal))
        .title(Span::styled(
            format!("All Applications ({}/{})", jobs.len(), app.view.jobs().len()),
            Style::default().fg(colors.header).add_modifier(Modifier::BOLD),
        ));

    if jobs.is_empty() {
        f.render_widget(empty_list_message(app).block(block), area);
        return;
    }

    let header = Row::new(vec!["ID", "Title", "Company", "Date", "Status"])
        .style(Style::default().fg(colors.header).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = jobs
        .iter()
        .map(|job| {
            let icon = ViewController::status_icon(job.status);
            Row::new(vec![
                Span::raw(truncate_string(&job.id, 8)),
                Span::raw(job.title.clone()),
                Span::raw(job.company.clone()),
                Span::raw(job.date.clone()),
                Span::styled(
                    format!("{} {}", icon.glyph, job.status.label()),
                    Style::default().fg(colors.status_color(job.status)),
                ),
            ])
            .style(Style::default().fg(colors.text_primary))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block);
    f.render_widget(table, area);
}

fn render_settings(f: &mut Frame, app: &App, area: Rect) {
    let colors = &app.color_scheme;
    let label = Style::default().fg(colors.text_secondary);

    let config_file = app
        .config_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string());
    let log_file = app
        .config
        .log_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(disabled)".to_string());

    let lines = vec![
        Line::from(vec![Span::styled("  Data source:  ", label), Span::raw(app.source_description())]),
        Line::from(vec![Span::styled("  Config file:  ", label), Span::raw(config_file)]),
        Line::from(vec![Span::styled("  Log file:     ", label), Span::raw(log_file)]),
        Line::from(vec![
            Span::styled("  Tick rate:    ", label),
            Span::raw(format!("{} ms", app.config.tick_rate_ms)),
        ]),
        Line::from(vec![
            Span::styled("  Records:      ", label),
            Span::raw(app.view.jobs().len().to_string()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border_normal))
                .title(Span::styled("Settings", Style::default().fg(colors.header).add_modifier(Modifier::BOLD))),
        )
        .style(Style::default().fg(colors.text_primary));
    f.render_widget(paragraph, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let colors = &app.color_scheme;

    let line = if let Some(msg) = &app.last_message {
        Line::from(Span::styled(format!("  {}", msg), Style::default().fg(colors.text_primary)))
    } else if app.view.is_search_focused() {
        Line::from(Span::styled(
            "  Typing filters the list │ Enter/Esc=done Backspace=delete",
            Style::default().fg(colors.text_secondary),
        ))
    } else {
        let key = Style::default().fg(colors.header).add_modifier(Modifier::BOLD);
        Line::from(vec![
            Span::styled("  1-3", key),
            Span::raw("/"),
            Span::styled("Tab", key),
            Span::raw("=views  "),
            Span::styled("/", key),
            Span::raw("=search  "),
            Span::styled("r", key),
            Span::raw(format!("=reload ({})  ", app.last_refresh.format("%H:%M:%S"))),
            Span::styled("q", key),
            Span::raw("=quit"),
        ])
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border_normal)),
    );
    f.render_widget(paragraph, area);
}

fn empty_list_message(app: &App) -> Paragraph<'static> {
    let text = if app.view.search().is_empty() {
        "  No applications yet".to_string()
    } else {
        format!("  No applications match \"{}\"", app.view.search())
    };
    Paragraph::new(Line::from(Span::styled(text, Style::default().fg(app.color_scheme.text_muted))))
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
