use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub mod layout;
pub mod terminal;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel};
use widgets::{AlertPopup, Tooltip};

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    app.dashboard.render(f, areas.counters, &app.page, &app.ctx);
    app.form.render(f, areas.form, &app.ctx);
    draw_tooltip_line(f, areas.tooltip_line, app);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size);
    }
    if let Some(alert) = app.current_alert() {
        let popup = centered_rect(60, 30, areas.size);
        f.render_widget(AlertPopup::new(alert).queued(app.queued_alerts()), popup);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "Leaddash",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("CRM", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {} ", app.ctx.base_url)),
        Span::styled("Locale", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {}", app.ctx.messages.locale())),
    ]);
    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);
    f.render_widget(left, chunks[0]);

    let refreshed = app
        .last_refresh
        .map(|at| at.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--".to_string());
    let mut spans = vec![
        Span::styled("Stats ", Style::default().fg(Color::DarkGray)),
        Span::raw(refreshed),
    ];
    if let Some(period) = app.auto_refresh {
        spans.push(Span::styled("  every ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!("{}s", period.as_secs())));
    }
    let right = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Right);
    f.render_widget(right, chunks[1]);
}

fn draw_tooltip_line(f: &mut Frame, area: Rect, app: &App) {
    if let Some(text) = app.tooltips.get(app.ctx.focus) {
        f.render_widget(Tooltip::new(text), area);
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.status_text() {
        Some((text, level)) => {
            let color = match level {
                StatusLevel::Info => Color::LightCyan,
                StatusLevel::Warn => Color::Yellow,
                StatusLevel::Error => Color::Red,
            };
            Line::from(Span::styled(text, Style::default().fg(color)))
        }
        None => Line::from(vec![
            Span::styled("Focus ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.ctx.messages.label(app.ctx.focus)),
        ]),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input);
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.as_str()),
                Span::styled(
                    format!("  {}", hint.unwrap_or("refresh | submit | action <v> | lead <id>")),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => Line::from(Span::styled(
            "Tab focus  Enter submit  r refresh  : command  ? help  q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(content), area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("refresh", "Fetch dashboard stats"),
        ("submit", "Submit the quick action"),
        ("action", "Select action by value"),
        ("lead", "Set target lead id"),
        ("clear", "Reset the form"),
        ("help", "Show help"),
        ("quit", "Quit"),
    ];

    for (cmd, desc) in commands {
        if cmd.starts_with(&input) {
            return Some(desc);
        }
    }
    None
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  Tab / S-Tab  Cycle focus"),
        Line::from("  h / l        Prev/next counter"),
        Line::from("  Up / Down    Choose action"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  Enter        Submit quick action / refresh counter"),
        Line::from("  r            Refresh stats"),
        Line::from("  :            Command bar"),
        Line::from("  ?            Toggle help"),
        Line::from("  q            Quit"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :action <value>   :lead <id>   :submit"),
        Line::from("  :refresh   :clear   :quit"),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Help")
            .border_style(Style::default().fg(Color::LightCyan)),
    );
    f.render_widget(popup, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
