//! Dashboard module - counter panels bound to the page display targets

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::dashboard::{ElementId, Page};

#[derive(Debug, Clone, Default)]
pub struct Dashboard;

impl Dashboard {
    pub fn new() -> Self {
        Self
    }

    /// Four counter cards side by side, one per display target
    pub fn render(&self, frame: &mut Frame, area: Rect, page: &Page, ctx: &Context) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for (id, chunk) in ElementId::DISPLAY_TARGETS.iter().zip(chunks.iter()) {
            self.render_counter(frame, *chunk, page, *id, ctx.focus == *id);
        }
    }

    fn render_counter(&self, frame: &mut Frame, area: Rect, page: &Page, id: ElementId, focused: bool) {
        let Some(element) = page.get(id) else {
            return;
        };
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(element.label.as_str())
            .border_style(border_style);

        let value = Paragraph::new(Line::from(element.text.as_str()))
            .style(
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(value, area);
    }
}

impl Module for Dashboard {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        if !ElementId::DISPLAY_TARGETS.contains(&ctx.focus) {
            return Action::None;
        }
        match key.code {
            KeyCode::Enter => Action::RefreshStats,
            KeyCode::Left | KeyCode::Char('h') => Action::FocusPrev,
            KeyCode::Right | KeyCode::Char('l') => Action::FocusNext,
            _ => Action::None,
        }
    }
}
