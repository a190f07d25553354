//! Blocking notification popup

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::domain::dashboard::{Notification, NotificationLevel};

pub struct AlertPopup<'a> {
    notification: &'a Notification,
    /// Notifications queued behind this one
    queued: usize,
}

impl<'a> AlertPopup<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self {
            notification,
            queued: 0,
        }
    }

    pub fn queued(mut self, queued: usize) -> Self {
        self.queued = queued;
        self
    }
}

impl<'a> Widget for AlertPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = match self.notification.level {
            NotificationLevel::Success => Color::Green,
            NotificationLevel::Warn => Color::Yellow,
            NotificationLevel::Error => Color::Red,
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.notification.text.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        let footer = if self.queued > 0 {
            format!("[Enter] OK  (+{})", self.queued)
        } else {
            "[Enter] OK".to_string()
        };
        lines.push(Line::from(Span::styled(
            footer,
            Style::default().fg(Color::DarkGray),
        )));

        Clear.render(area, buf);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .render(area, buf);
    }
}
