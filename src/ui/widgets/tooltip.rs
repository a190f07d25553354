//! Tooltips for elements carrying a tooltip marker

use std::collections::BTreeMap;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::dashboard::{ElementId, Page};

/// Tooltips attached at startup, keyed by element
#[derive(Debug, Clone, Default)]
pub struct TooltipRegistry {
    tips: BTreeMap<ElementId, String>,
}

impl TooltipRegistry {
    /// Attach a tooltip to every element of the page that asks for one
    pub fn init(page: &Page) -> Self {
        let tips: BTreeMap<ElementId, String> = page
            .elements()
            .filter_map(|el| el.tooltip.clone().map(|text| (el.id, text)))
            .collect();
        tracing::debug!(count = tips.len(), "tooltips attached");
        Self { tips }
    }

    pub fn get(&self, id: ElementId) -> Option<&str> {
        self.tips.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

/// Single-line hint shown for the focused element
pub struct Tooltip<'a> {
    text: &'a str,
}

impl<'a> Tooltip<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl<'a> Widget for Tooltip<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height == 0 {
            return;
        }
        buf.set_string(area.x, area.y, "i ", Style::default().fg(Color::DarkGray));
        buf.set_stringn(
            area.x + 2,
            area.y,
            self.text,
            (area.width - 2) as usize,
            Style::default().fg(Color::Yellow),
        );
    }
}
