//! Quick action form - action select plus lead id input

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::config::ActionOption;
use crate::core::{Action, Context, Module};
use crate::domain::dashboard::{ElementId, QuickActionRequest, ValidationError};

#[derive(Debug, Clone)]
pub struct QuickActionForm {
    options: Vec<ActionOption>,
    /// `None` is the empty placeholder option
    selected: Option<usize>,
    lead_id: String,
}

impl QuickActionForm {
    pub fn new(options: Vec<ActionOption>) -> Self {
        Self {
            options,
            selected: None,
            lead_id: String::new(),
        }
    }

    pub fn options(&self) -> &[ActionOption] {
        &self.options
    }

    /// Value of the selected option, empty for the placeholder
    pub fn action_value(&self) -> &str {
        self.selected
            .and_then(|idx| self.options.get(idx))
            .map(|opt| opt.value.as_str())
            .unwrap_or("")
    }

    pub fn lead_id(&self) -> &str {
        &self.lead_id
    }

    /// Select an option by value. Unknown values leave the selection as is.
    pub fn select_action(&mut self, value: &str) -> bool {
        match self.options.iter().position(|opt| opt.value == value) {
            Some(idx) => {
                self.selected = Some(idx);
                true
            }
            None => false,
        }
    }

    /// Step through placeholder + options
    pub fn cycle_action(&mut self, forward: bool) {
        let slots = self.options.len() + 1;
        let current = self.selected.map(|idx| idx + 1).unwrap_or(0);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        self.selected = next.checked_sub(1);
    }

    pub fn set_lead_id(&mut self, lead_id: impl Into<String>) {
        self.lead_id = lead_id.into();
    }

    pub fn push_lead_char(&mut self, ch: char) {
        self.lead_id.push(ch);
    }

    pub fn pop_lead_char(&mut self) {
        self.lead_id.pop();
    }

    /// Back to the default values: placeholder action, empty lead
    pub fn reset(&mut self) {
        self.selected = None;
        self.lead_id.clear();
    }

    pub fn to_request(&self) -> Result<QuickActionRequest, ValidationError> {
        QuickActionRequest::from_form(self.action_value(), &self.lead_id)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .title(ctx.messages.label(ElementId::QuickActionForm))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(inner);

        self.render_select(frame, chunks[0], ctx);
        self.render_lead_input(frame, chunks[1], ctx);
    }

    fn render_select(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let focused = ctx.focus == ElementId::QuickAction;
        let mut items = vec![ListItem::new(Line::from(Span::styled(
            ctx.messages.select_placeholder(),
            Style::default().fg(Color::DarkGray),
        )))];
        items.extend(
            self.options
                .iter()
                .map(|opt| ListItem::new(format!("{}  ({})", opt.display_label(), opt.value))),
        );

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(ctx.messages.label(ElementId::QuickAction))
                    .border_style(border_style(focused)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(self.selected.map(|idx| idx + 1).unwrap_or(0)));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_lead_input(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let focused = ctx.focus == ElementId::QuickActionLead;
        let mut spans = vec![Span::raw(self.lead_id.as_str())];
        if focused {
            spans.push(Span::styled("_", Style::default().fg(Color::LightCyan)));
        }
        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(ctx.messages.label(ElementId::QuickActionLead))
                .border_style(border_style(focused)),
        );
        frame.render_widget(input, area);
    }
}

impl Module for QuickActionForm {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        match ctx.focus {
            ElementId::QuickAction => match key.code {
                KeyCode::Enter => Action::SubmitQuickAction,
                KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => {
                    self.cycle_action(true);
                    Action::None
                }
                KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => {
                    self.cycle_action(false);
                    Action::None
                }
                KeyCode::Backspace | KeyCode::Delete => {
                    self.selected = None;
                    Action::None
                }
                _ => Action::None,
            },
            ElementId::QuickActionLead => match key.code {
                KeyCode::Enter => Action::SubmitQuickAction,
                KeyCode::Backspace => {
                    self.pop_lead_char();
                    Action::None
                }
                KeyCode::Esc => Action::FocusPrev,
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.lead_id.clear();
                    Action::None
                }
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.push_lead_char(ch);
                    Action::None
                }
                _ => Action::None,
            },
            _ => Action::None,
        }
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
