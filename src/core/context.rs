//! Shared context passed to modules

use crate::domain::dashboard::{ElementId, Locale, Messages};

/// Shared context available to all modules
#[derive(Debug, Clone)]
pub struct Context {
    /// Message catalog for the user's locale
    pub messages: Messages,

    /// Element holding keyboard focus
    pub focus: ElementId,

    /// Backend base URL for display
    pub base_url: String,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            messages: Messages::new(Locale::default()),
            focus: ElementId::QuickAction,
            base_url: String::new(),
        }
    }
}

impl Context {
    pub fn new(messages: Messages, base_url: impl Into<String>) -> Self {
        Self {
            messages,
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = step_focus(self.focus, true);
    }

    pub fn focus_prev(&mut self) {
        self.focus = step_focus(self.focus, false);
    }
}

fn step_focus(current: ElementId, forward: bool) -> ElementId {
    let order = ElementId::FOCUS_ORDER;
    let index = order.iter().position(|id| *id == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % order.len()
    } else {
        (index + order.len() - 1) % order.len()
    };
    order[next]
}
