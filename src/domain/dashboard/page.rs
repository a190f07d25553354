//! Page element contract
//!
//! The controller addresses everything it touches by identifier. A page is
//! expected to provide all of them, but writes to a missing element are
//! skipped so one absent target never blocks the others.

use std::collections::BTreeMap;

use super::i18n::Messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementId {
    TotalLeads,
    LeadsConvertidos,
    LeadsNovos,
    TaxaConversao,
    QuickActionForm,
    QuickAction,
    QuickActionLead,
}

impl ElementId {
    pub const ALL: [ElementId; 7] = [
        ElementId::TotalLeads,
        ElementId::LeadsConvertidos,
        ElementId::LeadsNovos,
        ElementId::TaxaConversao,
        ElementId::QuickActionForm,
        ElementId::QuickAction,
        ElementId::QuickActionLead,
    ];

    pub const DISPLAY_TARGETS: [ElementId; 4] = [
        ElementId::TotalLeads,
        ElementId::LeadsConvertidos,
        ElementId::LeadsNovos,
        ElementId::TaxaConversao,
    ];

    /// Elements that can hold keyboard focus, in tab order
    pub const FOCUS_ORDER: [ElementId; 6] = [
        ElementId::TotalLeads,
        ElementId::LeadsConvertidos,
        ElementId::LeadsNovos,
        ElementId::TaxaConversao,
        ElementId::QuickAction,
        ElementId::QuickActionLead,
    ];

    pub fn dom_id(&self) -> &'static str {
        match self {
            ElementId::TotalLeads => "total-leads",
            ElementId::LeadsConvertidos => "leads-convertidos",
            ElementId::LeadsNovos => "leads-novos",
            ElementId::TaxaConversao => "taxa-conversao",
            ElementId::QuickActionForm => "quick-action-form",
            ElementId::QuickAction => "quick-action",
            ElementId::QuickActionLead => "quick-action-lead",
        }
    }

    pub fn is_form_field(&self) -> bool {
        matches!(self, ElementId::QuickAction | ElementId::QuickActionLead)
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    pub id: ElementId,
    pub label: String,
    pub text: String,
    /// Tooltip marker; `Some` means the element asks for a tooltip
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: BTreeMap<ElementId, Element>,
}

impl Page {
    pub const PLACEHOLDER: &'static str = "--";

    /// The dashboard page with every element of the contract present
    pub fn dashboard(messages: &Messages) -> Self {
        let mut page = Self::default();
        for id in ElementId::ALL {
            page.insert(Element {
                id,
                label: messages.label(id).to_string(),
                text: if ElementId::DISPLAY_TARGETS.contains(&id) {
                    Self::PLACEHOLDER.to_string()
                } else {
                    String::new()
                },
                tooltip: messages.tooltip(id).map(str::to_string),
            });
        }
        page
    }

    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.id, element);
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        self.elements.remove(&id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.elements.get(&id).map(|el| el.text.as_str())
    }

    /// Write text content into an element. Returns false when the page has
    /// no such element.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> bool {
        match self.elements.get_mut(&id) {
            Some(element) => {
                element.text = text.into();
                true
            }
            None => {
                tracing::warn!(element = id.dom_id(), "page element missing, update skipped");
                false
            }
        }
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }
}
