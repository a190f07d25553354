//! User-facing text in the supported locales

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::page::ElementId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR", alias = "pt", alias = "pt_BR")]
    PtBr,
    #[serde(rename = "en", alias = "en-US", alias = "en_US")]
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pt" | "pt-br" => Ok(Locale::PtBr),
            "en" | "en-us" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {other} (expected pt-BR or en)")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::PtBr => write!(f, "pt-BR"),
            Locale::En => write!(f, "en"),
        }
    }
}

/// Message catalog bound to one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn validation_failed(&self) -> &'static str {
        match self.locale {
            Locale::PtBr => "Por favor, selecione uma ação e um lead.",
            Locale::En => "Please select an action and a lead.",
        }
    }

    pub fn action_succeeded(&self) -> &'static str {
        match self.locale {
            Locale::PtBr => "Ação realizada com sucesso!",
            Locale::En => "Action completed successfully!",
        }
    }

    pub fn action_rejected(&self, message: &str) -> String {
        match self.locale {
            Locale::PtBr => format!("Erro: {message}"),
            Locale::En => format!("Error: {message}"),
        }
    }

    pub fn action_failed(&self) -> &'static str {
        match self.locale {
            Locale::PtBr => "Ocorreu um erro ao executar a ação. Tente novamente.",
            Locale::En => "An error occurred while performing the action. Please try again.",
        }
    }

    pub fn label(&self, id: ElementId) -> &'static str {
        match (self.locale, id) {
            (Locale::PtBr, ElementId::TotalLeads) => "Total de Leads",
            (Locale::PtBr, ElementId::LeadsConvertidos) => "Leads Convertidos",
            (Locale::PtBr, ElementId::LeadsNovos) => "Leads Novos",
            (Locale::PtBr, ElementId::TaxaConversao) => "Taxa de Conversão",
            (Locale::PtBr, ElementId::QuickActionForm) => "Ação Rápida",
            (Locale::PtBr, ElementId::QuickAction) => "Ação",
            (Locale::PtBr, ElementId::QuickActionLead) => "Lead",
            (Locale::En, ElementId::TotalLeads) => "Total Leads",
            (Locale::En, ElementId::LeadsConvertidos) => "Converted Leads",
            (Locale::En, ElementId::LeadsNovos) => "New Leads",
            (Locale::En, ElementId::TaxaConversao) => "Conversion Rate",
            (Locale::En, ElementId::QuickActionForm) => "Quick Action",
            (Locale::En, ElementId::QuickAction) => "Action",
            (Locale::En, ElementId::QuickActionLead) => "Lead",
        }
    }

    /// Tooltip text for elements that carry a tooltip marker
    pub fn tooltip(&self, id: ElementId) -> Option<&'static str> {
        let text = match (self.locale, id) {
            (Locale::PtBr, ElementId::TotalLeads) => "Todos os leads cadastrados",
            (Locale::PtBr, ElementId::LeadsConvertidos) => "Leads com status convertido",
            (Locale::PtBr, ElementId::LeadsNovos) => "Leads com status novo",
            (Locale::PtBr, ElementId::TaxaConversao) => "Convertidos sobre o total de leads",
            (Locale::PtBr, ElementId::QuickAction) => "Escolha a ação a aplicar no lead",
            (Locale::PtBr, ElementId::QuickActionLead) => "Identificador do lead alvo",
            (Locale::En, ElementId::TotalLeads) => "All registered leads",
            (Locale::En, ElementId::LeadsConvertidos) => "Leads with converted status",
            (Locale::En, ElementId::LeadsNovos) => "Leads with new status",
            (Locale::En, ElementId::TaxaConversao) => "Converted over total leads",
            (Locale::En, ElementId::QuickAction) => "Choose the action to apply to the lead",
            (Locale::En, ElementId::QuickActionLead) => "Identifier of the target lead",
            (_, ElementId::QuickActionForm) => return None,
        };
        Some(text)
    }

    pub fn select_placeholder(&self) -> &'static str {
        match self.locale {
            Locale::PtBr => "Selecione uma ação",
            Locale::En => "Select an action",
        }
    }
}
