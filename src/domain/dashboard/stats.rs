//! Dashboard counters returned by the stats endpoint

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use super::format::format_thousands;
use super::page::{ElementId, Page};

/// Body of `GET /api/dashboard/stats`. Every field is optional and decoded
/// on its own: a value of an unusable type reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_leads: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub leads_convertidos: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub leads_novos: Option<i64>,
    #[serde(default, deserialize_with = "lenient_rate")]
    pub taxa_conversao: Option<f64>,
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let count = match &value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    if count.is_none() {
        debug!(%value, "ignoring unusable stats count");
    }
    Ok(count)
}

fn lenient_rate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let rate = match &value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    if rate.is_none() {
        debug!(%value, "ignoring unusable conversion rate");
    }
    Ok(rate)
}

/// One text write into a display element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub target: ElementId,
    pub text: String,
}

impl DashboardStats {
    /// Writes for every present, non-zero field. Fields are independent.
    pub fn display_updates(&self) -> Vec<DisplayUpdate> {
        let counts = [
            (ElementId::TotalLeads, self.total_leads),
            (ElementId::LeadsConvertidos, self.leads_convertidos),
            (ElementId::LeadsNovos, self.leads_novos),
        ];

        let mut updates: Vec<DisplayUpdate> = counts
            .into_iter()
            .filter_map(|(target, value)| {
                value.filter(|n| *n != 0).map(|n| DisplayUpdate {
                    target,
                    text: format_thousands(n),
                })
            })
            .collect();

        if let Some(rate) = self.taxa_conversao.filter(|r| *r != 0.0 && !r.is_nan()) {
            updates.push(DisplayUpdate {
                target: ElementId::TaxaConversao,
                text: format!("{rate}%"),
            });
        }

        updates
    }

    /// Apply the updates to a page, returning how many elements changed.
    pub fn apply_to(&self, page: &mut Page) -> usize {
        self.display_updates()
            .into_iter()
            .filter(|update| page.set_text(update.target, update.text.clone()))
            .count()
    }
}
