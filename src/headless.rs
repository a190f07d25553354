//! One-shot stats and quick action flows for scripts

use tracing::error;

use crate::domain::dashboard::{
    ElementId, Messages, Notification, Page, QuickActionRequest,
};
use crate::infrastructure::api::{ApiError, DashboardApi};

/// Fetch the counters into a fresh page. Elements the response does not
/// cover keep their placeholder.
pub async fn fetch_stats_page(api: &dyn DashboardApi, messages: &Messages) -> Result<Page, ApiError> {
    let mut page = Page::dashboard(messages);
    match api.fetch_stats().await {
        Ok(stats) => {
            stats.apply_to(&mut page);
            Ok(page)
        }
        Err(err) => {
            error!(error = %err, "Error fetching dashboard stats");
            Err(err)
        }
    }
}

/// `label: value` lines for the four display targets
pub fn stats_lines(page: &Page) -> Vec<String> {
    ElementId::DISPLAY_TARGETS
        .iter()
        .filter_map(|id| page.get(*id))
        .map(|el| format!("{}: {}", el.label, el.text))
        .collect()
}

/// Validate, submit and turn the outcome into the notification the user
/// would see. No request is sent when validation fails.
pub async fn run_quick_action(
    api: &dyn DashboardApi,
    messages: &Messages,
    action: &str,
    lead_id: &str,
) -> Notification {
    let request = match QuickActionRequest::from_form(action, lead_id) {
        Ok(request) => request,
        Err(_) => return Notification::validation(messages),
    };
    match api.submit_quick_action(&request).await {
        Ok(response) => Notification::from_response(&response, messages),
        Err(err) => {
            error!(error = %err, "Error performing quick action");
            Notification::failure(messages)
        }
    }
}
