//! Domain layer - Pure business logic and contracts
//!
//! This layer contains the dashboard's data shapes and presentation rules,
//! independent of the HTTP client and the terminal UI.

pub mod dashboard;

pub use dashboard::{
    format_thousands, DashboardStats, ElementId, Locale, Messages, Notification, Page,
    QuickActionRequest, QuickActionResponse,
};
