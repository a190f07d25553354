//! Dashboard domain models
//!
//! This module defines the wire shapes exchanged with the CRM backend,
//! the page element contract the controller writes into, and the
//! presentation helpers shared by the TUI and the headless commands.
//! Nothing here performs I/O.

mod format;
mod i18n;
mod page;
mod quick_action;
mod stats;

pub use format::format_thousands;
pub use i18n::{Locale, Messages};
pub use page::{Element, ElementId, Page};
pub use quick_action::{
    Notification, NotificationLevel, QuickActionRequest, QuickActionResponse, ValidationError,
    SUCCESS_STATUS,
};
pub use stats::{DashboardStats, DisplayUpdate};
