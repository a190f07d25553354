//! UI modules
//!
//! Each module owns one region of the page and turns key presses into
//! actions for the app.

pub mod dashboard;
pub mod quick_action;

pub use dashboard::Dashboard;
pub use quick_action::QuickActionForm;
