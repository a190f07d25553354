//! Terminal dashboard for the lead CRM
//!
//! Mirrors the CRM's dashboard page controller: counters fed by
//! `/api/dashboard/stats` and a quick action form posting to
//! `/api/quick-action`.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod headless;
pub mod infrastructure;
pub mod input;
pub mod logging;
pub mod modules;
pub mod ui;
