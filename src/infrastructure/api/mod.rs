//! CRM dashboard HTTP API

mod client;
mod error;

pub use client::{ApiSettings, DashboardApi, HttpDashboardApi, QUICK_ACTION_PATH, STATS_PATH};
pub use error::ApiError;
