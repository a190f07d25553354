//! Infrastructure layer - External service integrations
//!
//! This layer contains:
//! - reqwest-based client for the CRM dashboard endpoints
//! - Tokio runtime bridge for async operations

pub mod api;
pub mod runtime;

pub use api::{ApiError, ApiSettings, DashboardApi, HttpDashboardApi};
pub use runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
