//! reqwest-backed client for the stats and quick-action endpoints

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::ApiError;
use crate::domain::dashboard::{DashboardStats, QuickActionRequest, QuickActionResponse};

pub const STATS_PATH: &str = "/api/dashboard/stats";
pub const QUICK_ACTION_PATH: &str = "/api/quick-action";

/// The two backend calls the dashboard controller depends on
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Fetch the dashboard counters
    async fn fetch_stats(&self) -> Result<DashboardStats, ApiError>;

    /// Submit a quick action for a lead
    async fn submit_quick_action(
        &self,
        request: &QuickActionRequest,
    ) -> Result<QuickActionResponse, ApiError>;
}

/// Connection settings for [`HttpDashboardApi`]
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    /// `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Raw `Cookie` header value for an authenticated CRM session
    pub session_cookie: Option<String>,
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            session_cookie: None,
        }
    }
}

pub struct HttpDashboardApi {
    http: reqwest::Client,
    stats_url: Url,
    quick_action_url: Url,
}

impl HttpDashboardApi {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let base = Url::parse(&settings.base_url).map_err(|source| ApiError::InvalidUrl {
            url: settings.base_url.clone(),
            source,
        })?;
        // Endpoint paths are absolute, so they resolve against the origin.
        let join = |path: &str| {
            base.join(path).map_err(|source| ApiError::InvalidUrl {
                url: settings.base_url.clone(),
                source,
            })
        };
        let stats_url = join(STATS_PATH)?;
        let quick_action_url = join(QUICK_ACTION_PATH)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(cookie) = settings.session_cookie.as_deref() {
            let value = HeaderValue::from_str(cookie).map_err(|_| ApiError::InvalidCookie)?;
            headers.insert(COOKIE, value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            stats_url,
            quick_action_url,
        })
    }

    pub fn stats_url(&self) -> &Url {
        &self.stats_url
    }

    pub fn quick_action_url(&self) -> &Url {
        &self.quick_action_url
    }
}

/// Read the whole body and parse it as JSON, ignoring the HTTP status.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let url = response.url().clone();
    let body = response.bytes().await?;
    debug!(%url, %status, bytes = body.len(), "response received");
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn fetch_stats(&self) -> Result<DashboardStats, ApiError> {
        let response = self.http.get(self.stats_url.clone()).send().await?;
        read_json(response).await
    }

    async fn submit_quick_action(
        &self,
        request: &QuickActionRequest,
    ) -> Result<QuickActionResponse, ApiError> {
        let response = self
            .http
            .post(self.quick_action_url.clone())
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls_resolve_against_origin() {
        let api = HttpDashboardApi::new(&ApiSettings::new("http://crm.local:5000/painel/")).unwrap();
        assert_eq!(api.stats_url().as_str(), "http://crm.local:5000/api/dashboard/stats");
        assert_eq!(api.quick_action_url().as_str(), "http://crm.local:5000/api/quick-action");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpDashboardApi::new(&ApiSettings::new("not a url")).err().unwrap();
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
    }

    #[test]
    fn test_invalid_cookie() {
        let mut settings = ApiSettings::new("http://localhost:5000");
        settings.session_cookie = Some("session=abc\n".to_string());
        let err = HttpDashboardApi::new(&settings).err().unwrap();
        assert!(matches!(err, ApiError::InvalidCookie));
    }
}
