use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::calendar::date_utils::{next_month, previous_month};
use crate::calendar::snapshot::{decode_snapshot_response, CalendarMonthSnapshot, SnapshotError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Calendar not found: {0}")]
    NotFound(String),
    #[error("Rate limit exceeded")]
    RateLimited,
    #[error("Authentication failed")]
    AuthenticationFailed,
    #[error("Decode error: {0}")]
    DecodeError(#[from] SnapshotError),
}

/// The month a snapshot request targets. Responses are matched back to the
/// displayed month by this key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
    pub resource_id: Option<String>,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month, resource_id: None }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn with_resource(mut self, resource_id: Option<String>) -> Self {
        self.resource_id = resource_id;
        self
    }

    pub fn next(&self) -> Self {
        let (year, month) = next_month(self.year, self.month);
        Self { year, month, resource_id: self.resource_id.clone() }
    }

    pub fn previous(&self) -> Self {
        let (year, month) = previous_month(self.year, self.month);
        Self { year, month, resource_id: self.resource_id.clone() }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AvailabilityApi {
    async fn fetch_calendar_month(&self, key: MonthKey) -> Result<CalendarMonthSnapshot, ApiError>;
}

pub struct HttpAvailabilityClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpAvailabilityClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn month_url(&self) -> String {
        format!("{}/calendar-month", self.base_url)
    }
}

#[async_trait]
impl AvailabilityApi for HttpAvailabilityClient {
    async fn fetch_calendar_month(&self, key: MonthKey) -> Result<CalendarMonthSnapshot, ApiError> {
        let url = self.month_url();
        let mut query = vec![
            ("year", key.year.to_string()),
            ("month", key.month.to_string()),
        ];
        if let Some(resource_id) = &key.resource_id {
            query.push(("resourceId", resource_id.clone()));
        }

        tracing::info!(
            "Fetching availability for {}-{:02} (resource {:?})",
            key.year,
            key.month,
            key.resource_id
        );

        let mut request = self.client.get(&url).query(&query);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        let status = response.status();
        tracing::info!("Fetch availability response status: {}", status);

        if status == 401 {
            tracing::error!("Authentication failed when fetching availability");
            return Err(ApiError::AuthenticationFailed);
        }

        if status == 404 {
            tracing::error!("Calendar month not found: {}", url);
            return Err(ApiError::NotFound(format!("{}-{:02}", key.year, key.month)));
        }

        if status == 429 {
            tracing::warn!("Rate limit exceeded");
            return Err(ApiError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("Failed to fetch availability. Status: {}, Body: {}", status, body);
            return Err(ApiError::RequestError(format!("Status {}: {}", status, body)));
        }

        let body: serde_json::Value = response.json().await?;
        let snapshot = decode_snapshot_response(body)?;

        tracing::info!("Fetched availability for {} days", snapshot.len());
        Ok(snapshot)
    }
}
