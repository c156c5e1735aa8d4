//! Client for the remote random-activity API.

use crate::{
    activity::{Activity, ActivityQuery},
    error::{ApiError, TransportCause},
    log_internal,
};
use anyhow::Result;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://www.boredapi.com/api/activity";

/// Hard limit on a single API request, connect through body.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of activities.  Interaction handlers only see this trait.
#[serenity::async_trait]
pub trait ActivitySource: Sync + Send {
    /// Any activity at all.
    async fn fetch_random(&self) -> Result<Activity, ApiError>;
    /// An activity matching every present filter.  The result may be a no-match activity.
    async fn fetch_by_query(&self, query: &ActivityQuery) -> Result<Activity, ApiError>;
    /// The activity identified by `key`.
    async fn fetch_by_key(&self, key: &str) -> Result<Activity, ApiError>;
}

pub struct ActivityClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ActivityClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn random_url(&self) -> String {
        self.endpoint.clone()
    }

    pub fn query_url(&self, query: &ActivityQuery) -> String {
        if query.is_empty() {
            return self.random_url();
        }
        format!("{}?{}", self.endpoint, query.to_query_string())
    }

    pub fn key_url(&self, key: &str) -> String {
        format!("{}?key={}", self.endpoint, key)
    }

    async fn get(&self, url: String) -> Result<Activity, ApiError> {
        log_internal!("Requesting activity from {}... ", url);

        let body = match self.http.get(&url).send().await {
            Ok(response) => response.text().await,
            Err(e) => Err(e),
        };
        let body = match body {
            Ok(body) => body,
            Err(e) => {
                return Err(ApiError::Transport {
                    url,
                    source: e.into(),
                })
            }
        };

        let activity = parse_activity(&body).map_err(|e| match e {
            ParseError::NotJson(e) => ApiError::Transport {
                url: url.clone(),
                source: TransportCause::Body(e),
            },
            ParseError::NotActivity(e) => ApiError::Decode {
                url: url.clone(),
                source: e,
            },
        })?;

        log_internal!("Requesting activity from {}... done", url);
        Ok(activity)
    }
}

#[serenity::async_trait]
impl ActivitySource for ActivityClient {
    async fn fetch_random(&self) -> Result<Activity, ApiError> {
        self.get(self.random_url()).await
    }

    async fn fetch_by_query(&self, query: &ActivityQuery) -> Result<Activity, ApiError> {
        self.get(self.query_url(query)).await
    }

    async fn fetch_by_key(&self, key: &str) -> Result<Activity, ApiError> {
        self.get(self.key_url(key)).await
    }
}

enum ParseError {
    NotJson(serde_json::Error),
    NotActivity(serde_json::Error),
}

// Two passes so a garbage body (e.g. an HTML error page) is told apart from JSON of the wrong
// shape.
fn parse_activity(body: &str) -> Result<Activity, ParseError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(ParseError::NotJson)?;
    serde_json::from_value(value).map_err(ParseError::NotActivity)
}
