use reqwest::Url;

use crate::error::{Result, SearchError};
use crate::jobs::{ApiResponse, Health, Job, SearchRequest, jobs_from_body};
use crate::query::Query;

const SEARCH_HASHTAGS_PATH: &str = "/api/jobs/search/hashtags";
const HEALTH_PATH: &str = "/health";

/// Client for the job discovery API.
#[derive(Debug, Clone)]
pub struct JobsClient {
    client: reqwest::Client,
    base_url: String,
}

impl JobsClient {
    pub fn new(base_url: &Url) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    pub fn with_http_client(client: reqwest::Client, base_url: &Url) -> Self {
        Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    /// Searches jobs tagged with the query's hashtags.
    pub async fn search_hashtags(&self, query: &Query) -> Result<Vec<Job>> {
        let url = format!("{}{SEARCH_HASHTAGS_PATH}", self.base_url);
        let body = SearchRequest {
            hashtags: query.tokens(),
        };

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await?;
        let jobs = jobs_from_body(&body)?;

        tracing::debug!(count = jobs.len(), "decoded search response");

        Ok(jobs)
    }

    pub async fn health(&self) -> Result<Health> {
        let url = format!("{}{HEALTH_PATH}", self.base_url);

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiResponse<Health> = resp.json().await?;
        if !envelope.success {
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: envelope.message.unwrap_or_default(),
            });
        }

        tracing::debug!(message = ?envelope.message, "health check passed");

        Ok(envelope.data.unwrap_or_default())
    }
}
