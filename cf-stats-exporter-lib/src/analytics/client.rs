//! Cloudflare GraphQL analytics client

use super::{FetchError, FetchOptions, GraphQlRequest, GraphQlResponse, LOG_TARGET, StatusMetric, status_groups_query};
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

/// Default Cloudflare GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.cloudflare.com/client/v4/graphql";

/// User agent sent with every request
pub const USER_AGENT: &str = "cf-stats-exporter/1.0";

/// Analytics API client.
///
/// Holds only the credential and the endpoint, so a single instance can be reused for
/// any number of fetches.
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    endpoint: String,
}

impl Client {
    /// Create a new client authenticating with `api_token` as a bearer credential
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be used as a header value or the HTTP client cannot be built
    pub fn new(api_token: &str, endpoint: impl Into<String>) -> crate::Result<Self> {
        let mut auth_val = HeaderValue::from_str(&format!("Bearer {api_token}"))?;
        auth_val.set_sensitive(true);

        let mut headers = HeaderMap::new();
        let _ = headers.insert(AUTHORIZATION, auth_val);

        let client = reqwest::Client::builder().user_agent(USER_AGENT).default_headers(headers).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the status-code distribution for one zone and time window.
    ///
    /// Issues exactly one POST. The result holds at most `options.limit()` entries, in the
    /// order the API returned them.
    pub async fn fetch_metrics(&self, options: &FetchOptions) -> Result<Vec<StatusMetric>, FetchError> {
        let query = status_groups_query(options).to_string();

        log::debug!(target: LOG_TARGET, "querying {} for zone {}", self.endpoint, options.zone_id());
        log::trace!(target: LOG_TARGET, "query: {query}");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest { query: &query })
            .send()
            .await?;

        let status = resp.status();
        log::debug!(target: LOG_TARGET, "analytics endpoint answered {status}");

        if status != StatusCode::OK {
            return Err(FetchError::Request { status: status.as_u16() });
        }

        let body = resp.text().await?;
        let mut metrics = GraphQlResponse::parse(&body)?.into_status_metrics()?;

        let limit = usize::try_from(options.limit().get()).unwrap_or(usize::MAX);
        if metrics.len() > limit {
            log::warn!(
                target: LOG_TARGET,
                "analytics API returned {} groups for a limit of {limit}, dropping the excess",
                metrics.len()
            );
            metrics.truncate(limit);
        }

        Ok(metrics)
    }
}
