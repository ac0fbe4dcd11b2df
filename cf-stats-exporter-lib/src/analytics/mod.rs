//! Access to the Cloudflare GraphQL analytics API.
//!
//! # Implementation Model
//!
//! A fetch is a single round trip:
//!
//! 1. [`FetchOptions`] names the zone, the time window, and the maximum number of groups
//! 2. [`status_groups_query`] turns those options into a typed [`Query`] which renders to
//!    GraphQL text with every value emitted as a properly escaped literal
//! 3. [`Client::fetch_metrics`] posts the query as `{"query": "..."}`, rejects any
//!    non-200 response, and decodes the typed response envelope
//! 4. Each adaptive group in the first zone becomes one [`StatusMetric`], in the order
//!    the API returned them (descending by count)
//!
//! Failures are reported through [`FetchError`] so callers can tell a rejected request
//! from a response that doesn't have the expected shape.

mod client;
mod error;
mod fetch_options;
mod query;
mod response;
mod status_metric;

pub use client::{Client, DEFAULT_ENDPOINT, USER_AGENT};
pub use error::FetchError;
pub use fetch_options::FetchOptions;
pub use query::{Field, GraphQlRequest, Query, Value, request_body, status_groups_query};
pub use response::GraphQlResponse;
pub use status_metric::StatusMetric;

pub(crate) const LOG_TARGET: &str = " analytics";
