/// Reasons a metrics fetch can fail
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The endpoint answered with something other than HTTP 200
    #[error("HTTP request failed with status {status}")]
    Request { status: u16 },

    /// The body did not contain `data.viewer.zones[0].httpRequestsAdaptiveGroups`
    #[error("unexpected response shape: {0}")]
    ResponseShape(String),

    /// The API accepted the request but reported GraphQL errors
    #[error("analytics API returned errors: {}", .0.join("; "))]
    Api(Vec<String>),

    /// The request never produced a response
    #[error("unable to reach the analytics endpoint: {0}")]
    Transport(#[from] reqwest::Error),
}
