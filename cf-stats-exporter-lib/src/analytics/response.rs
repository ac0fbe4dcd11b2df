use super::{FetchError, StatusMetric};
use serde::Deserialize;

/// Envelope of a GraphQL response from the analytics API.
///
/// Every level of the path is optional so that a missing or `null` level decodes
/// successfully and is reported as a [`FetchError::ResponseShape`] naming the level.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    data: Option<Data>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct Data {
    #[serde(default)]
    viewer: Option<Viewer>,
}

#[derive(Debug, Deserialize)]
struct Viewer {
    #[serde(default)]
    zones: Option<Vec<Zone>>,
}

#[derive(Debug, Deserialize)]
struct Zone {
    #[serde(default, rename = "httpRequestsAdaptiveGroups")]
    http_requests_adaptive_groups: Option<Vec<Group>>,
}

#[derive(Debug, Deserialize)]
struct Group {
    count: u64,
    dimensions: Dimensions,
}

#[derive(Debug, Deserialize)]
struct Dimensions {
    #[serde(rename = "edgeResponseStatus")]
    edge_response_status: u16,
}

impl GraphQlResponse {
    /// Decode a response body
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ResponseShape`] if the body is not JSON or a group is malformed
    pub fn parse(body: &str) -> Result<Self, FetchError> {
        serde_json::from_str(body).map_err(|e| FetchError::ResponseShape(format!("unable to decode response body: {e}")))
    }

    /// Flatten the first zone's adaptive groups into status metrics, preserving order
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Api`] if the API reported errors, or
    /// [`FetchError::ResponseShape`] if any level of the result path is absent
    pub fn into_status_metrics(self) -> Result<Vec<StatusMetric>, FetchError> {
        if let Some(errors) = self.errors
            && !errors.is_empty()
        {
            return Err(FetchError::Api(errors.into_iter().map(|e| e.message).collect()));
        }

        let missing = |what: &str| FetchError::ResponseShape(format!("response has no {what}"));

        let zone = self
            .data
            .ok_or_else(|| missing("data"))?
            .viewer
            .ok_or_else(|| missing("data.viewer"))?
            .zones
            .ok_or_else(|| missing("data.viewer.zones"))?
            .into_iter()
            .next()
            .ok_or_else(|| missing("zones in data.viewer.zones"))?;

        let groups = zone
            .http_requests_adaptive_groups
            .ok_or_else(|| missing("data.viewer.zones[0].httpRequestsAdaptiveGroups"))?;

        Ok(groups
            .into_iter()
            .map(|group| StatusMetric {
                status: group.dimensions.edge_response_status,
                count: group.count,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(body: &str) -> Result<Vec<StatusMetric>, FetchError> {
        GraphQlResponse::parse(body)?.into_status_metrics()
    }

    fn assert_shape_error(result: Result<Vec<StatusMetric>, FetchError>, fragment: &str) {
        match result {
            Err(FetchError::ResponseShape(msg)) => assert!(msg.contains(fragment), "unexpected message: {msg}"),
            other => panic!("expected ResponseShape error, got {other:?}"),
        }
    }

    #[test]
    fn test_groups_are_copied_in_order() {
        let body = r#"{"data":{"viewer":{"zones":[{"httpRequestsAdaptiveGroups":[
            {"count":120,"dimensions":{"edgeResponseStatus":200}},
            {"count":5,"dimensions":{"edgeResponseStatus":404}},
            {"count":1,"dimensions":{"edgeResponseStatus":503}}
        ]}]}}}"#;

        assert_eq!(
            metrics(body).unwrap(),
            vec![
                StatusMetric { status: 200, count: 120 },
                StatusMetric { status: 404, count: 5 },
                StatusMetric { status: 503, count: 1 },
            ]
        );
    }

    #[test]
    fn test_only_first_zone_is_used() {
        let body = r#"{"data":{"viewer":{"zones":[
            {"httpRequestsAdaptiveGroups":[{"count":7,"dimensions":{"edgeResponseStatus":301}}]},
            {"httpRequestsAdaptiveGroups":[{"count":9,"dimensions":{"edgeResponseStatus":500}}]}
        ]}}}"#;

        assert_eq!(metrics(body).unwrap(), vec![StatusMetric { status: 301, count: 7 }]);
    }

    #[test]
    fn test_empty_groups_in_existing_zone() {
        let body = r#"{"data":{"viewer":{"zones":[{"httpRequestsAdaptiveGroups":[]}]}}}"#;
        assert!(metrics(body).unwrap().is_empty());
    }

    #[test]
    fn test_null_errors_field_is_accepted() {
        let body = r#"{"data":{"viewer":{"zones":[{"httpRequestsAdaptiveGroups":[]}]}},"errors":null}"#;
        assert!(metrics(body).unwrap().is_empty());
    }

    #[test]
    fn test_empty_zones_is_shape_error() {
        assert_shape_error(metrics(r#"{"data":{"viewer":{"zones":[]}}}"#), "zones");
    }

    #[test]
    fn test_missing_zones_is_shape_error() {
        assert_shape_error(metrics(r#"{"data":{"viewer":{}}}"#), "data.viewer.zones");
    }

    #[test]
    fn test_null_viewer_is_shape_error() {
        assert_shape_error(metrics(r#"{"data":{"viewer":null}}"#), "data.viewer");
    }

    #[test]
    fn test_missing_data_is_shape_error() {
        assert_shape_error(metrics("{}"), "data");
    }

    #[test]
    fn test_missing_groups_is_shape_error() {
        assert_shape_error(metrics(r#"{"data":{"viewer":{"zones":[{}]}}}"#), "httpRequestsAdaptiveGroups");
    }

    #[test]
    fn test_group_without_dimensions_is_shape_error() {
        let body = r#"{"data":{"viewer":{"zones":[{"httpRequestsAdaptiveGroups":[{"count":1}]}]}}}"#;
        assert_shape_error(metrics(body), "decode");
    }

    #[test]
    fn test_non_json_body_is_shape_error() {
        assert_shape_error(metrics("<html>bad gateway</html>"), "decode");
    }

    #[test]
    fn test_graphql_errors_are_reported() {
        let body = r#"{"data":null,"errors":[{"message":"zone not authorized"}]}"#;
        match metrics(body) {
            Err(FetchError::Api(messages)) => assert_eq!(messages, vec!["zone not authorized".to_string()]),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_errors_list_is_ignored() {
        let body = r#"{"data":{"viewer":{"zones":[{"httpRequestsAdaptiveGroups":[{"count":3,"dimensions":{"edgeResponseStatus":200}}]}]}},"errors":[]}"#;
        assert_eq!(metrics(body).unwrap(), vec![StatusMetric { status: 200, count: 3 }]);
    }
}
