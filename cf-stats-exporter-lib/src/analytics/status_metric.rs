use serde::{Deserialize, Serialize};

/// Number of requests answered with a given HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusMetric {
    pub status: u16,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_status_before_count() {
        let metric = StatusMetric { status: 404, count: 5 };
        assert_eq!(serde_json::to_string(&metric).unwrap(), r#"{"status":404,"count":5}"#);
    }

    #[test]
    fn test_serializes_list_as_array() {
        let metrics = vec![StatusMetric { status: 200, count: 120 }, StatusMetric { status: 404, count: 5 }];
        assert_eq!(
            serde_json::to_string(&metrics).unwrap(),
            r#"[{"status":200,"count":120},{"status":404,"count":5}]"#
        );
    }

    #[test]
    fn test_empty_list_serializes_as_empty_array() {
        let metrics: Vec<StatusMetric> = Vec::new();
        assert_eq!(serde_json::to_string(&metrics).unwrap(), "[]");
    }
}
