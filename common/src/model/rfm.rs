use serde::{Deserialize, Serialize};

/// One RFM segment as computed by the backend clustering job.
///
/// The backend serializes these with the capitalized pandas column names,
/// hence the renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfmCluster {
    #[serde(rename = "Cluster")]
    pub cluster: u32,
    /// Mean days since last order for customers in this segment.
    #[serde(rename = "Recency")]
    pub recency: f64,
    /// Mean order count.
    #[serde(rename = "Frequency")]
    pub frequency: f64,
    /// Mean total spend.
    #[serde(rename = "Monetary")]
    pub monetary: f64,
    #[serde(rename = "Num_Customers")]
    pub customers: u64,
}

/// Response body of the RFM insights endpoint.
///
/// The backend reports failures in-band: a body with an `error` field can
/// arrive with a 2xx status, so callers must check [`RfmInsights::error`]
/// before trusting `clusters`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RfmInsights {
    #[serde(default)]
    pub clusters: Vec<RfmCluster>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request body asking the LLM to describe a set of RFM segments.
#[derive(Debug, Serialize)]
pub struct InterpretRequest<'a> {
    pub clusters: &'a [RfmCluster],
}

/// LLM answer, as markdown text.
#[derive(Debug, Clone, Deserialize)]
pub struct Interpretation {
    pub interpretation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clusters_parse_from_pandas_style_keys() {
        let body = r#"{"clusters":[
            {"Cluster":0,"Recency":12.5,"Frequency":4.2,"Monetary":310.75,"Num_Customers":1240},
            {"Cluster":1,"Recency":88.0,"Frequency":1.1,"Monetary":42.0,"Num_Customers":300}
        ]}"#;
        let insights: RfmInsights = serde_json::from_str(body).unwrap();
        assert!(insights.error.is_none());
        assert_eq!(insights.clusters.len(), 2);
        assert_eq!(insights.clusters[0].cluster, 0);
        assert_eq!(insights.clusters[1].customers, 300);
    }

    #[test]
    fn error_bodies_parse_without_clusters() {
        let insights: RfmInsights =
            serde_json::from_str(r#"{"error":"no dataset uploaded"}"#).unwrap();
        assert_eq!(insights.error.as_deref(), Some("no dataset uploaded"));
        assert!(insights.clusters.is_empty());
    }

    #[test]
    fn interpret_request_round_trips_cluster_keys() {
        let clusters = vec![RfmCluster {
            cluster: 2,
            recency: 5.0,
            frequency: 9.5,
            monetary: 1200.0,
            customers: 87,
        }];
        let json = serde_json::to_string(&InterpretRequest { clusters: &clusters }).unwrap();
        assert!(json.contains(r#""Cluster":2"#));
        assert!(json.contains(r#""Num_Customers":87"#));
    }

    #[test]
    fn interpretations_parse_as_markdown_text() {
        let answer: Interpretation = serde_json::from_str(
            r#"{"interpretation":"**Champions** buy often; reward them."}"#,
        )
        .unwrap();
        assert_eq!(answer.interpretation, "**Champions** buy often; reward them.");
    }
}
