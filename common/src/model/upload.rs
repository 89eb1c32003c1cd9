use serde::{Deserialize, Serialize};

/// Body returned by the backend after a dataset upload is ingested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReport {
    /// Total data rows across the uploaded files.
    pub rows: u64,
    /// Total columns across the uploaded files.
    pub columns: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_parses_the_count_fields() {
        let report: UploadReport =
            serde_json::from_str(r#"{"rows":48521,"columns":7}"#).unwrap();
        assert_eq!(report.rows, 48521);
        assert_eq!(report.columns, 7);
    }
}
