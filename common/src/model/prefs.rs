use serde::{Deserialize, Serialize};

pub const UPLOAD_FORMATS: [&str; 3] = ["CSV", "Excel", "JSON"];
pub const VISUAL_PLATFORMS: [&str; 3] = ["Power BI", "Tableau", "Looker Studio"];
pub const DATASET_TYPES: [&str; 2] = [
    "With Timestamp (Time Series)",
    "Without Timestamp (Cross Sectional)",
];
pub const ANALYSIS_OPTIONS: [&str; 4] = [
    "Look for Seasonality",
    "Look for Trend",
    "Look for Anomalies",
    "Look for Outliers",
];

/// User-chosen analysis preferences from the settings screen.
///
/// Only "CSV" uploads are implemented today; the other formats and
/// platforms are recorded so the choice survives but change nothing yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisPrefs {
    pub upload_format: String,
    pub visual_platform: String,
    pub dataset_type: String,
    /// Subset of [`ANALYSIS_OPTIONS`], in the order they were selected.
    pub analyses: Vec<String>,
}

impl Default for AnalysisPrefs {
    fn default() -> Self {
        AnalysisPrefs {
            upload_format: UPLOAD_FORMATS[0].to_string(),
            visual_platform: VISUAL_PLATFORMS[0].to_string(),
            dataset_type: DATASET_TYPES[0].to_string(),
            analyses: vec![ANALYSIS_OPTIONS[0].to_string()],
        }
    }
}

impl AnalysisPrefs {
    /// Adds the analysis option if absent, removes it if present.
    pub fn toggle_analysis(&mut self, option: &str) {
        if let Some(pos) = self.analyses.iter().position(|a| a == option) {
            self.analyses.remove(pos);
        } else {
            self.analyses.push(option.to_string());
        }
    }

    pub fn has_analysis(&self, option: &str) -> bool {
        self.analyses.iter().any(|a| a == option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_take_the_first_option_of_each_list() {
        let prefs = AnalysisPrefs::default();
        assert_eq!(prefs.upload_format, "CSV");
        assert_eq!(prefs.visual_platform, "Power BI");
        assert_eq!(prefs.dataset_type, "With Timestamp (Time Series)");
        assert_eq!(prefs.analyses, vec!["Look for Seasonality"]);
    }

    #[test]
    fn toggling_an_analysis_flips_membership() {
        let mut prefs = AnalysisPrefs::default();
        prefs.toggle_analysis("Look for Trend");
        assert!(prefs.has_analysis("Look for Trend"));
        prefs.toggle_analysis("Look for Seasonality");
        assert!(!prefs.has_analysis("Look for Seasonality"));
        assert_eq!(prefs.analyses, vec!["Look for Trend"]);
    }

    #[test]
    fn prefs_survive_a_json_round_trip() {
        let mut prefs = AnalysisPrefs::default();
        prefs.toggle_analysis("Look for Outliers");
        let json = serde_json::to_string(&prefs).unwrap();
        let back: AnalysisPrefs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
