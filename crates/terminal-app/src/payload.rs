// File: crates/terminal-app/src/payload.rs
// Summary: Wire shapes exchanged with refresh sources (recalc, news) and the initial series.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// Display values shown beside the chart. Copied to the labels verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(deserialize_with = "string_or_number")]
    pub net_worth: String,
    #[serde(deserialize_with = "string_or_number")]
    pub short_interest: String,
    #[serde(deserialize_with = "string_or_number")]
    pub pnl: String,
}

/// A recorded episode release; any release puts the simulator in crash mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub date: String,
    pub title: String,
}

/// Response of a recalc request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecalcPayload {
    pub series: Vec<f64>,
    pub metrics: Metrics,
    #[serde(default)]
    pub crash_mode: bool,
    #[serde(default)]
    pub latest_release: Option<Release>,
}

impl RecalcPayload {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// One headline for the news list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Local wall-clock time, `HH:MM`.
    pub stamp: String,
    pub tag: String,
    pub text: String,
}

impl NewsItem {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Parse the series embedded in the host document. A missing or blank
/// attribute is an empty series.
pub fn initial_series(raw: Option<&str>) -> Result<Vec<f64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(json) => Ok(serde_json::from_str(json)?),
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }
    Ok(match Raw::deserialize(de)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recalc_payload_decodes_minimal_shape() {
        let raw = r#"{"series":[1.5,2,3],"metrics":{"net_worth":"$1.00","short_interest":"2.00%","pnl":"+$3.00"}}"#;
        let p = RecalcPayload::from_json(raw).unwrap();
        assert_eq!(p.series, vec![1.5, 2.0, 3.0]);
        assert_eq!(p.metrics.pnl, "+$3.00");
        assert!(!p.crash_mode);
        assert_eq!(p.latest_release, None);
    }

    #[test]
    fn numeric_metrics_are_kept_as_text() {
        let raw = r#"{"series":[],"metrics":{"net_worth":12,"short_interest":0.5,"pnl":"-$1.00"}}"#;
        let p = RecalcPayload::from_json(raw).unwrap();
        assert_eq!(p.metrics.net_worth, "12");
        assert_eq!(p.metrics.short_interest, "0.5");
    }

    #[test]
    fn missing_series_is_rejected() {
        let raw = r#"{"metrics":{"net_worth":"a","short_interest":"b","pnl":"c"}}"#;
        assert!(RecalcPayload::from_json(raw).is_err());
    }

    #[test]
    fn initial_series_defaults_to_empty() {
        assert!(initial_series(None).unwrap().is_empty());
        assert!(initial_series(Some("  ")).unwrap().is_empty());
        assert_eq!(initial_series(Some("[4, 5.5]")).unwrap(), vec![4.0, 5.5]);
        assert!(initial_series(Some("[4,")).is_err());
    }
}
