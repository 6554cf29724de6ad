use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;

const RESULTS_JSON: &str = include_str!("../assets/results.json");
const REPORTS_JSON: &str = include_str!("../assets/reports.json");

static RESULTS: OnceLock<Vec<CtfResult>> = OnceLock::new();
static REPORTS: OnceLock<Vec<Report>> = OnceLock::new();

/// A single competition placement, exactly as it is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CtfResult {
    pub name: String,
    pub team: String,
    pub rank: String,
    pub year: String,
}

impl CtfResult {
    /// `None` when the year is not a plain integer.
    pub fn year_number(&self) -> Option<i32> {
        self.year.trim().parse().ok()
    }
}

/// A write-up whose Markdown body lives at `file`, relative to the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Report {
    pub title: String,
    pub category: String,
    pub file: String,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to decode {dataset} dataset: {source}")]
    Decode {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("entry {index} in {dataset} dataset has an empty `{field}`")]
    EmptyField {
        dataset: &'static str,
        index: usize,
        field: &'static str,
    },
}

pub fn ctf_results() -> &'static [CtfResult] {
    RESULTS.get_or_init(|| or_empty("results", parse_results(RESULTS_JSON)))
}

pub fn reports() -> &'static [Report] {
    REPORTS.get_or_init(|| or_empty("reports", parse_reports(REPORTS_JSON)))
}

pub fn parse_results(json: &str) -> Result<Vec<CtfResult>, DatasetError> {
    let results: Vec<CtfResult> = decode("results", json)?;
    for (index, result) in results.iter().enumerate() {
        require("results", index, "name", &result.name)?;
        require("results", index, "rank", &result.rank)?;
    }
    Ok(results)
}

pub fn parse_reports(json: &str) -> Result<Vec<Report>, DatasetError> {
    let reports: Vec<Report> = decode("reports", json)?;
    for (index, report) in reports.iter().enumerate() {
        require("reports", index, "title", &report.title)?;
        require("reports", index, "file", &report.file)?;
    }
    Ok(reports)
}

fn decode<T: DeserializeOwned>(
    dataset: &'static str,
    json: &str,
) -> Result<Vec<T>, DatasetError> {
    serde_json::from_str(json).map_err(|source| DatasetError::Decode { dataset, source })
}

fn require(
    dataset: &'static str,
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<(), DatasetError> {
    if value.trim().is_empty() {
        return Err(DatasetError::EmptyField {
            dataset,
            index,
            field,
        });
    }
    Ok(())
}

fn or_empty<T>(dataset: &str, parsed: Result<Vec<T>, DatasetError>) -> Vec<T> {
    match parsed {
        Ok(entries) => {
            debug!("Loaded {} {} entries", entries.len(), dataset);
            entries
        }
        Err(err) => {
            error!("Rendering without {}: {}", dataset, err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_results_decode_in_order() {
        let results = parse_results(RESULTS_JSON).unwrap();
        assert_eq!(results.len(), 23);
        assert_eq!(results[0].name, "KnightCTF 2026");
        assert_eq!(results[22].name, "NCL Fall 2023 Individual Game");
    }

    #[test]
    fn embedded_reports_point_at_markdown() {
        let reports = parse_reports(REPORTS_JSON).unwrap();
        assert_eq!(reports.len(), 9);
        for report in &reports {
            assert!(report.file.starts_with("reports/"), "{}", report.file);
            assert!(report.file.ends_with(".md"), "{}", report.file);
        }
    }

    #[test]
    fn empty_field_is_rejected() {
        let json = r#"[{ "title": "  ", "category": "Pwn", "file": "reports/a.md" }]"#;
        match parse_reports(json) {
            Err(DatasetError::EmptyField { index, field, .. }) => {
                assert_eq!(index, 0);
                assert_eq!(field, "title");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn malformed_json_degrades_to_empty() {
        let parsed = parse_results("[{ \"name\": ");
        assert!(matches!(parsed, Err(DatasetError::Decode { .. })));
        assert!(or_empty("results", parsed).is_empty());
    }

    #[test]
    fn year_number_parses_plain_years_only() {
        let mut result = CtfResult {
            name: "X".into(),
            team: "T".into(),
            rank: "1/10".into(),
            year: "2024".into(),
        };
        assert_eq!(result.year_number(), Some(2024));
        result.year = "Spring 2024".into();
        assert_eq!(result.year_number(), None);
    }
}
