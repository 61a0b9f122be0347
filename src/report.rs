//! Report assembly: runs the pipeline stages in order and bundles their
//! outputs into the single result value the CLI renders.
//!
//! The pipeline is a pure, single-pass computation: classify columns once
//! from the header, select the relevant subset, then rank trends and compute
//! the distributions independently over that subset.

use serde::Serialize;
use thiserror::Error;

use crate::{
    columns::{self, ColumnRoles},
    data::Dataset,
    filter,
    frequency::{self, HashtagCount, PlatformShare},
    stats::{self, EngagementStats},
    trends::{self, TrendEntry},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no data rows found in CSV input")]
    EmptyDataset,
    #[error("CSV input has no columns")]
    NoColumns,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub trends: Vec<TrendEntry>,
    /// Raw row count before relevance filtering.
    pub total_records: usize,
    /// Size of the relevant subset the trends and distributions were
    /// computed over. Equals `total_records` when the filter fell back.
    pub fashion_records: usize,
    pub top_platforms: Vec<PlatformShare>,
    pub top_hashtags: Vec<HashtagCount>,
    pub engagement_stats: EngagementStats,
}

pub fn analyze_dataset(dataset: &Dataset) -> Result<AnalysisReport, AnalysisError> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    let roles: ColumnRoles = columns::detect_roles(&dataset.headers)?;
    let subset = filter::relevant_rows(dataset);

    Ok(AnalysisReport {
        trends: trends::rank_trends(dataset, &subset, &roles),
        total_records: dataset.len(),
        fashion_records: subset.len(),
        top_platforms: frequency::platform_distribution(dataset, &subset, &roles),
        top_hashtags: frequency::hashtag_distribution(dataset, &subset, &roles),
        engagement_stats: stats::engagement_stats(dataset, &subset, &roles),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Value;

    fn dataset(headers: &[&str], rows: &[&[&str]]) -> Dataset {
        Dataset {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|cells| cells.iter().map(|c| Value::detect(c)).collect())
                .collect(),
        }
    }

    #[test]
    fn empty_dataset_is_a_terminal_error() {
        let data = dataset(&["title"], &[]);
        assert_eq!(analyze_dataset(&data), Err(AnalysisError::EmptyDataset));
    }

    #[test]
    fn matching_rows_form_the_working_subset() {
        let data = dataset(
            &["title", "platform", "engagement"],
            &[
                &["boho dress", "TikTok", "120"],
                &["sneakers", "Instagram", "340"],
                &["plain shirt", "X", "5"],
            ],
        );
        let report = analyze_dataset(&data).unwrap();
        assert_eq!(report.total_records, 3);
        // "dress" and "shirt" are fashion keywords; "sneakers" matches none.
        assert_eq!(report.fashion_records, 2);
        let titles: Vec<&str> = report.trends.iter().map(|t| t.trend.as_str()).collect();
        assert_eq!(titles, vec!["boho dress", "plain shirt"]);
        assert!((report.engagement_stats.average - 62.5).abs() < 1e-9);
    }

    #[test]
    fn fallback_keeps_every_row_when_nothing_matches() {
        let data = dataset(
            &["title", "platform", "engagement"],
            &[
                &["commodity futures", "Bloomberg", "9"],
                &["rate decision", "Reuters", "4"],
            ],
        );
        let report = analyze_dataset(&data).unwrap();
        assert_eq!(report.total_records, 2);
        assert_eq!(report.fashion_records, 2);
        assert_eq!(report.trends.len(), 2);
    }

    #[test]
    fn report_serializes_with_camel_case_contract_keys() {
        let data = dataset(
            &["title", "platform", "engagement"],
            &[&["boho dress", "TikTok", "120"]],
        );
        let report = analyze_dataset(&data).unwrap();
        let json = serde_json::to_value(&report).expect("serialize report");
        assert!(json.get("totalRecords").is_some());
        assert!(json.get("fashionRecords").is_some());
        assert!(json.get("topPlatforms").is_some());
        assert!(json.get("topHashtags").is_some());
        assert!(json.get("engagementStats").is_some());
        // Optional trend fields are omitted when the columns are absent.
        let trend = &json["trends"][0];
        assert!(trend.get("category").is_none());
        assert!(trend.get("hashtags").is_none());
    }

    #[test]
    fn rerunning_the_pipeline_is_deterministic() {
        let data = dataset(
            &["title", "platform", "engagement", "hashtags"],
            &[
                &["grunge revival", "TikTok", "88", "#grunge #90s"],
                &["quiet luxury", "Instagram", "88", "#quietluxury"],
            ],
        );
        let first = analyze_dataset(&data).unwrap();
        let second = analyze_dataset(&data).unwrap();
        assert_eq!(first, second);
    }
}
