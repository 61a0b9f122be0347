//! Trend ranking: turns the relevant subset into at most ten display-ready
//! entries, ordered by engagement when an engagement column exists.

use serde::Serialize;

use crate::{columns::ColumnRoles, data::Dataset};

pub const MAX_TRENDS: usize = 10;
const TREND_TEXT_LIMIT: usize = 80;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendEntry {
    pub trend: String,
    pub platform: String,
    /// Engagement formatted to one decimal place, or `N/A` when the dataset
    /// has no engagement column.
    pub engagement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<String>,
}

pub fn rank_trends(dataset: &Dataset, subset: &[usize], roles: &ColumnRoles) -> Vec<TrendEntry> {
    let mut candidates: Vec<(usize, Option<f64>)> = subset
        .iter()
        .filter(|&&row| !dataset.display(row, roles.trend).trim().is_empty())
        .filter_map(|&row| match roles.engagement {
            // With an engagement column, rows that fail to parse are dropped
            // here. The statistics in `stats` additionally require strictly
            // positive values; that difference is deliberate.
            Some(column) => {
                let value = dataset.cell(row, column)?.as_engagement()?;
                Some((row, Some(value)))
            }
            None => Some((row, None)),
        })
        .collect();

    if roles.engagement.is_some() {
        // Stable sort: rows with equal engagement keep encounter order.
        candidates.sort_by(|a, b| {
            b.1.unwrap_or(0.0).total_cmp(&a.1.unwrap_or(0.0))
        });
    }
    candidates.truncate(MAX_TRENDS);

    candidates
        .into_iter()
        .map(|(row, engagement)| TrendEntry {
            trend: truncate_trend(&dataset.display(row, roles.trend)),
            platform: roles.platform_label(dataset, row),
            engagement: engagement
                .map(|value| format!("{value:.1}"))
                .unwrap_or_else(|| "N/A".to_string()),
            category: roles.category.map(|column| dataset.display(row, column)),
            hashtags: roles.hashtags.map(|column| dataset.display(row, column)),
        })
        .collect()
}

fn truncate_trend(text: &str) -> String {
    if text.chars().count() > TREND_TEXT_LIMIT {
        let prefix: String = text.chars().take(TREND_TEXT_LIMIT).collect();
        format!("{prefix}...")
    } else {
        text.to_string()
    }
}
