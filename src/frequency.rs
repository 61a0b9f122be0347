//! Platform and hashtag frequency distributions over the relevant subset.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use serde::Serialize;

use crate::{
    columns::ColumnRoles,
    data::{Dataset, Value},
};

pub const MAX_PLATFORMS: usize = 5;
pub const MAX_HASHTAGS: usize = 10;
const MIN_TAG_LENGTH: usize = 3;

static TAG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s]+").expect("tag separator pattern is valid"));

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlatformShare {
    pub platform: String,
    pub count: usize,
    /// Share of the relevant subset, one decimal place with a trailing `%`.
    pub percentage: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HashtagCount {
    pub hashtag: String,
    pub count: usize,
}

/// Top platforms by row count. Percentages are computed against the subset
/// size, not the raw row count.
pub fn platform_distribution(
    dataset: &Dataset,
    subset: &[usize],
    roles: &ColumnRoles,
) -> Vec<PlatformShare> {
    if subset.is_empty() {
        return Vec::new();
    }
    let counts = subset
        .iter()
        .map(|&row| roles.platform_label(dataset, row))
        .counts();
    rank_counts(counts, MAX_PLATFORMS)
        .into_iter()
        .map(|(platform, count)| PlatformShare {
            platform,
            count,
            percentage: format!("{:.1}%", count as f64 / subset.len() as f64 * 100.0),
        })
        .collect()
}

/// Top hashtags across the subset. Only string cells are tokenized; numeric
/// or boolean cells in the hashtag column are skipped, not coerced.
pub fn hashtag_distribution(
    dataset: &Dataset,
    subset: &[usize],
    roles: &ColumnRoles,
) -> Vec<HashtagCount> {
    let Some(column) = roles.hashtags else {
        return Vec::new();
    };
    let counts = subset
        .iter()
        .filter_map(|&row| match dataset.cell(row, column) {
            Some(Value::Text(raw)) => Some(raw.as_str()),
            _ => None,
        })
        .flat_map(tokenize_hashtags)
        .counts();
    rank_counts(counts, MAX_HASHTAGS)
        .into_iter()
        .map(|(tag, count)| HashtagCount {
            hashtag: format!("#{tag}"),
            count,
        })
        .collect()
}

fn tokenize_hashtags(raw: &str) -> Vec<String> {
    let stripped = raw.replace('#', "");
    TAG_SEPARATORS
        .split(&stripped)
        .map(|token| token.trim().to_lowercase())
        .filter(|token| token.chars().count() >= MIN_TAG_LENGTH)
        .collect()
}

fn rank_counts(
    counts: std::collections::HashMap<String, usize>,
    top: usize,
) -> Vec<(String, usize)> {
    let mut items = counts.into_iter().collect::<Vec<_>>();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items.truncate(top);
    items
}
