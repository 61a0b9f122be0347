//! Column role classification.
//!
//! Trend exports come from many scrapers with no common schema, so the
//! analyzer infers which column plays which role by case-insensitive
//! substring matching against fixed hint lists, scanning the header in
//! order. First match wins per role; there is no scoring.

use crate::{data::Dataset, report::AnalysisError};

const TREND_HINTS: &[&str] = &[
    "trend",
    "title",
    "content",
    "description",
    "name",
    "topic",
    "text",
];

const ENGAGEMENT_HINTS: &[&str] = &[
    "engagement",
    "rate",
    "score",
    "likes",
    "views",
    "shares",
    "count",
];

const HASHTAG_HINTS: &[&str] = &["hashtag", "tag", "tags"];

/// Stable mapping from logical role to header index, computed once per
/// dataset before any row-level processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRoles {
    pub trend: usize,
    pub platform: Option<usize>,
    pub engagement: Option<usize>,
    pub category: Option<usize>,
    pub hashtags: Option<usize>,
}

pub fn detect_roles(headers: &[String]) -> Result<ColumnRoles, AnalysisError> {
    if headers.is_empty() {
        return Err(AnalysisError::NoColumns);
    }
    // The trend role always resolves: fall back to the first column.
    let trend = find_role(headers, TREND_HINTS).unwrap_or(0);
    Ok(ColumnRoles {
        trend,
        platform: find_role(headers, &["platform"]),
        engagement: find_role(headers, ENGAGEMENT_HINTS),
        category: find_role(headers, &["category"]),
        hashtags: find_role(headers, HASHTAG_HINTS),
    })
}

fn find_role(headers: &[String], hints: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let lowered = header.to_lowercase();
        hints.iter().any(|hint| lowered.contains(hint))
    })
}

impl ColumnRoles {
    /// Platform label for one row: the cell's display value, or `Unknown`
    /// when the column is missing or the cell is blank.
    pub fn platform_label(&self, dataset: &Dataset, row: usize) -> String {
        let label = self
            .platform
            .map(|column| dataset.display(row, column))
            .unwrap_or_default();
        if label.trim().is_empty() {
            "Unknown".to_string()
        } else {
            label
        }
    }

    /// Rows for the `roles` diagnostic table.
    pub fn describe(&self, headers: &[String]) -> Vec<Vec<String>> {
        let name = |idx: Option<usize>| {
            idx.and_then(|i| headers.get(i).cloned())
                .unwrap_or_else(|| "-".to_string())
        };
        vec![
            vec!["trend".to_string(), name(Some(self.trend))],
            vec!["platform".to_string(), name(self.platform)],
            vec!["engagement".to_string(), name(self.engagement)],
            vec!["category".to_string(), name(self.category)],
            vec!["hashtags".to_string(), name(self.hashtags)],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn roles_match_case_insensitive_substrings_in_header_order() {
        let roles = detect_roles(&headers(&[
            "Trend_Title",
            "Platform",
            "Engagement_Rate",
            "Category",
            "Hashtags",
        ]))
        .unwrap();
        assert_eq!(roles.trend, 0);
        assert_eq!(roles.platform, Some(1));
        assert_eq!(roles.engagement, Some(2));
        assert_eq!(roles.category, Some(3));
        assert_eq!(roles.hashtags, Some(4));
    }

    #[test]
    fn first_matching_column_wins_per_role() {
        // Both "views" and "likes" are engagement hints; header order decides.
        let roles = detect_roles(&headers(&["description", "views", "likes"])).unwrap();
        assert_eq!(roles.engagement, Some(1));
    }

    #[test]
    fn trend_falls_back_to_first_column() {
        let roles = detect_roles(&headers(&["id", "platform"])).unwrap();
        assert_eq!(roles.trend, 0);
        assert_eq!(roles.platform, Some(1));
        assert_eq!(roles.engagement, None);
        assert_eq!(roles.category, None);
        assert_eq!(roles.hashtags, None);
    }

    #[test]
    fn headerless_input_is_rejected() {
        assert!(matches!(
            detect_roles(&[]),
            Err(AnalysisError::NoColumns)
        ));
    }
}
