//! Engagement summary statistics over the relevant subset.

use serde::Serialize;

use crate::{columns::ColumnRoles, data::Dataset};

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct EngagementStats {
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
}

impl EngagementStats {
    fn zero() -> Self {
        Self {
            average: 0.0,
            highest: 0.0,
            lowest: 0.0,
        }
    }
}

/// Mean, max, and min over engagement values that parse as a finite number
/// and are strictly positive. Stricter than the ranking filter, which admits
/// zero and negative values; that asymmetry is intentional. All zeros when
/// no value qualifies.
pub fn engagement_stats(
    dataset: &Dataset,
    subset: &[usize],
    roles: &ColumnRoles,
) -> EngagementStats {
    let Some(column) = roles.engagement else {
        return EngagementStats::zero();
    };
    let values: Vec<f64> = subset
        .iter()
        .filter_map(|&row| dataset.cell(row, column)?.as_engagement())
        .filter(|value| *value > 0.0)
        .collect();
    if values.is_empty() {
        return EngagementStats::zero();
    }
    let sum: f64 = values.iter().sum();
    let highest = values.iter().copied().fold(f64::MIN, f64::max);
    let lowest = values.iter().copied().fold(f64::MAX, f64::min);
    EngagementStats {
        average: sum / values.len() as f64,
        highest,
        lowest,
    }
}
