//! Fashion relevance filtering.

use crate::data::Dataset;

/// Domain vocabulary used to decide whether a row is fashion-related. Static
/// configuration: nothing in the pipeline ever mutates it.
pub const FASHION_KEYWORDS: &[&str] = &[
    "fashion",
    "style",
    "outfit",
    "clothing",
    "dress",
    "shirt",
    "pants",
    "shoes",
    "accessories",
    "jewelry",
    "handbag",
    "makeup",
    "beauty",
    "skincare",
    "hair",
    "nails",
    "aesthetic",
    "ootd",
    "lookbook",
    "thrift",
    "vintage",
    "designer",
    "brand",
    "trendy",
    "chic",
    "minimalist",
    "maximalist",
    "streetwear",
    "formal",
    "casual",
    "cottagecore",
    "y2k",
    "grunge",
    "preppy",
    "bohemian",
    "gothic",
    "sustainable",
    "ethical",
    "slow fashion",
    "fast fashion",
];

/// Returns the indices of rows whose joined cell text contains any fashion
/// keyword. When no row matches, the whole dataset is the working set — the
/// analyzer never proceeds with an empty subset while data exists.
pub fn relevant_rows(dataset: &Dataset) -> Vec<usize> {
    let matched: Vec<usize> = (0..dataset.len())
        .filter(|&row| {
            let text = dataset.row_text(row);
            FASHION_KEYWORDS.iter().any(|keyword| text.contains(keyword))
        })
        .collect();
    if matched.is_empty() {
        (0..dataset.len()).collect()
    } else {
        matched
    }
}
