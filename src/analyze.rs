//! The `analyze` command: parse, run the pipeline, render the report.

use anyhow::{Context, Result};
use log::{debug, info};

use crate::{
    cli::AnalyzeArgs,
    data, io_utils,
    report::{self, AnalysisReport},
    table,
};

pub fn execute(args: &AnalyzeArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let limit = (args.limit > 0).then_some(args.limit);

    let dataset = data::read_dataset(&args.input, delimiter, encoding, limit)
        .with_context(|| format!("Reading CSV data from {:?}", args.input))?;
    debug!(
        "Parsed {} row(s) across {} column(s)",
        dataset.len(),
        dataset.headers.len()
    );

    let report = report::analyze_dataset(&dataset)
        .with_context(|| format!("Analyzing CSV data from {:?}", args.input))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Serializing report to JSON")?
        );
    } else {
        print_report(&report);
    }
    info!(
        "Analyzed {} row(s), {} relevant, {} ranked trend(s)",
        report.total_records,
        report.fashion_records,
        report.trends.len()
    );
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    println!("Top trends");
    let trend_headers = [
        "trend".to_string(),
        "platform".to_string(),
        "engagement".to_string(),
        "category".to_string(),
        "hashtags".to_string(),
    ];
    let trend_rows: Vec<Vec<String>> = report
        .trends
        .iter()
        .map(|entry| {
            vec![
                entry.trend.clone(),
                entry.platform.clone(),
                entry.engagement.clone(),
                entry.category.clone().unwrap_or_default(),
                entry.hashtags.clone().unwrap_or_default(),
            ]
        })
        .collect();
    table::print_table(&trend_headers, &trend_rows);

    println!("\nTop platforms");
    let platform_headers = [
        "platform".to_string(),
        "count".to_string(),
        "percentage".to_string(),
    ];
    let platform_rows: Vec<Vec<String>> = report
        .top_platforms
        .iter()
        .map(|share| {
            vec![
                share.platform.clone(),
                share.count.to_string(),
                share.percentage.clone(),
            ]
        })
        .collect();
    table::print_table(&platform_headers, &platform_rows);

    if !report.top_hashtags.is_empty() {
        println!("\nTop hashtags");
        let hashtag_headers = ["hashtag".to_string(), "count".to_string()];
        let hashtag_rows: Vec<Vec<String>> = report
            .top_hashtags
            .iter()
            .map(|tag| vec![tag.hashtag.clone(), tag.count.to_string()])
            .collect();
        table::print_table(&hashtag_headers, &hashtag_rows);
    }

    println!("\nSummary");
    let summary_headers = [
        "total_records".to_string(),
        "fashion_records".to_string(),
        "avg_engagement".to_string(),
        "highest".to_string(),
        "lowest".to_string(),
    ];
    let summary_row = vec![vec![
        report.total_records.to_string(),
        report.fashion_records.to_string(),
        format!("{:.1}", report.engagement_stats.average),
        format!("{:.1}", report.engagement_stats.highest),
        format!("{:.1}", report.engagement_stats.lowest),
    ]];
    table::print_table(&summary_headers, &summary_row);
}
