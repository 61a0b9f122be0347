pub mod analyze;
pub mod cli;
pub mod columns;
pub mod data;
pub mod filter;
pub mod frequency;
pub mod io_utils;
pub mod preview;
pub mod report;
pub mod stats;
pub mod table;
pub mod trends;

use std::{env, sync::OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use crate::cli::{Cli, Commands};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("trendlens", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => analyze::execute(&args),
        Commands::Roles(args) => handle_roles(&args),
        Commands::Preview(args) => preview::execute(&args),
    }
}

fn handle_roles(args: &cli::RolesArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let mut reader = io_utils::open_csv_reader_from_path(&args.input, delimiter, true)?;
    let headers = io_utils::reader_headers(&mut reader, encoding)
        .with_context(|| format!("Reading header row from {:?}", args.input))?;
    let roles = columns::detect_roles(&headers)
        .with_context(|| format!("Classifying columns of {:?}", args.input))?;
    let rows = roles.describe(&headers);
    table::print_table(&["role".to_string(), "column".to_string()], &rows);
    info!(
        "Classified {} column(s) from '{}'",
        headers.len(),
        args.input.display()
    );
    Ok(())
}
