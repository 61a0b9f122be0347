//! The `preview` command: show the first few parsed rows as a table.

use anyhow::{Context, Result};
use log::info;

use crate::{cli::PreviewArgs, data, io_utils, table};

pub fn execute(args: &PreviewArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;

    let dataset = data::read_dataset(&args.input, delimiter, encoding, Some(args.rows))
        .with_context(|| format!("Reading CSV data from {:?}", args.input))?;

    let rows: Vec<Vec<String>> = (0..dataset.len())
        .map(|row| {
            (0..dataset.headers.len())
                .map(|column| dataset.display(row, column))
                .collect()
        })
        .collect();
    table::print_table(&dataset.headers, &rows);
    info!(
        "Previewed {} row(s) from '{}'",
        dataset.len(),
        args.input.display()
    );
    Ok(())
}
