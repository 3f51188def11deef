//! Tabular source reader
//!
//! Reads a CSV file with header `order_id, customer_name, amount, status,
//! date` into validated records. The whole file is parsed before anything
//! is returned; the first invalid row aborts the read.

use std::path::Path;

use csv::StringRecord;
use sales_types::record::{RawSalesRow, SalesRecord};
use tracing::{debug, info};

use crate::loader::IngestionError;

/// Parse every row of `path` into a `SalesRecord`.
pub fn read_records(path: &Path) -> Result<Vec<SalesRecord>, IngestionError> {
    if !path.is_file() {
        return Err(IngestionError::NotFound {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), "Reading sales source");

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    debug!(columns = ?headers, "Source header");

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        records.push(parse_row(&row, &headers)?);
    }

    info!(rows = records.len(), "Parsed sales source");
    Ok(records)
}

fn parse_row(row: &StringRecord, headers: &StringRecord) -> Result<SalesRecord, IngestionError> {
    let line = row.position().map(|p| p.line() as usize).unwrap_or_default();
    let raw: RawSalesRow = row.deserialize(Some(headers))?;
    Ok(SalesRecord::from_row(raw, line)?)
}
