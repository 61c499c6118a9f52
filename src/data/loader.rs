use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float64Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{PriceRecord, PriceTable};

const YEAR: &str = "Year";
const STATE: &str = "US_State";
const PRICE: &str = "Residential Price";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a price table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with `Year`, `US_State`, `Residential Price`
/// * `.json`    – `[{ "Year": 2015, "US_State": "CA", "Residential Price": 17.0 }, ...]`
/// * `.parquet` – flat columns with the same names
///
/// Extra columns are ignored in every format.
pub fn load_file(path: &Path) -> Result<PriceTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };
    check_prices(&table)?;
    Ok(table)
}

/// Every price must be a finite number; `NaN` or `inf` would poison the
/// per-state mean.
fn check_prices(table: &PriceTable) -> Result<()> {
    if let Some((row_no, record)) = table
        .records()
        .iter()
        .enumerate()
        .find(|(_, r)| !r.residential_price.is_finite())
    {
        bail!(
            "Row {row_no}: '{PRICE}' for {} in {} is not a finite number ({})",
            record.state,
            record.year,
            record.residential_price
        );
    }
    Ok(())
}

/// Write `table` as CSV with the same headers the loader expects.
pub fn write_csv(path: &Path, table: &PriceTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for record in table.records() {
        writer.serialize(record).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<PriceTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for column in [YEAR, STATE, PRICE] {
        if !headers.iter().any(|h| h == column) {
            bail!("CSV missing '{column}' column");
        }
    }

    reader
        .deserialize::<PriceRecord>()
        .enumerate()
        .map(|(row_no, result)| result.with_context(|| format!("CSV row {row_no}")))
        .collect::<Result<Vec<_>>>()
        .map(PriceTable::from_records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, i.e. what `df.to_json(orient='records')` writes.
fn load_json(path: &Path) -> Result<PriceTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<PriceRecord> =
        serde_json::from_str(&text).context("parsing JSON price records")?;
    Ok(PriceTable::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with flat `Year`, `US_State` and `Residential Price`
/// columns.  Any integer width is accepted for the year and any numeric
/// type for the price; both are cast before reading.
fn load_parquet(path: &Path) -> Result<PriceTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    let mut offset = 0;
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        read_batch(&batch, offset, &mut records)?;
        offset += batch.num_rows();
    }

    Ok(PriceTable::from_records(records))
}

fn read_batch(batch: &RecordBatch, offset: usize, out: &mut Vec<PriceRecord>) -> Result<()> {
    let years = cast_column(batch, YEAR, &DataType::Int64)?;
    let states = cast_column(batch, STATE, &DataType::Utf8)?;
    let prices = cast_column(batch, PRICE, &DataType::Float64)?;

    let years = years.as_primitive::<Int64Type>();
    let states = states.as_string::<i32>();
    let prices = prices.as_primitive::<Float64Type>();

    for row in 0..batch.num_rows() {
        let row_no = offset + row;
        if years.is_null(row) || states.is_null(row) || prices.is_null(row) {
            bail!("Row {row_no}: null value");
        }
        let year = i32::try_from(years.value(row))
            .with_context(|| format!("Row {row_no}: year out of range"))?;
        out.push(PriceRecord {
            year,
            state: states.value(row).to_string(),
            residential_price: prices.value(row),
        });
    }
    Ok(())
}

fn cast_column(batch: &RecordBatch, name: &str, to: &DataType) -> Result<ArrayRef> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    let column = batch.column(idx);
    arrow::compute::cast(column.as_ref(), to)
        .with_context(|| format!("column '{name}' ({}) is not {to}", column.data_type()))
}
