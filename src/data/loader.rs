use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, ArrayRef, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{
    COL_BOOSTER_CATEGORY, COL_BOOSTER_VERSION, COL_CLASS, COL_FLIGHT_NUMBER, COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS, LaunchRecord, LaunchTable, Outcome,
};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row; `Launch Site`, `Payload Mass (kg)`,
///   `Booster Version Category` and `class` are required
/// * `.json`    – `[{ "Launch Site": ..., "class": 1, ... }, ...]`
/// * `.parquet` – the same columns as Arrow string / numeric columns
///
/// Any failure here is fatal for the dashboard: there is nothing to show
/// without the table.
pub fn load_file(path: &Path) -> Result<LaunchTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading launch records from {}", path.display()))?;

    let table = LaunchTable::from_records(records)
        .with_context(|| format!("validating launch records from {}", path.display()))?;

    log::info!(
        "Loaded {} launch records from {} ({} sites, payload {}..={} kg)",
        table.len(),
        path.display(),
        table.sites().len(),
        table.payload_min(),
        table.payload_max()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one launch per row.
/// Extra columns (e.g. the pandas index column) are ignored.
fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<LaunchRecord>> {
    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<LaunchRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "Booster Version Category": "v1.0",
///     "class": 0
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    serde_json::from_str(&text).context("parsing JSON launch records")
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of launch records.
///
/// Expected schema:
/// - `Launch Site`, `Booster Version Category`: Utf8 / LargeUtf8
/// - `Payload Mass (kg)`: Float64, Float32, Int64 or Int32
/// - `class`: Int64 or Int32 holding 0 / 1
/// - `Flight Number`, `Booster Version`: optional
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let offset = records.len();
        records.extend(batch_to_records(&batch, offset)?);
    }
    Ok(records)
}

fn batch_to_records(batch: &RecordBatch, offset: usize) -> Result<Vec<LaunchRecord>> {
    let site_col = required_column(batch, COL_LAUNCH_SITE)?;
    let mass_col = required_column(batch, COL_PAYLOAD_MASS)?;
    let category_col = required_column(batch, COL_BOOSTER_CATEGORY)?;
    let class_col = required_column(batch, COL_CLASS)?;
    let flight_col = optional_typed_column(batch, COL_FLIGHT_NUMBER, |t| {
        matches!(t, DataType::Int64 | DataType::Int32)
    });
    let version_col = optional_typed_column(batch, COL_BOOSTER_VERSION, |t| {
        matches!(t, DataType::Utf8 | DataType::LargeUtf8)
    });

    (0..batch.num_rows())
        .map(|row| {
            let row_no = offset + row;
            let class = extract_i64(class_col, row)
                .with_context(|| format!("Row {row_no}: failed to read '{COL_CLASS}'"))?;
            Ok(LaunchRecord {
                flight_number: flight_col
                    .filter(|c| c.is_valid(row))
                    .map(|c| extract_i64(c, row))
                    .transpose()
                    .with_context(|| format!("Row {row_no}: failed to read '{COL_FLIGHT_NUMBER}'"))?,
                launch_site: extract_string(site_col, row)
                    .with_context(|| format!("Row {row_no}: failed to read '{COL_LAUNCH_SITE}'"))?,
                outcome: Outcome::try_from(class)
                    .with_context(|| format!("Row {row_no}: bad '{COL_CLASS}'"))?,
                payload_mass_kg: extract_f64(mass_col, row)
                    .with_context(|| format!("Row {row_no}: failed to read '{COL_PAYLOAD_MASS}'"))?,
                booster_version: version_col
                    .filter(|c| c.is_valid(row))
                    .map(|c| extract_string(c, row))
                    .transpose()
                    .with_context(|| format!("Row {row_no}: failed to read '{COL_BOOSTER_VERSION}'"))?,
                booster_category: extract_string(category_col, row).with_context(|| {
                    format!("Row {row_no}: failed to read '{COL_BOOSTER_CATEGORY}'")
                })?,
            })
        })
        .collect()
}

// -- Arrow helpers --

fn required_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    optional_column(batch, name).with_context(|| format!("Parquet file missing '{name}' column"))
}

fn optional_column<'a>(batch: &'a RecordBatch, name: &str) -> Option<&'a ArrayRef> {
    batch.schema_ref().index_of(name).ok().map(|idx| batch.column(idx))
}

/// An optional column whose type `accepts` allows. A present column of any
/// other type is ignored with one warning for the batch.
fn optional_typed_column<'a>(
    batch: &'a RecordBatch,
    name: &str,
    accepts: impl Fn(&DataType) -> bool,
) -> Option<&'a ArrayRef> {
    let col = optional_column(batch, name)?;
    if accepts(col.data_type()) {
        Some(col)
    } else {
        log::warn!(
            "Ignoring optional column '{name}': unsupported type {:?}",
            col.data_type()
        );
        None
    }
}

fn extract_string(col: &ArrayRef, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

fn extract_f64(col: &ArrayRef, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<Float64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = any.downcast_ref::<Float32Array>() {
        Ok(f64::from(arr.value(row)))
    } else if let Some(arr) = any.downcast_ref::<Int64Array>() {
        Ok(arr.value(row) as f64)
    } else if let Some(arr) = any.downcast_ref::<Int32Array>() {
        Ok(f64::from(arr.value(row)))
    } else {
        bail!("Expected numeric column, got {:?}", col.data_type())
    }
}

fn extract_i64(col: &ArrayRef, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value in integer column");
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<Int64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = any.downcast_ref::<Int32Array>() {
        Ok(i64::from(arr.value(row)))
    } else {
        bail!("Expected integer column, got {:?}", col.data_type())
    }
}
