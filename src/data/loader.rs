use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use super::cleaner;
use super::model::{RawSighting, SightingDataset};

/// Structural problems in the input file, as opposed to I/O failures.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("expected a top-level JSON array of sighting records")]
    NotARecordArray,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a sighting dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – NUFORC-style export with a header row (recommended)
/// * `.json`    – `[{ "Date_time": ..., "latitude": ..., ... }, ...]`
/// * `.parquet` – flat scalar columns, e.g. written by `df.to_parquet()`
///
/// Rows whose coordinates or timestamp fail to coerce are dropped here; the
/// returned dataset contains only fully valid sightings.
pub fn load_file(path: &Path) -> Result<SightingDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let raw = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    };

    let total = raw.len();
    let sightings = cleaner::clean_records(raw);
    log::info!(
        "loaded {} sightings, dropped {} rows in cleaning",
        sightings.len(),
        total - sightings.len()
    );

    Ok(SightingDataset::from_sightings(sightings))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<RawSighting>> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    parse_csv(file)
}

/// Deserialize a CSV stream with a header row. Unknown columns are ignored;
/// a structurally broken row (missing required column, wrong arity) is an
/// error rather than a silently dropped record.
fn parse_csv<R: Read>(input: R) -> Result<Vec<RawSighting>> {
    let mut reader = csv::Reader::from_reader(input);
    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<RawSighting>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Date_time": "6/24/1995 21:00",
///     "city": "phoenix",
///     "state/province": "az",
///     "UFO_shape": "light",
///     "description": "...",
///     "latitude": 33.4484,
///     "longitude": -112.074
///   },
///   ...
/// ]
/// ```
///
/// Latitude/longitude may be numbers or strings; both are carried as text
/// into the raw record for the cleaner to coerce.
fn load_json(path: &Path) -> Result<Vec<RawSighting>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<Vec<RawSighting>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let records = root.as_array().ok_or(LoadError::NotARecordArray)?;

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let state = field_string(obj, "state/province");
        rows.push(RawSighting {
            date_time: field_string(obj, "Date_time"),
            city: field_string(obj, "city"),
            state: (!state.is_empty()).then_some(state),
            shape: field_string(obj, "UFO_shape"),
            description: field_string(obj, "description"),
            latitude: field_string(obj, "latitude"),
            longitude: field_string(obj, "longitude"),
        });
    }
    Ok(rows)
}

/// Stringify a scalar JSON field; missing and null become the empty string,
/// which the cleaner treats as a failed coercion.
fn field_string(obj: &Map<String, JsonValue>, key: &str) -> String {
    match obj.get(key) {
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Number(n)) => n.to_string(),
        Some(JsonValue::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of sighting rows with flat scalar columns.
///
/// `Date_time`, `city`, `latitude`, and `longitude` must exist;
/// `state/province`, `UFO_shape`, and `description` are optional. Cells may
/// be Utf8 or numeric; nulls become empty strings. Works with files written
/// by both **Pandas** (`df.to_parquet()`) and **Polars**
/// (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Vec<RawSighting>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let date_idx = schema
            .index_of("Date_time")
            .map_err(|_| LoadError::MissingColumn("Date_time"))?;
        let city_idx = schema
            .index_of("city")
            .map_err(|_| LoadError::MissingColumn("city"))?;
        let lat_idx = schema
            .index_of("latitude")
            .map_err(|_| LoadError::MissingColumn("latitude"))?;
        let lon_idx = schema
            .index_of("longitude")
            .map_err(|_| LoadError::MissingColumn("longitude"))?;
        let state_idx = schema.index_of("state/province").ok();
        let shape_idx = schema.index_of("UFO_shape").ok();
        let desc_idx = schema.index_of("description").ok();

        for row in 0..batch.num_rows() {
            let cell = |idx: usize| scalar_string(batch.column(idx), row);

            let state = state_idx.map(&cell).unwrap_or_default();
            rows.push(RawSighting {
                date_time: cell(date_idx),
                city: cell(city_idx),
                state: (!state.is_empty()).then_some(state),
                shape: shape_idx.map(&cell).unwrap_or_default(),
                description: desc_idx.map(&cell).unwrap_or_default(),
                latitude: cell(lat_idx),
                longitude: cell(lon_idx),
            });
        }
    }

    Ok(rows)
}

/// Stringify a scalar Arrow cell. Nulls and unsupported column types become
/// the empty string, matching the JSON loader's missing-value convention.
fn scalar_string(col: &Arc<dyn Array>, row: usize) -> String {
    if col.is_null(row) {
        return String::new();
    }
    match col.data_type() {
        DataType::Utf8 => {
            if let Some(arr) = col.as_any().downcast_ref::<StringArray>() {
                arr.value(row).to_string()
            } else {
                String::new()
            }
        }
        DataType::LargeUtf8 => {
            let arr = col.as_string::<i64>();
            arr.value(row).to_string()
        }
        DataType::Float64 => {
            if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
                arr.value(row).to_string()
            } else {
                String::new()
            }
        }
        DataType::Float32 => {
            if let Some(arr) = col.as_any().downcast_ref::<Float32Array>() {
                (arr.value(row) as f64).to_string()
            } else {
                String::new()
            }
        }
        DataType::Int64 => {
            if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
                arr.value(row).to_string()
            } else {
                String::new()
            }
        }
        DataType::Int32 => {
            if let Some(arr) = col.as_any().downcast_ref::<Int32Array>() {
                arr.value(row).to_string()
            } else {
                String::new()
            }
        }
        _ => String::new(),
    }
}
