use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value as JsonValue};

use super::error::DataLoadError;
use super::model::{DatasetStore, LaunchRecord, Outcome};

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with at least the four required columns
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – one column per field, as written by `df.to_parquet()`
///
/// Columns other than the required four are ignored.
pub fn load(path: &Path) -> Result<DatasetStore, DataLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let open = || {
        File::open(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    };

    let store = match ext.as_str() {
        "csv" => load_csv_from(BufReader::new(open()?))?,
        "json" => load_json_from(BufReader::new(open()?))?,
        "parquet" | "pq" => load_parquet(open()?)?,
        other => return Err(DataLoadError::UnsupportedFormat(other.to_string())),
    };

    log::info!(
        "Loaded {} launch records from {} ({} sites, payload {}..{} kg)",
        store.record_count(),
        path.display(),
        store.sites().len() - 1,
        store.min_payload(),
        store.max_payload()
    );
    Ok(store)
}

// ---------------------------------------------------------------------------
// Row validation shared by every format
// ---------------------------------------------------------------------------

fn invalid(record: usize, column: &'static str, value: impl ToString) -> DataLoadError {
    DataLoadError::InvalidValue {
        record,
        column,
        value: value.to_string(),
    }
}

fn payload_mass(record: usize, mass: f64) -> Result<f64, DataLoadError> {
    if mass.is_finite() && mass >= 0.0 {
        Ok(mass)
    } else {
        Err(invalid(record, COL_PAYLOAD_MASS, mass))
    }
}

/// Accepts `1`, `0` and float spellings of them (`1.0`).
fn outcome_from_f64(record: usize, class: f64) -> Result<Outcome, DataLoadError> {
    if class.fract() != 0.0 {
        return Err(invalid(record, COL_CLASS, class));
    }
    Outcome::from_class(class as i64).ok_or_else(|| invalid(record, COL_CLASS, class))
}

/// Blank cells are rejected; anything else is kept verbatim.
fn non_empty(record: usize, column: &'static str, s: &str) -> Result<String, DataLoadError> {
    if s.trim().is_empty() {
        return Err(invalid(record, column, s));
    }
    Ok(s.to_string())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse CSV launch records from any reader.
pub fn load_csv_from<R: Read>(reader: R) -> Result<DatasetStore, DataLoadError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();

    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(DataLoadError::MissingColumn(name))
    };
    let site_idx = column(COL_LAUNCH_SITE)?;
    let mass_idx = column(COL_PAYLOAD_MASS)?;
    let booster_idx = column(COL_BOOSTER_CATEGORY)?;
    let class_idx = column(COL_CLASS)?;

    let mut records = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = index + 1;
        let rec = result?;
        let cell = |idx: usize| rec.get(idx).unwrap_or("");

        let raw_mass = cell(mass_idx).trim();
        let mass = raw_mass
            .parse::<f64>()
            .map_err(|_| invalid(record, COL_PAYLOAD_MASS, raw_mass))?;

        let raw_class = cell(class_idx).trim();
        let outcome = match raw_class.parse::<i64>() {
            Ok(class) => Outcome::from_class(class).ok_or_else(|| invalid(record, COL_CLASS, raw_class))?,
            Err(_) => {
                let class = raw_class
                    .parse::<f64>()
                    .map_err(|_| invalid(record, COL_CLASS, raw_class))?;
                outcome_from_f64(record, class)?
            }
        };

        records.push(LaunchRecord {
            launch_site: non_empty(record, COL_LAUNCH_SITE, cell(site_idx))?,
            payload_mass_kg: payload_mass(record, mass)?,
            booster_version_category: non_empty(record, COL_BOOSTER_CATEGORY, cell(booster_idx))?,
            outcome,
        });
    }

    DatasetStore::from_records(records)
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
pub fn load_json_from<R: Read>(reader: R) -> Result<DatasetStore, DataLoadError> {
    let root: JsonValue = serde_json::from_reader(reader)?;
    let rows = root
        .as_array()
        .ok_or_else(|| malformed_json("expected a top-level array of records"))?;

    let records = rows
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let record = index + 1;
            let obj = value
                .as_object()
                .ok_or_else(|| malformed_json(format!("record {record} is not an object")))?;
            json_record(record, obj)
        })
        .collect::<Result<Vec<_>, _>>()?;

    DatasetStore::from_records(records)
}

fn malformed_json(msg: impl std::fmt::Display) -> DataLoadError {
    DataLoadError::Json(<serde_json::Error as serde::de::Error>::custom(msg))
}

fn json_field<'a>(
    obj: &'a Map<String, JsonValue>,
    column: &'static str,
) -> Result<&'a JsonValue, DataLoadError> {
    obj.get(column).ok_or(DataLoadError::MissingColumn(column))
}

fn json_str(record: usize, obj: &Map<String, JsonValue>, column: &'static str) -> Result<String, DataLoadError> {
    let value = json_field(obj, column)?;
    let s = value.as_str().ok_or_else(|| invalid(record, column, value))?;
    non_empty(record, column, s)
}

fn json_f64(record: usize, obj: &Map<String, JsonValue>, column: &'static str) -> Result<f64, DataLoadError> {
    let value = json_field(obj, column)?;
    value.as_f64().ok_or_else(|| invalid(record, column, value))
}

fn json_record(record: usize, obj: &Map<String, JsonValue>) -> Result<LaunchRecord, DataLoadError> {
    Ok(LaunchRecord {
        launch_site: json_str(record, obj, COL_LAUNCH_SITE)?,
        payload_mass_kg: payload_mass(record, json_f64(record, obj, COL_PAYLOAD_MASS)?)?,
        booster_version_category: json_str(record, obj, COL_BOOSTER_CATEGORY)?,
        outcome: outcome_from_f64(record, json_f64(record, obj, COL_CLASS)?)?,
    })
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by Pandas or Polars.
///
/// Expected schema:
/// - `Launch Site`, `Booster Version Category`: Utf8 or LargeUtf8
/// - `Payload Mass (kg)`: any float or integer type
/// - `class`: Int32/Int64, or a float column holding 0.0 / 1.0
fn load_parquet(file: File) -> Result<DatasetStore, DataLoadError> {
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;
        let offset = records.len();

        let site_col = parquet_column(&batch, COL_LAUNCH_SITE)?;
        let mass_col = parquet_column(&batch, COL_PAYLOAD_MASS)?;
        let booster_col = parquet_column(&batch, COL_BOOSTER_CATEGORY)?;
        let class_col = parquet_column(&batch, COL_CLASS)?;

        for i in 0..batch.num_rows() {
            let record = offset + i + 1;
            records.push(LaunchRecord {
                launch_site: string_at(site_col, i, record, COL_LAUNCH_SITE)?,
                payload_mass_kg: payload_mass(record, number_at(mass_col, i, record, COL_PAYLOAD_MASS)?)?,
                booster_version_category: string_at(booster_col, i, record, COL_BOOSTER_CATEGORY)?,
                outcome: outcome_from_f64(record, number_at(class_col, i, record, COL_CLASS)?)?,
            });
        }
    }

    DatasetStore::from_records(records)
}

// -- Parquet / Arrow helpers --

fn parquet_column<'a>(batch: &'a RecordBatch, name: &'static str) -> Result<&'a ArrayRef, DataLoadError> {
    batch
        .column_by_name(name)
        .ok_or(DataLoadError::MissingColumn(name))
}

/// Read a string cell; `i` indexes the batch, `record` numbers the dataset from 1.
fn string_at(col: &ArrayRef, i: usize, record: usize, column: &'static str) -> Result<String, DataLoadError> {
    if col.is_null(i) {
        return Err(invalid(record, column, "null"));
    }
    let value = if let Some(arr) = col.as_string_opt::<i32>() {
        arr.value(i)
    } else if let Some(arr) = col.as_string_opt::<i64>() {
        arr.value(i)
    } else {
        return Err(invalid(record, column, format!("{:?}", col.data_type())));
    };
    non_empty(record, column, value)
}

/// Read a numeric cell as `f64` whatever its physical type.
fn number_at(col: &ArrayRef, i: usize, record: usize, column: &'static str) -> Result<f64, DataLoadError> {
    if col.is_null(i) {
        return Err(invalid(record, column, "null"));
    }
    let value = match col.data_type() {
        DataType::Float64 => col.as_primitive::<Float64Type>().value(i),
        DataType::Float32 => col.as_primitive::<Float32Type>().value(i) as f64,
        DataType::Int64 => col.as_primitive::<Int64Type>().value(i) as f64,
        DataType::Int32 => col.as_primitive::<Int32Type>().value(i) as f64,
        other => return Err(invalid(record, column, format!("{other:?}"))),
    };
    Ok(value)
}
