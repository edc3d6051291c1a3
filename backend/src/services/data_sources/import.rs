//! Bulk import of data sources from an uploaded CSV file.
//!
//! The multipart body carries a single `file` part. Its header must contain
//! `name`, `type`, `status`, `syncFrequency` and `dataQualityScore`;
//! `lastSyncedDate` is optional and every other column ends up in
//! `departmentData` (numbers as JSON numbers, empty cells skipped). Any bad
//! row rejects the whole file, nothing is stored in that case.

use crate::error::ImportError;
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::model::datasource::{
    DataSourceStatus, DataSourceType, DepartmentData, NewDataSource, SyncFrequency,
};
use common::requests::ImportResponse;
use csv::{ReaderBuilder, StringRecord, Trim};
use futures_util::StreamExt;
use log::{info, warn};
use regex::Regex;
use serde_json::{Number, Value};

const REQUIRED_COLUMNS: [&str; 5] = [
    "name",
    "type",
    "status",
    "syncFrequency",
    "dataQualityScore",
];
const LAST_SYNCED_COLUMN: &str = "lastSyncedDate";

/// HTTP handler wrapper that converts the import result to an `HttpResponse`.
///
/// - On success: `201 Created` with the number of records and their ids.
/// - On a rejected file: `400 Bad Request` with the error message.
pub async fn process(payload: Multipart, state: web::Data<AppState>) -> impl Responder {
    match import_data_sources(payload, &state).await {
        Ok(ids) => HttpResponse::Created().json(ImportResponse {
            imported: ids.len(),
            ids,
        }),
        Err(ImportError::Store(e)) => crate::services::store_error_response(&e),
        Err(e) => {
            warn!("CSV import rejected: {}", e);
            HttpResponse::BadRequest().body(format!("Error: {}", e))
        }
    }
}

async fn import_data_sources(
    mut payload: Multipart,
    state: &AppState,
) -> Result<Vec<String>, ImportError> {
    let mut contents: Option<Vec<u8>> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| ImportError::Multipart(e.to_string()))?;
        let part_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if part_name.as_deref() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();
        if !filename.to_lowercase().ends_with(".csv") {
            return Err(ImportError::NotCsv);
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| ImportError::Multipart(e.to_string()))?;
            bytes.extend_from_slice(&chunk);
        }
        contents = Some(bytes);
    }

    let contents = contents.ok_or(ImportError::MissingFile)?;
    let batch = parse_csv(&contents)?;
    let ids = state.store.add_all(batch)?;
    info!("Imported {} data source(s) from CSV", ids.len());
    Ok(ids)
}

/// Validate each header cell: letters, marks, spaces, hyphen, underscore.
fn validate_header_cells(headers: &StringRecord) -> Result<(), ImportError> {
    let header_re = Regex::new(r"^[\p{L}\p{M}\s\-_]+$")
        .map_err(|e| ImportError::Header(format!("regex error: {}", e)))?;

    for cell in headers.iter() {
        if cell.is_empty() {
            return Err(ImportError::Header("header cells must not be empty".to_string()));
        }
        if !header_re.is_match(cell) {
            return Err(ImportError::Header(format!(
                "'{}' may only contain letters, spaces, '-' and '_'",
                cell
            )));
        }
    }

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(ImportError::Header(format!("missing column '{}'", required)));
        }
    }
    Ok(())
}

/// A cell becomes a JSON number only when it is already written the way the
/// number prints; "000123", "1e5" or "2.50" stay text so ids keep their
/// leading zeros.
fn cell_value(cell: &str) -> Value {
    if let Ok(int) = cell.parse::<i64>() {
        if int.to_string() == cell {
            return Value::Number(int.into());
        }
    }
    cell.parse::<f64>()
        .ok()
        .filter(|v| v.to_string() == cell)
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(cell.to_string()))
}

fn parse_row(headers: &StringRecord, row: &StringRecord, line: usize) -> Result<NewDataSource, ImportError> {
    let row_error = |message: String| ImportError::Row { row: line, message };

    let mut name = None;
    let mut source_type = None;
    let mut status = None;
    let mut sync_frequency = None;
    let mut data_quality_score = None;
    let mut last_synced_date = None;
    let mut department_data = DepartmentData::new();

    for (header, cell) in headers.iter().zip(row.iter()) {
        match header {
            "name" => name = Some(cell.to_string()),
            "type" => {
                source_type = Some(
                    DataSourceType::parse(cell)
                        .ok_or_else(|| row_error(format!("unknown type '{}'", cell)))?,
                )
            }
            "status" => {
                status = Some(
                    DataSourceStatus::parse(cell)
                        .ok_or_else(|| row_error(format!("unknown status '{}'", cell)))?,
                )
            }
            "syncFrequency" => {
                sync_frequency = Some(
                    SyncFrequency::parse(cell)
                        .ok_or_else(|| row_error(format!("unknown sync frequency '{}'", cell)))?,
                )
            }
            "dataQualityScore" => {
                data_quality_score = Some(cell.parse::<f64>().map_err(|_| {
                    row_error(format!("dataQualityScore '{}' is not a number", cell))
                })?)
            }
            LAST_SYNCED_COLUMN => {
                if !cell.is_empty() {
                    last_synced_date = Some(cell.to_string());
                }
            }
            other => {
                if !cell.is_empty() {
                    department_data.insert(other.to_string(), cell_value(cell));
                }
            }
        }
    }

    let missing = |column: &str| row_error(format!("missing value for '{}'", column));
    Ok(NewDataSource {
        name: name.filter(|n| !n.is_empty()).ok_or_else(|| missing("name"))?,
        source_type: source_type.ok_or_else(|| missing("type"))?,
        status: status.ok_or_else(|| missing("status"))?,
        sync_frequency: sync_frequency.ok_or_else(|| missing("syncFrequency"))?,
        data_quality_score: data_quality_score.ok_or_else(|| missing("dataQualityScore"))?,
        department_data: if department_data.is_empty() {
            None
        } else {
            Some(department_data)
        },
        last_synced_date,
    })
}

/// Parses the whole file into records ready to be stored.
pub(crate) fn parse_csv(contents: &[u8]) -> Result<Vec<NewDataSource>, ImportError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(contents);

    let headers = reader.headers()?.clone();
    validate_header_cells(&headers)?;

    let mut batch = Vec::new();
    for (i, row) in reader.records().enumerate() {
        // +2: 1-based lines and the header line
        batch.push(parse_row(&headers, &row?, i + 2)?);
    }
    Ok(batch)
}
