//! SQLite-backed record store holding the single `data_sources` collection.
//!
//! Every operation opens its own connection on the configured database file,
//! so a `RecordStore` is cheap to clone into each Actix worker. Writes publish
//! a fresh full-collection snapshot to the subscribers (see `subscription`).
//! Snapshots are loaded and sent under one lock shared by all clones, so a
//! subscriber never receives an older collection after a newer one.

mod subscription;

pub use subscription::Subscription;

use crate::error::{StoreError, UnknownLabel};
use chrono::{SecondsFormat, Utc};
use common::model::datasource::{
    DataSourcePatch, DataSourceRecord, DataSourceStatus, DataSourceType, NewDataSource,
    SyncFrequency,
};
use common::requests::DataSourceFilter;
use log::{error, info};
use rusqlite::types::{Type, Value};
use rusqlite::{
    params, params_from_iter, Connection, OptionalExtension, Row, TransactionBehavior,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Snapshots buffered per subscriber before older ones are dropped.
const SNAPSHOT_BUFFER: usize = 16;

const SELECT_COLUMNS: &str = "SELECT id, name, type, status, sync_frequency, data_quality_score, \
     department_data, last_synced_date, recorded_at FROM data_sources";

const ORDER_BY: &str = " ORDER BY recorded_at, rowid";

#[derive(Clone)]
pub struct RecordStore {
    db_path: PathBuf,
    changes: broadcast::Sender<Vec<DataSourceRecord>>,
    publishing: Arc<Mutex<()>>,
}

impl RecordStore {
    /// Opens (and creates when needed) the database at `db_path`.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref().to_path_buf();
        let conn = Connection::open(&db_path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS data_sources (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                type TEXT NOT NULL,
                status TEXT NOT NULL,
                sync_frequency TEXT NOT NULL,
                data_quality_score REAL NOT NULL,
                department_data TEXT,
                last_synced_date TEXT NOT NULL,
                recorded_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_data_sources_type ON data_sources (type);",
        )?;

        let (changes, _) = broadcast::channel(SNAPSHOT_BUFFER);
        info!("Record store ready at {}", db_path.display());
        Ok(RecordStore {
            db_path,
            changes,
            publishing: Arc::new(Mutex::new(())),
        })
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.db_path)?)
    }

    pub fn fetch_all(&self) -> Result<Vec<DataSourceRecord>, StoreError> {
        self.query(&format!("{}{}", SELECT_COLUMNS, ORDER_BY), Vec::new())
    }

    pub fn fetch_by_type(
        &self,
        source_type: DataSourceType,
    ) -> Result<Vec<DataSourceRecord>, StoreError> {
        self.fetch_by_type_in(&[source_type])
    }

    pub fn fetch_by_type_in(
        &self,
        types: &[DataSourceType],
    ) -> Result<Vec<DataSourceRecord>, StoreError> {
        if types.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = vec!["?"; types.len()].join(", ");
        let sql = format!(
            "{} WHERE type IN ({}){}",
            SELECT_COLUMNS, placeholders, ORDER_BY
        );
        let values = types
            .iter()
            .map(|t| Value::Text(t.as_str().to_string()))
            .collect();
        self.query(&sql, values)
    }

    /// Every field present in `filter` must match.
    pub fn fetch_filtered(
        &self,
        filter: &DataSourceFilter,
    ) -> Result<Vec<DataSourceRecord>, StoreError> {
        let mut clauses: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(source_type) = filter.source_type {
            clauses.push("type = ?");
            values.push(Value::Text(source_type.as_str().to_string()));
        }
        if let Some(status) = filter.status {
            clauses.push("status = ?");
            values.push(Value::Text(status.as_str().to_string()));
        }
        if let Some(min) = filter.min_quality_score {
            clauses.push("data_quality_score >= ?");
            values.push(Value::Real(min));
        }
        if let Some(needle) = filter.name_contains.as_deref().map(str::trim) {
            if !needle.is_empty() {
                clauses.push("LOWER(name) LIKE ? ESCAPE '\\'");
                values.push(Value::Text(format!("%{}%", escape_like(&needle.to_ascii_lowercase()))));
            }
        }

        let sql = if clauses.is_empty() {
            format!("{}{}", SELECT_COLUMNS, ORDER_BY)
        } else {
            format!("{} WHERE {}{}", SELECT_COLUMNS, clauses.join(" AND "), ORDER_BY)
        };
        self.query(&sql, values)
    }

    pub fn get(&self, id: &str) -> Result<DataSourceRecord, StoreError> {
        let conn = self.connect()?;
        find_record(&conn, id)
    }

    /// Stores a new record and returns its generated id.
    pub fn add(&self, new: NewDataSource) -> Result<String, StoreError> {
        let mut ids = self.add_all(vec![new])?;
        ids.pop()
            .ok_or_else(|| StoreError::Invalid("nothing was inserted".to_string()))
    }

    /// Stores several records in one transaction. Either all of them are
    /// written or none is.
    pub fn add_all(&self, batch: Vec<NewDataSource>) -> Result<Vec<String>, StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let mut ids = Vec::with_capacity(batch.len());

        for new in batch {
            let record = new_record(new);
            insert_record(&tx, &record)?;
            ids.push(record.id);
        }
        tx.commit()?;

        info!("Stored {} data source(s)", ids.len());
        self.publish();
        Ok(ids)
    }

    /// Applies `patch` to the stored record. The read and the write happen in
    /// one immediate transaction, so concurrent patches to different fields
    /// both survive and a record deleted meanwhile is reported as missing.
    pub fn update(&self, id: &str, patch: DataSourcePatch) -> Result<DataSourceRecord, StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut record = find_record(&tx, id)?;
        patch.apply(&mut record);
        validate_record(&record)?;

        let department_data = encode_department_data(&record)?;
        let changed = tx.execute(
            "UPDATE data_sources SET name = ?1, type = ?2, status = ?3, sync_frequency = ?4,
                data_quality_score = ?5, department_data = ?6, last_synced_date = ?7
             WHERE id = ?8",
            params![
                record.name,
                record.source_type.as_str(),
                record.status.as_str(),
                record.sync_frequency.as_str(),
                record.data_quality_score,
                department_data,
                record.last_synced_date,
                record.id,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        tx.commit()?;

        info!("Updated data source {}", id);
        self.publish();
        Ok(record)
    }

    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let conn = self.connect()?;
        let removed = conn.execute("DELETE FROM data_sources WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        info!("Deleted data source {}", id);
        self.publish();
        Ok(())
    }

    /// Registers for change notifications. Dropping the returned handle
    /// unsubscribes.
    pub fn subscribe(&self) -> Subscription {
        Subscription::new(self.changes.subscribe())
    }

    fn query(&self, sql: &str, values: Vec<Value>) -> Result<Vec<DataSourceRecord>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), read_record)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }

    fn publish(&self) {
        let _guard = self
            .publishing
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.changes.receiver_count() == 0 {
            return;
        }
        match self.fetch_all() {
            Ok(snapshot) => {
                let _ = self.changes.send(snapshot);
            }
            Err(e) => error!("Could not load a snapshot for subscribers: {}", e),
        }
    }
}

fn new_record(new: NewDataSource) -> DataSourceRecord {
    let recorded_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let last_synced_date = new
        .last_synced_date
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| recorded_at.clone());

    DataSourceRecord {
        id: Uuid::new_v4().to_string(),
        name: new.name,
        source_type: new.source_type,
        status: new.status,
        sync_frequency: new.sync_frequency,
        data_quality_score: new.data_quality_score,
        department_data: new.department_data,
        last_synced_date,
        recorded_at,
    }
}

fn find_record(conn: &Connection, id: &str) -> Result<DataSourceRecord, StoreError> {
    let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);
    conn.query_row(&sql, params![id], read_record)
        .optional()?
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
}

/// Checks shared by the add and update paths.
fn validate_record(record: &DataSourceRecord) -> Result<(), StoreError> {
    if record.name.trim().is_empty() {
        return Err(StoreError::Invalid("name must not be empty".to_string()));
    }
    if !record.data_quality_score.is_finite() {
        return Err(StoreError::Invalid(
            "dataQualityScore must be a number".to_string(),
        ));
    }
    Ok(())
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn insert_record(conn: &Connection, record: &DataSourceRecord) -> Result<(), StoreError> {
    validate_record(record)?;

    let department_data = encode_department_data(record)?;
    conn.execute(
        "INSERT INTO data_sources (id, name, type, status, sync_frequency, data_quality_score,
            department_data, last_synced_date, recorded_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            record.id,
            record.name,
            record.source_type.as_str(),
            record.status.as_str(),
            record.sync_frequency.as_str(),
            record.data_quality_score,
            department_data,
            record.last_synced_date,
            record.recorded_at,
        ],
    )?;
    Ok(())
}

fn encode_department_data(record: &DataSourceRecord) -> Result<Option<String>, StoreError> {
    record
        .department_data
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(StoreError::from)
}

fn read_record(row: &Row) -> rusqlite::Result<DataSourceRecord> {
    let type_label: String = row.get(2)?;
    let status_label: String = row.get(3)?;
    let frequency_label: String = row.get(4)?;
    let department_json: Option<String> = row.get(6)?;

    let department_data = match department_json {
        Some(json) => Some(
            serde_json::from_str(&json)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?,
        ),
        None => None,
    };

    Ok(DataSourceRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        source_type: parse_label(2, "type", &type_label, DataSourceType::parse)?,
        status: parse_label(3, "status", &status_label, DataSourceStatus::parse)?,
        sync_frequency: parse_label(4, "sync frequency", &frequency_label, SyncFrequency::parse)?,
        data_quality_score: row.get(5)?,
        department_data,
        last_synced_date: row.get(7)?,
        recorded_at: row.get(8)?,
    })
}

fn parse_label<T>(
    column: usize,
    field: &'static str,
    label: &str,
    parse: fn(&str) -> Option<T>,
) -> rusqlite::Result<T> {
    parse(label).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            Type::Text,
            Box::new(UnknownLabel {
                field,
                label: label.to_string(),
            }),
        )
    })
}
