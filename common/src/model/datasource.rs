use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Department the record was synced from. Selects which `department_data`
/// keys the aggregators look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataSourceType {
    Sales,
    Finance,
    Marketing,
    Operations,
    #[serde(rename = "Customer Service")]
    CustomerService,
}

impl DataSourceType {
    pub const ALL: [DataSourceType; 5] = [
        DataSourceType::Sales,
        DataSourceType::Finance,
        DataSourceType::Marketing,
        DataSourceType::Operations,
        DataSourceType::CustomerService,
    ];

    /// The label used on the wire and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSourceType::Sales => "Sales",
            DataSourceType::Finance => "Finance",
            DataSourceType::Marketing => "Marketing",
            DataSourceType::Operations => "Operations",
            DataSourceType::CustomerService => "Customer Service",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataSourceStatus {
    Active,
    Inactive,
    Pending,
}

impl DataSourceStatus {
    pub const ALL: [DataSourceStatus; 3] = [
        DataSourceStatus::Active,
        DataSourceStatus::Inactive,
        DataSourceStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataSourceStatus::Active => "Active",
            DataSourceStatus::Inactive => "Inactive",
            DataSourceStatus::Pending => "Pending",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyncFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl SyncFrequency {
    pub const ALL: [SyncFrequency; 3] = [
        SyncFrequency::Daily,
        SyncFrequency::Weekly,
        SyncFrequency::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncFrequency::Daily => "Daily",
            SyncFrequency::Weekly => "Weekly",
            SyncFrequency::Monthly => "Monthly",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(label.trim()))
    }
}

/// Open, type-dependent payload attached to a record. No schema is enforced
/// when it is written.
pub type DepartmentData = Map<String, Value>;

/// One row of the shared collection: a snapshot of an external system synced
/// by a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceRecord {
    /// Assigned by the store on creation (UUID).
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: DataSourceType,
    pub status: DataSourceStatus,
    pub sync_frequency: SyncFrequency,
    /// Expected in 0..=100, not enforced.
    pub data_quality_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_data: Option<DepartmentData>,
    pub last_synced_date: String,
    /// Set by the write path, never changed afterwards.
    pub recorded_at: String,
}

impl DataSourceRecord {
    /// Reads a numeric department field. Numeric strings are accepted because
    /// form inputs arrive as text; anything else, including "inf" and "NaN",
    /// is treated as absent.
    pub fn department_number(&self, key: &str) -> Option<f64> {
        let value = match self.department_data.as_ref()?.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        value.filter(|v| v.is_finite())
    }

    /// Reads a department field as display text.
    pub fn department_text(&self, key: &str) -> Option<String> {
        match self.department_data.as_ref()?.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Payload accepted by the add path. `id` and `recordedAt` are assigned by the
/// store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDataSource {
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: DataSourceType,
    pub status: DataSourceStatus,
    pub sync_frequency: SyncFrequency,
    pub data_quality_score: f64,
    #[serde(default)]
    pub department_data: Option<DepartmentData>,
    /// Defaults to the creation timestamp when absent.
    #[serde(default)]
    pub last_synced_date: Option<String>,
}

/// Partial update; every `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourcePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub source_type: Option<DataSourceType>,
    #[serde(default)]
    pub status: Option<DataSourceStatus>,
    #[serde(default)]
    pub sync_frequency: Option<SyncFrequency>,
    #[serde(default)]
    pub data_quality_score: Option<f64>,
    #[serde(default)]
    pub department_data: Option<DepartmentData>,
    #[serde(default)]
    pub last_synced_date: Option<String>,
}

impl DataSourcePatch {
    pub fn apply(self, record: &mut DataSourceRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(source_type) = self.source_type {
            record.source_type = source_type;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(sync_frequency) = self.sync_frequency {
            record.sync_frequency = sync_frequency;
        }
        if let Some(score) = self.data_quality_score {
            record.data_quality_score = score;
        }
        if let Some(data) = self.department_data {
            record.department_data = Some(data);
        }
        if let Some(date) = self.last_synced_date {
            record.last_synced_date = date;
        }
    }
}
