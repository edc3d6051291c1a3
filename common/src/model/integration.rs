use crate::model::datasource::DataSourceType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub source_type: DataSourceType,
    pub count: u64,
}

/// Collection-wide health figures shown on the data integration page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationMetrics {
    pub total_data_sources: u64,
    pub active_sources: u64,
    /// Everything not Active, Pending included.
    pub inactive_sources: u64,
    /// Percentage of records that are Active with a quality score above 90.
    pub data_integrity_rate: f64,
    pub last_full_sync: Option<String>,
    pub by_type: Vec<TypeCount>,
}
