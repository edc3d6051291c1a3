use crate::model::datasource::{DataSourceStatus, DataSourceType};
use serde::{Deserialize, Serialize};

/// Query accepted by `GET /api/data_sources`. Every present field must match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceFilter {
    #[serde(default, rename = "type")]
    pub source_type: Option<DataSourceType>,
    #[serde(default)]
    pub status: Option<DataSourceStatus>,
    #[serde(default)]
    pub min_quality_score: Option<f64>,
    /// Case-insensitive substring of the record name. Blank means no filter.
    #[serde(default)]
    pub name_contains: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported: usize,
    pub ids: Vec<String>,
}
