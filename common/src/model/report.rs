use serde::{Deserialize, Serialize};

/// One table of an exported report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSection {
    pub title: String,
    pub header_row: Vec<String>,
    pub body_rows: Vec<Vec<String>>,
}
