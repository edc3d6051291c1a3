use serde::{Deserialize, Serialize};

/// A marketing record projected for one metric. Every record yields one row
/// per metric, the view lists them without pivoting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingRow {
    pub metric: String,
    pub value: f64,
    pub campaign_name: String,
    pub ad_spend: f64,
    pub conversion_rate: f64,
    pub sync_frequency: String,
    pub last_recorded_at: String,
}
