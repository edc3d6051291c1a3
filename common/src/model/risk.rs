use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskEntry {
    pub category: String,
    pub description: String,
    /// 1..=5
    pub likelihood: u8,
    /// 1..=5
    pub impact: u8,
    /// `likelihood * impact`
    pub risk_score: u8,
    pub mitigation_strategy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRegister {
    pub risks: Vec<RiskEntry>,
}
