use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessPoint {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProcessSummary {
    /// Operations stock quantities.
    pub process_visualization: Vec<ProcessPoint>,
    /// Finance invoice amounts.
    pub detailed_process_analysis: Vec<ProcessPoint>,
    /// Marketing conversion rates.
    pub optimization_recommendations: Vec<ProcessPoint>,
    /// Customer service resolution times.
    pub performance_issues: Vec<ProcessPoint>,
    /// Data quality of every record, regardless of type.
    pub process_mining: Vec<ProcessPoint>,
}
