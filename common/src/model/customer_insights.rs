use serde::{Deserialize, Serialize};

/// One of the four fixed customer buckets shown by the customer insights view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSegment {
    pub name: String,
    pub count: u64,
    /// `round(average resolution time * 1000)`.
    pub avg_purchase_value_proxy: i64,
    /// `round(average data quality score)`.
    pub lifetime_value_proxy: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInsights {
    /// Always High Value, Medium Value, Low Value, New Customers in that order.
    pub customer_segments: Vec<CustomerSegment>,
}
