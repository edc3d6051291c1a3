use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRevenue {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTotals {
    pub total_revenue: f64,
    /// Number of Sales records, shown as "new customers" on the dashboard.
    pub record_count: u64,
    /// Sales records left out of every sum because `saleAmount` was unusable.
    pub malformed_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportRow {
    pub product: String,
    pub sales: f64,
    pub formatted_revenue: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub monthly_sales: Vec<MonthlySales>,
    pub revenue_by_product: Vec<ProductRevenue>,
    pub totals: SalesTotals,
    pub per_record_report: Vec<SalesReportRow>,
}
