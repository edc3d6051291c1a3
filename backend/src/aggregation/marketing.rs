use crate::aggregation::{number_or_zero, of_type, text_or_na};
use common::model::datasource::{DataSourceRecord, DataSourceType};
use common::model::marketing::MarketingRow;

/// Metric labels, in the order their rows are emitted for each record.
pub static MARKETING_METRICS: [(&str, &str); 2] =
    [("Ad Spend", "adSpend"), ("Conversion Rate", "conversionRate")];

/// Projects every Marketing record into one row per metric.
pub fn marketing_rows(records: &[DataSourceRecord]) -> Vec<MarketingRow> {
    of_type(records, DataSourceType::Marketing)
        .flat_map(|record| {
            let campaign_name = text_or_na(record, "campaignName");
            let ad_spend = number_or_zero(record, "adSpend");
            let conversion_rate = number_or_zero(record, "conversionRate");

            MARKETING_METRICS.iter().map(move |(metric, key)| MarketingRow {
                metric: metric.to_string(),
                value: number_or_zero(record, key),
                campaign_name: campaign_name.clone(),
                ad_spend,
                conversion_rate,
                sync_frequency: record.sync_frequency.as_str().to_string(),
                last_recorded_at: record.recorded_at.clone(),
            })
        })
        .collect()
}
