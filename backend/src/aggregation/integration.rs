use crate::aggregation::of_type;
use common::model::datasource::{DataSourceRecord, DataSourceStatus, DataSourceType};
use common::model::integration::{IntegrationMetrics, TypeCount};

/// Quality a source must exceed to count towards the integrity rate.
const CLEAN_QUALITY_THRESHOLD: f64 = 90.0;

/// Health figures over the whole collection, shown on the data integration
/// page.
pub fn integration_metrics(records: &[DataSourceRecord]) -> IntegrationMetrics {
    let total = records.len() as u64;
    let active = records
        .iter()
        .filter(|r| r.status == DataSourceStatus::Active)
        .count() as u64;
    let clean = records
        .iter()
        .filter(|r| {
            r.status == DataSourceStatus::Active && r.data_quality_score > CLEAN_QUALITY_THRESHOLD
        })
        .count() as f64;

    let data_integrity_rate = if total == 0 {
        0.0
    } else {
        clean / total as f64 * 100.0
    };

    // ISO dates sort the same way as text.
    let last_full_sync = records
        .iter()
        .map(|r| r.last_synced_date.as_str())
        .filter(|d| !d.is_empty())
        .max()
        .map(str::to_string);

    IntegrationMetrics {
        total_data_sources: total,
        active_sources: active,
        inactive_sources: total - active,
        data_integrity_rate,
        last_full_sync,
        by_type: DataSourceType::ALL
            .iter()
            .map(|t| TypeCount {
                source_type: *t,
                count: of_type(records, *t).count() as u64,
            })
            .collect(),
    }
}
