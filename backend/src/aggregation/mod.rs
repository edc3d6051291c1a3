//! # Aggregation layer
//!
//! Pure functions turning the flat record collection into the summary each
//! dashboard view renders. None of them touch the store: handlers fetch a
//! snapshot and pass it in, so each call works on its own copy.
//!
//! Every aggregator filters by type itself, so passing the full collection or
//! an already narrowed fetch gives the same result.
//!
//! ## Sub-modules
//! - `customer_segments`: four value buckets over Customer Service records.
//! - `sales`: monthly and per-product revenue rollups.
//! - `risk`: synthetic risk register with a pluggable scoring policy.
//! - `marketing`: row-per-metric projection of Marketing records.
//! - `business_process`: independent per-type series.
//! - `integration`: collection-wide health figures.

pub mod business_process;
pub mod customer_segments;
pub mod integration;
pub mod marketing;
pub mod risk;
pub mod sales;

use common::model::datasource::{DataSourceRecord, DataSourceType};
use num_format::{Locale, ToFormattedString};

/// Records of one type, in collection order.
pub fn of_type(
    records: &[DataSourceRecord],
    source_type: DataSourceType,
) -> impl Iterator<Item = &DataSourceRecord> {
    records.iter().filter(move |r| r.source_type == source_type)
}

/// Records whose type is any of `types`, in collection order.
pub fn of_types<'a>(
    records: &'a [DataSourceRecord],
    types: &'a [DataSourceType],
) -> impl Iterator<Item = &'a DataSourceRecord> {
    records.iter().filter(move |r| types.contains(&r.source_type))
}

/// A numeric department field, 0 when absent.
pub fn number_or_zero(record: &DataSourceRecord, key: &str) -> f64 {
    record.department_number(key).unwrap_or(0.0)
}

/// A text department field, "N/A" when absent.
pub fn text_or_na(record: &DataSourceRecord, key: &str) -> String {
    record
        .department_text(key)
        .unwrap_or_else(|| "N/A".to_string())
}

/// Formats an amount the way the dashboard shows revenue: `$`, thousands
/// separators, at most three fraction digits without trailing zeros.
///
/// Amounts beyond the `u128` range (and non-finite ones) are printed without
/// separators rather than clamped.
pub fn format_currency(amount: f64) -> String {
    let magnitude = amount.abs();
    let mut whole = magnitude.trunc();
    if !magnitude.is_finite() || whole >= u128::MAX as f64 {
        return format!("${:.0}", amount);
    }
    let mut fraction = ((magnitude - whole) * 1000.0).round() as u32;
    if fraction == 1000 {
        whole += 1.0;
        fraction = 0;
    }
    let whole = whole as u128;

    let mut out = String::from("$");
    if amount < 0.0 && (whole > 0 || fraction > 0) {
        out.push('-');
    }
    out.push_str(&whole.to_formatted_string(&Locale::en));
    if fraction > 0 {
        let digits = format!("{:03}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use common::model::datasource::{DataSourceStatus, SyncFrequency};
    use serde_json::Value;

    /// Builds an in-memory record; `department` must be a JSON object or null.
    pub(crate) fn record(
        id: &str,
        source_type: DataSourceType,
        quality: f64,
        department: Value,
    ) -> DataSourceRecord {
        DataSourceRecord {
            id: id.to_string(),
            name: format!("source {}", id),
            source_type,
            status: DataSourceStatus::Active,
            sync_frequency: SyncFrequency::Daily,
            data_quality_score: quality,
            department_data: department.as_object().cloned(),
            last_synced_date: "2024-01-10T09:00:00.000Z".to_string(),
            recorded_at: "2024-01-10T09:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn filters_keep_collection_order() {
        let records = vec![
            record("1", DataSourceType::Sales, 0.0, Value::Null),
            record("2", DataSourceType::Finance, 0.0, Value::Null),
            record("3", DataSourceType::Sales, 0.0, Value::Null),
        ];
        let ids: Vec<&str> = of_type(&records, DataSourceType::Sales)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);

        let types = [DataSourceType::Finance, DataSourceType::Sales];
        assert_eq!(of_types(&records, &types).count(), 3);
    }

    #[test]
    fn defaults_for_absent_fields() {
        let r = record("1", DataSourceType::Sales, 0.0, serde_json::json!({"other": 1}));
        assert_eq!(number_or_zero(&r, "saleAmount"), 0.0);
        assert_eq!(text_or_na(&r, "productPurchased"), "N/A");
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(300.0), "$300");
        assert_eq!(format_currency(1234.5), "$1,234.5");
        assert_eq!(format_currency(1_000_000.125), "$1,000,000.125");
        assert_eq!(format_currency(-2500.0), "$-2,500");
        assert_eq!(format_currency(0.9996), "$1");
    }

    #[test]
    fn currency_formatting_keeps_large_amounts() {
        assert_eq!(format_currency(1e20), "$100,000,000,000,000,000,000");
        assert_eq!(format_currency(-1e20), "$-100,000,000,000,000,000,000");
        assert_eq!(format_currency(f64::INFINITY), "$inf");
    }
}
