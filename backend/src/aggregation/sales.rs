use crate::aggregation::{format_currency, of_type, text_or_na};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use common::model::datasource::{DataSourceRecord, DataSourceType};
use common::model::sales::{
    MonthlySales, ProductRevenue, SalesReportRow, SalesSummary, SalesTotals,
};
use log::warn;

/// Month label for sync dates that cannot be parsed.
const UNKNOWN_MONTH: &str = "Unknown";

/// A Sales record checked for a usable `saleAmount`.
#[derive(Debug, Clone, PartialEq)]
pub enum SalesEntry<'a> {
    Valid {
        record: &'a DataSourceRecord,
        amount: f64,
    },
    Malformed {
        id: &'a str,
        reason: &'static str,
    },
}

pub fn classify(record: &DataSourceRecord) -> SalesEntry<'_> {
    let Some(data) = record.department_data.as_ref() else {
        return SalesEntry::Malformed {
            id: &record.id,
            reason: "no department data",
        };
    };
    if !data.contains_key("saleAmount") {
        return SalesEntry::Malformed {
            id: &record.id,
            reason: "no saleAmount",
        };
    }
    match record.department_number("saleAmount") {
        Some(amount) if amount.is_finite() => SalesEntry::Valid { record, amount },
        _ => SalesEntry::Malformed {
            id: &record.id,
            reason: "saleAmount is not a number",
        },
    }
}

/// English short month name ("Jan".."Dec") of an ISO date or timestamp, as
/// written (no time zone shift).
pub fn month_label(date: &str) -> Option<String> {
    let date = date.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.format("%b").to_string());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.format("%b").to_string());
    }
    date.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .map(|parsed| parsed.format("%b").to_string())
}

/// Sums into `groups`, keeping the order in which keys first appear.
fn add_to_group(groups: &mut Vec<(String, f64)>, key: String, amount: f64) {
    match groups.iter_mut().find(|(k, _)| *k == key) {
        Some((_, total)) => *total += amount,
        None => groups.push((key, amount)),
    }
}

/// Rolls Sales records up by month and by product.
///
/// Records without a numeric `saleAmount` stay out of every sum and of the
/// per-record report; they are only counted in `malformed_count`.
pub fn sales_summary(records: &[DataSourceRecord]) -> SalesSummary {
    let mut months: Vec<(String, f64)> = Vec::new();
    let mut products: Vec<(String, f64)> = Vec::new();
    let mut per_record_report = Vec::new();
    let mut total_revenue = 0.0;
    let mut record_count = 0u64;
    let mut malformed_count = 0u64;

    for record in of_type(records, DataSourceType::Sales) {
        record_count += 1;
        let (record, amount) = match classify(record) {
            SalesEntry::Valid { record, amount } => (record, amount),
            SalesEntry::Malformed { id, reason } => {
                warn!("Skipping sales record {}: {}", id, reason);
                malformed_count += 1;
                continue;
            }
        };

        let month = month_label(&record.last_synced_date)
            .unwrap_or_else(|| UNKNOWN_MONTH.to_string());
        let product = text_or_na(record, "productPurchased");

        add_to_group(&mut months, month, amount);
        add_to_group(&mut products, product.clone(), amount);
        total_revenue += amount;
        per_record_report.push(SalesReportRow {
            product,
            sales: amount,
            formatted_revenue: format_currency(amount),
        });
    }

    SalesSummary {
        monthly_sales: months
            .into_iter()
            .map(|(month, sales)| MonthlySales { month, sales })
            .collect(),
        revenue_by_product: products
            .into_iter()
            .map(|(name, value)| ProductRevenue { name, value })
            .collect(),
        totals: SalesTotals {
            total_revenue,
            record_count,
            malformed_count,
        },
        per_record_report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::tests::record;
    use serde_json::{json, Value};

    fn sale(id: &str, date: &str, product: &str, amount: f64) -> DataSourceRecord {
        let mut r = record(
            id,
            DataSourceType::Sales,
            90.0,
            json!({"customerTransactionId": id, "productPurchased": product, "saleAmount": amount}),
        );
        r.last_synced_date = date.to_string();
        r
    }

    #[test]
    fn two_january_sales() {
        let records = vec![
            sale("1", "2024-01-05", "Widget", 100.0),
            sale("2", "2024-01-20T10:00:00.000Z", "Widget", 200.0),
        ];
        let summary = sales_summary(&records);

        assert_eq!(
            summary.monthly_sales,
            vec![MonthlySales {
                month: "Jan".to_string(),
                sales: 300.0
            }]
        );
        assert_eq!(summary.totals.total_revenue, 300.0);
        assert_eq!(summary.totals.record_count, 2);
        assert_eq!(summary.totals.malformed_count, 0);
        assert_eq!(summary.per_record_report[1].formatted_revenue, "$200");
    }

    #[test]
    fn groups_keep_first_appearance_order() {
        let records = vec![
            sale("1", "2024-03-01", "Gadget", 50.0),
            sale("2", "2024-01-01", "Widget", 1500.0),
            sale("3", "2024-03-15", "Widget", 25.5),
        ];
        let summary = sales_summary(&records);

        let months: Vec<(&str, f64)> = summary
            .monthly_sales
            .iter()
            .map(|m| (m.month.as_str(), m.sales))
            .collect();
        assert_eq!(months, vec![("Mar", 75.5), ("Jan", 1500.0)]);

        let products: Vec<(&str, f64)> = summary
            .revenue_by_product
            .iter()
            .map(|p| (p.name.as_str(), p.value))
            .collect();
        assert_eq!(products, vec![("Gadget", 50.0), ("Widget", 1525.5)]);
        assert_eq!(summary.per_record_report[1].formatted_revenue, "$1,500");
    }

    #[test]
    fn malformed_records_are_counted_not_summed() {
        let mut no_data = sale("1", "2024-01-01", "Widget", 0.0);
        no_data.department_data = None;
        let mut no_amount = sale("2", "2024-01-01", "Widget", 0.0);
        no_amount
            .department_data
            .as_mut()
            .unwrap()
            .remove("saleAmount");
        let mut text_amount = sale("3", "2024-01-01", "Widget", 0.0);
        text_amount
            .department_data
            .as_mut()
            .unwrap()
            .insert("saleAmount".to_string(), Value::String("lots".to_string()));
        let good = sale("4", "2024-02-01", "Widget", 40.0);

        let summary = sales_summary(&[no_data, no_amount, text_amount, good]);
        assert_eq!(summary.totals.record_count, 4);
        assert_eq!(summary.totals.malformed_count, 3);
        assert_eq!(summary.totals.total_revenue, 40.0);
        assert_eq!(summary.per_record_report.len(), 1);
        assert_eq!(summary.monthly_sales.len(), 1);
        assert_eq!(summary.monthly_sales[0].month, "Feb");
    }

    #[test]
    fn classify_variants() {
        let good = sale("1", "2024-01-01", "Widget", 12.0);
        assert!(matches!(classify(&good), SalesEntry::Valid { amount, .. } if amount == 12.0));

        let mut bare = good.clone();
        bare.department_data = None;
        assert_eq!(
            classify(&bare),
            SalesEntry::Malformed {
                id: "1",
                reason: "no department data"
            }
        );
    }

    #[test]
    fn unparseable_date_and_missing_product() {
        let mut r = record("1", DataSourceType::Sales, 90.0, json!({"saleAmount": "75"}));
        r.last_synced_date = "yesterday".to_string();
        let summary = sales_summary(&[r]);
        assert_eq!(summary.monthly_sales[0].month, "Unknown");
        assert_eq!(summary.revenue_by_product[0].name, "N/A");
        assert_eq!(summary.totals.total_revenue, 75.0);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let mut broken = sale("3", "2024-02-01", "Gadget", 0.0);
        broken.department_data = json!({"saleAmount": "lots"}).as_object().cloned();
        let records = vec![
            sale("1", "2024-01-05", "Widget", 100.0),
            sale("2", "2024-02-11", "Gadget", 40.5),
            broken,
        ];
        assert_eq!(sales_summary(&records), sales_summary(&records));
    }

    #[test]
    fn month_labels() {
        assert_eq!(month_label("2024-12-31").as_deref(), Some("Dec"));
        assert_eq!(month_label("2024-07-04T23:59:59+02:00").as_deref(), Some("Jul"));
        assert_eq!(month_label("2024-05-02T08:00:00.123").as_deref(), Some("May"));
        assert_eq!(month_label("not a date"), None);
    }

    #[test]
    fn empty_and_other_types() {
        let other = record("1", DataSourceType::Finance, 90.0, json!({"saleAmount": 10}));
        let summary = sales_summary(&[other]);
        assert!(summary.monthly_sales.is_empty());
        assert!(summary.revenue_by_product.is_empty());
        assert!(summary.per_record_report.is_empty());
        assert_eq!(summary.totals.total_revenue, 0.0);
        assert_eq!(summary.totals.record_count, 0);
    }
}
