//! Report export: turns dashboard summaries into table sections and renders
//! them into a PDF (`pdf`).

pub mod pdf;

use crate::aggregation::format_currency;
use common::model::customer_insights::CustomerInsights;
use common::model::report::ReportSection;
use common::model::risk::RiskRegister;
use common::model::sales::SalesSummary;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// The three sections of the financial performance report, in page order.
pub fn financial_performance_sections(
    sales: &SalesSummary,
    insights: &CustomerInsights,
    risks: &RiskRegister,
) -> Vec<ReportSection> {
    let metrics_overview = ReportSection {
        title: "1. Metrics Overview".to_string(),
        header_row: row(&["Month", "Sales"]),
        body_rows: sales
            .monthly_sales
            .iter()
            .map(|m| vec![m.month.clone(), format_currency(m.sales)])
            .collect(),
    };

    let department_kpis = ReportSection {
        title: "2. Department KPIs".to_string(),
        header_row: row(&[
            "Customer Segment",
            "Avg Purchase Value",
            "Number of Customers",
            "Lifetime Value",
        ]),
        body_rows: insights
            .customer_segments
            .iter()
            .map(|s| {
                vec![
                    s.name.clone(),
                    format_currency(s.avg_purchase_value_proxy as f64),
                    s.count.to_string(),
                    s.lifetime_value_proxy.to_string(),
                ]
            })
            .collect(),
    };

    let risk_management = ReportSection {
        title: "3. Functional Areas - Risk Management".to_string(),
        header_row: row(&["Risk Category", "Description", "Likelihood", "Impact", "Risk Score"]),
        body_rows: risks
            .risks
            .iter()
            .map(|r| {
                vec![
                    r.category.clone(),
                    r.description.clone(),
                    r.likelihood.to_string(),
                    r.impact.to_string(),
                    r.risk_score.to_string(),
                ]
            })
            .collect(),
    };

    vec![metrics_overview, department_kpis, risk_management]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::customer_segments::customer_insights;
    use crate::aggregation::risk::{derive_risks, AttributeScoring};
    use crate::aggregation::sales::sales_summary;
    use crate::aggregation::tests::record;
    use common::model::datasource::DataSourceType;
    use serde_json::json;

    #[test]
    fn sections_follow_the_summaries() {
        let mut sale = record(
            "1",
            DataSourceType::Sales,
            100.0,
            json!({"productPurchased": "Widget", "saleAmount": 1250}),
        );
        sale.last_synced_date = "2024-02-11".to_string();
        let ticket = record(
            "2",
            DataSourceType::CustomerService,
            95.0,
            json!({"resolutionTime": 1}),
        );
        let records = vec![sale, ticket];

        let sections = financial_performance_sections(
            &sales_summary(&records),
            &customer_insights(&records),
            &derive_risks(&records, &AttributeScoring),
        );

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].body_rows, vec![vec!["Feb".to_string(), "$1,250".to_string()]]);

        assert_eq!(sections[1].body_rows.len(), 4);
        assert_eq!(
            sections[1].body_rows[0],
            row(&["High Value", "$1,000", "1", "95"])
        );

        assert_eq!(sections[2].header_row.len(), 5);
        assert_eq!(
            sections[2].body_rows[0],
            row(&["Sales Risk", "Sales channel risk for source 1", "1", "2", "2"])
        );
    }

    #[test]
    fn every_row_matches_its_header_width() {
        let sections = financial_performance_sections(
            &sales_summary(&[]),
            &customer_insights(&[]),
            &derive_risks(&[], &AttributeScoring),
        );
        for section in sections {
            assert!(section
                .body_rows
                .iter()
                .all(|r| r.len() == section.header_row.len()));
        }
    }
}
