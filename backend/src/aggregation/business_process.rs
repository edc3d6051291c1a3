use crate::aggregation::{number_or_zero, of_type};
use common::model::business_process::{BusinessProcessSummary, ProcessPoint};
use common::model::datasource::{DataSourceRecord, DataSourceType};

fn series(records: &[DataSourceRecord], source_type: DataSourceType, key: &str) -> Vec<ProcessPoint> {
    of_type(records, source_type)
        .map(|record| ProcessPoint {
            name: record.name.clone(),
            value: number_or_zero(record, key),
        })
        .collect()
}

/// Builds the five business-process series. Each one is computed on its
/// own; the process mining series covers the whole collection.
pub fn business_process(records: &[DataSourceRecord]) -> BusinessProcessSummary {
    BusinessProcessSummary {
        process_visualization: series(records, DataSourceType::Operations, "stockQuantity"),
        detailed_process_analysis: series(records, DataSourceType::Finance, "invoiceAmount"),
        optimization_recommendations: series(records, DataSourceType::Marketing, "conversionRate"),
        performance_issues: series(records, DataSourceType::CustomerService, "resolutionTime"),
        process_mining: records
            .iter()
            .map(|record| ProcessPoint {
                name: record.name.clone(),
                value: record.data_quality_score,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::tests::record;
    use serde_json::json;

    #[test]
    fn each_series_reads_its_own_type() {
        let records = vec![
            record("ops", DataSourceType::Operations, 60.0, json!({"stockQuantity": 120})),
            record("fin", DataSourceType::Finance, 70.0, json!({"invoiceAmount": 9800.5})),
            record("mkt", DataSourceType::Marketing, 80.0, json!({"conversionRate": 3.2})),
            record("cs", DataSourceType::CustomerService, 90.0, json!({"resolutionTime": 2})),
            record("sales", DataSourceType::Sales, 100.0, json!({"saleAmount": 1})),
        ];
        let summary = business_process(&records);

        assert_eq!(summary.process_visualization, vec![ProcessPoint { name: "source ops".into(), value: 120.0 }]);
        assert_eq!(summary.detailed_process_analysis[0].value, 9800.5);
        assert_eq!(summary.optimization_recommendations[0].value, 3.2);
        assert_eq!(summary.performance_issues[0].value, 2.0);

        let mining: Vec<f64> = summary.process_mining.iter().map(|p| p.value).collect();
        assert_eq!(mining, vec![60.0, 70.0, 80.0, 90.0, 100.0]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let records = vec![
            record("ops", DataSourceType::Operations, 60.0, json!({"stockQuantity": 120})),
            record("fin", DataSourceType::Finance, 70.0, json!({"invoiceAmount": 9800.5})),
            record("cs", DataSourceType::CustomerService, 90.0, serde_json::Value::Null),
        ];
        assert_eq!(business_process(&records), business_process(&records));
    }

    #[test]
    fn missing_values_are_zero() {
        let records = vec![record("ops", DataSourceType::Operations, 60.0, serde_json::Value::Null)];
        assert_eq!(business_process(&records).process_visualization[0].value, 0.0);
    }

    #[test]
    fn empty_input() {
        let summary = business_process(&[]);
        assert!(summary.process_visualization.is_empty());
        assert!(summary.detailed_process_analysis.is_empty());
        assert!(summary.optimization_recommendations.is_empty());
        assert!(summary.performance_issues.is_empty());
        assert!(summary.process_mining.is_empty());
    }
}
