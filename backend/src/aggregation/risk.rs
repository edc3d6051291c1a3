//! Synthetic risk register derived from Operations, Finance and Sales records.
//!
//! Category and description follow from the record type and name. Likelihood
//! and impact come from a `RiskScoringPolicy`: `RandomScoring` draws them on
//! every call (so two calls on the same input differ), `AttributeScoring`
//! derives them from the record and always gives the same register.

use crate::aggregation::of_types;
use crate::config::RiskScoringMode;
use common::model::datasource::{
    DataSourceRecord, DataSourceStatus, DataSourceType, SyncFrequency,
};
use common::model::risk::{RiskEntry, RiskRegister};
use rand::Rng;
use std::sync::Arc;

/// Types that feed the register.
pub const RISK_SOURCE_TYPES: [DataSourceType; 3] = [
    DataSourceType::Operations,
    DataSourceType::Finance,
    DataSourceType::Sales,
];

const MIN_LEVEL: u8 = 1;
const MAX_LEVEL: u8 = 5;

/// Picks `(likelihood, impact)` for a record, both within 1..=5.
pub trait RiskScoringPolicy: Send + Sync {
    fn score(&self, record: &DataSourceRecord) -> (u8, u8);
}

/// Uniform random likelihood and impact on every call.
pub struct RandomScoring;

impl RiskScoringPolicy for RandomScoring {
    fn score(&self, _record: &DataSourceRecord) -> (u8, u8) {
        let mut rng = rand::thread_rng();
        (
            rng.gen_range(MIN_LEVEL..=MAX_LEVEL),
            rng.gen_range(MIN_LEVEL..=MAX_LEVEL),
        )
    }
}

/// Reproducible scoring from the record attributes.
///
/// Likelihood grows by one step per 20 points of missing data quality.
/// Impact starts from the department (Finance 4, Operations 3, Sales 2) and
/// rises by one for an Inactive source and by one for a Monthly sync.
pub struct AttributeScoring;

impl RiskScoringPolicy for AttributeScoring {
    fn score(&self, record: &DataSourceRecord) -> (u8, u8) {
        let quality = if record.data_quality_score.is_finite() {
            record.data_quality_score.clamp(0.0, 100.0)
        } else {
            0.0
        };
        let likelihood = (1 + ((100.0 - quality) / 20.0).floor() as u8).min(MAX_LEVEL);

        let mut impact = match record.source_type {
            DataSourceType::Finance => 4,
            DataSourceType::Operations => 3,
            _ => 2,
        };
        if record.status == DataSourceStatus::Inactive {
            impact += 1;
        }
        if record.sync_frequency == SyncFrequency::Monthly {
            impact += 1;
        }

        (likelihood, impact.min(MAX_LEVEL))
    }
}

pub fn policy_for(mode: RiskScoringMode) -> Arc<dyn RiskScoringPolicy> {
    match mode {
        RiskScoringMode::Random => Arc::new(RandomScoring),
        RiskScoringMode::Deterministic => Arc::new(AttributeScoring),
    }
}

pub fn mitigation_strategy(risk_score: u8) -> &'static str {
    match risk_score {
        0..=3 => "Monitor",
        4..=6 => "Develop preventive measures",
        7..=9 => "Implement mitigation plans",
        _ => "Immediate intervention",
    }
}

fn category_and_description(record: &DataSourceRecord) -> Option<(&'static str, String)> {
    match record.source_type {
        DataSourceType::Operations => Some((
            "Operational Risk",
            format!("Inventory management for {}", record.name),
        )),
        DataSourceType::Finance => Some((
            "Financial Risk",
            format!("Financial tracking for {}", record.name),
        )),
        DataSourceType::Sales => Some((
            "Sales Risk",
            format!("Sales channel risk for {}", record.name),
        )),
        _ => None,
    }
}

/// One register entry per Operations, Finance or Sales record.
pub fn derive_risks(records: &[DataSourceRecord], policy: &dyn RiskScoringPolicy) -> RiskRegister {
    let risks = of_types(records, &RISK_SOURCE_TYPES)
        .filter_map(|record| {
            let (category, description) = category_and_description(record)?;
            let (likelihood, impact) = policy.score(record);
            let likelihood = likelihood.clamp(MIN_LEVEL, MAX_LEVEL);
            let impact = impact.clamp(MIN_LEVEL, MAX_LEVEL);
            let risk_score = likelihood * impact;
            Some(RiskEntry {
                category: category.to_string(),
                description,
                likelihood,
                impact,
                risk_score,
                mitigation_strategy: mitigation_strategy(risk_score).to_string(),
            })
        })
        .collect();

    RiskRegister { risks }
}
