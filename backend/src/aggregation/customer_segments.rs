use crate::aggregation::{number_or_zero, of_type};
use common::model::customer_insights::{CustomerInsights, CustomerSegment};
use common::model::datasource::{DataSourceRecord, DataSourceType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    HighValue,
    MediumValue,
    LowValue,
    NewCustomers,
}

impl Segment {
    const ORDER: [Segment; 4] = [
        Segment::HighValue,
        Segment::MediumValue,
        Segment::LowValue,
        Segment::NewCustomers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Segment::HighValue => "High Value",
            Segment::MediumValue => "Medium Value",
            Segment::LowValue => "Low Value",
            Segment::NewCustomers => "New Customers",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Buckets a ticket by how fast it was resolved and how clean its source is.
pub fn classify(resolution_time: f64, data_quality_score: f64) -> Segment {
    if resolution_time <= 1.0 && data_quality_score >= 90.0 {
        Segment::HighValue
    } else if resolution_time <= 2.0 && data_quality_score >= 80.0 {
        Segment::MediumValue
    } else if resolution_time <= 3.0 && data_quality_score >= 70.0 {
        Segment::LowValue
    } else {
        Segment::NewCustomers
    }
}

#[derive(Default, Clone, Copy)]
struct Accumulator {
    count: u64,
    total_resolution_time: f64,
    total_quality: f64,
}

impl Accumulator {
    fn into_segment(self, segment: Segment) -> CustomerSegment {
        if self.count == 0 {
            return CustomerSegment {
                name: segment.label().to_string(),
                count: 0,
                avg_purchase_value_proxy: 0,
                lifetime_value_proxy: 0,
            };
        }
        let n = self.count as f64;
        CustomerSegment {
            name: segment.label().to_string(),
            count: self.count,
            avg_purchase_value_proxy: (self.total_resolution_time / n * 1000.0).round() as i64,
            lifetime_value_proxy: (self.total_quality / n).round() as i64,
        }
    }
}

/// Splits Customer Service records into the four value buckets.
///
/// A missing `resolutionTime` counts as 0, which puts clean sources in High
/// Value.
pub fn customer_insights(records: &[DataSourceRecord]) -> CustomerInsights {
    let mut buckets = [Accumulator::default(); 4];

    for record in of_type(records, DataSourceType::CustomerService) {
        let resolution_time = number_or_zero(record, "resolutionTime");
        let quality = record.data_quality_score;
        let bucket = &mut buckets[classify(resolution_time, quality).index()];
        bucket.count += 1;
        bucket.total_resolution_time += resolution_time;
        bucket.total_quality += quality;
    }

    CustomerInsights {
        customer_segments: Segment::ORDER
            .iter()
            .map(|segment| buckets[segment.index()].into_segment(*segment))
            .collect(),
    }
}
