//! # Report Service Module
//!
//! - `GET /api/reports/financial_performance`: renders the financial
//!   performance report and serves it inline as a PDF.
//! - `GET /api/reports/financial_performance/tables`: the same sections as
//!   JSON `{title, headerRow, bodyRows}` tables, for views that render the
//!   tables themselves.

mod pdf;
mod tables;

use crate::aggregation::customer_segments::customer_insights;
use crate::aggregation::risk::derive_risks;
use crate::aggregation::sales::sales_summary;
use crate::error::StoreError;
use crate::export::financial_performance_sections;
use crate::state::AppState;
use actix_web::web::{get, scope};
use actix_web::Scope;
use common::model::report::ReportSection;

const API_PATH: &str = "/api/reports";

pub const FINANCIAL_PERFORMANCE_TITLE: &str = "Financial Performance Report";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/financial_performance", get().to(pdf::process))
        .route("/financial_performance/tables", get().to(tables::process))
}

/// Aggregates one snapshot into the report sections, so every section sees
/// the same data.
pub(crate) fn build_sections(state: &AppState) -> Result<Vec<ReportSection>, StoreError> {
    let records = state.store.fetch_all()?;
    Ok(financial_performance_sections(
        &sales_summary(&records),
        &customer_insights(&records),
        &derive_risks(&records, state.risk_scoring.as_ref()),
    ))
}
