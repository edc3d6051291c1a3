//! # Dashboard Service Module
//!
//! One read-only endpoint per dashboard view under `/api/dashboards`. Each
//! handler fetches a fresh snapshot (narrowed by type where the view allows
//! it), runs the matching aggregator and answers with its JSON summary.
//! A failed fetch becomes an inline `503` message; nothing is retried.
//!
//! ## Registered routes
//! - `GET /customer_insights`: customer segment buckets.
//! - `GET /sales`: monthly and per-product sales rollup.
//! - `GET /risks`: risk register, scored by the configured policy.
//! - `GET /marketing`: marketing rows, one per metric.
//! - `GET /business_process`: the five business-process series.
//! - `GET /integration`: collection health figures.

mod business_process;
mod customer_insights;
mod integration;
mod marketing;
mod risks;
mod sales;

use crate::error::StoreError;
use crate::services::store_error_response;
use actix_web::web::{get, scope};
use actix_web::{HttpResponse, Scope};
use common::model::datasource::DataSourceRecord;
use serde::Serialize;

const API_PATH: &str = "/api/dashboards";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/customer_insights", get().to(customer_insights::process))
        .route("/sales", get().to(sales::process))
        .route("/risks", get().to(risks::process))
        .route("/marketing", get().to(marketing::process))
        .route("/business_process", get().to(business_process::process))
        .route("/integration", get().to(integration::process))
}

/// Runs `aggregate` over a fetched snapshot, or reports the fetch failure.
fn respond<T, F>(fetched: Result<Vec<DataSourceRecord>, StoreError>, aggregate: F) -> HttpResponse
where
    T: Serialize,
    F: FnOnce(&[DataSourceRecord]) -> T,
{
    match fetched {
        Ok(records) => HttpResponse::Ok().json(aggregate(&records)),
        Err(e) => store_error_response(&e),
    }
}
