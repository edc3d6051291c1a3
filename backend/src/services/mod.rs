//! HTTP API. Each sub-module exposes a `configure_routes` returning its Actix
//! `Scope`; `main.rs` mounts them all.
//!
//! - `data_sources`: CRUD, CSV import and the change stream of the record
//!   collection.
//! - `dashboards`: one read-only endpoint per dashboard view.
//! - `reports`: the exported financial performance report.

pub mod dashboards;
pub mod data_sources;
pub mod reports;

use crate::error::StoreError;
use actix_web::HttpResponse;
use log::error;

/// Turns a store failure into the inline message shown by the view.
pub(crate) fn store_error_response(e: &StoreError) -> HttpResponse {
    match e {
        StoreError::NotFound(_) => HttpResponse::NotFound().body(e.to_string()),
        StoreError::Invalid(_) => HttpResponse::BadRequest().body(e.to_string()),
        _ => {
            error!("Record store failure: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Data sources unavailable: {}", e))
        }
    }
}
