//! # Data Source Listing
//!
//! Serves `GET /api/data_sources`. The query string is read into a
//! `DataSourceFilter` (`type`, `status`, `minQualityScore`, `nameContains`);
//! an empty query lists the whole collection in insertion order.

use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::DataSourceFilter;

/// Actix web handler for the `GET /api/data_sources` endpoint.
///
/// # Arguments
/// * `filter` - Optional conditions from the query string, combined with AND.
/// * `state` - Shared application state holding the record store.
///
/// # Returns
/// `200 OK` with the matching records as a JSON array.
pub async fn process(
    filter: web::Query<DataSourceFilter>,
    state: web::Data<AppState>,
) -> impl Responder {
    match state.store.fetch_filtered(&filter) {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => store_error_response(&e),
    }
}
