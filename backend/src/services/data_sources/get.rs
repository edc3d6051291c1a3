//! # Data Source Retrieval
//!
//! Backend logic for `GET /api/data_sources/{id}`: loads one record from the
//! store and returns it as JSON. An unknown id answers `404 Not Found`, a
//! store failure `503 Service Unavailable`.

use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for the `GET /api/data_sources/{id}` endpoint.
///
/// # Arguments
/// * `id` - The record id taken from the URL path.
/// * `state` - Shared application state holding the record store.
///
/// # Returns
/// `200 OK` with the `DataSourceRecord` as JSON, or the store error response.
pub async fn process(id: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    match state.store.get(&id) {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => store_error_response(&e),
    }
}
