use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

/// Handler for `DELETE /api/data_sources/{id}`.
///
/// Answers `204 No Content` once the record is gone (subscribers receive the
/// new collection), `404 Not Found` when no record has that id.
pub async fn process(id: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    match state.store.delete(&id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => store_error_response(&e),
    }
}
