use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::model::datasource::DataSourcePatch;

/// Applies a partial update and answers with the stored record.
pub async fn process(
    id: web::Path<String>,
    payload: web::Json<DataSourcePatch>,
    state: web::Data<AppState>,
) -> impl Responder {
    match state.store.update(&id, payload.into_inner()) {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => store_error_response(&e),
    }
}
