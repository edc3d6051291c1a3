use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::model::datasource::NewDataSource;
use common::requests::CreatedResponse;

/// Stores the posted record; `id` and `recordedAt` are assigned here.
pub async fn process(
    payload: web::Json<NewDataSource>,
    state: web::Data<AppState>,
) -> impl Responder {
    match state.store.add(payload.into_inner()) {
        Ok(id) => HttpResponse::Created().json(CreatedResponse { id }),
        Err(e) => store_error_response(&e),
    }
}
