use crate::services::reports::build_sections;
use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    match build_sections(&state) {
        Ok(sections) => HttpResponse::Ok().json(sections),
        Err(e) => store_error_response(&e),
    }
}
