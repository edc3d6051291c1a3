use crate::aggregation::business_process::business_process;
use crate::state::AppState;
use actix_web::{web, Responder};

/// Needs the whole collection: the process mining series is unfiltered.
pub async fn process(state: web::Data<AppState>) -> impl Responder {
    super::respond(state.store.fetch_all(), business_process)
}
