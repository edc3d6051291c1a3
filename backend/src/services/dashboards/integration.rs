use crate::aggregation::integration::integration_metrics;
use crate::state::AppState;
use actix_web::{web, Responder};

/// Collection health figures for the data integration page.
pub async fn process(state: web::Data<AppState>) -> impl Responder {
    super::respond(state.store.fetch_all(), integration_metrics)
}
