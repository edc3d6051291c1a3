use crate::aggregation::risk::{derive_risks, RISK_SOURCE_TYPES};
use crate::state::AppState;
use actix_web::{web, Responder};

/// With random scoring two calls on the same data give different scores.
pub async fn process(state: web::Data<AppState>) -> impl Responder {
    super::respond(state.store.fetch_by_type_in(&RISK_SOURCE_TYPES), |records| {
        derive_risks(records, state.risk_scoring.as_ref())
    })
}
