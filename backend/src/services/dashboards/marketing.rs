use crate::aggregation::marketing::marketing_rows;
use crate::state::AppState;
use actix_web::{web, Responder};
use common::model::datasource::DataSourceType;

/// Actix web handler for `GET /api/dashboards/marketing`.
///
/// # Arguments
/// * `state` - Shared application state holding the record store.
///
/// # Returns
/// `200 OK` with one `MarketingRow` per metric and Marketing record, or a
/// `503` message when the fetch fails.
pub async fn process(state: web::Data<AppState>) -> impl Responder {
    super::respond(
        state.store.fetch_by_type(DataSourceType::Marketing),
        marketing_rows,
    )
}
