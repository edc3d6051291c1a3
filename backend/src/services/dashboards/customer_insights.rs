use crate::aggregation::customer_segments::customer_insights;
use crate::state::AppState;
use actix_web::{web, Responder};
use common::model::datasource::DataSourceType;

/// `GET /api/dashboards/customer_insights`: only Customer Service records are
/// fetched, then bucketed by `customer_insights`.
pub async fn process(state: web::Data<AppState>) -> impl Responder {
    super::respond(
        state.store.fetch_by_type(DataSourceType::CustomerService),
        customer_insights,
    )
}
