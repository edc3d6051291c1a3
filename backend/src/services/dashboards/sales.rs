use crate::aggregation::sales::sales_summary;
use crate::state::AppState;
use actix_web::{web, Responder};
use common::model::datasource::DataSourceType;

/// `GET /api/dashboards/sales`
pub async fn process(state: web::Data<AppState>) -> impl Responder {
    super::respond(state.store.fetch_by_type(DataSourceType::Sales), sales_summary)
}
