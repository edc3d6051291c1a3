mod aggregation;
mod config;
mod error;
mod export;
mod services;
mod state;
mod store;

use crate::config::Config;
use crate::state::AppState;
use crate::store::RecordStore;
use actix_web::{web, App, HttpResponse, HttpServer};
use env_logger::Env;
use log::info;

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().body("Not Found")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();

    let store = RecordStore::open(&config.db_path).map_err(std::io::Error::other)?;
    let state = AppState::new(store, &config);
    info!("Risk scoring mode: {:?}", config.risk_scoring);

    let json_limit = config.json_limit;
    info!("Server running at {}", config.url());

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(json_limit))
            .app_data(web::Data::new(state.clone()))
            .service(services::data_sources::configure_routes())
            .service(services::dashboards::configure_routes())
            .service(services::reports::configure_routes())
            .default_service(web::route().to(not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
