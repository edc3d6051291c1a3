//! Manages the shared data source collection.
//!
//! The provided routes are:
//! - `GET /api/data_sources`: lists records, optionally filtered by the `type`,
//!   `status` and `minQualityScore` query parameters (all must match).
//! - `POST /api/data_sources`: adds one record from a JSON `NewDataSource`
//!   and answers `201 Created` with the generated id.
//! - `POST /api/data_sources/import`: bulk import from a multipart CSV upload.
//! - `GET /api/data_sources/subscribe`: server-sent events, the current
//!   collection first and then a full snapshot after every change.
//! - `GET`, `PATCH`, `DELETE /api/data_sources/{id}`: single record access.

use actix_web::web::{delete, get, patch, post, scope};
use actix_web::Scope;

mod create;
mod get;
mod import;
mod list;
mod remove;
mod subscribe;
mod update;

const API_PATH: &str = "/api/data_sources";

/// Configures and returns the Actix scope for data source routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        // Fixed paths go before `/{id}` so they are not taken for ids.
        .route("/import", post().to(import::process))
        .route("/subscribe", get().to(subscribe::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", patch().to(update::process))
        .route("/{id}", delete().to(remove::process))
}
