//! Server-sent event stream of the record collection.
//!
//! The first event carries the current collection, every later one the full
//! collection after a write. The `Subscription` lives inside the response
//! stream, so a disconnecting client unsubscribes when Actix drops the body.

use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::web::{self, Bytes};
use actix_web::{HttpResponse, Responder};
use common::model::datasource::DataSourceRecord;
use futures_util::{future, stream, StreamExt};
use log::info;

fn sse_event(records: &[DataSourceRecord]) -> Result<Bytes, serde_json::Error> {
    let json = serde_json::to_string(records)?;
    Ok(Bytes::from(format!("event: snapshot\ndata: {}\n\n", json)))
}

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    // Subscribe before the initial fetch so no write slips in between.
    let subscription = state.store.subscribe();
    let initial = match state.store.fetch_all() {
        Ok(records) => records,
        Err(e) => return store_error_response(&e),
    };
    info!("Change stream opened with {} record(s)", initial.len());

    let updates = stream::unfold(subscription, |mut subscription| async move {
        let snapshot = subscription.next().await?;
        Some((sse_event(&snapshot), subscription))
    });
    let events = stream::once(future::ready(sse_event(&initial))).chain(updates);

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(events)
}
