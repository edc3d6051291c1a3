use crate::export::pdf::render_report;
use crate::services::reports::{build_sections, FINANCIAL_PERFORMANCE_TITLE};
use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use chrono::Local;
use log::{error, info};

/// Renders the report off the async workers and serves it inline.
pub async fn process(state: web::Data<AppState>) -> impl Responder {
    let sections = match build_sections(&state) {
        Ok(sections) => sections,
        Err(e) => return store_error_response(&e),
    };

    let fonts_dir = state.fonts_dir.clone();
    let generated_on = Local::now().format("%Y-%m-%d").to_string();
    let rendered = web::block(move || {
        render_report(&fonts_dir, FINANCIAL_PERFORMANCE_TITLE, &generated_on, &sections)
    })
    .await;

    match rendered {
        Ok(Ok(bytes)) => {
            info!("Financial performance report rendered ({} bytes)", bytes.len());
            HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header((
                    "Content-Disposition",
                    "inline; filename=\"Financial_Performance_Report.pdf\"",
                ))
                .body(bytes)
        }
        Ok(Err(e)) => {
            error!("PDF generation failed: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("PDF generation failed: {}", e))
        }
        Err(e) => {
            error!("PDF task join error: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("PDF task join error: {}", e))
        }
    }
}
