//! Shared application state injected into every Actix handler.

use crate::aggregation::risk::{policy_for, RiskScoringPolicy};
use crate::config::Config;
use crate::store::RecordStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Cloned into each worker as `web::Data<AppState>`.
///
/// The store is the only source of truth; everything else here is read-only
/// configuration.
#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
    /// Scoring used by the risk register and the exported report.
    pub risk_scoring: Arc<dyn RiskScoringPolicy>,
    /// Directory holding the TTF files used for PDF export.
    pub fonts_dir: PathBuf,
}

impl AppState {
    pub fn new(store: RecordStore, config: &Config) -> Self {
        AppState {
            store,
            risk_scoring: policy_for(config.risk_scoring),
            fonts_dir: config.fonts_dir.clone(),
        }
    }
}
