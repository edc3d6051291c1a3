//! Data model shared between the ClarityIQ backend and the dashboard views.
//!
//! Everything in here is plain serde data: the stored `DataSourceRecord`, the
//! payloads accepted by the write endpoints, and the summary structures each
//! dashboard view renders.

pub mod model;
pub mod requests;
