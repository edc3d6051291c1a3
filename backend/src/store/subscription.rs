use common::model::datasource::DataSourceRecord;
use log::debug;
use tokio::sync::broadcast::{self, error::RecvError};

/// Live feed of full-collection snapshots, one per successful write.
///
/// The handle owns its receiver: dropping it (for instance when a client
/// disconnects from the event stream) is the unsubscribe.
pub struct Subscription {
    rx: broadcast::Receiver<Vec<DataSourceRecord>>,
}

impl Subscription {
    pub(super) fn new(rx: broadcast::Receiver<Vec<DataSourceRecord>>) -> Self {
        Subscription { rx }
    }

    /// Waits for the next snapshot. Returns `None` once the store is gone.
    ///
    /// A subscriber that fell behind skips the snapshots it missed; only the
    /// newer ones matter since each carries the whole collection.
    pub async fn next(&mut self) -> Option<Vec<DataSourceRecord>> {
        loop {
            match self.rx.recv().await {
                Ok(snapshot) => return Some(snapshot),
                Err(RecvError::Lagged(skipped)) => {
                    debug!("Subscriber lagged, skipped {} snapshot(s)", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
