use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::geo::GeoPoint;

use super::provider::SerializedProvider;

/// Periodic position subscription.
///
/// Polls the provider every `interval` and yields each position it reports.
/// Failed polls are skipped. The polling task lives exactly as long as this
/// value: dropping it or calling [`cancel`](Self::cancel) stops polling.
pub struct LocationWatch {
    positions: mpsc::Receiver<GeoPoint>,
    task: JoinHandle<()>,
}

impl LocationWatch {
    pub fn spawn(provider: Arc<SerializedProvider>, interval: Duration) -> Self {
        let (tx, positions) = mpsc::channel(1);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick fires immediately; the initial position comes
            // from the caller, so wait one full interval before polling.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                match provider.current_position().await {
                    Ok(position) => {
                        if tx.send(position).await.is_err() {
                            break;
                        }
                    }
                    Err(err) => tracing::debug!(error = %err, "Skipping location tick"),
                }
            }
        });

        Self { positions, task }
    }

    /// Wait for the next position. `None` once the watch has stopped.
    pub async fn next(&mut self) -> Option<GeoPoint> {
        self.positions.recv().await
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for LocationWatch {
    fn drop(&mut self) {
        self.task.abort();
    }
}
